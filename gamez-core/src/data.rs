//! Embedded hub datasets and the loader abstraction over them.

use crate::catalog::Catalog;
use crate::credits::CreditRates;
use crate::error::HubDataError;
use crate::site::SiteConfig;

pub const GAMES_DATASET: &str = "games";
pub const CREDITS_DATASET: &str = "credits";
pub const SITE_DATASET: &str = "site";

/// Everything the hub renders, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubData {
    pub catalog: Catalog,
    pub credits: CreditRates,
    pub site: SiteConfig,
}

/// Source of the raw dataset text.
/// Platform-specific implementations decide where the JSON comes from.
pub trait HubDataSource {
    type Error: std::error::Error + Send + Sync + 'static + From<HubDataError>;

    /// Fetch the JSON text of a named dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is unknown or cannot be read.
    fn dataset(&self, name: &str) -> Result<String, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or parsed.
    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let json = self.dataset(GAMES_DATASET)?;
        Catalog::from_json(&json).map_err(|source| parse_error(GAMES_DATASET, source).into())
    }

    /// # Errors
    ///
    /// Returns an error if the credit groups cannot be read or parsed.
    fn load_credit_rates(&self) -> Result<CreditRates, Self::Error> {
        let json = self.dataset(CREDITS_DATASET)?;
        CreditRates::from_json(&json).map_err(|source| parse_error(CREDITS_DATASET, source).into())
    }

    /// # Errors
    ///
    /// Returns an error if the site config cannot be read or parsed.
    fn load_site(&self) -> Result<SiteConfig, Self::Error> {
        let json = self.dataset(SITE_DATASET)?;
        SiteConfig::from_json(&json).map_err(|source| parse_error(SITE_DATASET, source).into())
    }

    /// # Errors
    ///
    /// Returns the first dataset error encountered.
    fn load_all(&self) -> Result<HubData, Self::Error> {
        Ok(HubData {
            catalog: self.load_catalog()?,
            credits: self.load_credit_rates()?,
            site: self.load_site()?,
        })
    }
}

fn parse_error(dataset: &'static str, source: serde_json::Error) -> HubDataError {
    HubDataError::Json { dataset, source }
}

/// Datasets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticData;

impl HubDataSource for StaticData {
    type Error = HubDataError;

    fn dataset(&self, name: &str) -> Result<String, Self::Error> {
        let json = match name {
            GAMES_DATASET => include_str!("../static/data/games.json"),
            CREDITS_DATASET => include_str!("../static/data/credits.json"),
            SITE_DATASET => include_str!("../static/data/site.json"),
            _ => return Err(HubDataError::UnknownDataset(name.to_string())),
        };
        Ok(json.to_string())
    }
}

impl HubData {
    /// Load the embedded datasets.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded dataset fails to parse.
    pub fn load_from_static() -> Result<Self, HubDataError> {
        StaticData.load_all()
    }
}
