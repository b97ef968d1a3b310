use crate::catalog::{Catalog, normalize_name};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rate tier and the platforms it applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditGroup {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub rate: String,
    /// Short bullet lines shown under the group title.
    #[serde(default)]
    pub rate_lines: Vec<String>,
    pub games: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRates {
    pub tiered: CreditGroup,
    pub premium: CreditGroup,
    /// Logos for platforms that are not in the main catalog, keyed by normalized name.
    #[serde(default)]
    pub logo_overrides: BTreeMap<String, String>,
}

/// One platform tile on the credit page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditTile {
    pub name: String,
    /// `None` renders a text placeholder.
    pub logo: Option<String>,
}

impl CreditRates {
    /// Parse credit groups from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into credit rates.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn groups(&self) -> [&CreditGroup; 2] {
        [&self.tiered, &self.premium]
    }

    /// Catalog logo first, then the override table.
    #[must_use]
    pub fn logo_for<'a>(&'a self, catalog: &'a Catalog, name: &str) -> Option<&'a str> {
        catalog
            .logo_for(name)
            .or_else(|| self.logo_overrides.get(&normalize_name(name)).map(String::as_str))
    }

    #[must_use]
    pub fn tiles(&self, group: &CreditGroup, catalog: &Catalog) -> Vec<CreditTile> {
        group
            .games
            .iter()
            .map(|name| CreditTile {
                name: name.clone(),
                logo: self.logo_for(catalog, name).map(str::to_string),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn rates() -> CreditRates {
        CreditRates {
            tiered: CreditGroup {
                title: String::from("Featured"),
                description: String::new(),
                rate: String::from("5% / 10%"),
                rate_lines: Vec::new(),
                games: vec![String::from("UltraPanda"), String::from("Joker")],
            },
            premium: CreditGroup {
                title: String::from("Premium"),
                description: String::new(),
                rate: String::from("Flat 12% Rate"),
                rate_lines: Vec::new(),
                games: vec![String::from("Mystery Slots")],
            },
            logo_overrides: BTreeMap::from([(String::from("joker"), String::from("/joker.png"))]),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![CatalogEntry {
            id: 4,
            name: String::from("Ultra Panda"),
            logo: String::from("/logos/ultrapanda.png"),
            link: String::from("https://panda.example"),
            admin_url: None,
        }])
    }

    #[test]
    fn tiles_prefer_catalog_then_overrides() {
        let rates = rates();
        let tiles = rates.tiles(&rates.tiered, &catalog());
        assert_eq!(tiles[0].logo.as_deref(), Some("/logos/ultrapanda.png"));
        assert_eq!(tiles[1].logo.as_deref(), Some("/joker.png"));
    }

    #[test]
    fn unknown_platform_gets_placeholder() {
        let rates = rates();
        let tiles = rates.tiles(&rates.premium, &catalog());
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].logo, None);
        assert_eq!(tiles[0].name, "Mystery Slots");
    }

    #[test]
    fn overrides_default_to_empty() {
        let json = r#"{
            "tiered": {"title": "T", "rate": "5%", "games": ["A"]},
            "premium": {"title": "P", "rate": "12%", "games": []}
        }"#;
        let rates = CreditRates::from_json(json).unwrap();
        assert!(rates.logo_overrides.is_empty());
        assert_eq!(rates.groups()[0].games, vec!["A"]);
    }
}
