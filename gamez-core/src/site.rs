use serde::{Deserialize, Serialize};

/// Site-wide presentation settings loaded from `site.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    #[serde(default)]
    pub intro: IntroConfig,
    #[serde(default)]
    pub background: BackgroundConfig,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// One-line selling points under the hero copy.
    #[serde(default)]
    pub pills: Vec<String>,
    #[serde(default)]
    pub perks: Vec<Perk>,
    /// Ordered how-it-works steps; rendered numbered from 1.
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub src: String,
}

impl IntroConfig {
    /// An intro with no source is treated as disabled.
    #[must_use]
    pub fn active(&self) -> bool {
        self.enabled && !self.src.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub detail: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: String::from("Pimp Gamez"),
            intro: IntroConfig::default(),
            background: BackgroundConfig::default(),
            highlights: Vec::new(),
            pills: Vec::new(),
            perks: Vec::new(),
            steps: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse site settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a site config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
