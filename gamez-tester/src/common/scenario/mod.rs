use anyhow::Result;
use gamez_core::HubData;
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::browser::PageProbe;

pub mod catalog;
pub mod credits;
pub mod hash_navigation;
pub mod intro;
pub mod routing;
pub mod search;
pub mod smoke;

/// How long browser scenarios wait for a view to settle.
pub const VIEW_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub probe: PageProbe<'a>,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    /// Base URL with the fragment replaced by `fragment`.
    pub fn url_with(&self, fragment: &str) -> String {
        let base = self
            .base_url
            .split_once('#')
            .map_or(self.base_url.as_str(), |(head, _)| head);
        format!("{base}{fragment}")
    }
}

pub type CheckFn = fn(&HubData) -> Result<()>;

/// One named assertion group within a logic scenario.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub label: &'static str,
    pub run: CheckFn,
}

impl Check {
    pub const fn new(label: &'static str, run: CheckFn) -> Self {
        Self { label, run }
    }
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub checks: Vec<Check>,
}

impl TestScenario {
    pub fn new(name: impl Into<String>, checks: Vec<Check>) -> Self {
        Self {
            name: name.into(),
            checks,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;

    fn has_browser(&self) -> bool {
        true
    }
}

/// A scenario with logic checks only.
#[derive(Clone)]
pub struct LogicScenario {
    name: &'static str,
    checks: Vec<Check>,
}

impl LogicScenario {
    pub const fn new(name: &'static str, checks: Vec<Check>) -> Self {
        Self { name, checks }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} has no browser implementation", self.name)
    }
}

impl CombinedScenario for LogicScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.checks.clone()))
    }

    fn has_browser(&self) -> bool {
        false
    }
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "routing" | "routes" => Some(Box::new(routing::routing_scenario())),
        "catalog" => Some(Box::new(catalog::catalog_scenario())),
        "intro" => Some(Box::new(intro::intro_scenario())),
        "credits" => Some(Box::new(credits::credits_scenario())),
        "hash-navigation" | "hash" => Some(Box::new(hash_navigation::HashNavigationScenario)),
        "search" => Some(Box::new(search::SearchScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("routing", "Route Resolution and Store"),
        ("catalog", "Catalog Integrity and Filtering"),
        ("intro", "Intro Exit Handling"),
        ("credits", "Credit Groups and Logos"),
        ("hash-navigation", "Hash Navigation (browser)"),
        ("search", "Catalog Search (browser)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            assert!(get_scenario(key).is_some(), "{key} missing");
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn logic_only_scenarios_are_skipped_in_browsers() {
        for key in ["routing", "catalog", "intro", "credits"] {
            assert!(!get_scenario(key).expect("scenario").has_browser());
        }
        assert!(get_scenario("smoke").expect("smoke").has_browser());
    }

    #[test]
    fn browser_only_scenarios_have_no_logic_half() {
        for key in ["hash-navigation", "search"] {
            let scenario = get_scenario(key).expect("scenario");
            assert!(scenario.as_logic_scenario().is_none());
        }
    }

    #[test]
    fn logic_scenarios_pass_against_embedded_data() {
        let data = HubData::load_from_static().expect("embedded data");
        for key in ["smoke", "routing", "catalog", "intro", "credits"] {
            let scenario = get_scenario(key)
                .and_then(|s| s.as_logic_scenario())
                .expect("logic scenario");
            for check in &scenario.checks {
                if let Err(err) = (check.run)(&data) {
                    panic!("{key}/{}: {err:#}", check.label);
                }
            }
        }
    }
}
