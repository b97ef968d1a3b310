use colored::Colorize;
use gamez_core::HubData;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub checks_run: usize,
    pub checks_passed: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

/// Runs logic scenarios against one loaded copy of the hub data.
pub struct LogicTester<'a> {
    data: &'a HubData,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(data: &'a HubData, verbose: bool) -> Self {
        Self { data, verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }

        let start = Instant::now();
        let mut failures = Vec::new();

        for check in &scenario.checks {
            match (check.run)(self.data) {
                Ok(()) => {
                    if self.verbose {
                        println!("  ✅ {}", check.label);
                    }
                }
                Err(err) => {
                    let message = format!("{}: {err:#}", check.label);
                    if self.verbose {
                        println!("  ❌ {}", message.red());
                    }
                    log::debug!("check failed in {}: {message}", scenario.name);
                    failures.push(message);
                }
            }
        }

        let checks_run = scenario.checks.len();
        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed: failures.is_empty(),
            checks_run,
            checks_passed: checks_run - failures.len(),
            failures,
            duration: start.elapsed(),
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
