use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;

fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    #[allow(clippy::cast_precision_loss)]
    let rate = (passed as f64 / results.len() as f64) * 100.0;
    rate
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(out, "Total scenarios: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(out, "{} {}", status, result.scenario_name.bold())?;
        writeln!(
            out,
            "   Checks: {}/{} passed",
            result.checks_passed, result.checks_run
        )?;
        writeln!(out, "   Time: {:?}", result.duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# Pimp Gamez Logic Test Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;

    for result in results {
        let status = if result.passed { "✅" } else { "❌" };

        writeln!(out, "### {status} {}\n", result.scenario_name)?;
        writeln!(
            out,
            "- **Checks**: {}/{} passed",
            result.checks_passed, result.checks_run
        )?;
        writeln!(out, "- **Time**: {:?}", result.duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<ScenarioResult> {
        vec![
            ScenarioResult {
                scenario_name: "Routing".to_string(),
                passed: true,
                checks_run: 4,
                checks_passed: 4,
                failures: Vec::new(),
                duration: Duration::from_millis(3),
            },
            ScenarioResult {
                scenario_name: "Credits".to_string(),
                passed: false,
                checks_run: 2,
                checks_passed: 1,
                failures: vec!["logos resolve: Moolah has no logo".to_string()],
                duration: Duration::from_millis(1),
            },
        ]
    }

    #[test]
    fn markdown_lists_failures() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &results()).expect("markdown");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("- **Success rate**: 50.0%"));
        assert!(text.contains("### ❌ Credits"));
        assert!(text.contains("  - logos resolve: Moolah has no logo"));
    }

    #[test]
    fn json_round_trips_names() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &results()).expect("json");
        let parsed: Vec<ScenarioResult> = serde_json::from_slice(&buf).expect("parse");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].scenario_name, "Credits");
    }

    #[test]
    fn console_report_counts_checks() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &results(), Duration::from_millis(4)).expect("console");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Total scenarios: 2"));
        assert!(text.contains("Checks: 1/2 passed"));
    }
}
