use anyhow::{Result, ensure};
use gamez_core::Route;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, VIEW_TIMEOUT};

/// Deep links, address-bar edits, menu clicks, and the back button.
pub struct HashNavigationScenario;

#[async_trait::async_trait]
impl BrowserScenario for HashNavigationScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.url_with("#/games")).await?;
        ctx.probe.ensure_shell().await?;
        ctx.probe.skip_intro().await?;
        ctx.probe.wait_for_view("games", VIEW_TIMEOUT).await?;

        for (fragment, expected) in [("#/admin", "admin"), ("#/unknown", "home"), ("#/games", "games")] {
            ctx.probe.set_hash(fragment).await?;
            ctx.probe.wait_for_view(expected, VIEW_TIMEOUT).await?;
            if ctx.verbose {
                println!("  🔗 {fragment} -> {expected}");
            }
        }

        for route in Route::ALL {
            ctx.probe.click_nav(route.token()).await?;
            let snapshot = ctx.probe.wait_for_view(route.token(), VIEW_TIMEOUT).await?;
            ensure!(
                snapshot.hash == route.fragment(),
                "menu {} left hash {:?}",
                route.token(),
                snapshot.hash
            );
        }

        // Last two menu clicks were games then admin.
        driver.back().await?;
        ctx.probe.wait_for_view("games", VIEW_TIMEOUT).await?;
        Ok(())
    }
}

impl CombinedScenario for HashNavigationScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        None
    }
}
