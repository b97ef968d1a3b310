use anyhow::{Result, ensure};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, VIEW_TIMEOUT};

const SETTLE: Duration = Duration::from_millis(200);

pub struct SearchScenario;

#[async_trait::async_trait]
impl BrowserScenario for SearchScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.url_with("#/games")).await?;
        ctx.probe.ensure_shell().await?;
        ctx.probe.skip_intro().await?;
        let before = ctx.probe.wait_for_view("games", VIEW_TIMEOUT).await?;

        ctx.probe.search("juwa").await?;
        tokio::time::sleep(SETTLE).await;
        let names = ctx.probe.card_names().await?;
        ensure!(!names.is_empty(), "no cards for \"juwa\"");
        ensure!(
            names.iter().all(|n| n.to_lowercase().contains("juwa")),
            "unrelated cards for \"juwa\": {names:?}"
        );

        ctx.probe.search("zzzz-no-match").await?;
        tokio::time::sleep(SETTLE).await;
        ensure!(
            ctx.probe.has_empty_message().await?,
            "empty search showed no message"
        );

        // Leaving the page drops the query.
        ctx.probe.click_nav("admin").await?;
        ctx.probe.wait_for_view("admin", VIEW_TIMEOUT).await?;
        ctx.probe.click_nav("games").await?;
        let after = ctx.probe.wait_for_view("games", VIEW_TIMEOUT).await?;
        ensure!(
            after.cards == before.cards,
            "filter survived navigation: {} cards instead of {}",
            after.cards,
            before.cards
        );
        if ctx.verbose {
            println!("  🔎 Search filtered and reset ({} cards)", after.cards);
        }
        Ok(())
    }
}

impl CombinedScenario for SearchScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        None
    }
}
