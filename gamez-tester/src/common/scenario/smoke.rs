use anyhow::{Context, Result, ensure};
use gamez_core::{HubData, IntroExit, MemoryHash, Route, RouteStore, View};
use thirtyfour::prelude::*;

use super::{BrowserScenario, Check, CombinedScenario, ScenarioCtx, TestScenario, VIEW_TIMEOUT};

pub struct SmokeScenario;

fn data_loaded(data: &HubData) -> Result<()> {
    ensure!(!data.catalog.is_empty(), "catalog is empty");
    ensure!(!data.site.brand.is_empty(), "brand is empty");
    ensure!(
        !data.credits.tiered.games.is_empty(),
        "no tiered credit platforms"
    );
    Ok(())
}

fn fresh_visit_lands_home(data: &HubData) -> Result<()> {
    let mut store = RouteStore::open(MemoryHash::new(""), data.site.intro.active());
    if data.site.intro.active() {
        ensure!(store.view() == View::Intro, "intro not shown on first visit");
        store.finish_intro(IntroExit::Skipped);
    }
    ensure!(store.view() == View::Page(Route::Home), "landed on {:?}", store.view());
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.url_with("")).await?;
        ctx.probe.ensure_shell().await?;

        if ctx.probe.skip_intro().await? && ctx.verbose {
            println!("  ⏭️  Skipped intro");
        }

        let snapshot = ctx.probe.wait_for_view("home", VIEW_TIMEOUT).await?;
        if ctx.verbose {
            println!("  📊 Landed on: {snapshot:?}");
        }
        ensure!(
            snapshot.hash == "#/home",
            "empty fragment was not normalized, hash is {:?}",
            snapshot.hash
        );

        driver
            .find(By::Css("main#main"))
            .await
            .context("main landmark missing")?;
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Smoke Test",
            vec![
                Check::new("data loaded", data_loaded),
                Check::new("fresh visit lands home", fresh_visit_lands_home),
            ],
        ))
    }
}
