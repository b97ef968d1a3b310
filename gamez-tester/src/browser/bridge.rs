use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

const SNAPSHOT_SCRIPT: &str = "const shell = document.querySelector('[data-view]'); \
     return { view: shell ? shell.getAttribute('data-view') : null, \
              hash: window.location.hash, \
              cards: document.querySelectorAll('.catalog-card').length };";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What the hub shell currently shows, read straight from the DOM.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub view: Option<String>,
    pub hash: String,
    pub cards: usize,
}

/// DOM-level helpers for driving the hub through WebDriver.
#[derive(Debug, Clone)]
pub struct PageProbe<'a> {
    driver: &'a WebDriver,
}

impl<'a> PageProbe<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn snapshot(&self) -> Result<PageSnapshot> {
        let ret = self.driver.execute(SNAPSHOT_SCRIPT, vec![]).await?;
        serde_json::from_value(ret.json().clone()).context("parsing page snapshot")
    }

    pub async fn ensure_shell(&self) -> Result<()> {
        self.driver
            .find(By::Css("[data-view]"))
            .await
            .context("hub shell did not render")?;
        Ok(())
    }

    /// Leave the intro if it is playing. Returns whether a skip happened.
    pub async fn skip_intro(&self) -> Result<bool> {
        if self.snapshot().await?.view.as_deref() != Some("intro") {
            return Ok(false);
        }
        self.driver
            .find(By::Css("[data-testid='intro-skip']"))
            .await?
            .click()
            .await?;
        Ok(true)
    }

    pub async fn set_hash(&self, fragment: &str) -> Result<()> {
        self.driver
            .execute("window.location.hash = arguments[0];", vec![fragment.into()])
            .await?;
        Ok(())
    }

    pub async fn click_nav(&self, token: &str) -> Result<()> {
        let selector = format!("header [data-nav='{token}']");
        self.driver
            .find(By::Css(selector.as_str()))
            .await
            .with_context(|| format!("nav item {token} missing"))?
            .click()
            .await?;
        Ok(())
    }

    pub async fn search(&self, text: &str) -> Result<()> {
        let input = self.driver.find(By::Css("[data-testid='search']")).await?;
        input.clear().await?;
        input.send_keys(text).await?;
        Ok(())
    }

    pub async fn card_names(&self) -> Result<Vec<String>> {
        let cards = self.driver.find_all(By::Css(".catalog-card .card-name")).await?;
        let mut names = Vec::with_capacity(cards.len());
        for card in cards {
            names.push(card.text().await?);
        }
        Ok(names)
    }

    pub async fn has_empty_message(&self) -> Result<bool> {
        Ok(!self
            .driver
            .find_all(By::Css(".empty-results"))
            .await?
            .is_empty())
    }

    /// Poll until the shell shows `expected`, failing after `timeout`.
    pub async fn wait_for_view(&self, expected: &str, timeout: Duration) -> Result<PageSnapshot> {
        let deadline = Instant::now() + timeout;
        loop {
            let snapshot = self.snapshot().await?;
            if snapshot.view.as_deref() == Some(expected) {
                return Ok(snapshot);
            }
            if Instant::now() >= deadline {
                bail!(
                    "expected view {expected}, still on {:?} (hash {:?})",
                    snapshot.view,
                    snapshot.hash
                );
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_parses_missing_shell() {
        let snapshot: PageSnapshot =
            serde_json::from_value(json!({ "view": null, "hash": "", "cards": 0 }))
                .expect("snapshot parses");
        assert_eq!(snapshot, PageSnapshot::default());
    }

    #[test]
    fn snapshot_parses_rendered_page() {
        let snapshot: PageSnapshot =
            serde_json::from_value(json!({ "view": "games", "hash": "#/games", "cards": 22 }))
                .expect("snapshot parses");
        assert_eq!(snapshot.view.as_deref(), Some("games"));
        assert_eq!(snapshot.cards, 22);
    }
}
