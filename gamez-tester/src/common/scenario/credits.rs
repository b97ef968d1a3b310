use anyhow::{Result, ensure};
use gamez_core::{HubData, normalize_name};
use std::collections::HashSet;

use super::{Check, LogicScenario};

fn groups_are_populated(data: &HubData) -> Result<()> {
    for group in data.credits.groups() {
        ensure!(!group.title.is_empty(), "credit group without a title");
        ensure!(!group.rate.is_empty(), "{} has no rate", group.title);
        ensure!(!group.games.is_empty(), "{} lists no platforms", group.title);

        let mut seen = HashSet::new();
        for name in &group.games {
            ensure!(
                seen.insert(normalize_name(name)),
                "{} lists {name} twice",
                group.title
            );
        }
    }
    Ok(())
}

fn every_platform_has_logo(data: &HubData) -> Result<()> {
    let missing: Vec<String> = data
        .credits
        .groups()
        .into_iter()
        .flat_map(|group| data.credits.tiles(group, &data.catalog))
        .filter(|tile| tile.logo.is_none())
        .map(|tile| tile.name)
        .collect();
    ensure!(missing.is_empty(), "no logo for {}", missing.join(", "));
    Ok(())
}

pub fn credits_scenario() -> LogicScenario {
    LogicScenario::new(
        "Credit Groups and Logos",
        vec![
            Check::new("groups populated", groups_are_populated),
            Check::new("logos resolve", every_platform_has_logo),
        ],
    )
}
