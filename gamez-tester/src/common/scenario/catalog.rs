use anyhow::{Result, ensure};
use gamez_core::HubData;
use std::collections::HashSet;

use super::{Check, LogicScenario};

fn ids_and_names_unique(data: &HubData) -> Result<()> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for entry in data.catalog.entries() {
        ensure!(ids.insert(entry.id), "duplicate id {}", entry.id);
        ensure!(names.insert(entry.name.as_str()), "duplicate name {}", entry.name);
    }
    Ok(())
}

fn links_are_absolute(data: &HubData) -> Result<()> {
    let absolute = |url: &str| url.starts_with("http://") || url.starts_with("https://");
    for entry in data.catalog.entries() {
        ensure!(absolute(&entry.link), "{} has link {:?}", entry.name, entry.link);
        if let Some(admin) = &entry.admin_url {
            ensure!(absolute(admin), "{} has admin url {admin:?}", entry.name);
        }
    }
    Ok(())
}

fn empty_query_keeps_order(data: &HubData) -> Result<()> {
    let filtered: Vec<u32> = data.catalog.filter("").iter().map(|e| e.id).collect();
    let all: Vec<u32> = data.catalog.entries().iter().map(|e| e.id).collect();
    ensure!(filtered == all, "empty query reordered or dropped entries");
    Ok(())
}

fn every_entry_found_in_any_case(data: &HubData) -> Result<()> {
    for entry in data.catalog.entries() {
        for query in [entry.name.to_uppercase(), entry.name.to_lowercase()] {
            let hits = data.catalog.filter(&query);
            ensure!(
                hits.iter().any(|hit| hit.id == entry.id),
                "{query:?} did not find {}",
                entry.name
            );
        }
    }
    Ok(())
}

fn admin_links_are_backend_subset(data: &HubData) -> Result<()> {
    let admin = data.catalog.admin_links("");
    let expected = data.catalog.entries().iter().filter(|e| e.has_admin()).count();
    ensure!(admin.len() == expected, "admin list has {} of {expected}", admin.len());
    ensure!(admin.iter().all(|e| e.has_admin()), "admin list has an entry without a url");
    ensure!(
        data.catalog.admin_links("zzzz-no-match").is_empty(),
        "nonsense query matched admin links"
    );
    Ok(())
}

pub fn catalog_scenario() -> LogicScenario {
    LogicScenario::new(
        "Catalog Integrity and Filtering",
        vec![
            Check::new("ids and names unique", ids_and_names_unique),
            Check::new("links absolute", links_are_absolute),
            Check::new("empty query keeps order", empty_query_keeps_order),
            Check::new("case-insensitive search", every_entry_found_in_any_case),
            Check::new("admin subset", admin_links_are_backend_subset),
        ],
    )
}
