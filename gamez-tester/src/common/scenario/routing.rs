use anyhow::{Result, ensure};
use gamez_core::{HashSource, HubData, MemoryHash, Route, RouteStore, View, resolve};
use std::rc::Rc;

use super::{Check, LogicScenario};

const FRAGMENTS: &[(&str, Route)] = &[
    ("", Route::Home),
    ("#", Route::Home),
    ("#/", Route::Home),
    ("#/home", Route::Home),
    ("#/games", Route::Games),
    ("#/admin", Route::Admin),
    ("#games", Route::Games),
    ("#/games?ref=ad", Route::Games),
    ("#/x/admin/y", Route::Admin),
    ("#/admin-games", Route::Admin),
    ("#/promo", Route::Home),
    ("#/GAMES", Route::Home),
];

fn fragments_resolve(_: &HubData) -> Result<()> {
    for (fragment, expected) in FRAGMENTS {
        let got = resolve(fragment);
        ensure!(got == *expected, "{fragment:?} resolved to {got}, expected {expected}");
    }
    Ok(())
}

fn empty_fragment_normalized_in_place(_: &HubData) -> Result<()> {
    let hash = Rc::new(MemoryHash::new(""));
    let store = RouteStore::open(Rc::clone(&hash), false);
    ensure!(hash.read() == "#/home", "hash left as {:?}", hash.read());
    ensure!(hash.history_len() == 1, "normalization added history");
    ensure!(store.view() == View::Page(Route::Home), "view {:?}", store.view());
    Ok(())
}

fn navigation_is_idempotent(_: &HubData) -> Result<()> {
    let hash = Rc::new(MemoryHash::new("#/home"));
    let mut store = RouteStore::open(Rc::clone(&hash), false);
    store.navigate(Route::Games);
    let after_first = hash.history_len();
    let again = store.navigate(Route::Games);
    ensure!(!again.changed(), "re-selecting games changed the view");
    ensure!(
        hash.history_len() == after_first,
        "re-selecting games pushed history"
    );
    ensure!(hash.read() == "#/games", "hash is {:?}", hash.read());
    Ok(())
}

fn external_changes_are_followed(_: &HubData) -> Result<()> {
    let hash = Rc::new(MemoryHash::new("#/games"));
    let mut store = RouteStore::open(Rc::clone(&hash), false);
    for (fragment, expected) in [("#/admin", Route::Admin), ("#/nowhere", Route::Home)] {
        hash.set_external(fragment);
        let outcome = store.sync();
        ensure!(
            outcome.to == View::Page(expected),
            "{fragment} showed {:?}",
            outcome.to
        );
        ensure!(outcome.push.is_none(), "sync must not write the hash");
    }
    Ok(())
}

pub fn routing_scenario() -> LogicScenario {
    LogicScenario::new(
        "Route Resolution and Store",
        vec![
            Check::new("fragments resolve", fragments_resolve),
            Check::new("empty fragment normalized", empty_fragment_normalized_in_place),
            Check::new("navigation idempotent", navigation_is_idempotent),
            Check::new("external changes followed", external_changes_are_followed),
        ],
    )
}
