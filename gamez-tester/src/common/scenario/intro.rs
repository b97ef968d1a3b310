use anyhow::{Result, ensure};
use gamez_core::{HubData, IntroExit, MediaFailure, NavEvent, NavState, Route, View};

use super::{Check, LogicScenario};

fn exits() -> [IntroExit; 4] {
    [
        IntroExit::Completed,
        IntroExit::Skipped,
        IntroExit::Failed(MediaFailure::Load),
        IntroExit::Failed(MediaFailure::Playback("NotAllowedError".to_string())),
    ]
}

fn intro_exits_exactly_once(_: &HubData) -> Result<()> {
    for exit in exits() {
        let mut state = NavState::boot("#/games", true);
        ensure!(state.view() == View::Intro, "intro not shown at boot");
        let first = state.apply(NavEvent::IntroFinished(exit.clone()));
        ensure!(first.to == View::Page(Route::Games), "{exit:?} landed on {:?}", first.to);
        for late in exits() {
            let again = state.apply(NavEvent::IntroFinished(late));
            ensure!(!again.changed(), "second exit after {exit:?} changed the view");
        }
    }
    Ok(())
}

fn failure_leaves_notice(_: &HubData) -> Result<()> {
    let mut state = NavState::boot("", true);
    state.apply(NavEvent::IntroFinished(IntroExit::Failed(MediaFailure::Load)));
    ensure!(state.notice().is_some(), "failed intro left no notice");
    ensure!(state.view() == View::Page(Route::Home), "view {:?}", state.view());
    Ok(())
}

fn hash_during_intro_sets_target(_: &HubData) -> Result<()> {
    let mut state = NavState::boot("#/home", true);
    let outcome = state.apply(NavEvent::HashChanged("#/admin".to_string()));
    ensure!(outcome.to == View::Intro, "hash change interrupted the intro");
    let outcome = state.apply(NavEvent::IntroFinished(IntroExit::Skipped));
    ensure!(outcome.to == View::Page(Route::Admin), "exit went to {:?}", outcome.to);
    Ok(())
}

fn configured_intro_is_playable(data: &HubData) -> Result<()> {
    let intro = &data.site.intro;
    if intro.enabled {
        ensure!(!intro.src.is_empty(), "intro enabled without a source");
    }
    let state = NavState::boot("#/admin", intro.active());
    let expected = if intro.active() {
        View::Intro
    } else {
        View::Page(Route::Admin)
    };
    ensure!(state.view() == expected, "boot view {:?}", state.view());
    Ok(())
}

pub fn intro_scenario() -> LogicScenario {
    LogicScenario::new(
        "Intro Exit Handling",
        vec![
            Check::new("exits exactly once", intro_exits_exactly_once),
            Check::new("failure leaves notice", failure_leaves_notice),
            Check::new("hash during intro", hash_during_intro_sets_target),
            Check::new("configured intro", configured_intro_is_playable),
        ],
    )
}
