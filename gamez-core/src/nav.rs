//! Navigation state machine driving the view container.
//!
//! ```text
//! Intro ──(completed | skipped | failed)──▶ Page(route)
//! Page(a) ──(menu select | hashchange)──▶ Page(b)
//! ```
//!
//! The intro exits exactly once. Selecting the active route is a no-op.

use crate::error::MediaFailure;
use crate::route::{Route, resolve};
use serde::{Deserialize, Serialize};

/// Why the intro phase ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntroExit {
    Completed,
    Skipped,
    Failed(MediaFailure),
}

/// What the container renders right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", content = "route", rename_all = "lowercase")]
pub enum View {
    Intro,
    Page(Route),
}

impl View {
    #[must_use]
    pub const fn route(self) -> Option<Route> {
        match self {
            Self::Intro => None,
            Self::Page(route) => Some(route),
        }
    }

    /// Stable name used for `data-view` attributes and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Page(route) => route.token(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The address-bar fragment changed (or was read at startup).
    HashChanged(String),
    /// A menu item or link asked for a route.
    Select(Route),
    IntroFinished(IntroExit),
    DismissNotice,
}

/// Result of applying one [`NavEvent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub from: View,
    pub to: View,
    /// Fragment to push onto the address bar, if any.
    pub push: Option<String>,
}

impl Outcome {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Intro,
    Ready,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    phase: Phase,
    route: Route,
    notice: Option<MediaFailure>,
}

impl NavState {
    /// Initial state for a session that starts on `hash`.
    #[must_use]
    pub fn boot(hash: &str, intro_enabled: bool) -> Self {
        Self {
            phase: if intro_enabled {
                Phase::Intro
            } else {
                Phase::Ready
            },
            route: resolve(hash),
            notice: None,
        }
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub const fn view(&self) -> View {
        match self.phase {
            Phase::Intro => View::Intro,
            Phase::Ready => View::Page(self.route),
        }
    }

    #[must_use]
    pub const fn in_intro(&self) -> bool {
        matches!(self.phase, Phase::Intro)
    }

    /// Media failure notice left behind by the intro, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&MediaFailure> {
        self.notice.as_ref()
    }

    pub fn apply(&mut self, event: NavEvent) -> Outcome {
        let from = self.view();
        let mut push = None;

        match event {
            NavEvent::HashChanged(hash) => {
                self.route = resolve(&hash);
            }
            NavEvent::Select(route) => {
                if route != self.route {
                    self.route = route;
                    push = Some(route.fragment());
                }
            }
            NavEvent::IntroFinished(exit) => {
                if self.in_intro() {
                    self.phase = Phase::Ready;
                    if let IntroExit::Failed(failure) = exit {
                        self.notice = Some(failure);
                    }
                }
            }
            NavEvent::DismissNotice => self.notice = None,
        }

        Outcome {
            from,
            to: self.view(),
            push,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_without_intro_lands_on_resolved_route() {
        let state = NavState::boot("#/games", false);
        assert_eq!(state.view(), View::Page(Route::Games));
        assert!(!state.in_intro());
    }

    #[test]
    fn intro_exits_once_for_every_trigger() {
        let exits = [
            IntroExit::Completed,
            IntroExit::Skipped,
            IntroExit::Failed(MediaFailure::Load),
        ];
        for exit in exits {
            let mut state = NavState::boot("#/admin", true);
            assert_eq!(state.view(), View::Intro);

            let first = state.apply(NavEvent::IntroFinished(exit.clone()));
            assert!(first.changed());
            assert_eq!(first.to, View::Page(Route::Admin));

            let second = state.apply(NavEvent::IntroFinished(IntroExit::Completed));
            assert!(!second.changed());
            assert_eq!(second.to, View::Page(Route::Admin));
        }
    }

    #[test]
    fn failed_intro_leaves_notice_until_dismissed() {
        let mut state = NavState::boot("", true);
        state.apply(NavEvent::IntroFinished(IntroExit::Failed(
            MediaFailure::Playback(String::from("NotAllowedError")),
        )));
        assert!(state.notice().is_some());
        assert_eq!(state.view(), View::Page(Route::Home));

        // A late error from the same element must not reopen the notice.
        state.apply(NavEvent::DismissNotice);
        state.apply(NavEvent::IntroFinished(IntroExit::Failed(MediaFailure::Load)));
        assert!(state.notice().is_none());
    }

    #[test]
    fn hash_change_during_intro_updates_exit_target() {
        let mut state = NavState::boot("#/home", true);
        let outcome = state.apply(NavEvent::HashChanged(String::from("#/games")));
        assert!(!outcome.changed());
        assert_eq!(state.route(), Route::Games);

        let outcome = state.apply(NavEvent::IntroFinished(IntroExit::Skipped));
        assert_eq!(outcome.to, View::Page(Route::Games));
    }

    #[test]
    fn selecting_active_route_does_not_push() {
        let mut state = NavState::boot("#/games", false);
        let outcome = state.apply(NavEvent::Select(Route::Games));
        assert_eq!(outcome.push, None);
        assert!(!outcome.changed());

        let outcome = state.apply(NavEvent::Select(Route::Admin));
        assert_eq!(outcome.push.as_deref(), Some("#/admin"));
        assert_eq!(outcome.to, View::Page(Route::Admin));
    }

    #[test]
    fn view_names_match_route_tokens() {
        assert_eq!(View::Intro.name(), "intro");
        assert_eq!(View::Page(Route::Admin).name(), "admin");
        assert_eq!(View::Intro.route(), None);
    }
}
