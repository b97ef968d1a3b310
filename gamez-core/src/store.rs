//! Single owner of the address-bar fragment.
//!
//! The resolver and the view container never read the fragment on their own;
//! both go through a [`RouteStore`], which keeps the displayed view and the
//! hash in step.

use crate::nav::{IntroExit, NavEvent, NavState, Outcome, View};
use crate::route::{Route, normalize_fragment};
use std::cell::RefCell;
use std::rc::Rc;

/// Read/write access to a location fragment.
pub trait HashSource {
    fn read(&self) -> String;
    /// Write a fragment as a new history entry.
    fn push(&self, fragment: &str);
    /// Overwrite the current fragment without adding history.
    fn replace(&self, fragment: &str);
}

impl<H: HashSource + ?Sized> HashSource for Rc<H> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn push(&self, fragment: &str) {
        (**self).push(fragment);
    }

    fn replace(&self, fragment: &str) {
        (**self).replace(fragment);
    }
}

/// In-memory fragment with a history log.
#[derive(Debug)]
pub struct MemoryHash {
    current: RefCell<String>,
    history: RefCell<Vec<String>>,
}

impl MemoryHash {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            current: RefCell::new(initial.to_string()),
            history: RefCell::new(vec![initial.to_string()]),
        }
    }

    /// Simulate the visitor editing the address bar.
    pub fn set_external(&self, fragment: &str) {
        self.push(fragment);
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }

    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Default for MemoryHash {
    fn default() -> Self {
        Self::new("")
    }
}

impl HashSource for MemoryHash {
    fn read(&self) -> String {
        self.current.borrow().clone()
    }

    fn push(&self, fragment: &str) {
        *self.current.borrow_mut() = fragment.to_string();
        self.history.borrow_mut().push(fragment.to_string());
    }

    fn replace(&self, fragment: &str) {
        *self.current.borrow_mut() = fragment.to_string();
        if let Some(last) = self.history.borrow_mut().last_mut() {
            *last = fragment.to_string();
        }
    }
}

pub struct RouteStore<H: HashSource> {
    source: H,
    state: NavState,
}

impl<H: HashSource> RouteStore<H> {
    /// Read the fragment once, normalizing an empty one to the default route.
    pub fn open(source: H, intro_enabled: bool) -> Self {
        let hash = source.read();
        if let Some(canonical) = normalize_fragment(&hash) {
            source.replace(&canonical);
        }
        let state = NavState::boot(&source.read(), intro_enabled);
        log::debug!("route store opened on {:?} at {}", hash, state.route());
        Self { source, state }
    }

    #[must_use]
    pub const fn state(&self) -> &NavState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.state.view()
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        self.state.route()
    }

    #[must_use]
    pub const fn source(&self) -> &H {
        &self.source
    }

    pub fn dispatch(&mut self, event: NavEvent) -> Outcome {
        let outcome = self.state.apply(event);
        if let Some(fragment) = &outcome.push {
            self.source.push(fragment);
        }
        if outcome.changed() {
            log::debug!("view {} -> {}", outcome.from.name(), outcome.to.name());
        }
        outcome
    }

    /// Re-read the source after an external `hashchange`.
    pub fn sync(&mut self) -> Outcome {
        let hash = self.source.read();
        self.dispatch(NavEvent::HashChanged(hash))
    }

    pub fn navigate(&mut self, route: Route) -> Outcome {
        self.dispatch(NavEvent::Select(route))
    }

    pub fn finish_intro(&mut self, exit: IntroExit) -> Outcome {
        self.dispatch(NavEvent::IntroFinished(exit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaFailure;

    #[test]
    fn default_memory_hash_tracks_replacements() {
        let hash = MemoryHash::default();
        assert_eq!(hash.history(), vec![String::new()]);
        hash.replace("#/home");
        assert_eq!(hash.read(), "#/home");
        assert_eq!(hash.history(), vec!["#/home".to_string()]);
    }

    #[test]
    fn open_normalizes_empty_fragment_in_place() {
        let hash = Rc::new(MemoryHash::new(""));
        let store = RouteStore::open(Rc::clone(&hash), false);
        assert_eq!(hash.read(), "#/home");
        assert_eq!(hash.history_len(), 1);
        assert_eq!(store.view(), View::Page(Route::Home));
    }

    #[test]
    fn open_keeps_unknown_fragment_but_resolves_home() {
        let hash = Rc::new(MemoryHash::new("#/promo"));
        let store = RouteStore::open(Rc::clone(&hash), false);
        assert_eq!(hash.read(), "#/promo");
        assert_eq!(store.route(), Route::Home);
    }

    #[test]
    fn navigate_to_current_route_is_idempotent() {
        let hash = Rc::new(MemoryHash::new("#/games"));
        let mut store = RouteStore::open(Rc::clone(&hash), false);

        store.navigate(Route::Admin);
        let after_once = (hash.read(), hash.history_len());
        store.navigate(Route::Admin);
        store.navigate(Route::Admin);
        assert_eq!((hash.read(), hash.history_len()), after_once);
        assert_eq!(after_once.0, "#/admin");
    }

    #[test]
    fn external_hash_change_updates_view() {
        let hash = Rc::new(MemoryHash::new("#/games"));
        let mut store = RouteStore::open(Rc::clone(&hash), false);
        hash.set_external("#/admin");
        let outcome = store.sync();
        assert!(outcome.changed());
        assert_eq!(store.view(), View::Page(Route::Admin));
        assert_eq!(outcome.push, None);
    }

    #[test]
    fn pushed_fragment_echo_is_a_no_op() {
        let hash = Rc::new(MemoryHash::new("#/home"));
        let mut store = RouteStore::open(Rc::clone(&hash), false);
        store.navigate(Route::Games);
        // The browser echoes our own write back as a hashchange.
        let echo = store.sync();
        assert!(!echo.changed());
        assert_eq!(hash.history(), vec!["#/home", "#/games"]);
    }

    #[test]
    fn intro_error_and_completion_converge() {
        let completed = {
            let mut store = RouteStore::open(MemoryHash::new("#/games"), true);
            store.finish_intro(IntroExit::Completed);
            store.view()
        };
        let failed = {
            let mut store = RouteStore::open(MemoryHash::new("#/games"), true);
            store.finish_intro(IntroExit::Failed(MediaFailure::Load));
            store.view()
        };
        assert_eq!(completed, failed);
        assert_eq!(completed, View::Page(Route::Games));
    }
}
