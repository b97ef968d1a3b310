//! Address-bar plumbing for the hub.
//!
//! [`BrowserHash`] is the only code that touches `window.location.hash`.
//! Everything else reads and writes the fragment through a `RouteStore`.

use crate::dom;
use gamez_core::HashSource;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Fragment access backed by `window.location` and `window.history`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserHash;

impl HashSource for BrowserHash {
    fn read(&self) -> String {
        dom::window()
            .and_then(|win| win.location().hash().ok())
            .unwrap_or_default()
    }

    fn push(&self, fragment: &str) {
        let Some(win) = dom::window() else {
            return;
        };
        if let Err(err) = win.location().set_hash(fragment) {
            log::warn!("failed to push {fragment}: {}", dom::js_error_message(&err));
        }
    }

    fn replace(&self, fragment: &str) {
        let Some(win) = dom::window() else {
            return;
        };
        let result = win
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)));
        if let Err(err) = result {
            log::warn!(
                "failed to replace fragment with {fragment}: {}",
                dom::js_error_message(&err)
            );
        }
    }
}

/// Invoke `on_change` for every `hashchange` event while the component is mounted.
#[hook]
pub fn use_hash_listener(on_change: Callback<()>) {
    use_effect_with((), move |_| {
        let listener = dom::window().map(|win| {
            EventListener::new(&win, "hashchange", move |_event| on_change.emit(()))
        });
        move || drop(listener)
    });
}
