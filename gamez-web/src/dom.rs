use tracing_log::{AsLog, LogTracer};
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Move keyboard focus to the element with `id`. Returns false when it is missing.
pub fn focus_element(id: &str) -> bool {
    let Some(el) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    if let Err(err) = el.focus() {
        log::warn!("focus #{id} failed: {}", js_error_message(&err));
        return false;
    }
    true
}

/// Bridge `log` records into `tracing` and write them to the browser console.
/// Later calls are ignored.
pub fn init_logging(level: tracing::Level) {
    if LogTracer::init_with_filter(level.as_log().to_level_filter()).is_err() {
        return;
    }
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .set_report_logs_in_timings(false)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
