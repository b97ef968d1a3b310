// Accessibility helpers

use gamez_core::{Route, View};

/// CSS for visible focus indicators and the screen-reader-only utility class.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #39FF14;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Text for the polite live region announcing the active view.
#[must_use]
pub const fn view_announcement(view: View) -> &'static str {
    match view {
        View::Intro => "Playing intro",
        View::Page(Route::Home) => "Showing credit rates",
        View::Page(Route::Games) => "Showing game catalog",
        View::Page(Route::Admin) => "Showing admin backend links",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_an_announcement() {
        assert!(!view_announcement(View::Intro).is_empty());
        for route in Route::ALL {
            assert!(view_announcement(View::Page(route)).starts_with("Showing"));
        }
    }
}
