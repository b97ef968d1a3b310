//! Hash-fragment route resolution.
//!
//! The address-bar fragment is the only shareable piece of state in the hub.
//! Every fragment maps to exactly one [`Route`]; anything unrecognized lands
//! on [`Route::Home`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level view shown by the hub.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Credit-rate information page.
    #[default]
    Home,
    /// Game link catalog.
    Games,
    /// Admin/backend link catalog.
    Admin,
}

/// Tokens checked against the fragment, highest priority first.
const MATCH_ORDER: [(&str, Route); 2] = [("admin", Route::Admin), ("games", Route::Games)];

impl Route {
    pub const ALL: [Self; 3] = [Self::Home, Self::Games, Self::Admin];

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Games => "games",
            Self::Admin => "admin",
        }
    }

    /// Canonical fragment written to the address bar, e.g. `#/games`.
    #[must_use]
    pub fn fragment(self) -> String {
        format!("#/{}", self.token())
    }

    /// Navigation label shown in the header.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Credits",
            Self::Games => "Games",
            Self::Admin => "Admin Links",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<&str> for Route {
    fn from(hash: &str) -> Self {
        resolve(hash)
    }
}

/// Resolve a raw hash (`#/games`, `#admin`, `""`, ...) to a route.
///
/// Substring containment, first match in [`MATCH_ORDER`] wins.
#[must_use]
pub fn resolve(hash: &str) -> Route {
    MATCH_ORDER
        .iter()
        .find(|(token, _)| hash.contains(token))
        .map_or(Route::Home, |&(_, route)| route)
}

/// Returns the canonical default fragment when `hash` carries no route at all.
///
/// Callers replace the address-bar fragment with the returned value so a
/// reload resolves the same way. Already-populated fragments are left alone.
#[must_use]
pub fn normalize_fragment(hash: &str) -> Option<String> {
    let bare = hash.trim_start_matches('#').trim_start_matches('/');
    bare.is_empty().then(|| Route::default().fragment())
}
