//! Pimp Gamez hub core
//!
//! Platform-agnostic navigation and catalog logic for the hub front-end.
//! This crate has no browser dependencies; the web crate plugs the address
//! bar in through [`HashSource`].

pub mod catalog;
pub mod credits;
pub mod data;
pub mod error;
pub mod nav;
pub mod route;
pub mod site;
pub mod store;

pub use catalog::{Catalog, CatalogEntry, matches_query, normalize_name};
pub use credits::{CreditGroup, CreditRates, CreditTile};
pub use data::{HubData, HubDataSource, StaticData};
pub use error::{HubDataError, MediaFailure};
pub use nav::{IntroExit, NavEvent, NavState, Outcome, View};
pub use route::{Route, normalize_fragment, resolve};
pub use site::{BackgroundConfig, Highlight, IntroConfig, Perk, SiteConfig, Step};
pub use store::{HashSource, MemoryHash, RouteStore};
