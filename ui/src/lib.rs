//! Shared UI crate for Mekkoscope. Cross-platform logic and views live here.

pub mod chart;
pub mod core;
pub mod i18n;
pub mod ingest;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

#[cfg(test)]
mod tests;

use dioxus::prelude::*;

/// Unified theme stylesheet, exported so platform shells can link it.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
