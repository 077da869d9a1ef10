//! Site logic for the savings calculator page and the shared page chrome.
//!
//! Everything here is target-independent and unit-tested on the host. The
//! browser bindings live in `savings_site_web`.

pub mod animation;
pub mod calculator;
pub mod config;
pub mod contact;
pub mod error;
pub mod format;
pub mod navigation;

pub use config::SiteConfig;
pub use error::SiteError;
pub use format::{NumberFormat, NumberLocale};
