//! Site configuration.
//!
//! Every field has a default, so a page without a config block (or with a
//! partial one) behaves like the stock site.

use crate::animation::DEFAULT_DURATION_MS;
use crate::error::{Result, SiteError};
use crate::format::NumberLocale;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SiteConfig {
    /// Locale tag for the calculator outputs.
    pub locale: String,
    /// Page name assumed when the location path has no file name.
    pub root_page: String,
    pub animation_ms: f64,
    /// `tracing` level filter for the browser console.
    pub log_level: String,
    pub reveal: RevealConfig,
    pub navbar: NavbarConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: "de-DE".to_string(),
            root_page: "index.html".to_string(),
            animation_ms: DEFAULT_DURATION_MS,
            log_level: "info".to_string(),
            reveal: RevealConfig::default(),
            navbar: NavbarConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    /// Visible fraction that triggers the reveal.
    pub threshold: f64,
    /// The viewport is shrunk by this much at the bottom.
    pub bottom_margin_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: vec![".card".to_string(), ".project-item".to_string()],
            threshold: 0.1,
            bottom_margin_px: 50.0,
        }
    }
}

impl RevealConfig {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px.round() as i64)
    }

    /// Selector list in the form `querySelectorAll` takes.
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavbarConfig {
    pub elevate_after_px: f64,
    pub resting_shadow: String,
    pub elevated_shadow: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            elevate_after_px: 50.0,
            resting_shadow: "0 2px 10px rgba(0, 0, 0, 0.1)".to_string(),
            elevated_shadow: "0 4px 15px rgba(0, 0, 0, 0.15)".to_string(),
        }
    }
}

impl SiteConfig {
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: SiteConfig =
            serde_json::from_str(raw).map_err(|e| SiteError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.number_locale()?;
        if !self.animation_ms.is_finite() || self.animation_ms < 0.0 {
            return Err(SiteError::InvalidConfig(
                "animation_ms must be a finite, non-negative number".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(SiteError::InvalidConfig(
                "reveal.threshold must lie in [0, 1]".to_string(),
            ));
        }
        if !self.reveal.bottom_margin_px.is_finite() || self.reveal.bottom_margin_px < 0.0 {
            return Err(SiteError::InvalidConfig(
                "reveal.bottom_margin_px must be a finite, non-negative number".to_string(),
            ));
        }
        if self.root_page.trim().is_empty() {
            return Err(SiteError::InvalidConfig("root_page is empty".to_string()));
        }
        Ok(())
    }

    pub fn number_locale(&self) -> Result<NumberLocale> {
        NumberLocale::from_tag(&self.locale)
    }
}
