//! Site configuration with optional inline overrides.
//!
//! Defaults are compiled in. A page may embed a JSON document in
//! `<script id="folio-config" type="application/json">` to override any
//! subset of fields; unknown fields are ignored and invalid documents fall
//! back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::content;
use crate::error::ConfigError;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TRIGGER_LINE_PX: f64 = 100.0;
pub const DEFAULT_REVEAL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_HOLD_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_RESUME_ASSET: &str = "Maryam_Mahmoudi_Resume.pdf";
pub const DEFAULT_CV_ASSET: &str = "Maryam_Mahmoudi_CV.pdf";
pub const DEFAULT_ACKNOWLEDGEMENT: &str =
    "Thank you for your message! This is a demo form. In a real implementation, your message would be sent.";

/// Element id of the optional inline config document.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub trigger_line_px: f64,
    pub reveal_interval_ms: u64,
    pub hold_interval_ms: u64,
    pub resume_asset: String,
    /// Full CV offered from the About section.
    pub cv_asset: String,
    pub acknowledgement: String,
    pub headline_titles: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            trigger_line_px: DEFAULT_TRIGGER_LINE_PX,
            reveal_interval_ms: DEFAULT_REVEAL_INTERVAL_MS,
            hold_interval_ms: DEFAULT_HOLD_INTERVAL_MS,
            resume_asset: DEFAULT_RESUME_ASSET.to_owned(),
            cv_asset: DEFAULT_CV_ASSET.to_owned(),
            acknowledgement: DEFAULT_ACKNOWLEDGEMENT.to_owned(),
            headline_titles: content::HEADLINE_TITLES.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the inline config document, or defaults when absent or invalid.
    pub fn load() -> Self {
        let Some(raw) = read_inline_document() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    #[must_use]
    pub fn hold_interval(&self) -> Duration {
        Duration::from_millis(self.hold_interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.headline_titles.is_empty() {
            return Err(ConfigError::Invalid("headline_titles must not be empty".into()));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_storage_key must not be empty".into()));
        }
        if !self.trigger_line_px.is_finite() {
            return Err(ConfigError::Invalid("trigger_line_px must be finite".into()));
        }
        for (field, asset) in [("resume_asset", &self.resume_asset), ("cv_asset", &self.cv_asset)] {
            if asset.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        if self.reveal_interval_ms == 0 {
            return Err(ConfigError::Invalid("reveal_interval_ms must be positive".into()));
        }
        Ok(())
    }
}

fn read_inline_document() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
        el.text_content().filter(|raw| !raw.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
