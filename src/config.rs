//! Site Configuration
//!
//! Optional JSON settings embedded by the host page in
//! `<script id="site-config" type="application/json">`. Missing keys fall
//! back to the defaults below.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::submission::SUBMIT_DELAY;
use crate::theme::ThemeTokens;

const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    /// Simulated submission delay
    pub submit_delay_ms: u64,
    /// Prefix the percent-encoded share message is appended to
    pub share_base_url: String,
    pub contact_url: String,
    /// Shown instead of pickup fields when drop-off is selected
    pub dropoff_notice: String,
    pub theme: ThemeTokens,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "DevDonations".to_string(),
            submit_delay_ms: SUBMIT_DELAY.as_millis() as u64,
            share_base_url: "https://wa.me/?text=".to_string(),
            contact_url: "https://wa.me/".to_string(),
            dropoff_notice: "Preferred Center: 21 Minimal Ave, District 3. Open 10:00–18:00."
                .to_string(),
            theme: ThemeTokens::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Read the embedded config, falling back to defaults
pub fn load() -> SiteConfig {
    let embedded = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(json) = embedded else {
        log::debug!("[CONFIG] no embedded config, using defaults");
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&json) {
        Ok(config) => {
            log::info!("[CONFIG] loaded site config for {}", config.brand_name);
            config
        }
        Err(err) => {
            log::warn!("[CONFIG] {}; using defaults", err);
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(r##"{"submit_delay_ms": 10, "theme": {"accent": "#000"}}"##)
            .unwrap();
        assert_eq!(config.submit_delay(), Duration::from_millis(10));
        assert_eq!(config.theme.accent, "#000");
        assert_eq!(config.theme.bg, "#F8F8F7");
        assert_eq!(config.brand_name, "DevDonations");
    }

    #[test]
    fn test_default_delay_matches_submission() {
        assert_eq!(SiteConfig::default().submit_delay(), SUBMIT_DELAY);
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(SiteConfig::from_json(r#"{"submit_delay_ms": "slow"}"#).is_err());
    }
}
