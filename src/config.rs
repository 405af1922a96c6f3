//! Markup conventions and fetch settings
//!
//! Every field has a default matching the live-grid page, so an empty JSON
//! object (or no config file at all) is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

pub const DEFAULT_URL: &str =
    "https://www.indianapolismotorspeedway.com/events/indy500/event-info/live-grid";

/// Top-level configuration, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub grid: GridConfig,
    pub fetch: FetchConfig,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// CSS selectors and markers describing the grid markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Element whose children are the header/card sibling stream
    pub container: String,
    /// Tag name of row header elements
    pub header_tag: String,
    /// Class marking a driver card
    pub card_class: String,
    pub name: String,
    pub team: String,
    pub car_number: String,
    pub grid_position: String,
    pub manufacturer: String,
    /// Head-shot image, read from its container
    pub driver_image: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            container: ".live-grid-container".to_string(),
            header_tag: "h2".to_string(),
            card_class: "grid-card".to_string(),
            name: "h5".to_string(),
            team: "h6".to_string(),
            car_number: "img.car-endplate".to_string(),
            grid_position: ".position".to_string(),
            manufacturer: "img.car-manufacturer".to_string(),
            driver_image: ".driver-bust > img".to_string(),
        }
    }
}

/// Where and how to download the grid page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    pub url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: concat!("live_grid/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid.header_tag, "h2");
        assert_eq!(config.fetch.url, DEFAULT_URL);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "grid": { "card_class": "driver-card" },
            "fetch": { "timeout_secs": 5 }
        }"#;

        let config = Config::from_json_str(json).unwrap();
        assert_eq!(config.grid.card_class, "driver-card");
        assert_eq!(config.grid.name, "h5");
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.fetch.url, DEFAULT_URL);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_json_str(r#"{ "grid": { "containr": "div" } }"#).unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }
}
