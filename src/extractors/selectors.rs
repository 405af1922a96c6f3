//! Compiled selectors
//!
//! Parsing a selector is comparatively expensive, so the config is compiled
//! once per run instead of once per card.

use scraper::Selector;

use crate::config::GridConfig;
use crate::error::GridError;

/// Compiled form of [`GridConfig`]
#[derive(Debug, Clone)]
pub struct GridSelectors {
    pub(crate) container: Selector,
    pub(crate) container_source: String,
    pub(crate) header_tag: String,
    pub(crate) card_class: String,
    pub(crate) card: Selector,
    pub(crate) name: Selector,
    pub(crate) team: Selector,
    pub(crate) car_number: Selector,
    pub(crate) grid_position: Selector,
    pub(crate) manufacturer: Selector,
    pub(crate) driver_image: Selector,
}

impl GridSelectors {
    pub fn compile(config: &GridConfig) -> Result<Self, GridError> {
        let card_class = config.card_class.trim();
        if card_class.is_empty() || card_class.chars().any(char::is_whitespace) {
            return Err(GridError::InvalidCardClass(config.card_class.clone()));
        }

        Ok(Self {
            container: parse("container", &config.container)?,
            container_source: config.container.clone(),
            header_tag: config.header_tag.trim().to_ascii_lowercase(),
            card_class: card_class.to_string(),
            card: parse("card_class", &format!(".{card_class}"))?,
            name: parse("name", &config.name)?,
            team: parse("team", &config.team)?,
            car_number: parse("car_number", &config.car_number)?,
            grid_position: parse("grid_position", &config.grid_position)?,
            manufacturer: parse("manufacturer", &config.manufacturer)?,
            driver_image: parse("driver_image", &config.driver_image)?,
        })
    }
}

impl Default for GridSelectors {
    fn default() -> Self {
        // The built-in selectors are covered by test_default_config_compiles
        Self::compile(&GridConfig::default()).expect("default selectors are valid")
    }
}

fn parse(field: &'static str, selector: &str) -> Result<Selector, GridError> {
    Selector::parse(selector).map_err(|e| GridError::InvalidSelector {
        field,
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
