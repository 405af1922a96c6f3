//! Live-grid extraction
//!
//! Fields are recovered per card, cards are grouped per row header, and the
//! whole document becomes one ordered [`Report`].

mod card_extractor;
mod field_extractor;
mod row_grouper;
mod selectors;

pub use card_extractor::*;
pub use field_extractor::*;
pub use row_grouper::*;
pub use selectors::*;

use scraper::Html;
use serde::{Serialize, Serializer};

use crate::error::{CardError, GridError};

/// Stand-in for a field that could not be recovered from its image path
pub const UNKNOWN: &str = "Unknown";

/// One driver's card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRecord {
    /// Title-cased, `<br>` collapsed to a space
    pub driver_name: String,
    pub driver_team: String,
    #[serde(serialize_with = "or_unknown")]
    pub car_number: Option<String>,
    /// Ordinal label within the row; not guaranteed unique
    #[serde(serialize_with = "or_unknown")]
    pub grid_position: Option<String>,
    #[serde(serialize_with = "or_unknown")]
    pub car_manufacturer: Option<String>,
    pub driver_image: String,
}

impl DriverRecord {
    pub fn car_number(&self) -> &str {
        self.car_number.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn grid_position(&self) -> &str {
        self.grid_position.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn car_manufacturer(&self) -> &str {
        self.car_manufacturer.as_deref().unwrap_or(UNKNOWN)
    }
}

fn or_unknown<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(UNKNOWN))
}

/// A row: header label plus its cards in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub label: String,
    pub records: Vec<DriverRecord>,
}

impl Group {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            records: Vec::new(),
        }
    }
}

/// A card dropped because a required element was missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCard {
    pub row: String,
    pub reason: CardError,
}

/// Result of one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Rows in header order; a repeated label opens a new group
    pub groups: Vec<Group>,
    /// Non-fatal card failures, in encounter order
    pub skipped: Vec<SkippedCard>,
}

impl Report {
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// First group with the given label
    pub fn group(&self, label: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

/// Parse an HTML document and extract the grid report
pub fn extract_grid(html: &str, selectors: &GridSelectors) -> Result<Report, GridError> {
    let document = Html::parse_document(html);

    let container = document
        .select(&selectors.container)
        .next()
        .ok_or_else(|| GridError::MissingContainer(selectors.container_source.clone()))?;

    Ok(group_rows(&container, selectors))
}

/// [`extract_grid`] with the built-in markup conventions
pub fn extract_grid_default(html: &str) -> Result<Report, GridError> {
    extract_grid(html, &GridSelectors::default())
}
