//! Rendering of a [`Report`]

use std::fmt::Write;

use crate::error::GridError;
use crate::extractors::Report;

/// Render the report as text, one line per driver.
///
/// ```text
/// Row 1:
/// 3. Pat Jones (12, Team, Honda) - /drivers/jones.png
///
/// ```
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    for group in &report.groups {
        let _ = writeln!(out, "{}:", group.label);
        for r in &group.records {
            let _ = writeln!(
                out,
                "{}. {} ({}, {}, {}) - {}",
                r.grid_position(),
                r.driver_name,
                r.car_number(),
                r.driver_team,
                r.car_manufacturer(),
                r.driver_image
            );
        }
        out.push('\n');
    }

    out
}

/// Pretty JSON array of groups
pub fn report_to_json(report: &Report) -> Result<String, GridError> {
    Ok(serde_json::to_string_pretty(&report.groups)?)
}
