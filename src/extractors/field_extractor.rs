//! Per-field extraction from a single driver card
//!
//! Name, team and driver image are required and fail with [`CardError`].
//! Car number, grid position and manufacturer are only recoverable from image
//! paths, so they come back as `None` whenever the path doesn't follow the
//! site's conventions.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::error::CardError;

pub fn extract_driver_name(card: &ElementRef, selector: &Selector) -> Result<String, CardError> {
    let element = first(card, selector).ok_or(CardError::MissingElement { field: "name" })?;
    Ok(normalize_name(&element.inner_html()))
}

pub fn extract_driver_team(card: &ElementRef, selector: &Selector) -> Result<String, CardError> {
    let element = first(card, selector).ok_or(CardError::MissingElement { field: "team" })?;
    Ok(element.text().collect::<String>().trim().to_string())
}

/// Number from an endplate path like `.../Endplates/12-Dixon.png`
pub fn extract_car_number(card: &ElementRef, selector: &Selector) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"Endplates/(\d{1,2})-").expect("endplate regex is valid"));

    capture(re, first_src(card, selector)?)
}

/// Slot from a position badge like `.../liveGridPositions2013/3.png`
pub fn extract_grid_position(card: &ElementRef, selector: &Selector) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"liveGridPositions2013/(\d+)\.png").expect("position regex is valid")
    });

    capture(re, first_src(card, selector)?)
}

/// Manufacturer from a logo path like `.../img_honda_logo.png`
pub fn extract_car_manufacturer(card: &ElementRef, selector: &Selector) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"img_(\w+)_logo").expect("logo regex is valid"));

    capture(re, first_src(card, selector)?).map(|token| capitalize_first(&token))
}

/// Head-shot `src`, passed through as-is
pub fn extract_driver_image(card: &ElementRef, selector: &Selector) -> Result<String, CardError> {
    first_src(card, selector)
        .map(String::from)
        .ok_or(CardError::MissingElement {
            field: "driver image",
        })
}

/// Collapse `<br>` variants to a space, then title-case the result
pub fn normalize_name(raw: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)\s*<br\s*/?>\s*").expect("br regex is valid"));

    title_case(re.replace_all(raw, " ").trim())
}

/// ASCII-style title casing: lowercase everything, then uppercase the first
/// character of each space-separated word
pub fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn first<'a>(card: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    card.select(selector).next()
}

fn first_src<'a>(card: &ElementRef<'a>, selector: &Selector) -> Option<&'a str> {
    first(card, selector)?.value().attr("src")
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
