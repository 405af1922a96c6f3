//! Live starting-grid extraction
//!
//! Turns the race live-grid page into rows of driver records:
//! - Row headers and driver cards from a flat sibling stream
//! - Car number, grid slot and manufacturer recovered from image paths
//! - Text report, JSON, and a C ABI over both

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod ffi;
pub mod format;

pub use config::*;
pub use error::*;
pub use extractors::*;
pub use fetch::*;
pub use ffi::*;
pub use format::*;
