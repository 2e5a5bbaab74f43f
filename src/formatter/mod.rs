//! Formatter module for outputting diff results
//!
//! This module provides the output formatters for record diffs.
//! The default is the "changes" format which outputs a structured JSON
//! object with inserted, updated, and deleted arrays.

mod changes;
mod text;
mod util;

pub use changes::ChangesFormatter;
pub use text::TextFormatter;
pub use util::sort_keys;

use serde_json::Value;

use crate::error::KeyDiffError;
use crate::types::Changes;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object with inserted, updated and deleted arrays
    #[value(name = "changes")]
    Changes,

    /// A heading per list followed by one record per line
    #[value(name = "text")]
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Changes => write!(f, "changes"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Trait for formatting diff results
pub trait Formatter {
    /// Format the changes and return a string representation
    fn format(&self, changes: &Changes<Value>) -> Result<String, KeyDiffError>;
}

/// Factory function to create a formatter based on output format
pub fn create_formatter(format: OutputFormat, sort: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Changes => Box::new(ChangesFormatter::new(sort)),
        OutputFormat::Text => Box::new(TextFormatter::new(sort)),
    }
}
