use serde_json::Value;

use crate::error::KeyDiffError;
use crate::formatter::{sort_keys, Formatter};
use crate::types::Changes;

/// Formatter for the "text" output format
///
/// Prints a heading with a count for each list, then one compact JSON record
/// per line.
pub struct TextFormatter {
    sort: bool,
}

impl TextFormatter {
    pub fn new(sort: bool) -> Self {
        Self { sort }
    }

    fn write_section(
        &self,
        out: &mut String,
        title: &str,
        records: &[Value],
    ) -> Result<(), KeyDiffError> {
        out.push_str(&format!("{} ({}):\n", title, records.len()));
        for record in records {
            let line = if self.sort {
                serde_json::to_string(&sort_keys(record))
            } else {
                serde_json::to_string(record)
            }
            .map_err(KeyDiffError::Serialize)?;
            out.push_str(&format!("  {}\n", line));
        }
        Ok(())
    }
}

impl Formatter for TextFormatter {
    fn format(&self, changes: &Changes<Value>) -> Result<String, KeyDiffError> {
        let mut out = String::new();
        self.write_section(&mut out, "inserted", &changes.inserted)?;
        self.write_section(&mut out, "updated", &changes.updated)?;
        self.write_section(&mut out, "deleted", &changes.deleted)?;
        Ok(out.trim_end().to_string())
    }
}
