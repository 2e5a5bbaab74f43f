use serde_json::Value;

use crate::error::KeyDiffError;
use crate::formatter::{sort_keys, Formatter};
use crate::types::Changes;

/// Formatter for the "changes" output format
///
/// This formatter outputs a JSON object with three arrays:
/// - inserted: records in the after list with no key match in the before list
/// - updated: records whose key matched and whose value fields all changed
/// - deleted: records in the before list with no key match in the after list
pub struct ChangesFormatter {
    pretty: bool,
    sort: bool,
}

impl ChangesFormatter {
    /// Create a new ChangesFormatter with pretty printing enabled
    pub fn new(sort: bool) -> Self {
        Self { pretty: true, sort }
    }

    /// Create a ChangesFormatter that prints on a single line
    pub fn compact(sort: bool) -> Self {
        Self {
            pretty: false,
            sort,
        }
    }
}

impl Default for ChangesFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Formatter for ChangesFormatter {
    fn format(&self, changes: &Changes<Value>) -> Result<String, KeyDiffError> {
        let mut value = serde_json::to_value(changes).map_err(KeyDiffError::Serialize)?;
        if self.sort {
            value = sort_keys(&value);
        }

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.map_err(KeyDiffError::Serialize)
    }
}
