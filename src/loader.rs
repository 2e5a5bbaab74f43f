use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::KeyDiffError;

/// Default upper bound on input size (100 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

const INLINE_SOURCE: &str = "<inline>";
const STDIN_SOURCE: &str = "<stdin>";

/// Limits applied while loading record lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    pub max_file_size: u64,
}

impl LoadConfig {
    /// Override the size limit when a value is given
    #[must_use]
    pub fn with_max_file_size(mut self, limit: Option<u64>) -> Self {
        if let Some(limit) = limit {
            self.max_file_size = limit;
        }
        self
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Load a record list from a file path or an inline JSON string
///
/// Input is treated as inline JSON when `force_inline` is set or when it
/// starts with `[` or `{`; anything else is a path.
pub fn load_records(
    input: &str,
    config: &LoadConfig,
    force_inline: bool,
) -> Result<Vec<Value>, KeyDiffError> {
    let trimmed = input.trim_start();
    if force_inline || trimmed.starts_with('[') || trimmed.starts_with('{') {
        load_records_inline(input, config)
    } else {
        load_records_file(Path::new(input), config)
    }
}

/// Load and parse a JSON file holding an array of records
pub fn load_records_file(path: &Path, config: &LoadConfig) -> Result<Vec<Value>, KeyDiffError> {
    if !path.is_file() {
        let kind = if path.exists() {
            std::io::ErrorKind::InvalidInput
        } else {
            std::io::ErrorKind::NotFound
        };
        return Err(KeyDiffError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(kind, format!("Not a readable file: {}", path.display())),
        });
    }

    let size = fs::metadata(path)
        .map_err(|source| KeyDiffError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    check_size(path, size, config)?;

    let content = fs::read(path).map_err(|source| KeyDiffError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_records(&content, path)
}

/// Parse an inline JSON string holding an array of records
pub fn load_records_inline(input: &str, config: &LoadConfig) -> Result<Vec<Value>, KeyDiffError> {
    let source = Path::new(INLINE_SOURCE);
    check_size(source, input.len() as u64, config)?;
    parse_records(input.as_bytes(), source)
}

/// Read an array of records from a reader, typically stdin
pub fn load_records_reader<R: Read>(
    reader: R,
    config: &LoadConfig,
) -> Result<Vec<Value>, KeyDiffError> {
    let source = Path::new(STDIN_SOURCE);
    let mut content = Vec::new();
    // One byte past the limit is enough to tell that it was exceeded.
    reader
        .take(config.max_file_size.saturating_add(1))
        .read_to_end(&mut content)
        .map_err(|source_err| KeyDiffError::FileRead {
            path: source.to_path_buf(),
            source: source_err,
        })?;
    check_size(source, content.len() as u64, config)?;
    parse_records(&content, source)
}

fn check_size(path: &Path, size: u64, config: &LoadConfig) -> Result<(), KeyDiffError> {
    if size > config.max_file_size {
        return Err(KeyDiffError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: config.max_file_size,
        });
    }
    Ok(())
}

fn parse_records(content: &[u8], path: &Path) -> Result<Vec<Value>, KeyDiffError> {
    let value: Value = serde_json::from_slice(content).map_err(|source| KeyDiffError::JsonParse {
        path: PathBuf::from(path),
        source,
    })?;

    match value {
        Value::Array(records) => Ok(records),
        other => Err(KeyDiffError::NotAnArray {
            source_name: path.display().to_string(),
            found: kind_name(&other).to_string(),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
