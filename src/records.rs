//! Diffing lists of JSON records
//!
//! Records are `serde_json::Value`s, usually objects. Key and value fields are
//! named with [`FieldPath`] selectors. A field that is absent compares as
//! `null`, unless strict mode turns absence into an extractor failure.

use serde_json::Value;

use crate::diff::{diff, DiffConfig};
use crate::error::KeyDiffError;
use crate::path::FieldPath;
use crate::types::Changes;

/// Field selectors and flags for [`diff_records`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOptions {
    pub keys: Vec<FieldPath>,
    pub values: Vec<FieldPath>,
    pub insert: bool,
    pub update: bool,
    pub delete: bool,
    /// Fail on records that lack a selected field
    pub strict: bool,
}

impl RecordOptions {
    /// Parse key and value selectors; only updates are computed by default
    pub fn parse<K, V>(keys: K, values: V) -> Result<Self, KeyDiffError>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        Ok(Self {
            keys: parse_paths(keys)?,
            values: parse_paths(values)?,
            ..Self::default()
        })
    }
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            insert: false,
            update: true,
            delete: false,
            strict: false,
        }
    }
}

fn parse_paths<I>(selectors: I) -> Result<Vec<FieldPath>, KeyDiffError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    selectors
        .into_iter()
        .map(|s| {
            let s = s.as_ref();
            s.parse().map_err(|source| KeyDiffError::InvalidPath {
                path: s.to_string(),
                source,
            })
        })
        .collect()
}

/// Diff two record lists by the selected fields
pub fn diff_records(
    before: &[Value],
    after: &[Value],
    options: &RecordOptions,
) -> Result<Changes<Value>, KeyDiffError> {
    let config = build_config(options);
    Ok(diff(before, after, &config)?)
}

fn build_config(options: &RecordOptions) -> DiffConfig<'_, Value> {
    let mut config = DiffConfig::new()
        .compute_insert(options.insert)
        .compute_update(options.update)
        .compute_delete(options.delete);

    for path in &options.keys {
        config = if options.strict {
            config.try_add_key(move |record: &Value| require(path, record))
        } else {
            config.add_key(move |record: &Value| lookup(path, record))
        };
    }
    for path in &options.values {
        config = if options.strict {
            config.try_add_value(move |record: &Value| require(path, record))
        } else {
            config.add_value(move |record: &Value| lookup(path, record))
        };
    }
    config
}

fn lookup(path: &FieldPath, record: &Value) -> Value {
    path.resolve(record).cloned().unwrap_or(Value::Null)
}

fn require(path: &FieldPath, record: &Value) -> Result<Value, KeyDiffError> {
    path.resolve(record)
        .cloned()
        .ok_or_else(|| KeyDiffError::MissingField {
            path: path.to_string(),
        })
}
