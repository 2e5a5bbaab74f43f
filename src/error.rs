use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::path::ParseError;

/// Boxed error returned by fallible extractors
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which input list an element came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => write!(f, "before"),
            Side::After => write!(f, "after"),
        }
    }
}

/// An extractor failed while the diff was running
///
/// The whole computation is abandoned. The error keeps the element the
/// extractor was applied to and the extractor's own error as its source.
pub struct ExtractorError<T> {
    element: T,
    side: Side,
    source: BoxError,
}

impl<T> ExtractorError<T> {
    pub(crate) fn new(element: T, side: Side, source: BoxError) -> Self {
        Self {
            element,
            side,
            source,
        }
    }

    /// The element the failing extractor was applied to
    pub fn element(&self) -> &T {
        &self.element
    }

    /// The list the element belongs to
    pub fn side(&self) -> Side {
        self.side
    }

    /// Take ownership of the offending element
    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T: fmt::Debug> fmt::Debug for ExtractorError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorError")
            .field("element", &self.element)
            .field("side", &self.side)
            .field("source", &self.source)
            .finish()
    }
}

impl<T> fmt::Display for ExtractorError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "extractor failed on an element of the {} list: {}",
            self.side, self.source
        )
    }
}

impl<T: fmt::Debug> std::error::Error for ExtractorError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let source: &(dyn std::error::Error + 'static) = &*self.source;
        Some(source)
    }
}

/// Custom error type for keydiff operations
#[derive(Debug, Error)]
pub enum KeyDiffError {
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("File {path} is {size} bytes, larger than the {limit} byte limit")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Expected a JSON array of records in {source_name}, found {found}")]
    NotAnArray { source_name: String, found: String },

    #[error("Invalid field path '{path}': {source}")]
    InvalidPath { path: String, source: ParseError },

    #[error("Field '{path}' is missing")]
    MissingField { path: String },

    #[error("Second input required (provide AFTER or use --stdin)")]
    MissingAfter,

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("{0}")]
    Extractor(#[from] ExtractorError<serde_json::Value>),
}
