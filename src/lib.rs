//! keydiff - keyed list diff library
//!
//! Compares a "before" list against an "after" list through caller-supplied
//! key and value extractors and classifies elements as inserted, updated or
//! deleted. The comparison is an in-memory nested loop meant for small lists.

pub use diff::{diff, DiffConfig, Extractor, Field, FieldFault, ListDiff, Operand, TryExtractor};
pub use error::{BoxError, ExtractorError, KeyDiffError, Side};
pub use formatter::{create_formatter, OutputFormat};
pub use loader::{
    load_records, load_records_file, load_records_inline, load_records_reader, LoadConfig,
    DEFAULT_MAX_FILE_SIZE,
};
pub use path::{FieldPath, ParseError, PathSegment};
pub use records::{diff_records, RecordOptions};
pub use types::Changes;

mod diff;
mod error;
pub mod formatter;
mod loader;
pub mod path;
pub mod records;
pub mod types;
