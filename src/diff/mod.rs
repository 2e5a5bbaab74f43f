//! Diff module for comparing two lists by key
//!
//! Elements of the "after" list are matched against the "before" list through
//! caller-supplied key and value extractors. Matching is a plain nested loop;
//! nothing is indexed or hashed.

mod config;
mod engine;
mod field;
mod list;

pub use config::DiffConfig;
pub use engine::diff;
pub use field::{Extractor, Field, FieldFault, Operand, TryExtractor};
pub use list::ListDiff;
