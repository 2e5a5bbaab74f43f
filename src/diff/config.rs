use std::fmt;

use crate::diff::field::{Extractor, Field, TryExtractor};
use crate::error::BoxError;

/// Which partitions to compute and which fields to compare
///
/// Key fields decide whether two elements are "the same" element across the
/// before and after lists. Value fields decide whether a matched element
/// changed. By default only the update partition is computed.
///
/// ```rust
/// use keydiff::{diff, DiffConfig};
///
/// let before = [(1, 'a'), (2, 'b')];
/// let after = [(1, 'z'), (3, 'c')];
/// let config = DiffConfig::new()
///     .add_key(|row: &(i32, char)| row.0)
///     .add_value(|row: &(i32, char)| row.1)
///     .enable_all();
///
/// let changes = diff(&before, &after, &config).unwrap();
/// assert_eq!(changes.inserted, vec![(3, 'c')]);
/// assert_eq!(changes.updated, vec![(1, 'z')]);
/// assert_eq!(changes.deleted, vec![(2, 'b')]);
/// ```
pub struct DiffConfig<'a, T> {
    pub(crate) keys: Vec<Box<dyn Field<T> + 'a>>,
    pub(crate) values: Vec<Box<dyn Field<T> + 'a>>,
    pub(crate) insert: bool,
    pub(crate) update: bool,
    pub(crate) delete: bool,
}

impl<'a, T> DiffConfig<'a, T> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            insert: false,
            update: true,
            delete: false,
        }
    }

    /// Append a key extractor
    #[must_use]
    pub fn add_key<K, F>(self, f: F) -> Self
    where
        F: Fn(&T) -> K + 'a,
        K: PartialEq,
    {
        self.add_key_field(Extractor(f))
    }

    /// Append a key extractor that may fail
    #[must_use]
    pub fn try_add_key<K, E, F>(self, f: F) -> Self
    where
        F: Fn(&T) -> Result<K, E> + 'a,
        K: PartialEq,
        E: Into<BoxError>,
    {
        self.add_key_field(TryExtractor(f))
    }

    /// Append any [`Field`] implementation as a key
    #[must_use]
    pub fn add_key_field(mut self, field: impl Field<T> + 'a) -> Self {
        self.keys.push(Box::new(field));
        self
    }

    /// Append a value extractor
    #[must_use]
    pub fn add_value<V, F>(self, f: F) -> Self
    where
        F: Fn(&T) -> V + 'a,
        V: PartialEq,
    {
        self.add_value_field(Extractor(f))
    }

    /// Append a value extractor that may fail
    #[must_use]
    pub fn try_add_value<V, E, F>(self, f: F) -> Self
    where
        F: Fn(&T) -> Result<V, E> + 'a,
        V: PartialEq,
        E: Into<BoxError>,
    {
        self.add_value_field(TryExtractor(f))
    }

    /// Append any [`Field`] implementation as a value
    #[must_use]
    pub fn add_value_field(mut self, field: impl Field<T> + 'a) -> Self {
        self.values.push(Box::new(field));
        self
    }

    #[must_use]
    pub fn compute_insert(mut self, enabled: bool) -> Self {
        self.insert = enabled;
        self
    }

    #[must_use]
    pub fn compute_update(mut self, enabled: bool) -> Self {
        self.update = enabled;
        self
    }

    #[must_use]
    pub fn compute_delete(mut self, enabled: bool) -> Self {
        self.delete = enabled;
        self
    }

    /// Turn on insert and delete; the update flag is left as it is
    #[must_use]
    pub fn enable_all(mut self) -> Self {
        self.insert = true;
        self.delete = true;
        self
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    pub fn computes_insert(&self) -> bool {
        self.insert
    }

    pub fn computes_update(&self) -> bool {
        self.update
    }

    pub fn computes_delete(&self) -> bool {
        self.delete
    }
}

impl<T> Default for DiffConfig<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DiffConfig<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffConfig")
            .field("keys", &self.keys.len())
            .field("values", &self.values.len())
            .field("insert", &self.insert)
            .field("update", &self.update)
            .field("delete", &self.delete)
            .finish()
    }
}
