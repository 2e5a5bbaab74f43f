use crate::diff::config::DiffConfig;
use crate::diff::engine::diff;
use crate::diff::field::Field;
use crate::error::{BoxError, ExtractorError};
use crate::types::Changes;

/// A configure-once, compute-once list differ
///
/// Wraps a [`DiffConfig`] together with the two input lists and keeps the
/// last computed [`Changes`]. Unset inputs count as empty.
///
/// ```rust
/// use keydiff::ListDiff;
///
/// let before = vec![(1, "alice"), (2, "bob")];
/// let after = vec![(1, "alicia"), (3, "carol")];
///
/// let mut differ = ListDiff::new()
///     .before_list(&before)
///     .after_list(&after)
///     .add_key(|u: &(u32, &str)| u.0)
///     .add_value(|u: &(u32, &str)| u.1.to_string())
///     .enable_all();
/// differ.compute().unwrap();
///
/// assert_eq!(differ.insert_list(), &[(3, "carol")]);
/// assert_eq!(differ.update_list(), &[(1, "alicia")]);
/// assert_eq!(differ.delete_list(), &[(2, "bob")]);
/// ```
#[derive(Debug)]
pub struct ListDiff<'a, T> {
    before: Option<&'a [T]>,
    after: Option<&'a [T]>,
    config: DiffConfig<'a, T>,
    changes: Changes<T>,
}

impl<'a, T: Clone> ListDiff<'a, T> {
    pub fn new() -> Self {
        Self::with_config(DiffConfig::new())
    }

    /// Start from an existing configuration
    pub fn with_config(config: DiffConfig<'a, T>) -> Self {
        Self {
            before: None,
            after: None,
            config,
            changes: Changes::new(),
        }
    }

    #[must_use]
    pub fn before_list(mut self, before: &'a [T]) -> Self {
        self.before = Some(before);
        self
    }

    #[must_use]
    pub fn after_list(mut self, after: &'a [T]) -> Self {
        self.after = Some(after);
        self
    }

    #[must_use]
    pub fn add_key<K, F>(self, f: F) -> Self
    where
        F: Fn(&T) -> K + 'a,
        K: PartialEq,
    {
        self.map_config(|c| c.add_key(f))
    }

    #[must_use]
    pub fn try_add_key<K, E, F>(self, f: F) -> Self
    where
        F: Fn(&T) -> Result<K, E> + 'a,
        K: PartialEq,
        E: Into<BoxError>,
    {
        self.map_config(|c| c.try_add_key(f))
    }

    #[must_use]
    pub fn add_key_field(self, field: impl Field<T> + 'a) -> Self {
        self.map_config(|c| c.add_key_field(field))
    }

    #[must_use]
    pub fn add_value<V, F>(self, f: F) -> Self
    where
        F: Fn(&T) -> V + 'a,
        V: PartialEq,
    {
        self.map_config(|c| c.add_value(f))
    }

    #[must_use]
    pub fn try_add_value<V, E, F>(self, f: F) -> Self
    where
        F: Fn(&T) -> Result<V, E> + 'a,
        V: PartialEq,
        E: Into<BoxError>,
    {
        self.map_config(|c| c.try_add_value(f))
    }

    #[must_use]
    pub fn add_value_field(self, field: impl Field<T> + 'a) -> Self {
        self.map_config(|c| c.add_value_field(field))
    }

    #[must_use]
    pub fn compute_insert(self, enabled: bool) -> Self {
        self.map_config(|c| c.compute_insert(enabled))
    }

    #[must_use]
    pub fn compute_update(self, enabled: bool) -> Self {
        self.map_config(|c| c.compute_update(enabled))
    }

    #[must_use]
    pub fn compute_delete(self, enabled: bool) -> Self {
        self.map_config(|c| c.compute_delete(enabled))
    }

    /// Turn on insert and delete; the update flag is left as it is
    #[must_use]
    pub fn enable_all(self) -> Self {
        self.map_config(DiffConfig::enable_all)
    }

    fn map_config(mut self, f: impl FnOnce(DiffConfig<'a, T>) -> DiffConfig<'a, T>) -> Self {
        self.config = f(self.config);
        self
    }

    /// Run the diff and store its result
    ///
    /// Earlier results are discarded first, so a failed run leaves all three
    /// lists empty.
    pub fn compute(&mut self) -> Result<&Changes<T>, ExtractorError<T>> {
        self.changes = Changes::new();
        let before = self.before.unwrap_or_default();
        let after = self.after.unwrap_or_default();
        self.changes = diff(before, after, &self.config)?;
        Ok(&self.changes)
    }

    pub fn config(&self) -> &DiffConfig<'a, T> {
        &self.config
    }

    pub fn insert_list(&self) -> &[T] {
        &self.changes.inserted
    }

    pub fn update_list(&self) -> &[T] {
        &self.changes.updated
    }

    pub fn delete_list(&self) -> &[T] {
        &self.changes.deleted
    }

    pub fn changes(&self) -> &Changes<T> {
        &self.changes
    }

    pub fn into_changes(self) -> Changes<T> {
        self.changes
    }
}

impl<T: Clone> Default for ListDiff<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
