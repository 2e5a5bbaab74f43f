use serde::{Deserialize, Serialize};

/// The three classified partitions of a list diff
///
/// Each list is freshly built by the diff and preserves the iteration order
/// of its source: `inserted` and `updated` follow the "after" list, `deleted`
/// follows the "before" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changes<T> {
    pub inserted: Vec<T>,
    pub updated: Vec<T>,
    pub deleted: Vec<T>,
}

impl<T> Changes<T> {
    /// Create a new empty Changes container
    pub fn new() -> Self {
        Self {
            inserted: Vec::new(),
            updated: Vec::new(),
            deleted: Vec::new(),
        }
    }

    /// Check if there are any changes
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }

    /// Total number of classified elements across all three lists
    pub fn len(&self) -> usize {
        self.inserted.len() + self.updated.len() + self.deleted.len()
    }
}

impl<T> Default for Changes<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_new_is_empty() {
        let changes: Changes<u32> = Changes::new();
        assert!(changes.is_empty());
        assert_eq!(changes.len(), 0);
        assert_eq!(changes, Changes::default());
    }

    #[test]
    fn test_len_counts_all_lists() {
        let changes = Changes {
            inserted: vec![1, 2],
            updated: vec![3],
            deleted: vec![4, 5, 6],
        };
        assert!(!changes.is_empty());
        assert_eq!(changes.len(), 6);
    }

    #[test]
    fn test_serialized_field_names() {
        let changes = Changes {
            inserted: vec![json!({"id": 3})],
            updated: vec![],
            deleted: vec![json!({"id": 2})],
        };
        let value = serde_json::to_value(&changes).unwrap();
        assert_eq!(value["inserted"][0]["id"], 3);
        assert_eq!(value["updated"], Value::Array(vec![]));
        assert_eq!(value["deleted"][0]["id"], 2);
    }
}
