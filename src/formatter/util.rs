use serde_json::{Map, Value};

/// Recursively sort a JSON value's object keys alphabetically
///
/// Used by `--sort` so that record fields print in a stable order no matter
/// how the input files ordered them. Array order is left alone.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(key, child)| (key.clone(), sort_keys(child)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .unwrap()
            .keys()
            .map(|s| s.as_str())
            .collect()
    }

    #[test]
    fn test_sort_nested_object() {
        let value = json!({"z": 1, "inner": {"b": 2, "a": 1}, "a": 0});
        let sorted = sort_keys(&value);
        assert_eq!(keys(&sorted), vec!["a", "inner", "z"]);
        assert_eq!(keys(&sorted["inner"]), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_array_preserves_order() {
        let value = json!([{"b": 1, "a": 2}, "z", "a"]);
        let sorted = sort_keys(&value);
        assert_eq!(keys(&sorted[0]), vec!["a", "b"]);
        assert_eq!(sorted[1], "z");
        assert_eq!(sorted[2], "a");
    }

    #[test]
    fn test_sort_primitive_returns_same() {
        assert_eq!(sort_keys(&json!("test")), "test");
        assert_eq!(sort_keys(&json!(42)), 42);
        assert_eq!(sort_keys(&Value::Null), Value::Null);
    }
}
