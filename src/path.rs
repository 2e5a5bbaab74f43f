//! Field selectors for JSON records
//!
//! A selector names one field of a record in dot notation with bracket-based
//! array indexing:
//! - Top-level field: `"id"`
//! - Nested field: `"user.profile.email"`
//! - Array element: `"tags[0]"`
//! - Combined: `"owners[1].id"`
//!
//! # Example
//!
//! ```rust
//! use keydiff::path::FieldPath;
//! use serde_json::json;
//!
//! let path: FieldPath = "owner.id".parse().unwrap();
//! let record = json!({"owner": {"id": 7}});
//! assert_eq!(path.resolve(&record), Some(&json!(7)));
//! ```

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A single step of a field selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member name
    Key(String),
    /// Array position
    Index(usize),
}

/// A parsed, non-empty field selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Build a selector from segments, rejecting an empty one
    pub fn from_segments(segments: Vec<PathSegment>) -> Result<Self, ParseError> {
        if segments.is_empty() {
            return Err(ParseError::EmptyPath);
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Walk `record` along this selector
    ///
    /// Returns `None` as soon as a member is absent, an index is out of
    /// bounds, or a segment meets a value of the wrong shape.
    pub fn resolve<'v>(&self, record: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(record, |current, segment| match segment {
                PathSegment::Key(key) => current.as_object()?.get(key),
                PathSegment::Index(i) => current.as_array()?.get(*i),
            })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i > 0 => write!(f, ".{}", key)?,
                PathSegment::Key(key) => write!(f, "{}", key)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

/// Error type for selector parsing failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty path")]
    EmptyPath,

    #[error("Empty field name at position {position}")]
    EmptyKey { position: usize },

    #[error("Invalid array index at position {position}: expected digit, found '{found}'")]
    InvalidArrayIndex { position: usize, found: char },

    #[error("Unclosed bracket at position {position}")]
    UnclosedBracket { position: usize },

    #[error("Unexpected character '{0}' at position {1}")]
    UnexpectedCharacter(char, usize),
}

impl FromStr for FieldPath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::EmptyPath);
        }

        let mut segments = Vec::new();
        let mut chars = s.char_indices().peekable();
        // A key is expected at the start and after every '.'
        let mut expect_key = true;

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '.' => {
                    if expect_key {
                        return Err(ParseError::EmptyKey { position: pos });
                    }
                    expect_key = true;
                }
                '[' => {
                    if expect_key && !segments.is_empty() {
                        return Err(ParseError::EmptyKey { position: pos });
                    }
                    let mut digits = String::new();
                    while let Some(&(_, c)) = chars.peek() {
                        if !c.is_ascii_digit() {
                            break;
                        }
                        digits.push(c);
                        chars.next();
                    }

                    match chars.next() {
                        Some((_, ']')) if !digits.is_empty() => {}
                        Some((at, c)) if digits.is_empty() => {
                            return Err(ParseError::InvalidArrayIndex {
                                position: at,
                                found: c,
                            });
                        }
                        Some((at, c)) => return Err(ParseError::UnexpectedCharacter(c, at)),
                        None => return Err(ParseError::UnclosedBracket { position: pos }),
                    }

                    let index = digits
                        .parse()
                        .map_err(|_| ParseError::InvalidArrayIndex {
                            position: pos + 1,
                            found: digits.chars().next().unwrap_or(' '),
                        })?;
                    segments.push(PathSegment::Index(index));
                    expect_key = false;
                }
                ']' => return Err(ParseError::UnexpectedCharacter(ch, pos)),
                _ => {
                    if !expect_key {
                        return Err(ParseError::UnexpectedCharacter(ch, pos));
                    }
                    let mut key = String::from(ch);
                    while let Some(&(_, c)) = chars.peek() {
                        if c == '.' || c == '[' || c == ']' {
                            break;
                        }
                        key.push(c);
                        chars.next();
                    }
                    segments.push(PathSegment::Key(key));
                    expect_key = false;
                }
            }
        }

        if expect_key {
            return Err(ParseError::EmptyKey { position: s.len() });
        }

        Self::from_segments(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_root_key() {
        let path: FieldPath = "name".parse().unwrap();
        assert_eq!(path.segments(), &[PathSegment::Key("name".to_string())]);
        assert_eq!(path.to_string(), "name");
    }

    #[test]
    fn test_parse_nested_keys() {
        let path: FieldPath = "user.profile.email".parse().unwrap();
        assert_eq!(path.segments().len(), 3);
        assert_eq!(path.to_string(), "user.profile.email");
    }

    #[test]
    fn test_parse_combined() {
        let path: FieldPath = "owners[1].id".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("owners".to_string()),
                PathSegment::Index(1),
                PathSegment::Key("id".to_string())
            ]
        );
        assert_eq!(path.to_string(), "owners[1].id");
    }

    #[test]
    fn test_parse_leading_index() {
        let path: FieldPath = "[0]".parse().unwrap();
        assert_eq!(path.segments(), &[PathSegment::Index(0)]);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<FieldPath>(), Err(ParseError::EmptyPath));
        assert_eq!("   ".parse::<FieldPath>(), Err(ParseError::EmptyPath));
        assert_eq!(
            FieldPath::from_segments(Vec::new()),
            Err(ParseError::EmptyPath)
        );
    }

    #[test]
    fn test_parse_rejects_empty_keys() {
        assert!(matches!(
            ".id".parse::<FieldPath>(),
            Err(ParseError::EmptyKey { position: 0 })
        ));
        assert!(matches!(
            "user..id".parse::<FieldPath>(),
            Err(ParseError::EmptyKey { position: 5 })
        ));
        assert!(matches!(
            "user.".parse::<FieldPath>(),
            Err(ParseError::EmptyKey { .. })
        ));
        assert!(matches!(
            "user.[0]".parse::<FieldPath>(),
            Err(ParseError::EmptyKey { position: 5 })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_brackets() {
        assert!(matches!(
            "items[]".parse::<FieldPath>(),
            Err(ParseError::InvalidArrayIndex { found: ']', .. })
        ));
        assert!(matches!(
            "items[0".parse::<FieldPath>(),
            Err(ParseError::UnclosedBracket { position: 5 })
        ));
        assert!(matches!(
            "items[0x]".parse::<FieldPath>(),
            Err(ParseError::UnexpectedCharacter('x', 7))
        ));
        assert!(matches!(
            "items]".parse::<FieldPath>(),
            Err(ParseError::UnexpectedCharacter(']', 5))
        ));
        assert!(matches!(
            "items[0]name".parse::<FieldPath>(),
            Err(ParseError::UnexpectedCharacter('n', 8))
        ));
    }

    #[test]
    fn test_resolve_nested() {
        let record = json!({"user": {"id": 7, "tags": ["a", "b"]}});
        let id: FieldPath = "user.id".parse().unwrap();
        let tag: FieldPath = "user.tags[1]".parse().unwrap();
        assert_eq!(id.resolve(&record), Some(&json!(7)));
        assert_eq!(tag.resolve(&record), Some(&json!("b")));
    }

    #[test]
    fn test_resolve_missing() {
        let record = json!({"user": {"id": 7}, "tags": []});
        for selector in ["user.name", "tags[0]", "user.id.deeper", "user[0]"] {
            let path: FieldPath = selector.parse().unwrap();
            assert_eq!(path.resolve(&record), None, "selector {selector}");
        }
    }

    #[test]
    fn test_resolve_explicit_null_is_present() {
        let record = json!({"name": null});
        let path: FieldPath = "name".parse().unwrap();
        assert_eq!(path.resolve(&record), Some(&Value::Null));
    }
}
