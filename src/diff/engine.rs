use tracing::{debug, trace, warn};

use crate::diff::config::DiffConfig;
use crate::diff::field::{all_differ, all_equal, any_equal, FieldFault, Operand};
use crate::error::{ExtractorError, Side};
use crate::types::Changes;

/// Main diff function - classifies `after` against `before`
///
/// Cost is a nested loop over both lists, so this is meant for small
/// collections. Candidates are visited in list order and field lists in
/// registration order, stopping at the first decisive comparison.
///
/// The first extractor failure aborts the whole diff.
pub fn diff<T: Clone>(
    before: &[T],
    after: &[T],
    config: &DiffConfig<'_, T>,
) -> Result<Changes<T>, ExtractorError<T>> {
    let mut changes = Changes::new();

    debug!(
        before = before.len(),
        after = after.len(),
        keys = config.keys.len(),
        values = config.values.len(),
        insert = config.insert,
        update = config.update,
        delete = config.delete,
        "computing list diff"
    );

    if before.is_empty() && after.is_empty() {
        trace!("both lists empty");
        return Ok(changes);
    }

    // These two shortcuts ignore the insert and delete flags.
    let all_new = before.is_empty();
    if all_new {
        trace!("before list empty, every element is an insert");
        changes.inserted = after.to_vec();
    }
    let all_gone = after.is_empty();
    if all_gone {
        trace!("after list empty, every element is a delete");
        changes.deleted = before.to_vec();
    }

    if config.keys.is_empty() && (config.insert || config.delete) && !all_new && !all_gone {
        warn!("no key extractors registered, insert and delete results are degenerate");
    }

    if config.update {
        changes.updated = select(after, Side::After, before, |e, c| {
            Ok(all_equal(&config.keys, e, c)? && all_differ(&config.values, e, c)?)
        })?;
    }

    // An after element is new only if no before element shares any key field.
    if config.insert && !all_new {
        changes.inserted = reject(after, Side::After, before, |e, c| {
            any_equal(&config.keys, e, c)
        })?;
    }

    if config.delete && !all_gone {
        changes.deleted = reject(before, Side::Before, after, |e, c| {
            all_equal(&config.keys, e, c)
        })?;
    }

    debug!(
        inserted = changes.inserted.len(),
        updated = changes.updated.len(),
        deleted = changes.deleted.len(),
        "list diff complete"
    );

    Ok(changes)
}

/// Keep the subjects for which some candidate satisfies `pair`
fn select<T, P>(
    subjects: &[T],
    side: Side,
    candidates: &[T],
    pair: P,
) -> Result<Vec<T>, ExtractorError<T>>
where
    T: Clone,
    P: Fn(&T, &T) -> Result<bool, FieldFault>,
{
    filter_by_match(subjects, side, candidates, pair, true)
}

/// Keep the subjects for which no candidate satisfies `pair`
fn reject<T, P>(
    subjects: &[T],
    side: Side,
    candidates: &[T],
    pair: P,
) -> Result<Vec<T>, ExtractorError<T>>
where
    T: Clone,
    P: Fn(&T, &T) -> Result<bool, FieldFault>,
{
    filter_by_match(subjects, side, candidates, pair, false)
}

fn filter_by_match<T, P>(
    subjects: &[T],
    side: Side,
    candidates: &[T],
    pair: P,
    keep_matched: bool,
) -> Result<Vec<T>, ExtractorError<T>>
where
    T: Clone,
    P: Fn(&T, &T) -> Result<bool, FieldFault>,
{
    let mut kept = Vec::new();
    for subject in subjects {
        let mut matched = false;
        for candidate in candidates {
            let hit = pair(subject, candidate)
                .map_err(|fault| blame(fault, subject, side, candidate))?;
            if hit {
                matched = true;
                break;
            }
        }
        if matched == keep_matched {
            kept.push(subject.clone());
        }
    }
    Ok(kept)
}

/// Tie an extractor fault back to the element it was raised on
fn blame<T: Clone>(fault: FieldFault, subject: &T, side: Side, candidate: &T) -> ExtractorError<T> {
    let (element, side) = match fault.operand {
        Operand::Subject => (subject, side),
        Operand::Candidate => (candidate, opposite(side)),
    };
    debug!(%side, error = %fault.source, "extractor failed");
    ExtractorError::new(element.clone(), side, fault.source)
}

fn opposite(side: Side) -> Side {
    match side {
        Side::Before => Side::After,
        Side::After => Side::Before,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        code: &'static str,
        label: &'static str,
    }

    fn item(id: u32, code: &'static str, label: &'static str) -> Item {
        Item { id, code, label }
    }

    #[test]
    fn test_insert_uses_any_key_but_delete_uses_all_keys() {
        // Same id, different code: the pair shares one key field but not both.
        let before = vec![item(1, "a", "x")];
        let after = vec![item(1, "b", "x")];
        let config = DiffConfig::new()
            .add_key(|i: &Item| i.id)
            .add_key(|i: &Item| i.code)
            .enable_all();

        let changes = diff(&before, &after, &config).unwrap();

        // One shared key field is enough to stop the after element being new,
        assert!(changes.inserted.is_empty());
        // but the before element needs a full key match to survive.
        assert_eq!(changes.deleted, before);
        // Without value extractors a full key match is required for an update.
        assert!(changes.updated.is_empty());
    }

    #[test]
    fn test_update_requires_every_value_to_differ() {
        let before = vec![item(1, "a", "x"), item(2, "b", "y")];
        let after = vec![item(1, "a2", "x"), item(2, "b2", "y2")];
        let config = DiffConfig::new()
            .add_key(|i: &Item| i.id)
            .add_value(|i: &Item| i.code)
            .add_value(|i: &Item| i.label);

        let changes = diff(&before, &after, &config).unwrap();
        assert_eq!(changes.updated, vec![item(2, "b2", "y2")]);
    }

    #[test]
    fn test_update_matches_any_key_matched_candidate() {
        // Duplicate keys in before: the second candidate makes the update.
        let before = vec![item(1, "a", "new"), item(1, "a", "old")];
        let after = vec![item(1, "a", "new")];
        let config = DiffConfig::new()
            .add_key(|i: &Item| i.id)
            .add_value(|i: &Item| i.label);

        let changes = diff(&before, &after, &config).unwrap();
        assert_eq!(changes.updated, after);
    }

    #[test]
    fn test_update_disabled() {
        let before = vec![item(1, "a", "x")];
        let after = vec![item(1, "a", "y")];
        let config = DiffConfig::new()
            .add_key(|i: &Item| i.id)
            .compute_update(false);

        let changes = diff(&before, &after, &config).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_shortcuts_skip_extractors() {
        let calls = Cell::new(0);
        let config = DiffConfig::new()
            .add_key(|i: &Item| {
                calls.set(calls.get() + 1);
                i.id
            })
            .enable_all();

        let rows = vec![item(1, "a", "x"), item(2, "b", "y")];
        let inserted = diff(&[], &rows, &config).unwrap();
        assert_eq!(inserted.inserted, rows);
        let deleted = diff(&rows, &[], &config).unwrap();
        assert_eq!(deleted.deleted, rows);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_zero_keys_is_degenerate_not_an_error() {
        let before = vec![item(1, "a", "x")];
        let after = vec![item(2, "b", "y"), item(3, "c", "z")];
        let config = DiffConfig::new().enable_all();

        let changes = diff(&before, &after, &config).unwrap();
        // No key field can be equal, so every after element is new,
        assert_eq!(changes.inserted, after);
        // and every pair key-matches vacuously, so nothing is deleted
        assert!(changes.deleted.is_empty());
        // and every after element counts as updated.
        assert_eq!(changes.updated, after);
    }

    #[test]
    fn test_subject_failure_reports_after_element() {
        let before = vec![item(1, "a", "x")];
        let after = vec![item(1, "", "y")];
        let config = DiffConfig::new().try_add_key(|i: &Item| {
            if i.code.is_empty() {
                Err("missing code")
            } else {
                Ok(i.code)
            }
        });

        let err = diff(&before, &after, &config).unwrap_err();
        assert_eq!(err.side(), Side::After);
        assert_eq!(err.element(), &after[0]);
        assert_eq!(
            err.to_string(),
            "extractor failed on an element of the after list: missing code"
        );
    }

    #[test]
    fn test_candidate_failure_reports_before_element() {
        let before = vec![item(1, "", "x")];
        let after = vec![item(1, "a", "y")];
        let config = DiffConfig::new().try_add_value(|i: &Item| {
            if i.code.is_empty() {
                Err("missing code")
            } else {
                Ok(i.code)
            }
        });

        let err = diff(&before, &after, &config).unwrap_err();
        assert_eq!(err.side(), Side::Before);
        assert_eq!(err.into_element(), item(1, "", "x"));
    }

    #[test]
    fn test_delete_failure_reports_sides_from_before() {
        let before = vec![item(1, "a", "x")];
        let after = vec![item(2, "", "y")];
        let config = DiffConfig::new()
            .try_add_key(|i: &Item| {
                if i.code.is_empty() {
                    Err("missing code")
                } else {
                    Ok(i.code)
                }
            })
            .compute_update(false)
            .compute_delete(true);

        let err = diff(&before, &after, &config).unwrap_err();
        assert_eq!(err.side(), Side::After);
        assert_eq!(err.element(), &after[0]);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(opposite(Side::Before), Side::After);
        assert_eq!(opposite(Side::After), Side::Before);
    }
}
