//! # Generic List Resolver
//!
//! Merges two collections of keyed records into one, applying a
//! caller-supplied conflict resolution function wherever both sides carry a
//! record with the same join key. This is the primitive behind the
//! brand-overrides-base semantics of manifest reconciliation, kept generic
//! so the conflict policy stays with the caller.
//!
//! ## Contract
//!
//! - For every record in the first list, the matching record (by key) is
//!   looked up in the second list and consumed, and the conflict function
//!   decides the resolved record. The conflict function receives `None`
//!   when no match exists and must handle that case.
//! - Records remaining in the second list are appended after the first list
//!   is exhausted, so the result covers every distinct key from both sides
//!   with no key appearing twice.
//! - The result is sorted by key ascending, which makes resolution
//!   deterministic and idempotent under repeated application.
//! - Duplicate keys within a single input list are a validation error, not
//!   a silent first-match pick.
//!
//! The function performs no I/O; a missing match is a normal case, never an
//! error.

use std::collections::BTreeSet;
use std::fmt::Display;

use crate::error::{Error, Result};

/// Merge two keyed record lists, resolving key collisions with `resolve_conflict`.
///
/// `key` extracts the join key from a record. `resolve_conflict` is invoked
/// once per record of `a` with the consumed match from `b`, or `None` when
/// `b` holds no record with that key.
pub fn resolve<T, K, KF, CF>(key: KF, mut resolve_conflict: CF, a: Vec<T>, b: Vec<T>) -> Result<Vec<T>>
where
    K: Ord + Display,
    KF: Fn(&T) -> K,
    CF: FnMut(T, Option<T>) -> T,
{
    validate_distinct_keys(&key, &a)?;
    validate_distinct_keys(&key, &b)?;

    let mut remaining = b;
    let mut merged = Vec::with_capacity(a.len() + remaining.len());

    for from_a in a {
        let from_b = remaining
            .iter()
            .position(|candidate| key(candidate) == key(&from_a))
            .map(|index| remaining.remove(index));
        merged.push(resolve_conflict(from_a, from_b));
    }

    merged.extend(remaining);
    merged.sort_by(|x, y| key(x).cmp(&key(y)));

    Ok(merged)
}

/// Reject an input list carrying the same join key twice.
fn validate_distinct_keys<T, K, KF>(key: &KF, records: &[T]) -> Result<()>
where
    K: Ord + Display,
    KF: Fn(&T) -> K,
{
    let mut seen = BTreeSet::new();
    for record in records {
        let k = key(record);
        if !seen.insert(key(record)) {
            return Err(Error::DuplicateKey { key: k.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Rec {
        id: u32,
        v: &'static str,
    }

    fn rec(id: u32, v: &'static str) -> Rec {
        Rec { id, v }
    }

    #[test]
    fn test_resolve_keeps_b_on_collision() {
        let a = vec![rec(1, "a"), rec(2, "b")];
        let b = vec![rec(2, "B"), rec(3, "c")];

        let merged = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), a, b).unwrap();

        assert_eq!(merged, vec![rec(1, "a"), rec(2, "B"), rec(3, "c")]);
    }

    #[test]
    fn test_resolve_identity_when_no_match() {
        let a = vec![rec(1, "a")];
        let b = vec![rec(2, "b")];

        let merged = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), a, b).unwrap();

        assert_eq!(merged, vec![rec(1, "a"), rec(2, "b")]);
    }

    #[test]
    fn test_resolve_covers_all_distinct_keys() {
        let a = vec![rec(4, "d"), rec(1, "a"), rec(3, "c")];
        let b = vec![rec(2, "b"), rec(3, "C")];

        let merged = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), a, b).unwrap();

        let ids: Vec<u32> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_resolve_sorts_by_key_ascending() {
        let a = vec![rec(9, "z"), rec(5, "e")];
        let b = vec![rec(7, "g")];

        let merged = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), a, b).unwrap();

        let ids: Vec<u32> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 7, 9]);
    }

    #[test]
    fn test_resolve_conflict_fn_can_keep_a() {
        let a = vec![rec(1, "keep")];
        let b = vec![rec(1, "drop")];

        let merged = resolve(|r: &Rec| r.id, |a, _b| a, a, b).unwrap();

        assert_eq!(merged, vec![rec(1, "keep")]);
    }

    #[test]
    fn test_resolve_empty_inputs() {
        let merged = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), Vec::new(), Vec::new()).unwrap();
        assert!(merged.is_empty());

        let merged = resolve(
            |r: &Rec| r.id,
            |a, b| b.unwrap_or(a),
            Vec::new(),
            vec![rec(1, "a")],
        )
        .unwrap();
        assert_eq!(merged, vec![rec(1, "a")]);
    }

    #[test]
    fn test_resolve_duplicate_key_in_a_is_error() {
        let a = vec![rec(1, "a"), rec(1, "dup")];
        let result = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), a, Vec::new());
        assert!(matches!(result, Err(Error::DuplicateKey { .. })));
    }

    #[test]
    fn test_resolve_duplicate_key_in_b_is_error() {
        let b = vec![rec(2, "b"), rec(2, "dup")];
        let result = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), Vec::new(), b);
        assert!(matches!(result, Err(Error::DuplicateKey { .. })));
    }

    #[test]
    fn test_resolve_idempotent_under_reapplication() {
        let a = vec![rec(2, "b"), rec(1, "a")];
        let b = vec![rec(3, "c")];

        let once = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), a, b).unwrap();
        let twice = resolve(|r: &Rec| r.id, |a, b| b.unwrap_or(a), once.clone(), Vec::new()).unwrap();

        assert_eq!(once, twice);
    }
}
