//! Path canonicalization and ancestor resolution.
//!
//! Paths are `/`-delimited addresses. The canonical form carries no trailing
//! separator, except the root `/` itself. Both subscribe and emit go through
//! [`normalize`], so registry keys always line up.

use crate::error::{BubblerError, Result};
use std::iter::FusedIterator;

/// Segment separator.
pub const SEPARATOR: char = '/';

/// The root path. Every path bubbles here last.
pub const ROOT: &str = "/";

/// Canonicalize a path.
///
/// Fails with [`BubblerError::InvalidPath`] when the path is empty or does not
/// start with the separator. Trailing separators are trimmed; a path made only
/// of separators becomes the root. Idempotent, and never allocates.
pub fn normalize(path: &str) -> Result<&str> {
    if !path.starts_with(SEPARATOR) {
        return Err(BubblerError::InvalidPath(path.to_string()));
    }

    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        Ok(ROOT)
    } else {
        Ok(trimmed)
    }
}

/// Walk from a normalized path up to the root.
///
/// `/abc/def/ghi` yields `/abc/def/ghi`, `/abc/def`, `/abc`, `/`.
pub fn ancestors(path: &str) -> Ancestors<'_> {
    Ancestors { next: Some(path) }
}

/// Iterator over a path and each of its ancestors, most specific first.
///
/// Each step only scans the last segment of the remaining prefix, so a full
/// walk touches every byte of the path once.
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next?;
        self.next = parent(current);
        Some(current)
    }
}

impl FusedIterator for Ancestors<'_> {}

/// Parent of a normalized path, or `None` for the root.
fn parent(path: &str) -> Option<&str> {
    if path == ROOT {
        return None;
    }

    // A run of separators is one boundary: `/a//b` -> `/a`.
    let boundary = path.rfind(SEPARATOR)?;
    let prefix = path[..boundary].trim_end_matches(SEPARATOR);
    if prefix.is_empty() {
        Some(ROOT)
    } else {
        Some(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_trailing_separator() {
        assert_eq!(normalize("/abc/def/").unwrap(), "/abc/def");
        assert_eq!(normalize("/abc/def").unwrap(), "/abc/def");
        assert_eq!(normalize("/").unwrap(), "/");
        assert_eq!(normalize("///").unwrap(), "/");
    }

    #[test]
    fn test_normalize_rejects_relative_and_empty() {
        assert!(matches!(normalize(""), Err(BubblerError::InvalidPath(_))));
        assert!(matches!(normalize("abc"), Err(BubblerError::InvalidPath(p)) if p == "abc"));
        assert!(matches!(normalize(" /abc"), Err(BubblerError::InvalidPath(_))));
    }

    #[test]
    fn test_ancestors_chain() {
        let chain: Vec<_> = ancestors("/abc/def/ghi").collect();
        assert_eq!(chain, vec!["/abc/def/ghi", "/abc/def", "/abc", "/"]);
    }

    #[test]
    fn test_ancestors_of_root() {
        let chain: Vec<_> = ancestors("/").collect();
        assert_eq!(chain, vec!["/"]);
    }

    #[test]
    fn test_ancestors_collapses_empty_segments() {
        let chain: Vec<_> = ancestors("/a//b").collect();
        assert_eq!(chain, vec!["/a//b", "/a", "/"]);

        let chain: Vec<_> = ancestors("//b").collect();
        assert_eq!(chain, vec!["//b", "/"]);
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(path in "/[a-z/]{0,24}") {
            let once = normalize(&path).unwrap();
            prop_assert_eq!(normalize(once).unwrap(), once);
        }

        #[test]
        fn prop_ancestors_are_prefixes_ending_at_root(path in "/([a-z]{1,4}/){0,6}[a-z]{0,4}") {
            let target = normalize(&path).unwrap();
            let chain: Vec<_> = ancestors(target).collect();

            prop_assert_eq!(chain[0], target);
            prop_assert_eq!(*chain.last().unwrap(), ROOT);
            for pair in chain.windows(2) {
                prop_assert!(pair[0].starts_with(pair[1]));
                prop_assert!(pair[1].len() < pair[0].len());
            }
            // One level per segment, plus the root.
            let segments = target.split(SEPARATOR).filter(|s| !s.is_empty()).count();
            prop_assert_eq!(chain.len(), segments + 1);
        }
    }
}
