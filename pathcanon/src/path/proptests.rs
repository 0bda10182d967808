//! Property-based tests for canonicalization.
//!
//! Note: The collapse module already has small property tests. This module
//! runs the canonicalizer itself against generated in-memory filesystems.

use super::canonicalize::Canonicalizer;
use super::collapse::{collapse, SEPARATOR};
use super::filesystem::{Filesystem, ResolveError};
use super::types::Resolution;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// A filesystem in which a fixed set of absolute, already-canonical
/// directories exists and resolves to itself.
#[derive(Debug)]
struct TreeFilesystem {
    dirs: BTreeSet<Vec<u8>>,
}

impl Filesystem for TreeFilesystem {
    fn resolve(&self, path: &[u8]) -> Result<Vec<u8>, ResolveError> {
        let collapsed = collapse(path);
        if self.dirs.contains(&collapsed) && !collapsed.windows(2).any(|w| w == b"..") {
            Ok(collapsed)
        } else {
            Err(ResolveError::NotFound)
        }
    }

    fn max_component_length(&self, _directory: &[u8]) -> Option<usize> {
        Some(255)
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-c]{1,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(name_strategy(), 1..8).prop_map(|names| format!("/{}", names.join("/")))
}

fn tree_strategy() -> impl Strategy<Value = TreeFilesystem> {
    prop::collection::vec(prop::collection::vec("[a-c]{1,3}", 1..4), 0..6).prop_map(|paths| {
        let mut dirs = BTreeSet::new();
        for parts in paths {
            let mut current = Vec::new();
            for part in parts {
                current.push(SEPARATOR);
                current.extend_from_slice(part.as_bytes());
                dirs.insert(current.clone());
            }
        }
        TreeFilesystem { dirs }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Canonicalization is idempotent: canonicalize(canonicalize(p)) == canonicalize(p)
    #[test]
    fn canonicalize_idempotent(fs in tree_strategy(), input in input_strategy()) {
        let canonicalizer = Canonicalizer::with_filesystem(&fs);
        if let Ok(once) = canonicalizer.canonicalize(input.as_bytes()) {
            let twice = canonicalizer.canonicalize(once.as_bytes()).unwrap();
            prop_assert_eq!(twice.as_bytes(), once.as_bytes());
        }
    }

    // Results never contain duplicate or trailing separators
    #[test]
    fn canonical_separator_shape(fs in tree_strategy(), input in input_strategy()) {
        let canonical = Canonicalizer::with_filesystem(&fs)
            .canonicalize(input.as_bytes())
            .unwrap();
        let bytes = canonical.as_bytes();
        prop_assert_eq!(bytes.first(), Some(&SEPARATOR));
        prop_assert!(!bytes.windows(2).any(|w| w == b"//"));
        if bytes.len() > 1 {
            prop_assert_ne!(bytes.last(), Some(&SEPARATOR));
        }
    }

    // With nothing on disk the result is exactly the collapsed input
    #[test]
    fn unresolved_equals_collapse(input in input_strategy()) {
        let fs = TreeFilesystem { dirs: BTreeSet::new() };
        let canonical = Canonicalizer::with_filesystem(&fs)
            .canonicalize(input.as_bytes())
            .unwrap();
        prop_assert_eq!(canonical.as_bytes(), &collapse(input.as_bytes())[..]);
        prop_assert_eq!(canonical.resolution(), &Resolution::Unresolved);
    }

    // A resolved prefix always starts the result
    #[test]
    fn partial_result_starts_with_prefix(fs in tree_strategy(), input in input_strategy()) {
        let canonical = Canonicalizer::with_filesystem(&fs)
            .canonicalize(input.as_bytes())
            .unwrap();
        if let Resolution::Partial { prefix } = canonical.resolution() {
            prop_assert!(!prefix.is_empty());
            prop_assert!(fs.dirs.contains(prefix));
        }
    }
}
