//! Command store.
//!
//! An ordered, duplicate-free list of command names. Order is the only
//! recency signal: index 0 is the most recently launched command, and the
//! same order decides which completion candidate comes first.

mod file;

pub use file::StoreFile;

use std::collections::HashSet;

/// Counts produced by [`CommandStore::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileReport {
    /// Names discovered that were not stored.
    pub added: usize,
    /// Stored names that were not discovered.
    pub removed: usize,
    /// Size of the store afterwards.
    pub total: usize,
}

/// Recency-ordered list of known command names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandStore {
    entries: Vec<String>,
}

impl CommandStore {
    /// Builds a store from names in recency order, keeping the first
    /// occurrence of any repeated name.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let entries = names
            .into_iter()
            .map(Into::<String>::into)
            .filter(|name| seen.insert(name.clone()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of an exact match.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Moves `name` to the front, keeping the rest in order.
    ///
    /// Returns `false` without touching the store if `name` is unknown.
    pub fn promote(&mut self, name: &str) -> bool {
        let Some(index) = self.position(name) else {
            return false;
        };
        self.entries[..=index].rotate_right(1);
        tracing::debug!(name, from = index, "promoted command");
        true
    }

    /// Reconciles the store against a fresh directory scan.
    ///
    /// Stored names missing from `discovered` are dropped; discovered names
    /// not yet stored are appended in discovery order. The front of the
    /// store stays reserved for launched commands.
    pub fn reconcile<I, S>(&mut self, discovered: I) -> ReconcileReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let discovered: Vec<String> = discovered.into_iter().map(Into::into).collect();
        let found: HashSet<&str> = discovered.iter().map(String::as_str).collect();

        let before = self.entries.len();
        self.entries.retain(|entry| found.contains(entry.as_str()));
        let removed = before - self.entries.len();

        let mut known: HashSet<String> = self.entries.iter().cloned().collect();
        let mut added = 0;
        for name in discovered {
            if known.insert(name.clone()) {
                self.entries.push(name);
                added += 1;
            }
        }

        let report = ReconcileReport {
            added,
            removed,
            total: self.entries.len(),
        };
        tracing::debug!(?report, "reconciled store");
        report
    }
}

/// Store entries that complete `typed`, in store order.
///
/// An empty `typed` matches nothing. Matching is a byte-wise, case-sensitive
/// prefix test, and a name equal to `typed` counts as a match.
pub fn matches<'a>(entries: &'a [String], typed: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    entries
        .iter()
        .map(String::as_str)
        .filter(move |entry| !typed.is_empty() && entry.len() >= typed.len() && entry.starts_with(typed))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn name_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-e]{1,3}", 0..30)
    }

    proptest! {
        #[test]
        fn matches_are_exactly_the_prefixed_entries(names in name_list(), typed in "[a-e]{0,3}") {
            let store = CommandStore::new(names);
            let found: Vec<&str> = matches(store.entries(), &typed).collect();
            let expected: Vec<&str> = store
                .entries()
                .iter()
                .map(String::as_str)
                .filter(|name| !typed.is_empty() && name.starts_with(&typed))
                .collect();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn reconcile_keeps_survivors_then_appends_new(stored in name_list(), discovered in name_list()) {
            let mut store = CommandStore::new(stored);
            let before = store.entries().to_vec();
            let report = store.reconcile(discovered.clone());

            let mut expected: Vec<String> = before
                .iter()
                .filter(|name| discovered.contains(name))
                .cloned()
                .collect();
            let survivors = expected.len();
            for name in &discovered {
                if !expected.contains(name) {
                    expected.push(name.clone());
                }
            }

            prop_assert_eq!(store.entries(), &expected[..]);
            prop_assert_eq!(report.removed, before.len() - survivors);
            prop_assert_eq!(report.added, expected.len() - survivors);
            prop_assert_eq!(report.total, expected.len());
        }

        #[test]
        fn promote_moves_only_the_named_entry(names in name_list(), pick in any::<prop::sample::Index>()) {
            let mut store = CommandStore::new(names);
            prop_assume!(!store.is_empty());
            let before = store.entries().to_vec();
            let name = before[pick.index(before.len())].clone();

            prop_assert!(store.promote(&name));
            prop_assert_eq!(&store.entries()[0], &name);
            let rest: Vec<&String> = before.iter().filter(|n| **n != name).collect();
            let after: Vec<&String> = store.entries()[1..].iter().collect();
            prop_assert_eq!(after, rest);
        }
    }
}
