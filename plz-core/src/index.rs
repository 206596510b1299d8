//! Name index with the canonical-entry collision rule.
//!
//! Each place name has an exact-case key and an upper-cased key, both
//! pointing at a position in the gazetteer's entry list.
//!
//! On collision with the entry currently held under the exact key:
//! - same canton: the lower postal code takes the exact key; the upper-cased
//!   key is left alone, so it can still point at the earlier entry;
//! - different canton: the new entry takes both keys.

use std::collections::HashMap;

use log::trace;

use crate::Entry;

/// Fold a name for case-insensitive lookup.
pub(crate) fn fold(name: &str) -> String {
    name.to_uppercase()
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NameIndex {
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl NameIndex {
    /// Register the entry at `position` of `entries`.
    pub(crate) fn register(&mut self, entries: &[Entry], position: usize) {
        let Some(entry) = entries.get(position) else {
            return;
        };
        let current = self
            .exact
            .get(&entry.name)
            .and_then(|&held| entries.get(held));

        match current {
            Some(held) if held.canton == entry.canton => {
                if entry.code < held.code {
                    trace!(
                        "{} supersedes {} as canonical entry for {:?}",
                        entry.code, held.code, entry.name
                    );
                    self.exact.insert(entry.name.clone(), position);
                }
            }
            _ => {
                self.exact.insert(entry.name.clone(), position);
                self.folded.insert(fold(&entry.name), position);
            }
        }
    }

    /// Resolve a name verbatim, falling back to its upper-cased form.
    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.exact
            .get(name)
            .or_else(|| self.folded.get(&fold(name)))
            .copied()
    }

    /// Number of distinct exact-case names.
    pub(crate) fn len(&self) -> usize {
        self.exact.len()
    }
}
