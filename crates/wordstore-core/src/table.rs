//! Word frequency tables.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// Mapping from case-folded token to occurrence count.
///
/// Zero counts are never stored. Enumeration order is lexicographic by token,
/// which gives the ranker a deterministic tie-break between equal counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl WordFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: &str) {
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
        } else {
            self.counts.insert(token.to_string(), 1);
        }
    }

    /// Add `count` occurrences of `token`. A zero count is a no-op.
    pub fn add(&mut self, token: String, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(token).or_insert(0) += count;
    }

    /// Fold another table into this one by summing per-token counts.
    pub fn merge(&mut self, other: WordFrequencyTable) {
        for (token, count) in other.counts {
            self.add(token, count);
        }
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Iterate `(token, count)` pairs in lexicographic token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }
}

impl FromIterator<(String, u64)> for WordFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut table = WordFrequencyTable::new();
        for (token, count) in iter {
            table.add(token, count);
        }
        table
    }
}

impl IntoIterator for WordFrequencyTable {
    type Item = (String, u64);
    type IntoIter = btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
