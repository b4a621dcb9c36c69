//! Ranker.
//!
//! Selection always takes the most frequent words; the requested order only
//! decides the direction they are listed in.

use crate::models::{Order, RankRequest};
use crate::table::WordFrequencyTable;

/// Produce the ranked word list for `request`.
///
/// Words are sorted by ascending count with a stable sort over the table's
/// lexicographic enumeration, so equal counts always break ties the same way.
/// The `limit` highest-count words are kept (all of them if `limit` exceeds
/// the table size) and listed lowest-first for [`Order::Ascending`] or
/// highest-first for [`Order::Descending`].
pub fn rank(table: &WordFrequencyTable, request: RankRequest) -> Vec<String> {
    let mut entries: Vec<(&str, u64)> = table.iter().collect();
    entries.sort_by_key(|&(_, count)| count);

    let limit = request.limit.min(entries.len());
    let selected = &entries[entries.len() - limit..];

    let mut words: Vec<String> = selected.iter().map(|(word, _)| (*word).to_string()).collect();
    if request.order == Order::Descending {
        words.reverse();
    }
    words
}
