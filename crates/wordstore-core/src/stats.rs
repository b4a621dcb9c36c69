//! Statistics façade.
//!
//! The entry points the HTTP layer and the CLI call. Every call scans the
//! store from scratch; nothing is cached between calls.

use std::sync::Arc;

use crate::error::Result;
use crate::models::RankRequest;
use crate::rank::rank;
use crate::scan::{ScanOptions, scan_files};
use crate::storage::FileSource;
use crate::table::WordFrequencyTable;

/// Aggregate word statistics over a set of stored files.
pub trait WordStatistics {
    /// Number of distinct tokens across all files.
    fn word_count(&self) -> Result<usize>;

    /// The most frequent words, listed in the requested order.
    fn top_words(&self, request: RankRequest) -> Result<Vec<String>>;

    /// Like [`top_words`](Self::top_words), from unvalidated caller input.
    ///
    /// An invalid order or a negative limit is rejected before any file is read.
    fn top_words_from(&self, limit: i64, order: &str) -> Result<Vec<String>> {
        let request = RankRequest::parse(limit, order)?;
        self.top_words(request)
    }
}

/// [`WordStatistics`] computed by scanning a [`FileSource`].
pub struct WordStats<S: ?Sized> {
    source: Arc<S>,
    options: ScanOptions,
}

impl<S> WordStats<S>
where
    S: FileSource + ?Sized + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: Arc<S>, options: ScanOptions) -> Self {
        Self { source, options }
    }

    /// Scan the source and return the combined table.
    pub fn combined_table(&self) -> Result<WordFrequencyTable> {
        scan_files(&self.source, self.options)
    }
}

impl<S> Clone for WordStats<S>
where
    S: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            options: self.options,
        }
    }
}

impl<S> WordStatistics for WordStats<S>
where
    S: FileSource + ?Sized + 'static,
{
    fn word_count(&self) -> Result<usize> {
        Ok(self.combined_table()?.len())
    }

    fn top_words(&self, request: RankRequest) -> Result<Vec<String>> {
        let table = self.combined_table()?;
        Ok(rank(&table, request))
    }
}
