//! # wordstore-core
//!
//! A small file store with a concurrent word statistics engine.
//!
//! Files live in a directory managed by a [`DirectoryStore`]. Statistics are
//! computed on demand by scanning every stored file in parallel, merging the
//! per-file word counts, and ranking the result.
//!
//! ## Features
//!
//! - **Fan-out scanning**: one worker per file, partial tables merged by the
//!   caller as they arrive.
//! - **First failure wins**: a single unreadable file fails the whole request;
//!   partial statistics are never returned.
//! - **Deterministic ranking**: equal counts always break ties the same way.
//! - **Validated input**: order and limit are checked before any file is read.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wordstore_core::prelude::*;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = Arc::new(DirectoryStore::open(dir.path()).unwrap());
//! store
//!     .add_files(&[
//!         FileUpload::new("a.txt", "the cat sat"),
//!         FileUpload::new("b.txt", "the dog sat on the mat"),
//!     ])
//!     .unwrap();
//!
//! let stats = WordStats::new(store);
//! assert_eq!(stats.word_count().unwrap(), 6);
//! assert_eq!(stats.top_words_from(2, "dsc").unwrap(), ["the", "sat"]);
//! ```

pub mod error;
pub mod models;
pub mod rank;
pub mod scan;
pub mod stats;
pub mod storage;
pub mod table;
pub mod tokenize;

// Re-export commonly used types at the crate root
pub use error::{Result, StatsError, StoreError, StoreResult};
pub use models::{
    FileIdentifier, FileUpload, Order, RankRequest, RemoveFileRequest, WordCountResponse,
    WordFrequencyRequest, WordFrequencyResponse,
};
pub use scan::ScanOptions;
pub use stats::{WordStatistics, WordStats};
pub use storage::{DirectoryStore, FileSource, FileStore};
pub use table::WordFrequencyTable;

/// Prelude module for convenient imports.
///
/// ```
/// use wordstore_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, StatsError, StoreError};
    pub use crate::models::*;
    pub use crate::rank::rank;
    pub use crate::scan::{ScanOptions, scan_files};
    pub use crate::stats::{WordStatistics, WordStats};
    pub use crate::storage::{DirectoryStore, FileSource, FileStore};
    pub use crate::table::WordFrequencyTable;
    pub use crate::tokenize::{tokenize, tokenize_str};
}
