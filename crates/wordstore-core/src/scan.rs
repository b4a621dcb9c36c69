//! Fan-out scanner.
//!
//! Every stored file is tokenized on its own worker thread. Each worker owns
//! its file handle and its partial table and reports exactly once over a
//! shared completion channel. The calling thread is the only writer of the
//! combined table and merges partial tables as they arrive.
//!
//! The first failure wins: as soon as a worker reports an error the scan
//! returns it, and results still in flight are dropped unread. Workers that
//! outlive the scan close their handles when they finish.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::error::{Result, StatsError, StoreError};
use crate::models::FileIdentifier;
use crate::storage::FileSource;
use crate::table::WordFrequencyTable;
use crate::tokenize::tokenize;

/// Tuning for a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Give up with [`StatsError::ScanTimeout`] if the scan runs longer than this.
    pub deadline: Option<Duration>,
}

impl ScanOptions {
    pub fn with_deadline(deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }
}

type Outcome = Result<WordFrequencyTable>;

/// Scan every file `source` lists and merge the partial tables.
///
/// An empty file list gives an empty table.
pub fn scan_files<S>(source: &Arc<S>, options: ScanOptions) -> Result<WordFrequencyTable>
where
    S: FileSource + ?Sized + 'static,
{
    let files = source.list_files()?;
    if files.is_empty() {
        return Ok(WordFrequencyTable::new());
    }

    let started = Instant::now();
    let deadline = options.deadline.map(|d| started + d);

    // Capacity for every result, so a worker never blocks on send.
    let (tx, rx) = crossbeam_channel::bounded::<Outcome>(files.len());

    for (index, file) in files.iter().enumerate() {
        let tx = tx.clone();
        let source = Arc::clone(source);
        let worker_file = file.clone();
        thread::Builder::new()
            .name(format!("wordstore-scan-{index}"))
            .spawn(move || {
                let outcome = scan_file(source.as_ref(), &worker_file);
                // The receiver is gone if another file already failed.
                let _ = tx.send(outcome);
            })
            .map_err(|source| StatsError::WorkerSpawn {
                file: file.clone(),
                source,
            })?;
    }
    drop(tx);

    let mut combined = WordFrequencyTable::new();
    let mut pending = files.len();
    while pending > 0 {
        match next_outcome(&rx, deadline) {
            Ok(Ok(partial)) => combined.merge(partial),
            Ok(Err(err)) => return Err(err),
            Err(RecvTimeoutError::Timeout) => {
                return Err(StatsError::ScanTimeout {
                    elapsed: started.elapsed(),
                    pending,
                });
            }
            Err(RecvTimeoutError::Disconnected) => return Err(StatsError::WorkerLost),
        }
        pending -= 1;
    }

    Ok(combined)
}

/// Tokenize one stored file.
pub fn scan_file<S>(source: &S, file: &FileIdentifier) -> Result<WordFrequencyTable>
where
    S: FileSource + ?Sized,
{
    let reader = source
        .open_for_read(file)
        .map_err(|source| StatsError::Scan {
            file: file.clone(),
            source,
        })?;

    tokenize(reader).map_err(|e| StatsError::Scan {
        file: file.clone(),
        source: StoreError::io(file.to_string(), e),
    })
}

fn next_outcome(
    rx: &Receiver<Outcome>,
    deadline: Option<Instant>,
) -> std::result::Result<Outcome, RecvTimeoutError> {
    match deadline {
        Some(deadline) => rx.recv_deadline(deadline),
        None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
    }
}
