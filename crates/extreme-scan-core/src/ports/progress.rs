//! Progress reporting port for console integration.

use crate::domain::{FileOutcome, ScanSummary};

/// Events emitted during a scan.
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// A scan is about to list its source.
    Started {
        /// Location being scanned.
        source: String,
    },
    /// The listing is complete.
    Listed {
        /// Number of entries to process.
        total: usize,
    },
    /// Processing started for an entry.
    FileStarted {
        /// Display name of the file.
        name: String,
        /// Position in the batch (1-based).
        index: usize,
        /// Entries in the batch.
        total: usize,
    },
    /// Processing finished for an entry.
    FileFinished {
        /// Display name of the file.
        name: String,
        /// What happened.
        outcome: &'a FileOutcome,
    },
    /// All entries have been processed.
    Finished {
        /// Run totals.
        summary: ScanSummary,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent<'_>);
}
