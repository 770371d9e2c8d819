//! Sequential scan loop.
//!
//! Lists the source once, then loads, classifies and (when flagged) marks each
//! entry in turn. Failures are confined to the entry that caused them; only a
//! failed listing aborts the run.

use tracing::{debug, info, warn};

use crate::classifier::ExtremesClassifier;
use crate::domain::{
    marked_file_name, FileOutcome, ImageEntry, MarkOutcome, ScanError, ScanSummary,
};
use crate::ports::{FileMarker, ImageSource, ProgressEvent, ProgressSink};

/// Behaviour switches for a scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Report flagged files without renaming them.
    pub dry_run: bool,
}

/// Runs the classifier over every entry of an image source.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    classifier: ExtremesClassifier,
    options: ScanOptions,
}

impl Scanner {
    /// Creates a scanner.
    #[must_use]
    pub const fn new(classifier: ExtremesClassifier, options: ScanOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    /// Scan every entry of `source`, marking flagged files through `marker`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the source cannot be listed. Per-file failures
    /// are reported through `progress` and counted in the summary.
    pub fn run(
        &self,
        source: &dyn ImageSource,
        marker: &dyn FileMarker,
        progress: &dyn ProgressSink,
    ) -> Result<ScanSummary, ScanError> {
        progress.on_event(ProgressEvent::Started {
            source: source.describe(),
        });

        let entries = source.entries()?;
        let total = entries.len();
        info!("Found {total} entries in {}", source.describe());
        progress.on_event(ProgressEvent::Listed { total });

        let mut summary = ScanSummary::default();

        for (i, entry) in entries.iter().enumerate() {
            let name = entry.name().into_owned();
            progress.on_event(ProgressEvent::FileStarted {
                name: name.clone(),
                index: i + 1,
                total,
            });

            let outcome = self.process(entry, source, marker);
            summary.record(&outcome);

            progress.on_event(ProgressEvent::FileFinished {
                name,
                outcome: &outcome,
            });
        }

        progress.on_event(ProgressEvent::Finished { summary });

        Ok(summary)
    }

    /// Load, classify and possibly mark a single entry.
    fn process(
        &self,
        entry: &ImageEntry,
        source: &dyn ImageSource,
        marker: &dyn FileMarker,
    ) -> FileOutcome {
        let sample = match source.load(entry) {
            Ok(sample) => sample,
            Err(error) => {
                warn!("Failed to load {}: {error}", entry.path.display());
                return FileOutcome::Failed { error };
            }
        };

        let classification = self.classifier.classify(&sample);
        debug!(
            "{}: near-black {:.3}%, near-white {:.3}%",
            entry.path.display(),
            classification.near_black_percentage,
            classification.near_white_percentage
        );

        if !classification.has_extreme {
            return FileOutcome::Clean { classification };
        }

        FileOutcome::Flagged {
            classification,
            mark: self.mark(entry, marker),
        }
    }

    fn mark(&self, entry: &ImageEntry, marker: &dyn FileMarker) -> MarkOutcome {
        let Some(marked_name) = marked_file_name(&entry.file_name) else {
            debug!("{} is already marked", entry.path.display());
            return MarkOutcome::AlreadyMarked;
        };

        if self.options.dry_run {
            return MarkOutcome::Skipped {
                would_be: entry.path.with_file_name(&marked_name),
            };
        }

        match marker.mark(entry, &marked_name) {
            Ok(to) => MarkOutcome::Renamed { to },
            Err(error) => {
                warn!("{error}");
                MarkOutcome::Failed { error }
            }
        }
    }
}
