//! Per-file outcomes and the run summary.

use std::path::PathBuf;

use super::{MarkError, PixelClassification, ScanError};

/// What happened to a flagged file's name.
#[derive(Debug)]
pub enum MarkOutcome {
    /// The file was renamed to carry the marker prefix.
    Renamed {
        /// New path of the file.
        to: PathBuf,
    },
    /// The file name already starts with the marker prefix.
    AlreadyMarked,
    /// Dry run: the file would have been renamed.
    Skipped {
        /// Path the file would have been moved to.
        would_be: PathBuf,
    },
    /// The rename failed; the file keeps its original name.
    Failed {
        /// Why the rename failed.
        error: MarkError,
    },
}

/// Result of processing a single file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Below the threshold.
    Clean {
        /// Classification of the image.
        classification: PixelClassification,
    },
    /// Above the threshold.
    Flagged {
        /// Classification of the image.
        classification: PixelClassification,
        /// What happened to the file name.
        mark: MarkOutcome,
    },
    /// The file could not be loaded.
    Failed {
        /// Why loading failed.
        error: ScanError,
    },
}

impl FileOutcome {
    /// Whether this file counts towards the problem total.
    #[must_use]
    pub const fn is_problem(&self) -> bool {
        !matches!(self, Self::Clean { .. })
    }
}

/// Totals accumulated over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files examined.
    pub total: usize,
    /// Files above the threshold.
    pub flagged: usize,
    /// Files that failed to load.
    pub errored: usize,
    /// Flagged files renamed during this run.
    pub renamed: usize,
    /// Flagged files whose rename failed.
    pub rename_failures: usize,
}

impl ScanSummary {
    /// Flagged plus errored files.
    #[must_use]
    pub const fn problem_files(&self) -> usize {
        self.flagged + self.errored
    }

    /// Folds one file outcome into the totals.
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total += 1;
        match outcome {
            FileOutcome::Clean { .. } => {}
            FileOutcome::Flagged { mark, .. } => {
                self.flagged += 1;
                match mark {
                    MarkOutcome::Renamed { .. } => self.renamed += 1,
                    MarkOutcome::Failed { .. } => self.rename_failures += 1,
                    MarkOutcome::AlreadyMarked | MarkOutcome::Skipped { .. } => {}
                }
            }
            FileOutcome::Failed { .. } => self.errored += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(has_extreme: bool) -> PixelClassification {
        PixelClassification {
            pure_black_percentage: 0.0,
            near_black_percentage: 0.0,
            pure_white_percentage: 0.0,
            near_white_percentage: 0.0,
            has_extreme,
        }
    }

    #[test]
    fn test_summary_counts_problems() {
        let mut summary = ScanSummary::default();
        summary.record(&FileOutcome::Clean {
            classification: classification(false),
        });
        summary.record(&FileOutcome::Flagged {
            classification: classification(true),
            mark: MarkOutcome::Renamed {
                to: PathBuf::from("x-a.png"),
            },
        });
        summary.record(&FileOutcome::Flagged {
            classification: classification(true),
            mark: MarkOutcome::AlreadyMarked,
        });
        summary.record(&FileOutcome::Failed {
            error: ScanError::EmptyImage {
                path: PathBuf::from("c.png"),
            },
        });

        assert_eq!(summary.total, 4);
        assert_eq!(summary.flagged, 2);
        assert_eq!(summary.errored, 1);
        assert_eq!(summary.renamed, 1);
        assert_eq!(summary.problem_files(), 3);
    }

    #[test]
    fn test_rename_failure_still_counts_as_flagged() {
        let mut summary = ScanSummary::default();
        summary.record(&FileOutcome::Flagged {
            classification: classification(true),
            mark: MarkOutcome::Failed {
                error: MarkError::TargetExists {
                    from: PathBuf::from("a.png"),
                    to: PathBuf::from("x-a.png"),
                },
            },
        });

        assert_eq!(summary.flagged, 1);
        assert_eq!(summary.rename_failures, 1);
        assert_eq!(summary.renamed, 0);
        assert_eq!(summary.problem_files(), 1);
    }
}
