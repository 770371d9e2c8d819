//! Mock implementations of core port traits.

use std::cell::RefCell;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use extreme_scan_core::domain::{
    FileOutcome, ImageEntry, ImageSample, MarkError, MarkOutcome, ScanError, ScanSummary,
};
use extreme_scan_core::ports::{FileMarker, ImageSource, ProgressEvent, ProgressSink};
use image::DynamicImage;

const MOCK_ROOT: &str = "mock://";

/// Mock implementation of `ImageSource` for testing.
///
/// Yields entries in insertion order; each entry either decodes to a
/// pre-built image or fails to load.
pub struct MockImageSource {
    entries: Vec<(ImageEntry, Option<DynamicImage>)>,
    list_error: bool,
    loads: RefCell<usize>,
}

impl MockImageSource {
    /// Creates an empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            list_error: false,
            loads: RefCell::new(0),
        }
    }

    /// Creates a source whose listing fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            list_error: true,
            ..Self::new()
        }
    }

    /// Adds an entry that loads as `image`.
    #[must_use]
    pub fn with_image(mut self, name: &str, image: DynamicImage) -> Self {
        self.entries
            .push((ImageEntry::new(Path::new(MOCK_ROOT).join(name)), Some(image)));
        self
    }

    /// Adds an entry that fails to decode.
    #[must_use]
    pub fn with_corrupt(mut self, name: &str) -> Self {
        self.entries
            .push((ImageEntry::new(Path::new(MOCK_ROOT).join(name)), None));
        self
    }

    /// Returns the number of `load` calls made.
    #[must_use]
    pub fn load_count(&self) -> usize {
        *self.loads.borrow()
    }
}

impl Default for MockImageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource for MockImageSource {
    fn describe(&self) -> String {
        MOCK_ROOT.to_string()
    }

    fn entries(&self) -> Result<Vec<ImageEntry>, ScanError> {
        if self.list_error {
            return Err(ScanError::ReadDir {
                path: PathBuf::from(MOCK_ROOT),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        Ok(self.entries.iter().map(|(entry, _)| entry.clone()).collect())
    }

    fn load(&self, entry: &ImageEntry) -> Result<ImageSample, ScanError> {
        *self.loads.borrow_mut() += 1;
        let found = self.entries.iter().find(|(e, _)| e == entry);
        match found {
            Some((_, Some(image))) => Ok(ImageSample::new(entry.path.clone(), image.clone())),
            _ => Err(ScanError::Decode {
                path: entry.path.clone(),
                source: image::ImageError::IoError(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "corrupt mock image",
                )),
            }),
        }
    }
}

/// How a [`MockMarker`] responds to `mark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerBehaviour {
    Succeed,
    PermissionDenied,
    TargetExists,
}

/// Mock implementation of `FileMarker` for testing.
///
/// Records every rename request for later assertions.
pub struct MockMarker {
    behaviour: MarkerBehaviour,
    renames: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl MockMarker {
    /// Creates a marker whose renames succeed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_behaviour(MarkerBehaviour::Succeed)
    }

    /// Creates a marker that fails every rename with a permission error.
    #[must_use]
    pub fn permission_denied() -> Self {
        Self::with_behaviour(MarkerBehaviour::PermissionDenied)
    }

    /// Creates a marker that reports every target as already existing.
    #[must_use]
    pub fn target_exists() -> Self {
        Self::with_behaviour(MarkerBehaviour::TargetExists)
    }

    fn with_behaviour(behaviour: MarkerBehaviour) -> Self {
        Self {
            behaviour,
            renames: RefCell::new(Vec::new()),
        }
    }

    /// Returns all requested renames as `(from, to)` pairs.
    #[must_use]
    pub fn renames(&self) -> Vec<(PathBuf, PathBuf)> {
        self.renames.borrow().clone()
    }
}

impl Default for MockMarker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileMarker for MockMarker {
    fn mark(&self, entry: &ImageEntry, marked_name: &OsStr) -> Result<PathBuf, MarkError> {
        let from = entry.path.clone();
        let to = entry.path.with_file_name(marked_name);
        self.renames.borrow_mut().push((from.clone(), to.clone()));

        match self.behaviour {
            MarkerBehaviour::Succeed => Ok(to),
            MarkerBehaviour::PermissionDenied => Err(MarkError::from_io(
                from,
                to,
                io::Error::from(io::ErrorKind::PermissionDenied),
            )),
            MarkerBehaviour::TargetExists => Err(MarkError::TargetExists { from, to }),
        }
    }
}

/// Owned copy of a [`ProgressEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedEvent {
    /// `ProgressEvent::Started`.
    Started {
        /// Location being scanned.
        source: String,
    },
    /// `ProgressEvent::Listed`.
    Listed {
        /// Entries to process.
        total: usize,
    },
    /// `ProgressEvent::FileStarted`.
    FileStarted {
        /// File name.
        name: String,
        /// 1-based position.
        index: usize,
        /// Batch size.
        total: usize,
    },
    /// `ProgressEvent::FileFinished`.
    FileFinished {
        /// File name.
        name: String,
        /// Whether the file was flagged.
        flagged: bool,
        /// Whether the file failed to load.
        failed: bool,
        /// New path, if the file was renamed.
        renamed_to: Option<PathBuf>,
    },
    /// `ProgressEvent::Finished`.
    Finished {
        /// Run totals.
        summary: ScanSummary,
    },
}

/// Mock implementation of `ProgressSink` for testing.
///
/// Captures events for later assertions.
pub struct MockProgressSink {
    events: RefCell<Vec<RecordedEvent>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Returns the names of files in the order they were started.
    #[must_use]
    pub fn started_names(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RecordedEvent::FileStarted { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Returns the names of flagged files.
    #[must_use]
    pub fn flagged_names(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RecordedEvent::FileFinished {
                    name, flagged: true, ..
                } => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Returns the summary from the `Finished` event, if any.
    #[must_use]
    pub fn finished_summary(&self) -> Option<ScanSummary> {
        self.events().iter().find_map(|e| match e {
            RecordedEvent::Finished { summary } => Some(*summary),
            _ => None,
        })
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent<'_>) {
        let recorded = match event {
            ProgressEvent::Started { source } => RecordedEvent::Started { source },
            ProgressEvent::Listed { total } => RecordedEvent::Listed { total },
            ProgressEvent::FileStarted { name, index, total } => {
                RecordedEvent::FileStarted { name, index, total }
            }
            ProgressEvent::FileFinished { name, outcome } => {
                let renamed_to = match outcome {
                    FileOutcome::Flagged {
                        mark: MarkOutcome::Renamed { to },
                        ..
                    } => Some(to.clone()),
                    _ => None,
                };
                RecordedEvent::FileFinished {
                    name,
                    flagged: matches!(outcome, FileOutcome::Flagged { .. }),
                    failed: matches!(outcome, FileOutcome::Failed { .. }),
                    renamed_to,
                }
            }
            ProgressEvent::Finished { summary } => RecordedEvent::Finished { summary },
        };
        self.events.borrow_mut().push(recorded);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::SyntheticImageBuilder;

    #[test]
    fn test_mock_image_source_empty() {
        let source = MockImageSource::new();
        assert!(source.entries().unwrap().is_empty());
        assert_eq!(source.load_count(), 0);
    }

    #[test]
    fn test_mock_image_source_loads_images() {
        let source = MockImageSource::new()
            .with_image("a.png", SyntheticImageBuilder::black(2, 2))
            .with_corrupt("b.png");

        let entries = source.entries().unwrap();
        assert_eq!(entries.len(), 2);

        let sample = source.load(&entries[0]).unwrap();
        assert_eq!(sample.width, 2);
        assert!(source.load(&entries[1]).is_err());
        assert_eq!(source.load_count(), 2);
    }

    #[test]
    fn test_mock_image_source_failing() {
        assert!(MockImageSource::failing().entries().is_err());
    }

    #[test]
    fn test_mock_marker_records() {
        let marker = MockMarker::new();
        let entry = ImageEntry::new("mock://a.png");

        let to = marker.mark(&entry, OsStr::new("x-a.png")).unwrap();
        assert_eq!(to, PathBuf::from("mock://x-a.png"));
        assert_eq!(marker.renames().len(), 1);
    }

    #[test]
    fn test_mock_marker_permission_denied() {
        let marker = MockMarker::permission_denied();
        let entry = ImageEntry::new("mock://a.png");

        let err = marker.mark(&entry, OsStr::new("x-a.png")).unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_mock_progress_sink() {
        let sink = MockProgressSink::new();
        sink.on_event(ProgressEvent::Listed { total: 1 });
        sink.on_event(ProgressEvent::FileStarted {
            name: "a.png".into(),
            index: 1,
            total: 1,
        });
        sink.on_event(ProgressEvent::Finished {
            summary: ScanSummary::default(),
        });

        assert_eq!(sink.started_names(), vec!["a.png".to_string()]);
        assert_eq!(sink.finished_summary(), Some(ScanSummary::default()));
    }
}
