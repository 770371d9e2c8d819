//! Extreme Scan Core - Domain logic for the extreme-pixel scanner
//!
//! This crate contains the domain types, the near-black/near-white pixel
//! classifier, the port traits and the sequential scan loop that ties them
//! together.

pub mod classifier;
pub mod domain;
pub mod ports;
pub mod scan;

pub use classifier::{ExtremesClassifier, ExtremesConfig, PixelCounts};
pub use domain::{
    marked_file_name, FileOutcome, ImageEntry, ImageSample, MarkError, MarkOutcome,
    PixelClassification, ScanError, ScanSummary, MARKER_PREFIX,
};
pub use ports::{FileMarker, ImageSource, ProgressEvent, ProgressSink};
pub use scan::{ScanOptions, Scanner};
