//! Core domain types for extreme-pixel scanning.

mod classification;
mod error;
mod outcome;
mod sample;

pub use classification::PixelClassification;
pub use error::{MarkError, ScanError};
pub use outcome::{FileOutcome, MarkOutcome, ScanSummary};
pub use sample::{marked_file_name, ImageEntry, ImageSample, MARKER_PREFIX};
