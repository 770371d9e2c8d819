//! Extreme Scan Adapters - Filesystem adapters for extreme-scan.
//!
//! This crate provides adapters for:
//! - Listing and decoding PNG files in a directory
//! - Marking flagged files by renaming them in place

pub mod fs;
pub mod marker;

pub use fs::FsImageSource;
pub use marker::FsMarker;
