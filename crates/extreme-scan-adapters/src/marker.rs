//! Filesystem adapter for marking flagged files.
//!
//! Marking is a single `rename` within the file's own directory, so the file
//! is never present under both names and keeps all of its metadata.

use std::ffi::OsStr;
use std::path::PathBuf;

use extreme_scan_core::{FileMarker, ImageEntry, MarkError};
use tracing::info;

/// Renames flagged files in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMarker;

impl FsMarker {
    /// Creates a filesystem marker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileMarker for FsMarker {
    fn mark(&self, entry: &ImageEntry, marked_name: &OsStr) -> Result<PathBuf, MarkError> {
        let from = entry.path.clone();
        let to = entry.path.with_file_name(marked_name);

        // `rename` silently replaces an existing target on Unix.
        match to.try_exists() {
            Ok(false) => {}
            Ok(true) => return Err(MarkError::TargetExists { from, to }),
            Err(source) => return Err(MarkError::from_io(from, to, source)),
        }

        std::fs::rename(&from, &to)
            .map_err(|source| MarkError::from_io(from.clone(), to.clone(), source))?;

        info!("Renamed {} to {}", from.display(), to.display());
        Ok(to)
    }
}
