//! Typed failures for listing, loading and marking files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to list a directory or load an image from it.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan target does not exist or is not a directory.
    #[error("{} is not a valid directory", path.display())]
    NotADirectory {
        /// Path given as the scan target.
        path: PathBuf,
    },
    /// The directory listing could not be read.
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The image file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// File being opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file is not a decodable PNG.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        /// File being decoded.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },
    /// The image decoded to zero pixels.
    #[error("{} contains no pixels", path.display())]
    EmptyImage {
        /// File that decoded empty.
        path: PathBuf,
    },
}

/// Failure to move a flagged file to its marked name.
#[derive(Debug, Error)]
pub enum MarkError {
    /// The process lacks permission to rename the file.
    #[error("permission denied renaming {} to {}", from.display(), to.display())]
    PermissionDenied {
        /// Original path.
        from: PathBuf,
        /// Marked path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A file with the marked name already exists.
    #[error("{} already exists", to.display())]
    TargetExists {
        /// Original path.
        from: PathBuf,
        /// Marked path.
        to: PathBuf,
    },
    /// Any other rename failure.
    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Io {
        /// Original path.
        from: PathBuf,
        /// Marked path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl MarkError {
    /// Classifies an I/O error raised while renaming `from` to `to`.
    #[must_use]
    pub fn from_io(from: PathBuf, to: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { from, to, source },
            io::ErrorKind::AlreadyExists => Self::TargetExists { from, to },
            _ => Self::Io { from, to, source },
        }
    }

    /// Whether this failure was caused by missing permissions.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
