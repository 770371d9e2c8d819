//! Port for marking flagged files.

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::domain::{ImageEntry, MarkError};

/// Port for moving a flagged file to its marked name.
pub trait FileMarker {
    /// Renames `entry` to `marked_name` in the same directory.
    ///
    /// Returns the new path on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the target exists or the rename fails.
    fn mark(&self, entry: &ImageEntry, marked_name: &OsStr) -> Result<PathBuf, MarkError>;
}
