//! Image source port for listing and loading images.

use crate::domain::{ImageEntry, ImageSample, ScanError};

/// Port for enumerating and loading images.
pub trait ImageSource {
    /// Human-readable location of the source, used in progress output.
    fn describe(&self) -> String;

    /// Lists the entries to scan, in the order they should be processed.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing itself cannot be produced.
    fn entries(&self) -> Result<Vec<ImageEntry>, ScanError>;

    /// Loads one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded.
    fn load(&self, entry: &ImageEntry) -> Result<ImageSample, ScanError>;
}
