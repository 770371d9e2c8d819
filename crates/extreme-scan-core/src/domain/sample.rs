//! Image entries and loaded samples.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Prefix prepended to the names of flagged files.
pub const MARKER_PREFIX: &str = "x-";

/// A directory entry selected for scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Full path to the file.
    pub path: PathBuf,
    /// Bare file name, as listed by the directory.
    pub file_name: OsString,
}

impl ImageEntry {
    /// Creates an entry from a path, taking the file name from its last component.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path.file_name().map(OsStr::to_os_string).unwrap_or_default();
        Self { path, file_name }
    }

    /// File name for display.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        self.file_name.to_string_lossy()
    }
}

/// Returns the marked name for `file_name`, or `None` if it is already marked.
#[must_use]
pub fn marked_file_name(file_name: &OsStr) -> Option<OsString> {
    if file_name.to_string_lossy().starts_with(MARKER_PREFIX) {
        return None;
    }
    let mut marked = OsString::from(MARKER_PREFIX);
    marked.push(file_name);
    Some(marked)
}

/// A decoded image held in memory for classification.
#[derive(Debug, Clone)]
pub struct ImageSample {
    /// Path the image was loaded from.
    pub path: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Decoded image data.
    pub image: image::DynamicImage,
}

impl ImageSample {
    /// Wraps a decoded image, recording its dimensions.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, image: image::DynamicImage) -> Self {
        Self {
            path: path.into(),
            width: image.width(),
            height: image.height(),
            image,
        }
    }

    /// Total number of pixels, independent of channel count.
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_file_name_prepends_prefix() {
        let marked = marked_file_name(OsStr::new("a.png"));
        assert_eq!(marked, Some(OsString::from("x-a.png")));
    }

    #[test]
    fn test_marked_file_name_skips_marked() {
        assert_eq!(marked_file_name(OsStr::new("x-a.png")), None);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(
            marked_file_name(OsStr::new("X-a.png")),
            Some(OsString::from("x-X-a.png"))
        );
    }

    #[test]
    fn test_entry_name_from_path() {
        let entry = ImageEntry::new("/tmp/scan/photo.PNG");
        assert_eq!(entry.name(), "photo.PNG");
        assert_eq!(entry.file_name, OsString::from("photo.PNG"));
    }

    #[test]
    fn test_pixel_count_ignores_channels() {
        let rgb = ImageSample::new("a.png", image::DynamicImage::new_rgb8(4, 3));
        let rgba = ImageSample::new("b.png", image::DynamicImage::new_rgba8(4, 3));
        assert_eq!(rgb.pixel_count(), 12);
        assert_eq!(rgba.pixel_count(), 12);
    }
}
