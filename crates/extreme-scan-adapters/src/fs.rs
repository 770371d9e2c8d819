//! Filesystem adapter for listing and loading images.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use extreme_scan_core::{ImageEntry, ImageSample, ImageSource, ScanError};
use image::{ImageFormat, ImageReader};
use tracing::{debug, warn};

/// Extension of the only supported container, lowercase and without the dot.
const PNG_EXTENSION: &str = "png";

/// Image source over the PNG files directly inside one directory.
#[derive(Debug, Clone)]
pub struct FsImageSource {
    dir: PathBuf,
}

impl FsImageSource {
    /// Opens `dir` for scanning.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotADirectory`] if `dir` does not exist or is not a
    /// directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ScanError::NotADirectory { path: dir });
        }
        Ok(Self { dir })
    }
}

impl ImageSource for FsImageSource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn entries(&self) -> Result<Vec<ImageEntry>, ScanError> {
        let read_dir = std::fs::read_dir(&self.dir).map_err(|source| ScanError::ReadDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {e}", self.dir.display());
                    continue;
                }
            };

            let path = dir_entry.path();
            if !is_png_name(&path) {
                continue;
            }
            if !path.is_file() {
                debug!("Skipping non-file {}", path.display());
                continue;
            }
            entries.push(ImageEntry::new(path));
        }

        debug!("Found {} PNG files in {}", entries.len(), self.dir.display());
        Ok(entries)
    }

    fn load(&self, entry: &ImageEntry) -> Result<ImageSample, ScanError> {
        load_png(&entry.path)
    }
}

/// Checks if a path's file name ends with `.png`, ignoring case.
fn is_png_name(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PNG_EXTENSION))
}

/// Decodes a PNG file regardless of how its extension is cased.
fn load_png(path: &Path) -> Result<ImageSample, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ImageReader::new(BufReader::new(file));
    reader.set_format(ImageFormat::Png);
    let image = reader.decode().map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sample = ImageSample::new(path, image);
    if sample.pixel_count() == 0 {
        return Err(ScanError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    Ok(sample)
}
