//! Synthetic image builders for testing.

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Builder for creating synthetic test images.
///
/// Every builder returns a [`DynamicImage`]; use [`Self::save_png`] to put
/// one on disk.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    /// Creates an image where every pixel has the given RGB value.
    #[must_use]
    pub fn uniform(width: u32, height: u32, value: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(value)))
    }

    /// Creates an all-(0,0,0) image.
    #[must_use]
    pub fn black(width: u32, height: u32) -> DynamicImage {
        Self::uniform(width, height, [0, 0, 0])
    }

    /// Creates an all-(255,255,255) image.
    #[must_use]
    pub fn white(width: u32, height: u32) -> DynamicImage {
        Self::uniform(width, height, [255, 255, 255])
    }

    /// Creates a mid-gray image with no extreme pixels.
    #[must_use]
    pub fn mid_gray(width: u32, height: u32) -> DynamicImage {
        Self::uniform(width, height, [128, 128, 128])
    }

    /// Creates a mid-gray image whose first `count` pixels (row-major) are `value`.
    ///
    /// A 10×10 image with `count = 6` has exactly 6% extreme pixels.
    #[must_use]
    pub fn with_extreme_pixels(width: u32, height: u32, count: u32, value: [u8; 3]) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            if y * width + x < count {
                Rgb(value)
            } else {
                Rgb([128, 128, 128])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    /// Adds a fully opaque alpha channel to an RGB image.
    #[must_use]
    pub fn with_opaque_alpha(image: &DynamicImage) -> DynamicImage {
        let rgb = image.to_rgb8();
        let rgba = RgbaImage::from_fn(rgb.width(), rgb.height(), |x, y| {
            let [r, g, b] = rgb.get_pixel(x, y).0;
            Rgba([r, g, b, 255])
        });
        DynamicImage::ImageRgba8(rgba)
    }

    /// Writes `image` as PNG to `dir/name`, returning the path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[allow(clippy::expect_used)]
    pub fn save_png(dir: &Path, name: &str, image: &DynamicImage) -> PathBuf {
        let path = dir.join(name);
        image
            .save_with_format(&path, image::ImageFormat::Png)
            .expect("write synthetic PNG");
        path
    }
}
