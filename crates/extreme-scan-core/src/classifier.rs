//! Extreme-pixel classifier.
//!
//! Counts pixels whose three colour channels all sit at or near the ends of
//! the 8-bit range and flags images where either end dominates.

use crate::domain::{ImageSample, PixelClassification};

/// Channels strictly below this value are near-black.
pub const NEAR_BLACK_LIMIT: u8 = 10;
/// Channels strictly above this value are near-white.
pub const NEAR_WHITE_LIMIT: u8 = 245;
/// Default flag threshold, in percent.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Configuration for extreme-pixel classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremesConfig {
    /// Percentage of near-black or near-white pixels above which an image is flagged.
    pub threshold: f64,
}

impl Default for ExtremesConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Raw extreme-pixel counts for one image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelCounts {
    /// Pixels equal to (0, 0, 0).
    pub pure_black: u64,
    /// Pixels with every channel below [`NEAR_BLACK_LIMIT`].
    pub near_black: u64,
    /// Pixels equal to (255, 255, 255).
    pub pure_white: u64,
    /// Pixels with every channel above [`NEAR_WHITE_LIMIT`].
    pub near_white: u64,
    /// Width × height.
    pub total: u64,
}

impl PixelCounts {
    /// Count extreme pixels in an RGB image.
    #[must_use]
    pub fn from_rgb(image: &image::RgbImage) -> Self {
        let mut counts = Self {
            total: u64::from(image.width()) * u64::from(image.height()),
            ..Self::default()
        };

        for pixel in image.pixels() {
            let [r, g, b] = pixel.0;
            if r < NEAR_BLACK_LIMIT && g < NEAR_BLACK_LIMIT && b < NEAR_BLACK_LIMIT {
                counts.near_black += 1;
                if r == 0 && g == 0 && b == 0 {
                    counts.pure_black += 1;
                }
            } else if r > NEAR_WHITE_LIMIT && g > NEAR_WHITE_LIMIT && b > NEAR_WHITE_LIMIT {
                counts.near_white += 1;
                if r == u8::MAX && g == u8::MAX && b == u8::MAX {
                    counts.pure_white += 1;
                }
            }
        }

        counts
    }

    /// Percentage of `count` over the total pixel count.
    ///
    /// Whole-number percentages come out exact, so a file sitting exactly on
    /// the threshold is never flagged.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn percentage(&self, count: u64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        // Multiply first so whole-number percentages stay exact.
        (count as f64 * 100.0) / self.total as f64
    }
}

/// Classifies images by their share of extreme pixels.
#[derive(Debug, Clone, Default)]
pub struct ExtremesClassifier {
    config: ExtremesConfig,
}

impl ExtremesClassifier {
    /// Creates a classifier with the given configuration.
    #[must_use]
    pub const fn new(config: ExtremesConfig) -> Self {
        Self { config }
    }

    /// Classify an image sample.
    ///
    /// Any alpha channel is discarded; grayscale and 16-bit samples are
    /// normalised to 8-bit RGB first.
    #[must_use]
    pub fn classify(&self, sample: &ImageSample) -> PixelClassification {
        let rgb = sample.image.to_rgb8();
        self.classify_counts(&PixelCounts::from_rgb(&rgb))
    }

    /// Turn raw counts into a classification.
    #[must_use]
    pub fn classify_counts(&self, counts: &PixelCounts) -> PixelClassification {
        let near_black_percentage = counts.percentage(counts.near_black);
        let near_white_percentage = counts.percentage(counts.near_white);

        PixelClassification {
            pure_black_percentage: counts.percentage(counts.pure_black),
            near_black_percentage,
            pure_white_percentage: counts.percentage(counts.pure_white),
            near_white_percentage,
            has_extreme: near_black_percentage > self.config.threshold
                || near_white_percentage > self.config.threshold,
        }
    }
}
