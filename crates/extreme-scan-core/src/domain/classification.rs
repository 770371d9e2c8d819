//! Pixel classification result.

/// Share of extreme pixels in one image, as percentages of width × height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelClassification {
    /// Pixels with all channels exactly 0.
    pub pure_black_percentage: f64,
    /// Pixels with all channels below 10.
    pub near_black_percentage: f64,
    /// Pixels with all channels exactly 255.
    pub pure_white_percentage: f64,
    /// Pixels with all channels above 245.
    pub near_white_percentage: f64,
    /// Whether near-black or near-white exceeds the configured threshold.
    pub has_extreme: bool,
}
