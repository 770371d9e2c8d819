//! Test support utilities for extreme-scan.
//!
//! Provides synthetic image builders and mock port implementations for
//! testing the scan pipeline.
//!
//! # Example
//!
//! ```
//! use extreme_scan_test_support::{MockImageSource, SyntheticImageBuilder};
//!
//! let black = SyntheticImageBuilder::black(2, 2);
//! let gray = SyntheticImageBuilder::uniform(2, 2, [128, 128, 128]);
//!
//! let source = MockImageSource::new()
//!     .with_image("a.png", black)
//!     .with_image("b.png", gray);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{MockImageSource, MockMarker, MockProgressSink, RecordedEvent};
