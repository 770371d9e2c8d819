//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the scan loop and the
//! filesystem or console adapters.

mod image_source;
mod marker;
mod progress;

pub use image_source::ImageSource;
pub use marker::FileMarker;
pub use progress::{ProgressEvent, ProgressSink};
