//! Pixel source module
//!
//! This module defines the boundary through which RGB samples enter the pipeline.
//! Decoding is left to the caller; anything that can answer "how big" and
//! "what colour at (x, y)" can be converted.

mod pixel_source;
pub mod types;

pub use pixel_source::{PixelSource, WideChannel};
pub use types::{Rgb16Image, WideRgba};
