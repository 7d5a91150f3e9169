//! Pixel sample types

use image::{ImageBuffer, Rgb};

pub const WIDE_CHANNEL_MAX: u16 = u16::MAX;

/// One raw pixel sample, every channel in `0..=65535`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WideRgba {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    /// Read from the source but never used by the colour math
    pub a: u16,
}

impl WideRgba {
    pub fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, WIDE_CHANNEL_MAX)
    }

    /// R, G and B scaled to [0, 1]. Alpha is dropped.
    pub fn normalized(&self) -> [f64; 3] {
        let max = f64::from(WIDE_CHANNEL_MAX);
        [
            f64::from(self.r) / max,
            f64::from(self.g) / max,
            f64::from(self.b) / max,
        ]
    }
}

/// In-memory 16-bit RGB image, the natural input of the pipeline
pub type Rgb16Image = ImageBuffer<Rgb<u16>, Vec<u16>>;
