//! Colorspace conversion module
//!
//! Turns a grid of RGB samples into six derived channel planes: hue, saturation
//! and intensity (HSI) plus luma and the two chroma differences (YCbCr).

mod channel;
mod converter;
mod grid;
pub mod types;

pub use channel::{CHANNEL_COUNT, Channel};
pub use converter::{ChannelConverter, ColorspaceConverter, min_of_three};
pub use grid::{ChannelGrid, ChannelPlanes};
pub use types::{ChannelValues, HueArgument};
