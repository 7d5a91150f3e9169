//! Per-pixel colorspace types

use crate::color_pipeline::colorspace::channel::Channel;

/// Treatment of the arccos argument in the hue formula, which rounding can push
/// just outside [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueArgument {
    #[default]
    Raw,
    Clamped,
}

impl HueArgument {
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            HueArgument::Raw => argument,
            // NaN passes through clamp unchanged
            HueArgument::Clamped => argument.clamp(-1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelValues {
    /// Radians, nominally in [0, 2π)
    pub hue: f64,
    pub saturation: f64,
    pub intensity: f64,
    pub luma: f64,
    pub cb: f64,
    pub cr: f64,
}

impl ChannelValues {
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Intensity => self.intensity,
            Channel::Luma => self.luma,
            Channel::Cb => self.cb,
            Channel::Cr => self.cr,
        }
    }
}
