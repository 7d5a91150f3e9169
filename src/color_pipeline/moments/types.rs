//! Moment vector type

use std::ops::Index;

use crate::color_pipeline::colorspace::{CHANNEL_COUNT, Channel};

/// One zeroth-order moment per channel, in [`Channel::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MomentVector([f64; CHANNEL_COUNT]);

impl MomentVector {
    pub fn new(moments: [f64; CHANNEL_COUNT]) -> Self {
        Self(moments)
    }

    pub fn get(&self, channel: Channel) -> f64 {
        self.0[channel.index()]
    }

    pub fn as_array(&self) -> &[f64; CHANNEL_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        Channel::ALL.into_iter().zip(self.0.iter().copied())
    }

    pub fn first_non_finite(&self) -> Option<Channel> {
        self.iter().find(|(_, moment)| !moment.is_finite()).map(|(channel, _)| channel)
    }
}

impl Index<Channel> for MomentVector {
    type Output = f64;

    fn index(&self, channel: Channel) -> &f64 {
        &self.0[channel.index()]
    }
}

impl From<MomentVector> for Vec<f64> {
    fn from(moments: MomentVector) -> Self {
        moments.0.to_vec()
    }
}
