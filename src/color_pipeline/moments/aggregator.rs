use rayon::prelude::*;
use tracing::debug;

use crate::color_pipeline::colorspace::{CHANNEL_COUNT, ChannelPlanes};
use crate::color_pipeline::moments::types::MomentVector;

pub trait MomentAggregator {
    fn aggregate(&self, planes: &ChannelPlanes) -> MomentVector;
}

// Each channel is summed in row-major order by a single task in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    #[default]
    Sequential,
    /// One rayon task per channel, joined before the vector is assembled
    Parallel,
}

impl MomentAggregator for Aggregation {
    fn aggregate(&self, planes: &ChannelPlanes) -> MomentVector {
        debug!(
            "Aggregating {} channels of {}x{} ({:?})",
            CHANNEL_COUNT,
            planes.width(),
            planes.height(),
            self
        );

        match self {
            Aggregation::Sequential => zeroth_moments(planes),
            Aggregation::Parallel => {
                let sums: Vec<f64> = planes.grids().par_iter().map(|grid| grid.sum()).collect();
                let mut moments = [0.0; CHANNEL_COUNT];
                moments.copy_from_slice(&sums);
                MomentVector::new(moments)
            }
        }
    }
}

pub fn zeroth_moments(planes: &ChannelPlanes) -> MomentVector {
    let mut moments = [0.0; CHANNEL_COUNT];
    for (channel, grid) in planes.iter() {
        moments[channel.index()] = grid.sum();
    }
    MomentVector::new(moments)
}
