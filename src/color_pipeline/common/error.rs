use thiserror::Error;

use crate::color_pipeline::colorspace::Channel;

#[derive(Error, Debug)]
pub enum ColorPipelineError {
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Channel grid holds {actual} values, expected {expected}")]
    GridSizeMismatch { expected: usize, actual: usize },

    #[error("{channel} plane is {width}x{height}, expected {expected_width}x{expected_height}")]
    PlaneDimensionMismatch {
        channel: Channel,
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },

    #[error("{0} moment is not finite")]
    NonFiniteMoment(Channel),
}

pub type Result<T> = std::result::Result<T, ColorPipelineError>;
