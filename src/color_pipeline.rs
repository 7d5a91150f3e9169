//! Colour feature pipeline
//!
//! This module converts RGB pixel data into HSI and YCbCr channel planes and
//! reduces each plane to a zeroth-order moment, with separate modules for the
//! pixel-source boundary, the per-pixel math, aggregation and orchestration.

pub mod colorspace;
pub mod common;
pub mod extraction;
pub mod moments;
pub mod source;

pub use common::{
    ColorPipelineError,
    Result,
};

pub use source::{
    PixelSource,
    Rgb16Image,
    WideChannel,
    WideRgba,
};

pub use colorspace::{
    CHANNEL_COUNT,
    Channel,
    ChannelConverter,
    ChannelGrid,
    ChannelPlanes,
    ChannelValues,
    ColorspaceConverter,
    HueArgument,
    min_of_three,
};

pub use moments::{
    Aggregation,
    MomentAggregator,
    MomentVector,
    zeroth_moments,
};

pub use extraction::{
    ColorFeatures,
    MomentPipeline,
    PipelineConfig,
    PipelineConfigBuilder,
    Stage,
    StageTimings,
};
