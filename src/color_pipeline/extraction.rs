//! Feature extraction module
//!
//! Orchestrates conversion and aggregation into a single call and holds the
//! configuration that selects between the available behaviours.

mod config;
mod rgb_to_moments;
mod timing;


pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use rgb_to_moments::{ColorFeatures, MomentPipeline};
pub use timing::{Stage, StageTimings};
