//! Pipeline configuration types

use crate::color_pipeline::colorspace::HueArgument;
use crate::color_pipeline::moments::Aggregation;

/// Configuration for RGB to moment extraction
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub hue_argument: HueArgument,
    pub aggregation: Aggregation,
    /// Whether to check source dimensions against `max_dimension`
    pub validate_dimensions: bool,
    /// Largest accepted width or height. Empty sources are always accepted.
    pub max_dimension: Option<usize>,
    pub reject_non_finite: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            hue_argument: HueArgument::Raw,
            aggregation: Aggregation::Sequential,
            validate_dimensions: true,
            max_dimension: Some(50000),
            reject_non_finite: false,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    hue_argument: Option<HueArgument>,
    aggregation: Option<Aggregation>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    reject_non_finite: Option<bool>,
}

impl PipelineConfigBuilder {
    pub fn hue_argument(mut self, hue_argument: HueArgument) -> Self {
        self.hue_argument = Some(hue_argument);
        self
    }

    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = Some(reject);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            hue_argument: self.hue_argument.unwrap_or(default.hue_argument),
            aggregation: self.aggregation.unwrap_or(default.aggregation),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            reject_non_finite: self.reject_non_finite.unwrap_or(default.reject_non_finite),
        }
    }
}
