use tracing::{debug, info, instrument, warn};

use crate::color_pipeline::{
    colorspace::{ChannelConverter, ChannelPlanes, ColorspaceConverter},
    common::error::{ColorPipelineError, Result},
    extraction::{PipelineConfig, Stage, StageTimings},
    moments::{Aggregation, MomentAggregator, MomentVector},
    source::PixelSource,
};

/// Everything extracted from one image: the six planes and their moments.
#[derive(Debug, Clone)]
pub struct ColorFeatures {
    pub planes: ChannelPlanes,
    pub moments: MomentVector,
}

pub struct MomentPipeline<C: ChannelConverter, A: MomentAggregator> {
    converter: C,
    aggregator: A,
    config: PipelineConfig,
}

impl MomentPipeline<ColorspaceConverter, Aggregation> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            converter: ColorspaceConverter::new(config.hue_argument),
            aggregator: config.aggregation,
            config,
        }
    }

    /// Replaces the configuration and rebuilds both stages from it.
    pub fn set_config(&mut self, config: PipelineConfig) {
        self.converter = ColorspaceConverter::new(config.hue_argument);
        self.aggregator = config.aggregation;
        self.config = config;
    }
}

impl Default for MomentPipeline<ColorspaceConverter, Aggregation> {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl<C: ChannelConverter, A: MomentAggregator> MomentPipeline<C, A> {
    pub fn with_custom(converter: C, aggregator: A, config: PipelineConfig) -> Self {
        Self {
            converter,
            aggregator,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(ColorPipelineError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn check_moments(&self, moments: &MomentVector) -> Result<()> {
        match moments.first_non_finite() {
            Some(channel) if self.config.reject_non_finite => {
                Err(ColorPipelineError::NonFiniteMoment(channel))
            }
            Some(channel) => {
                debug!(%channel, "non-finite moment propagated");
                Ok(())
            }
            None => Ok(()),
        }
    }

    #[instrument(skip(self, source))]
    pub fn extract<S: PixelSource + ?Sized>(&self, source: &S) -> Result<ColorFeatures> {
        let (width, height) = source.grid_size();
        info!(width, height, "Starting moment extraction");

        {
            let _span = tracing::info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let planes = {
            let _span = tracing::info_span!("convert_colorspaces").entered();
            self.converter.convert(source)
        };

        let moments = {
            let _span = tracing::info_span!("aggregate_moments").entered();
            self.aggregator.aggregate(&planes)
        };
        self.check_moments(&moments)?;

        info!(width, height, moments = ?moments.as_array(), "Extraction complete");
        Ok(ColorFeatures { planes, moments })
    }

    pub fn extract_with_timings<S: PixelSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<(ColorFeatures, StageTimings)> {
        let mut timings = StageTimings::new();
        let (width, height) = source.grid_size();
        info!(width, height, "Starting moment extraction");

        timings.time(Stage::Validate, || self.validate_dimensions(width, height))?;
        let planes = timings.time(Stage::Convert, || self.converter.convert(source));
        let moments = timings.time(Stage::Aggregate, || self.aggregator.aggregate(&planes));
        self.check_moments(&moments)?;

        info!(
            "Extraction complete: {}x{} in {:.3}ms",
            width,
            height,
            timings.total().as_secs_f64() * 1000.0
        );
        Ok((ColorFeatures { planes, moments }, timings))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
