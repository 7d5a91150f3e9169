use hsi_moments::color_pipeline::{Aggregation, MomentPipeline, PipelineConfig, Rgb16Image};
use hsi_moments::logger;

use image::Rgb;
use tracing::info;

/// Demo input: a horizontal red ramp over a vertical blue ramp, green fixed.
fn gradient(width: u32, height: u32) -> Rgb16Image {
    Rgb16Image::from_fn(width, height, |x, y| {
        let r = (u64::from(x) * u64::from(u16::MAX) / u64::from(width.max(2) - 1)) as u16;
        let b = (u64::from(y) * u64::from(u16::MAX) / u64::from(height.max(2) - 1)) as u16;
        Rgb([r, 0x4000, b])
    })
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting hsi_moments...");

    let config = PipelineConfig::builder()
        .aggregation(Aggregation::Parallel)
        .build();
    let pipeline = MomentPipeline::new(config);

    info!("Hue argument: {:?}", pipeline.config().hue_argument);
    info!("Aggregation: {:?}", pipeline.config().aggregation);

    let image = gradient(640, 480);
    let (features, timings) = pipeline.extract_with_timings(&image)?;

    for (channel, moment) in features.moments.iter() {
        info!("{:>10}: {:.6}", channel, moment);
    }
    timings.log_summary();

    Ok(())
}
