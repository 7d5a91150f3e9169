use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hsi_moments::color_pipeline::{
    Aggregation, ChannelConverter, ColorspaceConverter, HueArgument, MomentAggregator, MomentPipeline,
    PipelineConfig, Rgb16Image,
};
use image::Rgb;

fn generate_mock_image(width: u32, height: u32) -> Rgb16Image {
    Rgb16Image::from_fn(width, height, |x, y| {
        let v = ((x + y) % 256) as u16;
        Rgb([v * 257, (255 - v) * 257, (v / 2) * 257])
    })
}

fn benchmark_extraction_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_mock_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            let pipeline = MomentPipeline::new(PipelineConfig::default());

            b.iter(|| {
                let _ = pipeline.extract(black_box(image));
            });
        });
    }

    group.finish();
}

fn benchmark_aggregation_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation_modes");
    let planes = ColorspaceConverter::default().convert(&generate_mock_image(1000, 1000));

    let modes = vec![
        (Aggregation::Sequential, "sequential"),
        (Aggregation::Parallel, "parallel"),
    ];

    for (mode, label) in modes {
        group.bench_with_input(BenchmarkId::from_parameter(label), &planes, |b, planes| {
            b.iter(|| mode.aggregate(black_box(planes)));
        });
    }

    group.finish();
}

fn benchmark_hue_argument(c: &mut Criterion) {
    let mut group = c.benchmark_group("hue_argument");
    let image = generate_mock_image(500, 500);

    group.bench_function("raw", |b| {
        let converter = ColorspaceConverter::new(HueArgument::Raw);
        b.iter(|| converter.convert(black_box(&image)));
    });

    group.bench_function("clamped", |b| {
        let converter = ColorspaceConverter::new(HueArgument::Clamped);
        b.iter(|| converter.convert(black_box(&image)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_extraction_sizes,
    benchmark_aggregation_modes,
    benchmark_hue_argument
);
criterion_main!(benches);
