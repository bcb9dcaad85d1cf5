use bar_chart_rs::api::{BarChartConfig, BarChartEngine};
use bar_chart_rs::core::{ChartLayout, LayoutOptions, Series, Viewport};
use bar_chart_rs::render::{NullRenderer, SvgRenderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_values(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.37).sin() * 40.0 + t * 0.01
        })
        .collect()
}

fn bench_layout_10k(c: &mut Criterion) {
    let values = generated_values(10_000);
    let series = Series::from_values_and_labels::<&str>(&values, &[]);
    let viewport = Viewport::new(1920.0, 1080.0);

    c.bench_function("layout_compute_10k", |b| {
        b.iter(|| {
            let _ = ChartLayout::compute(
                black_box(&series),
                black_box(viewport),
                LayoutOptions::default(),
            );
        })
    });
}

fn bench_resize_and_frame(c: &mut Criterion) {
    let config = BarChartConfig::new(generated_values(1_000));
    let mut engine = BarChartEngine::new(NullRenderer::default(), config, Viewport::new(1280.0, 720.0))
        .expect("engine init");
    let mut toggle = false;

    c.bench_function("resize_and_render_1k", |b| {
        b.iter(|| {
            toggle = !toggle;
            let width = if toggle { 1920.0 } else { 1280.0 };
            engine.set_viewport(Viewport::new(width, 720.0));
            engine.render().expect("render");
        })
    });
}

fn bench_svg_document_1k(c: &mut Criterion) {
    let config = BarChartConfig::new(generated_values(1_000));
    let mut engine = BarChartEngine::new(SvgRenderer::new(), config, Viewport::new(1920.0, 1080.0))
        .expect("engine init");

    c.bench_function("svg_document_1k", |b| {
        b.iter(|| {
            engine.render().expect("render svg");
            black_box(engine.renderer().document().len());
        })
    });
}

criterion_group!(
    benches,
    bench_layout_10k,
    bench_resize_and_frame,
    bench_svg_document_1k
);
criterion_main!(benches);
