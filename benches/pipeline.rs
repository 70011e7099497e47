//! Benchmarks for the shotkit pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use shotkit::render::draw::rounded_mask;
use shotkit::{
    builtin_deck, render_frame, wrap, DevicePlan, FontBook, FontRole, MarketingPlan,
    MarketingRenderer,
};

fn synthetic_screenshot(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 96, 255])
    })
}

// -- Planning benchmarks --

fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");

    group.bench_function("device_plan", |b| {
        b.iter(|| DevicePlan::new(black_box(1170), black_box(2532)).unwrap())
    });

    group.bench_function("marketing_plan", |b| {
        b.iter(|| MarketingPlan::new(black_box(1170), black_box(2532)).unwrap())
    });

    group.finish();
}

// -- Primitive benchmarks --

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("rounded_mask_512", |b| {
        b.iter(|| rounded_mask(black_box(512), black_box(512), black_box(48)))
    });

    let font = FontBook::new().resolve(FontRole::Bold, 72);
    group.bench_function("wrap_headline", |b| {
        b.iter(|| {
            wrap(
                black_box("Details without the detour."),
                &font,
                black_box(1040.0),
                2,
            )
        })
    });

    group.finish();
}

// -- Pipeline benchmarks --

fn bench_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipelines");
    group.sample_size(10);

    let small = synthetic_screenshot(234, 506);
    group.bench_function("frame_small", |b| {
        b.iter(|| render_frame(black_box(&small)).unwrap())
    });

    let slide_source = synthetic_screenshot(640, 1280);
    let deck = builtin_deck();
    group.bench_function("marketing_slide", |b| {
        let mut renderer = MarketingRenderer::new("NOTELAYER");
        b.iter(|| {
            renderer
                .render(
                    black_box(&slide_source),
                    &deck[1],
                    shotkit::Device::Iphone,
                )
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_planning, bench_primitives, bench_pipelines);
criterion_main!(benches);
