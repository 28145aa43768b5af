use std::hint::black_box;

use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use linechart::animation::{
    AnimationScheduler, Easing, Tween, TweenControl, TweenHandle, TweenRegistry, TweenSink,
};
use linechart::api::{ChartEngine, ChartEngineConfig};
use linechart::core::{
    Domain, Margins, ProjectionOptions, Sample, Viewport, nice_ticks, project_samples, time_ticks,
};
use linechart::render::NullRenderer;

fn viewport() -> Viewport {
    Viewport::new(1920.0, 1080.0, Margins::new(20.0, 20.0, 20.0, 35.0))
}

fn samples(count: usize) -> Vec<Sample> {
    let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let t = i as f64;
            Sample::new(start + Duration::hours(i as i64), 50.0 + (t * 0.01).sin() * 40.0)
        })
        .collect()
}

fn bench_projection_10k(c: &mut Criterion) {
    let data = samples(10_000);
    c.bench_function("projection_10k", |b| {
        b.iter(|| {
            let _ = project_samples(
                black_box(&data),
                black_box(viewport()),
                ProjectionOptions::default(),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_ticks(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
    c.bench_function("nice_ticks_10", |b| {
        b.iter(|| nice_ticks(black_box(Domain::new(3.7, 91_234.2)), black_box(10)))
    });
    c.bench_function("time_ticks_12", |b| {
        b.iter(|| time_ticks(black_box(Domain::new(start, end)), black_box(12)))
    });
}

struct Discard;

impl TweenSink<usize> for Discard {
    fn on_update(
        &mut self,
        _handle: TweenHandle,
        target: usize,
        progress: f64,
        _control: &mut TweenControl<usize>,
    ) {
        black_box((target, progress));
    }

    fn on_complete(
        &mut self,
        _handle: TweenHandle,
        target: usize,
        _control: &mut TweenControl<usize>,
    ) {
        black_box(target);
    }
}

fn bench_scheduler_tick_1k(c: &mut Criterion) {
    c.bench_function("scheduler_tick_1k_tweens", |b| {
        b.iter(|| {
            let mut scheduler = AnimationScheduler::new();
            for index in 0..1_000 {
                scheduler.register(
                    Tween::new(index, 0.0, 600.0)
                        .with_delay(index as f64 * 0.5)
                        .with_easing(Easing::elastic_out()),
                );
            }
            let mut sink = Discard;
            let mut now = 0.0;
            while scheduler.is_running() {
                scheduler.tick(now, &mut sink);
                now += 16.0;
            }
        })
    });
}

fn bench_engine_frame_2k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(viewport());
    let mut engine = ChartEngine::with_samples(NullRenderer::default(), config, samples(2_000))
        .expect("engine init");
    let mut now = 1_500.0;

    c.bench_function("engine_tick_and_render_2k", |b| {
        b.iter(|| {
            engine.tick(now).expect("tick");
            engine.render().expect("render");
            now += 16.0;
        })
    });
}

criterion_group!(
    benches,
    bench_projection_10k,
    bench_ticks,
    bench_scheduler_tick_1k,
    bench_engine_frame_2k
);
criterion_main!(benches);
