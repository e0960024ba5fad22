//! Criterion benches for the per-frame hot paths: integrator tick,
//! spline pose lookup, and the nearest-anchor scan.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use showreel::deck::{CardDescriptor, CardId, Deck, MediaRef};
use showreel::motion::{MotionIntegrator, MotionSnapshot};
use showreel::options::MotionOptions;
use showreel::path::{PathModel, RibbonSpline};

fn synthetic_deck(count: usize) -> Option<Deck> {
    let cards = (0..count)
        .map(|i| CardDescriptor {
            id: CardId::new(&format!("card-{i}")),
            title: format!("Card {i}"),
            description: String::new(),
            credits: Vec::new(),
            media: MediaRef::default(),
            canonical_position: i as f32,
        })
        .collect();
    Deck::new(cards).ok()
}

fn integrator_benchmark(c: &mut Criterion) {
    let integrator = MotionIntegrator::new(MotionOptions::default());
    let snapshot = MotionSnapshot {
        current: 0.4,
        target: 2.0,
    };
    let _ = c.bench_function("integrator_tick", |b| {
        b.iter(|| {
            black_box(integrator.tick(
                black_box(snapshot),
                black_box(0.0),
                black_box(1.0 / 60.0),
            ))
        })
    });
}

fn spline_pose_benchmark(c: &mut Criterion) {
    let spline = RibbonSpline::new(0.1);
    let _ = c.bench_function("ribbon_pose_lookup", |b| {
        b.iter(|| black_box(spline.pose(black_box(0.37))))
    });
}

fn nearest_anchor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_anchor");
    for count in [5usize, 50, 500] {
        let Some(deck) = synthetic_deck(count) else {
            continue;
        };
        let _ = group.bench_function(format!("{count}_cards"), |b| {
            b.iter(|| black_box(deck.nearest_index(black_box(2.6))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    integrator_benchmark,
    spline_pose_benchmark,
    nearest_anchor_benchmark
);
criterion_main!(benches);
