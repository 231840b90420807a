use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seagrid_core::{generate_grid, DisplayList, GridConfig, GridLayer};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_grid");
    for &step in &[1.0f64, 0.1f64] {
        let cfg = GridConfig::with_step(step);
        group.bench_function(format!("step_{step}"), |b| {
            b.iter(|| {
                let grid = generate_grid(black_box(&cfg)).expect("valid config");
                black_box(grid);
            });
        });
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    c.bench_function("layer_rebuild_1deg", |b| {
        let mut surface = DisplayList::new();
        let mut layer = GridLayer::default();
        let cfg = GridConfig::with_step(1.0);
        b.iter(|| {
            let n = layer.rebuild(&mut surface, &cfg).expect("valid config").len();
            black_box(n);
        });
    });
}

criterion_group!(benches, bench_generate, bench_rebuild);
criterion_main!(benches);
