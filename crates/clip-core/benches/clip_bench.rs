use clip_core::{ClipRectangle, Point, Polygon};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

// Star-shaped polygon whose spikes alternate inside and outside the window.
fn gen_star(n: usize) -> Polygon {
    (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::TAU;
            let r = if i % 2 == 0 { 320.0 } else { 60.0 };
            Point::new((250.0 + r * a.cos()) as i32, (200.0 + r * a.sin()) as i32)
        })
        .collect()
}

fn bench_clip(c: &mut Criterion) {
    let rect = ClipRectangle::new(100, 100, 400, 300).expect("rect");
    let mut group = c.benchmark_group("clip_edges");
    for &n in &[1_000usize, 100_000usize] {
        let poly = gen_star(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &poly, |b, p| {
            b.iter(|| black_box(p.clipped_edges(&rect).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clip);
criterion_main!(benches);
