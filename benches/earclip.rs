use criterion::{criterion_group, criterion_main, Criterion};
use polyinterp::algorithms::triangulation::earclip::{triangulate_polygon_with, EarClipConfig};
use polyinterp::data::Polygon;
use rand::SeedableRng;

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
  let strict = EarClipConfig::convex_only();
  for &n in &[20, 100] {
    let convex = Polygon::<f64>::random_convex(n, &mut rng);
    c.bench_function(&format!("earclip convex({})", n), |b| {
      b.iter(|| triangulate_polygon_with(convex.points(), &strict))
    });
    let star = Polygon::<f64>::random_star(n, &mut rng);
    c.bench_function(&format!("earclip star({})", n), |b| {
      b.iter(|| triangulate_polygon_with(star.points(), &strict))
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
