//! Criterion benchmarks for transfinite grid generation.
//! Sizes: square grids n in {10, 50, 100, 200} on the reference channel.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tfigrid::{Blend, Bump, Domain, GridCfg, HLine, VLine};

fn bench_generate(c: &mut Criterion) {
    let bottom = Bump::new(-10.0, 5.0, -3.0);
    let right = VLine::new(5.0, 0.0, 3.0);
    let top = HLine::new(-10.0, 5.0, 3.0);
    let left = VLine::new(-10.0, 0.0, 3.0);

    let mut group = c.benchmark_group("tfi");
    for &n in &[10usize, 50, 100, 200] {
        for blend in [Blend::Reference, Blend::Standard] {
            let cfg = GridCfg {
                blend,
                ..GridCfg::default()
            };
            let mut domain = Domain::with_cfg(&bottom, &right, &top, &left, cfg).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("generate_{blend:?}"), n),
                &n,
                |b, &n| {
                    b.iter(|| {
                        let _g = domain.generate(n, n).unwrap();
                    })
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("write_csv", n), &n, |b, &n| {
            let mut domain = Domain::new(&bottom, &right, &top, &left).unwrap();
            domain.generate(n, n).unwrap();
            let mut buf = Vec::with_capacity(n * n * 24);
            b.iter(|| {
                buf.clear();
                domain.export_to_writer(&mut buf).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
