use avatar_domain::FeatureSet;
use avatar_domain::catalog::{AccessoriesType, FacialHairType, TopType};
use avatar_renderer::{Dimensions, compose, rasterize};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_compose(c: &mut Criterion) {
    let busy = FeatureSet {
        top_type: TopType::LongHairFroBand,
        accessories_type: AccessoriesType::Wayfarers,
        facial_hair_type: FacialHairType::BeardMajestic,
        ..FeatureSet::default()
    };

    let mut group = c.benchmark_group("compose");
    group.bench_function("default", |b| b.iter(|| compose(black_box(&FeatureSet::default()))));
    group.bench_function("busy", |b| b.iter(|| compose(black_box(&busy))));
    group.finish();
}

fn bench_rasterize(c: &mut Criterion) {
    let doc = compose(&FeatureSet::default());
    let mut group = c.benchmark_group("rasterize");

    for edge in [64u32, 300, 1024] {
        let dims = Dimensions::new(i64::from(edge), i64::from(edge)).unwrap();
        group.throughput(Throughput::Elements(u64::from(edge) * u64::from(edge)));
        group.bench_with_input(BenchmarkId::new("png", edge), &dims, |b, &d| {
            b.iter(|| rasterize(black_box(&doc), d).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose, bench_rasterize);
criterion_main!(benches);
