use criterion::{criterion_group, criterion_main, Criterion};
use qthloc_core::prelude::*;
use std::hint::black_box;

fn bench_locator(c: &mut Criterion) {
    c.bench_function("decode 8 chars", |b| b.iter(|| decode(black_box("JO62qm38"))));
    c.bench_function("parse 4 chars", |b| b.iter(|| GridLocator::parse(black_box("JN88"))));
}

fn bench_search(c: &mut Criterion) {
    let path = CityDataset::default_data_dir().join(CityDataset::default_dataset_filename());
    let db: CityDataset = match CityDataset::load_from_path_uncached(path, None) {
        Ok(db) => db,
        Err(e) => panic!("sample dataset: {e}"),
    };
    let target = GeoCoordinate::new(48.5, 17.0);

    c.bench_function("nearest over sample", |b| {
        b.iter(|| nearest(black_box(target), db.records(), black_box(100_000)))
    });
    c.bench_function("query JO62 -> JN88", |b| {
        b.iter(|| query::run("JO62", "JN88", [100_000, 1_000_000], db.records()))
    });
}

criterion_group!(benches, bench_locator, bench_search);
criterion_main!(benches);
