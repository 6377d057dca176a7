use criterion::{Criterion, criterion_group, criterion_main};
use jsontime::time::{JsonTimeNs, JsonTimeSec, JsonTimeUs, MsRes};
use std::hint::black_box;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let text = "2024-07-22T15:05:52.338001008Z";

    let sec = JsonTimeSec::parse(text).unwrap();
    let ms = MsRes::parse(text).unwrap();
    let us = JsonTimeUs::parse(text).unwrap();
    let ns = JsonTimeNs::parse(text).unwrap();

    group.bench_function("JsonTimeSec", |b| b.iter(|| black_box(black_box(&sec).render())));
    group.bench_function("MsRes", |b| b.iter(|| black_box(black_box(&ms).render())));
    group.bench_function("JsonTimeUs", |b| b.iter(|| black_box(black_box(&us).render())));
    group.bench_function("JsonTimeNs", |b| b.iter(|| black_box(black_box(&ns).render())));
    group.bench_function("zero", |b| {
        b.iter(|| black_box(black_box(&JsonTimeNs::zero()).render()))
    });

    group.finish();
}

fn bench_serialize_batch(c: &mut Criterion) {
    let values: Vec<MsRes> = (0..1000).map(|_| MsRes::now()).collect();

    c.bench_function("serde_json MsRes batch", |b| {
        b.iter(|| {
            let results: Vec<_> = values
                .iter()
                .map(|value| serde_json::to_string(black_box(value)))
                .collect();
            black_box(results)
        })
    });
}

criterion_group!(benches, bench_render, bench_serialize_batch);
criterion_main!(benches);
