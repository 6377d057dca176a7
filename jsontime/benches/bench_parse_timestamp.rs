use criterion::{Criterion, criterion_group, criterion_main};
use jsontime::time::{JsonTimeMs, MsRes, NsRes, parse_timestamp};
use std::hint::black_box;

const SAMPLES: [&str; 4] = [
    "2024-07-22T15:05:52Z",
    "2024-07-22T15:05:52.338Z",
    "2024-07-22T15:05:52.338001Z",
    "2024-07-22T15:05:52.338001008Z",
];

fn bench_parse_timestamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_timestamp by layout");

    for text in SAMPLES {
        group.bench_function(format!("len {}", text.len()), |b| {
            b.iter(|| {
                let result = parse_timestamp(black_box(text));
                black_box(result)
            })
        });
    }

    group.finish();
}

fn bench_decode_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode nanosecond input");
    let text = SAMPLES[3];

    group.bench_function("JsonTimeMs (truncate)", |b| {
        b.iter(|| {
            let result = JsonTimeMs::parse(black_box(text));
            black_box(result)
        })
    });

    group.bench_function("MsRes (round)", |b| {
        b.iter(|| {
            let result = MsRes::parse(black_box(text));
            black_box(result)
        })
    });

    group.bench_function("NsRes (as is)", |b| {
        b.iter(|| {
            let result = NsRes::parse(black_box(text));
            black_box(result)
        })
    });

    group.finish();
}

fn bench_deserialize_batch(c: &mut Criterion) {
    let payload: Vec<String> = (0..1000)
        .map(|i| format!("\"2024-07-22T15:{:02}:{:02}.338001008Z\"", i / 60 % 60, i % 60))
        .collect();

    c.bench_function("serde_json MsRes batch", |b| {
        b.iter(|| {
            let results: Vec<_> = payload
                .iter()
                .map(|token| serde_json::from_str::<MsRes>(black_box(token)))
                .collect();
            black_box(results)
        })
    });
}

criterion_group!(
    benches,
    bench_parse_timestamp,
    bench_decode_policies,
    bench_deserialize_batch
);
criterion_main!(benches);
