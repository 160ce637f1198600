use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spanjson_core::{encode, parse, Dict, Value};

/// A calendar-like document: a list of event objects with nested tags.
fn sample_document(events: usize) -> String {
    let items: Vec<Value> = (0..events)
        .map(|i| {
            let mut event = Dict::new();
            event.insert("id".to_string(), Value::Int(i as i64));
            event.insert("title".to_string(), Value::from(format!("Event #{i}\twith tab")));
            event.insert("score".to_string(), Value::Float(i as f64 * 0.25));
            event.insert("confirmed".to_string(), Value::Bool(i % 2 == 0));
            event.insert(
                "tags".to_string(),
                Value::List(vec![Value::from("work"), Value::from("weekly"), Value::Null]),
            );
            Value::Dict(event)
        })
        .collect();
    encode(&Value::List(items)).expect("sample document is finite")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for events in [10, 100, 1_000] {
        let text = sample_document(events);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(events), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn bench_scalars(c: &mut Criterion) {
    c.bench_function("number/int", |b| b.iter(|| parse(black_box("-1234567890"))));
    c.bench_function("number/float", |b| b.iter(|| parse(black_box("6.02214076e23"))));
    c.bench_function("string/escaped", |b| {
        b.iter(|| parse(black_box(r#""line1\nline2\ttab \"quoted\" \\ end""#)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let value = parse(&sample_document(1_000))
        .expect("sample document parses")
        .value;
    c.bench_function("encode/1000", |b| b.iter(|| encode(black_box(&value))));
}

criterion_group!(benches, bench_parse, bench_scalars, bench_encode);
criterion_main!(benches);
