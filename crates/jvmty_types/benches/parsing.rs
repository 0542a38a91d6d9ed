//! Benchmarks for parsing descriptors and signatures.
//!
//! `pool_hit` parses text whose value is already alive, so the intern pool
//! answers before the grammar runs. `pool_miss` pads the text so the
//! whole-text lookup misses and the grammar always runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jvmty_types::{
    Bindable, ClassSignature, MethodDescriptor, MethodSignature, Parse, TypeSignature,
};

const DESCRIPTORS: &[(&str, &str)] = &[
    ("void", "()V"),
    ("primitives", "(IJDZ)I"),
    ("objects", "(Ljava/lang/String;[Ljava/lang/Object;Ljava/util/Map;)Ljava/util/List;"),
];

const SIGNATURES: &[(&str, &str)] = &[
    ("simple", "<T:Ljava/lang/Object;>(TT;)TT;"),
    (
        "collectors",
        "<T:Ljava/lang/Object;K:Ljava/lang/Object;U:Ljava/lang/Object;>(Ljava/util/function/Function<-TT;+TK;>;Ljava/util/function/Function<-TT;+TU;>;)Ljava/util/stream/Collector<TT;*Ljava/util/Map<TK;TU;>;>;",
    ),
    (
        "throws",
        "<X:Ljava/lang/Throwable;>(Ljava/util/function/Supplier<+TX;>;)TT;^TX;",
    ),
];

fn bench_descriptors(c: &mut Criterion) {
    let mut group = c.benchmark_group("method_descriptor");

    for &(name, text) in DESCRIPTORS {
        group.throughput(Throughput::Bytes(text.len() as u64));

        let alive = MethodDescriptor::parse(text);
        group.bench_with_input(BenchmarkId::new("pool_hit", name), text, |b, text| {
            b.iter(|| black_box(MethodDescriptor::parse(black_box(text))));
        });
        drop(alive);

        group.bench_with_input(BenchmarkId::new("pool_miss", name), text, |b, text| {
            // The trailing space makes the whole-text pool lookup miss.
            let padded = format!("{text} ");
            b.iter(|| black_box(MethodDescriptor::parse_at(black_box(&padded), 0)));
        });
    }

    group.finish();
}

fn bench_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("method_signature");

    for &(name, text) in SIGNATURES {
        group.throughput(Throughput::Bytes(text.len() as u64));

        let alive = MethodSignature::parse(text);
        group.bench_with_input(BenchmarkId::new("pool_hit", name), text, |b, text| {
            b.iter(|| black_box(MethodSignature::parse(black_box(text))));
        });
        drop(alive);

        group.bench_with_input(BenchmarkId::new("pool_miss", name), text, |b, text| {
            let padded = format!("{text} ");
            b.iter(|| black_box(MethodSignature::parse_at(black_box(&padded), 0)));
        });
    }

    group.finish();
}

fn bench_bind_and_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind_and_erase");

    let class = ClassSignature::parse(
        "<T:Ljava/lang/Object;>Ljava/lang/Object;Ljava/util/function/Supplier<TT;>;",
    )
    .ok();
    let scope = class.and_then(|c| c.scope().ok()).unwrap_or_default();

    for &(name, text) in SIGNATURES {
        let Ok(sig) = MethodSignature::parse(text) else {
            continue;
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(&sig)
                    .bind_declared(&scope)
                    .map(|bound| bound.as_descriptor())
            });
        });
    }

    let field = TypeSignature::parse("Ljava/util/Map<Ljava/lang/String;Ljava/util/List<TT;>;>;").ok();
    if let Some(field) = field {
        group.bench_function("field", |b| {
            b.iter(|| black_box(&field).bind(&scope).map(|bound| bound.as_descriptor()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_descriptors, bench_signatures, bench_bind_and_erase);
criterion_main!(benches);
