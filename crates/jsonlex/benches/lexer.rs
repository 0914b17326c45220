//! Lexer throughput benchmarks.
//!
//! Run with: `cargo bench -p jsonlex`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsonlex::{reprint, Lexer, LexerOptions, TokenStream};

/// Array of `n` small objects mixing every token kind.
fn document(n: usize) -> Vec<u8> {
    let mut out = String::from("[");
    for i in 0..n {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            r#"{{"id": {i},"name":"item \"{i}\"","score":-{i}.25e-3,"tags":[true,false,null]}}"#
        ));
    }
    out.push(']');
    out.into_bytes()
}

fn bench_pull(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/pull");
    for n in [10, 1_000, 10_000] {
        let input = document(n);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| Lexer::with_options(black_box(input), LexerOptions::default()).count());
        });
    }
    group.finish();
}

fn bench_reprint(c: &mut Criterion) {
    let input = document(1_000);
    let mut group = c.benchmark_group("lexer/reprint");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("1000", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(input.len());
            reprint(black_box(&input), LexerOptions::default(), &mut out)
        });
    });
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let input = document(100);
    let mut group = c.benchmark_group("lexer/stream");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("100", |b| {
        b.iter(|| {
            TokenStream::spawn(black_box(input.as_slice()), LexerOptions::default())
                .map(Iterator::count)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_pull, bench_reprint, bench_stream);
criterion_main!(benches);
