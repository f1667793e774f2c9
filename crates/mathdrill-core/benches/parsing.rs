use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mathdrill_core::eval::evaluate_str;
use mathdrill_core::parser::parse_expression;
use mathdrill_core::Fraction;

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let simple = "1/2 + 1/3";
    let mixed = "3’1/2 * (2’2/3) - (1/6)";
    let long = chain_expression(50);

    group.bench_function("simple", |b| {
        b.iter(|| parse_expression(black_box(simple)))
    });

    group.bench_function("mixed_numbers", |b| {
        b.iter(|| parse_expression(black_box(mixed)))
    });

    group.bench_function("50_operators", |b| {
        b.iter(|| parse_expression(black_box(&long)))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let simple = "1/2 + 1/3";
    let long = chain_expression(50);
    let parsed = parse_expression(&long).unwrap();

    group.bench_function("scan_and_fold", |b| {
        b.iter(|| evaluate_str(black_box(simple)))
    });

    group.bench_function("fold_50_operators", |b| {
        b.iter(|| mathdrill_core::eval::evaluate(black_box(&parsed)))
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let values = [
        Fraction::from_integer(42),
        Fraction::new(2, 3).unwrap(),
        Fraction::new(22, 7).unwrap(),
        Fraction::new(1000001, 7).unwrap(),
    ];
    let texts: Vec<String> = values.iter().map(ToString::to_string).collect();

    group.bench_function("render", |b| {
        b.iter(|| {
            for v in &values {
                black_box(v.to_string());
            }
        })
    });

    group.bench_function("parse", |b| {
        b.iter(|| {
            for t in &texts {
                black_box(t.parse::<Fraction>()).ok();
            }
        })
    });

    group.finish();
}

/// A `1/2 + a’1/b + ...` chain with `n` operators, addition only so it
/// always evaluates.
fn chain_expression(n: usize) -> String {
    let mut s = String::from("1/2");
    for i in 0..n {
        s.push_str(&format!(" + {}’1/{}", i % 7 + 1, i % 5 + 2));
    }
    s
}

criterion_group!(benches, bench_scan, bench_evaluate, bench_format);
criterion_main!(benches);
