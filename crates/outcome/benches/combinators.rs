//! Combinator overhead vs `std::result::Result`.
//!
//! `Outcome::map` clones where std moves; this bench keeps an eye on what
//! that costs for small `Copy` payloads and for heap-backed errors.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use outcome::{Error, Outcome};

fn bench_map(c: &mut Criterion) {
    let ok: Outcome<u64, Error> = Outcome::Ok(41);
    c.bench_function("outcome_map_ok", |b| {
        b.iter(|| black_box(&ok).map(|v| v + 1))
    });

    let err: Outcome<u64, Error> = Outcome::Err(Error::new("bench error"));
    c.bench_function("outcome_map_err_branch", |b| {
        b.iter(|| black_box(&err).map(|v| v + 1))
    });

    c.bench_function("std_result_map", |b| {
        b.iter(|| black_box(Ok::<u64, u32>(41)).map(|v| v + 1))
    });
}

fn bench_query(c: &mut Criterion) {
    let ok: Outcome<u64, Error> = Outcome::Ok(41);
    c.bench_function("outcome_ok_query", |b| b.iter(|| black_box(&ok).ok()));
}

criterion_group!(benches, bench_map, bench_query);
criterion_main!(benches);
