//! Criterion microbenches for nerstat text parsing.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - CoNLL annotation parsing (from_conll_str)
//! - Tagset definition parsing (from_tagset_str)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use nerstat::conll::from_conll_str;
use nerstat::tagset::from_tagset_str;

// Small inline CoNLL document for benchmarking
const CONLL_FIXTURE: &str = "Ali B-PERSON
Yilmaz I-PERSON
dun O
Ankara B-LOC_CITY
'ya O
geldi O

Istanbul B-LOC_CITY
Havalimani I-FAC_AIRPORT
cok O
kalabalikti O

Bu O
cumlede O
varlik O
yok O
";

// Small inline tagset definition for benchmarking
const TAGSET_FIXTURE: &str = "Named Entity tags,Named Entity annotation
ACT,
AGE,
FAC_AIRPORT,
FAC_BRIDGE,
LOC_CITY,
LOC_COUNTRY,
ORG,
PERSON,
PRO_LANGUAGE,
";

/// Benchmark CoNLL parsing from string.
fn bench_conll_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("conll_parse");
    group.throughput(Throughput::Bytes(CONLL_FIXTURE.len() as u64));

    group.bench_function("from_conll_str", |b| {
        b.iter(|| {
            let sentences = from_conll_str(black_box(CONLL_FIXTURE));
            black_box(sentences)
        })
    });

    group.finish();
}

/// Benchmark tagset parsing from string.
fn bench_tagset_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("tagset_parse");
    group.throughput(Throughput::Bytes(TAGSET_FIXTURE.len() as u64));

    group.bench_function("from_tagset_str", |b| {
        b.iter(|| {
            let tags = from_tagset_str(black_box(TAGSET_FIXTURE));
            black_box(tags)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_conll_parse, bench_tagset_parse);
criterion_main!(benches);
