use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use idgen::{ALPHANUMERIC, encode_canonical, generate_nanoid, generate_proquint, interpret, select_word};

fn bench_nanoid(c: &mut Criterion) {
    c.bench_function("nanoid/unseeded_21", |b| {
        b.iter(|| generate_nanoid(black_box(ALPHANUMERIC), 21, None, 0))
    });
    c.bench_function("nanoid/seeded_21_grouped", |b| {
        b.iter(|| generate_nanoid(black_box(ALPHANUMERIC), 21, Some(42), 4))
    });
}

fn bench_proquint(c: &mut Criterion) {
    c.bench_function("proquint/canonical_u64", |b| {
        b.iter(|| encode_canonical(black_box(0x7f00_0001_dead_beef)))
    });
    c.bench_function("proquint/seeded_8_bytes", |b| {
        let seed = interpret("my-app-prod");
        b.iter(|| generate_proquint(8, black_box(Some(seed))))
    });
}

fn bench_word(c: &mut Criterion) {
    let empty: [&str; 0] = [];
    c.bench_function("word/default_list", |b| {
        b.iter(|| select_word(black_box("seed-4711"), &empty))
    });
}

criterion_group!(benches, bench_nanoid, bench_proquint, bench_word);
criterion_main!(benches);
