// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for message resolution.
//!
//! Measures the performance of:
//! - Direct lookups in the requested locale
//! - Lookups that fall back to the fallback locale
//! - Placeholder substitution

use criterion::{criterion_group, criterion_main, Criterion};
use pairquest::i18n::Catalog;
use std::hint::black_box;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_resolution");
    let catalog = Catalog::embedded().unwrap();

    group.bench_function("resolve_nested", |b| {
        b.iter(|| black_box(catalog.resolve(black_box("ru"), "countdown.nextButton", &[])));
    });

    group.bench_function("resolve_unknown_locale", |b| {
        b.iter(|| black_box(catalog.resolve(black_box("de"), "startGame", &[])));
    });

    group.bench_function("resolve_missing_key", |b| {
        b.iter(|| black_box(catalog.resolve(black_box("ru"), "lobby.heading", &[])));
    });

    group.bench_function("resolve_with_params", |b| {
        b.iter(|| {
            black_box(catalog.resolve(
                black_box("en"),
                "errorGeneral",
                &[("error", "connection reset")],
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
