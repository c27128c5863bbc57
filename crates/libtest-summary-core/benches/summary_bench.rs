// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use libtest_summary_core::{parse, render};

/// Build a log with `modules * per_module` test lines and a failure block per module
fn synthetic_log(modules: usize, per_module: usize) -> String {
    let mut log = String::from("   Compiling bench v0.1.0\n\nrunning tests\n");
    for m in 0..modules {
        for t in 0..per_module {
            let status = if t == 0 { "FAILED" } else { "ok" };
            log.push_str(&format!("test module_{m}::tests::case_{t} ... {status}\n"));
        }
    }
    log.push_str("\nfailures:\n\n");
    for m in 0..modules {
        log.push_str(&format!("---- module_{m}::tests::case_0 stdout ----\n"));
        log.push_str("thread 'main' panicked at src/lib.rs:10:5:\nassertion failed\n\n");
    }
    let total = modules * per_module;
    log.push_str(&format!(
        "test result: FAILED. {} passed; {modules} failed; 0 ignored; 0 measured; 0 filtered out; finished in 1.23s\n",
        total - modules
    ));
    log
}

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 1000].iter() {
        let log = synthetic_log(*size, 10);
        group.bench_with_input(BenchmarkId::new("modules", size), &log, |b, log| {
            b.iter(|| parse(std::hint::black_box(log)))
        });
    }

    group.finish();
}

fn render_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 100, 1000].iter() {
        let result = parse(&synthetic_log(*size, 10));
        group.bench_with_input(BenchmarkId::new("modules", size), &result, |b, result| {
            b.iter(|| render(std::hint::black_box(result)))
        });
    }

    group.finish();
}

criterion_group!(benches, parse_benchmarks, render_benchmarks);
criterion_main!(benches);
