use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqdiff_core::differ::ndiff;
use seqdiff_core::matcher::{Matcher, MatcherOptions};
use seqdiff_core::render::{unified_diff, DiffOptions};
use std::time::Duration;

const MAX_BENCH_TIME_SECS: u64 = 10;
const WARMUP_SECS: u64 = 2;
const SAMPLE_SIZE: usize = 10;

fn source_lines(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("    let value_{} = compute({}, {});\n", i, i % 17, i * 3))
        .collect()
}

/// Every tenth line edited slightly, every fiftieth removed.
fn edited_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 50 != 49)
        .map(|(i, line)| {
            if i % 10 == 3 {
                line.replace("compute", "recompute")
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Mostly blank lines: the worst case for an index without autojunk.
fn blank_heavy_lines(n: usize, salt: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 25 == salt {
                format!("marker {}\n", i)
            } else {
                "\n".to_string()
            }
        })
        .collect()
}

fn bench_line_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_alignment");
    group.measurement_time(Duration::from_secs(MAX_BENCH_TIME_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    for size in [500usize, 2000, 8000].iter() {
        let a = source_lines(*size);
        let b = edited_lines(&a);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("lines", size), size, |bench, _| {
            bench.iter(|| {
                let m = Matcher::new(a.as_slice(), b.as_slice());
                black_box(m.opcodes().len())
            });
        });
    }
    group.finish();
}

fn bench_adversarial_blank_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("adversarial_blank_lines");
    group.measurement_time(Duration::from_secs(MAX_BENCH_TIME_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    for size in [1000usize, 4000].iter() {
        let a = blank_heavy_lines(*size, 0);
        let b = blank_heavy_lines(*size, 7);

        for autojunk in [true, false] {
            let id = BenchmarkId::new(if autojunk { "autojunk" } else { "no_autojunk" }, size);
            group.bench_with_input(id, size, |bench, _| {
                bench.iter(|| {
                    let options = MatcherOptions::default().with_autojunk(autojunk);
                    let m = Matcher::with_options(options, a.as_slice(), b.as_slice());
                    black_box(m.ratio())
                });
            });
        }
    }
    group.finish();
}

fn bench_renderers(c: &mut Criterion) {
    let mut group = c.benchmark_group("renderers");
    group.sample_size(SAMPLE_SIZE);

    let a = source_lines(2000);
    let b = edited_lines(&a);
    group.bench_function("unified_diff", |bench| {
        bench.iter(|| black_box(unified_diff(&a, &b, &DiffOptions::default()).len()));
    });
    group.bench_function("ndiff", |bench| {
        bench.iter(|| black_box(ndiff(&a[..400], &b[..392]).len()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_line_alignment,
    bench_adversarial_blank_lines,
    bench_renderers,
);
criterion_main!(benches);
