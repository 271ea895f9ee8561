//! Benchmarks for chatstats parsing and stat computation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- report`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::config::{NumberMap, StatsConfig};
use chatstats::format::{OutputFormat, to_format_string};
use chatstats::parser::ChatParser;
use chatstats::report::compute_report;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_transcript(count: usize) -> String {
    const SENDERS: [&str; 4] = [
        "Alice",
        "Bob",
        "\u{202a}+33\u{a0}6\u{a0}40\u{a0}11\u{a0}83\u{a0}32\u{202c}",
        "\u{202a}+1\u{a0}650\u{a0}555\u{a0}0100\u{202c}",
    ];
    const BODIES: [&str; 5] = [
        "great idea 😀",
        "not so good",
        "\u{200e}image omitted",
        "Location: https://maps.google.com/?q=48.85,2.35",
        "see you tomorrow",
    ];

    let mut lines = Vec::with_capacity(count + count / 5);
    for i in 0..count {
        let day = 1 + (i / 40) % 28;
        let month = 1 + (i / (40 * 28)) % 12;
        lines.push(format!(
            "[{:02}/{:02}/2021, {:02}:{:02}:00] {}: {}",
            day,
            month,
            i % 24,
            i % 60,
            SENDERS[i % SENDERS.len()],
            BODIES[i % BODIES.len()]
        ));
        if i % 5 == 0 {
            lines.push("and another line".to_string());
        }
    }
    lines.join("\n")
}

fn numbers() -> NumberMap {
    [("+33 6 40 11 83 32", "Carol")].into_iter().collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let parser = ChatParser::new(numbers());

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let grouped = parser.parse_str(black_box(txt)).unwrap();
                black_box(grouped)
            });
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let parser = ChatParser::new(numbers());

    for size in [1_000_usize, 10_000] {
        let grouped = parser.parse_str(&generate_transcript(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));

        for workers in [1_usize, 4] {
            let config = StatsConfig::new().with_workers(workers);
            group.bench_with_input(
                BenchmarkId::new(format!("workers_{workers}"), size),
                &grouped,
                |b, grouped| {
                    b.iter(|| {
                        let report = compute_report(black_box(grouped), &config).unwrap();
                        black_box(report)
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let grouped = ChatParser::new(numbers())
        .parse_str(&generate_transcript(10_000))
        .unwrap();
    let report = compute_report(&grouped, &StatsConfig::default()).unwrap();

    for format in OutputFormat::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format),
            &report,
            |b, report| {
                b.iter(|| black_box(to_format_string(black_box(report), *format).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parsing, bench_report, bench_rendering);

criterion_main!(benches);
