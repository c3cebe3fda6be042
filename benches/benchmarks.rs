//! Performance benchmarks for covnom
//!
//! Run with: cargo bench
//! Run specific benchmark: cargo bench -- parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use covnom::{classify, parse_encoded, parse_encoded_with_protein};

// =============================================================================
// Parsing benchmarks
// =============================================================================

/// Benchmark encoded-change parsing for different change shapes
fn bench_parsing(c: &mut Criterion) {
    let changes = vec![
        ("sub", "N501Y"),
        ("del", "H69-"),
        ("del_token", "A11DEL"),
        ("ins", "10T"),
        ("multi_pos", "AT69/70-"),
        ("stop", "Q27*"),
    ];

    let mut group = c.benchmark_group("parsing");
    for (name, change) in changes {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(name), change, |b, change| {
            b.iter(|| parse_encoded(black_box(change)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark amino-acid parsing including protein canonicalization and
/// polyprotein remapping
fn bench_aa_parsing(c: &mut Criterion) {
    let changes = vec![
        ("short_protein", "S:N501Y"),
        ("verbose_protein", "Spike (surface glycoprotein):N501Y"),
        ("orf1ab_remap", "ORF1AB:T4393I"),
        ("orf1b_remap", "ORF1B:P314L"),
        ("long_residues", "S:TYR144DEL"),
    ];

    let mut group = c.benchmark_group("aa_parsing");
    for (name, change) in changes {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(name), change, |b, change| {
            b.iter(|| parse_encoded_with_protein(black_box(change)).unwrap());
        });
    }
    group.finish();
}

// =============================================================================
// Classification benchmarks
// =============================================================================

/// Benchmark alias classification across the rule cascade
fn bench_classify(c: &mut Criterion) {
    let aliases = vec![
        // first rule
        ("nextstrain", "21A"),
        // mid-cascade
        ("pango", "B.1.1.7"),
        // late rules
        ("phe", "VUI-202102/04"),
        ("who", "Alpha"),
        // full cascade miss
        ("unrecognized", "totally new name"),
    ];

    let mut group = c.benchmark_group("classify");
    for (name, alias) in aliases {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(name), alias, |b, alias| {
            b.iter(|| classify(black_box(alias)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parsing, bench_aa_parsing, bench_classify);
criterion_main!(benches);
