//! Performance benchmarks for rdi-bench
//!
//! Set `RDI_BENCH_ROOT` to a large checkout (a kernel or browser source tree)
//! to measure real-world trees alongside the synthetic ones.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rdi_bench::test_utils::TestTree;
use rdi_bench::{ExtensionSet, FsReader, MatchStrategy, MemoryReader, Strategy, count_matches};
use std::path::{Path, PathBuf};

const NAMES: &[&str] = &[
    "a",
    "sched.c",
    "sched.h",
    "nsDocShell.cpp",
    "nsIDocShell.hpp",
    "README.txt",
    "Makefile",
    ".h",
    "config.h.in",
];

fn bench_match_strategies(c: &mut Criterion) {
    let exts = ExtensionSet::c_family();
    let strategies = [
        ("suffix", MatchStrategy::suffix(exts.clone())),
        ("pattern", MatchStrategy::pattern(&exts.to_pattern()).unwrap()),
        ("predicate", MatchStrategy::extension_predicate(exts)),
    ];

    let mut group = c.benchmark_group("match_strategy");
    for (name, strategy) in &strategies {
        group.bench_function(*name, |b| {
            b.iter(|| {
                NAMES
                    .iter()
                    .filter(|&&n| strategy.matches(black_box(n)))
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_strategies_on_tree(c: &mut Criterion, group_name: &str, root: &Path) {
    let exts = ExtensionSet::c_family();
    let mut group = c.benchmark_group(group_name);
    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| count_matches(FsReader, black_box(root), strategy, &exts).unwrap())
        });
    }
    group.finish();
}

fn bench_synthetic_trees(c: &mut Criterion) {
    // Small tree: 1 + 4 + 16 directories, 20 files each
    let (small, _) = TestTree::synthetic(4, 2, 20);
    bench_strategies_on_tree(c, "rdi_small_tree", small.path());

    // Wider and deeper: 1 + 6 + 36 + 216 directories, 30 files each
    let (large, _) = TestTree::synthetic(6, 3, 30);
    bench_strategies_on_tree(c, "rdi_large_tree", large.path());
}

fn bench_in_memory_tree(c: &mut Criterion) {
    let mut reader = MemoryReader::new("/src");
    for dir in 0..50 {
        for (i, name) in NAMES.iter().enumerate() {
            reader = reader.with_file(format!("/src/dir_{}/{}_{}", dir, i, name));
        }
    }

    let exts = ExtensionSet::c_family();
    let mut group = c.benchmark_group("rdi_in_memory");
    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| count_matches(&reader, Path::new("/src"), strategy, &exts).unwrap())
        });
    }
    group.finish();
}

fn bench_real_checkout(c: &mut Criterion) {
    let Some(root) = std::env::var_os("RDI_BENCH_ROOT").map(PathBuf::from) else {
        return;
    };
    if !root.is_dir() {
        eprintln!("RDI_BENCH_ROOT={} is not a directory, skipping", root.display());
        return;
    }

    let mut group = c.benchmark_group("rdi_checkout");
    group.sample_size(10);
    let exts = ExtensionSet::c_family();
    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| count_matches(FsReader, black_box(&root), strategy, &exts).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_match_strategies,
    bench_synthetic_trees,
    bench_in_memory_tree,
    bench_real_checkout,
);
criterion_main!(benches);
