//! Timed runs of a strategy over a root
//!
//! A lightweight harness for the `rdi-bench` binary. Criterion drives the
//! same entry points in `benches/` when statistically rigorous numbers are
//! needed.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::Result;
use crate::ext::ExtensionSet;
use crate::variants::{Strategy, count_matches};
use crate::walk::DirectoryReader;

/// How many times each strategy runs.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Timed runs (at least one is always performed)
    pub iterations: usize,
    /// Untimed runs before timing starts, to warm the dentry cache
    pub warmup: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            warmup: 1,
        }
    }
}

fn as_millis<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

/// Timing summary for one strategy on one root.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub strategy: Strategy,
    pub root: PathBuf,
    pub iterations: usize,
    /// Count from the last timed run
    pub matches: i64,
    /// False if runs disagreed on the count (tree changed mid-benchmark)
    pub stable: bool,
    #[serde(rename = "min_ms", serialize_with = "as_millis")]
    pub min: Duration,
    #[serde(rename = "max_ms", serialize_with = "as_millis")]
    pub max: Duration,
    #[serde(rename = "mean_ms", serialize_with = "as_millis")]
    pub mean: Duration,
    #[serde(rename = "median_ms", serialize_with = "as_millis")]
    pub median: Duration,
}

/// `total / count`, without wrapping counts past `u32::MAX`.
fn mean_duration(total: Duration, count: usize) -> Duration {
    match u32::try_from(count.max(1)) {
        Ok(n) => total / n,
        Err(_) => total.div_f64(count as f64),
    }
}

impl Measurement {
    fn from_samples(
        strategy: Strategy,
        root: &Path,
        mut samples: Vec<Duration>,
        matches: i64,
        stable: bool,
    ) -> Self {
        samples.sort();
        let iterations = samples.len();
        let total: Duration = samples.iter().sum();
        let mean = mean_duration(total, iterations);
        let median = match iterations {
            0 => Duration::ZERO,
            n if n % 2 == 1 => samples[n / 2],
            n => (samples[n / 2 - 1] + samples[n / 2]) / 2,
        };

        Self {
            strategy,
            root: root.to_path_buf(),
            iterations,
            matches,
            stable,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            mean,
            median,
        }
    }

    /// Matched files per second, based on the mean run time.
    pub fn matches_per_second(&self) -> f64 {
        let secs = self.mean.as_secs_f64();
        if secs > 0.0 {
            self.matches as f64 / secs
        } else {
            0.0
        }
    }
}

/// Run `strategy` over `root` according to `config`.
pub fn measure<R: DirectoryReader>(
    reader: &R,
    root: &Path,
    strategy: Strategy,
    extensions: &ExtensionSet,
    config: &BenchConfig,
) -> Result<Measurement> {
    for _ in 0..config.warmup {
        count_matches(reader, root, strategy, extensions)?;
    }

    let iterations = config.iterations.max(1);
    let mut samples = Vec::with_capacity(iterations);
    let mut first: Option<i64> = None;
    let mut matches = 0;
    let mut stable = true;

    for _ in 0..iterations {
        let start = Instant::now();
        matches = count_matches(reader, root, strategy, extensions)?;
        samples.push(start.elapsed());

        match first {
            None => first = Some(matches),
            Some(expected) if expected != matches => {
                if stable {
                    warn!(
                        root = %root.display(),
                        %strategy,
                        expected,
                        got = matches,
                        "match count changed between runs"
                    );
                }
                stable = false;
            }
            Some(_) => {}
        }
    }

    let measurement = Measurement::from_samples(strategy, root, samples, matches, stable);
    debug!(
        root = %root.display(),
        %strategy,
        matches = measurement.matches,
        mean_ms = measurement.mean.as_secs_f64() * 1000.0,
        "measured"
    );
    Ok(measurement)
}

/// All measurements for one root.
#[derive(Debug, Clone, Serialize)]
pub struct RootReport {
    pub root: PathBuf,
    /// True when every strategy counted the same number of matches
    pub consistent: bool,
    pub measurements: Vec<Measurement>,
}

impl RootReport {
    pub fn new(root: impl Into<PathBuf>, measurements: Vec<Measurement>) -> Self {
        let consistent = measurements
            .windows(2)
            .all(|pair| pair[0].matches == pair[1].matches);
        Self {
            root: root.into(),
            consistent,
            measurements,
        }
    }

    /// Strategy with the lowest mean time.
    pub fn fastest(&self) -> Option<Strategy> {
        self.measurements
            .iter()
            .min_by_key(|m| m.mean)
            .map(|m| m.strategy)
    }
}

/// Complete result of a benchmark invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub extensions: Vec<String>,
    pub roots: Vec<RootReport>,
}

impl Report {
    pub fn new(extensions: &ExtensionSet) -> Self {
        Self {
            extensions: extensions.iter().map(str::to_string).collect(),
            roots: Vec::new(),
        }
    }

    pub fn push(&mut self, root: RootReport) {
        self.roots.push(root);
    }

    pub fn is_consistent(&self) -> bool {
        self.roots.iter().all(|r| r.consistent)
    }
}
