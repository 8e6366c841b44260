//! CLI entry point for rdi-bench

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rdi_bench::{
    BenchConfig, ExtensionSet, FsReader, Report, RootReport, Strategy, measure, print_report,
    print_report_json,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Which strategies to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Enumerate everything, compare suffixes afterwards
    Post,
    /// Regex filter inside the iterator
    Pattern,
    /// Extension predicate inside the iterator
    Predicate,
    /// All three, one after another
    #[default]
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Post => vec![Strategy::PostFilter],
            StrategyArg::Pattern => vec![Strategy::PatternFilter],
            StrategyArg::Predicate => vec![Strategy::PredicateFilter],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rdi-bench")]
#[command(about = "Time post-filter, regex and predicate strategies for recursive directory iteration")]
#[command(version)]
struct Args {
    /// Directory trees to measure
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Strategy to run
    #[arg(short, long, value_enum, default_value = "all")]
    strategy: StrategyArg,

    /// Timed runs per strategy and tree
    #[arg(
        short = 'n',
        long,
        default_value = "10",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    iterations: u64,

    /// Untimed runs before timing starts
    #[arg(long, default_value = "1")]
    warmup: usize,

    /// Extension to select, with or without the dot (repeatable; default .c .h .cpp .hpp)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    ext: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rdi_bench=debug,warn")
    } else {
        EnvFilter::new("rdi_bench=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let extensions = if args.ext.is_empty() {
        ExtensionSet::c_family()
    } else {
        ExtensionSet::new(&args.ext).unwrap_or_else(|e| {
            eprintln!("rdi-bench: {}", e);
            process::exit(1);
        })
    };
    if extensions.is_empty() {
        eprintln!("rdi-bench: no usable extensions given");
        process::exit(1);
    }

    let config = BenchConfig {
        iterations: args.iterations as usize,
        warmup: args.warmup,
    };
    let strategies = args.strategy.strategies();

    let mut report = Report::new(&extensions);
    for root in &args.paths {
        info!(root = %root.display(), %extensions, "measuring");

        let mut measurements = Vec::with_capacity(strategies.len());
        for &strategy in &strategies {
            match measure(&FsReader, root, strategy, &extensions, &config) {
                Ok(m) => measurements.push(m),
                Err(e) => {
                    eprintln!("rdi-bench: {}", e);
                    process::exit(1);
                }
            }
        }
        report.push(RootReport::new(root, measurements));
    }

    let result = if args.json {
        print_report_json(&report)
    } else {
        print_report(&report, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("rdi-bench: error writing output: {}", e);
        process::exit(1);
    }
}
