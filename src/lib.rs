//! rdi-bench - compare filtering strategies for recursive directory iteration

pub mod counter;
pub mod error;
pub mod ext;
pub mod measure;
pub mod report;
pub mod variants;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use counter::WorkCounter;
pub use error::{Result, WalkError};
pub use ext::ExtensionSet;
pub use measure::{BenchConfig, Measurement, Report, RootReport, measure};
pub use report::{print_report, print_report_json};
pub use variants::{
    Strategy, count_matches, pattern_filter_count, post_filter_count, predicate_filter_count,
};
pub use walk::{
    DirectoryReader, EntryKind, FileSystemEntry, FsReader, MatchStrategy, MemoryReader, Scope,
    TraversalConfig, Walk, Walker,
};
