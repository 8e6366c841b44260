//! The three filtering strategies under comparison
//!
//! Every variant walks the same tree and counts the same files; they differ
//! only in where and how the extension test happens:
//!
//! - `PostFilter`: the walk yields every entry and the loop body compares
//!   trailing characters
//! - `PatternFilter`: a full-match regex is pushed into the walk
//! - `PredicateFilter`: a rightmost-dot extension test is pushed into the walk

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::counter::WorkCounter;
use crate::error::Result;
use crate::ext::ExtensionSet;
use crate::walk::{DirectoryReader, FsReader, MatchStrategy, Scope, TraversalConfig, Walker};

/// Selects one filtering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    PostFilter,
    PatternFilter,
    PredicateFilter,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::PostFilter,
        Strategy::PatternFilter,
        Strategy::PredicateFilter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::PostFilter => "post-filter",
            Strategy::PatternFilter => "pattern-filter",
            Strategy::PredicateFilter => "predicate-filter",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Count entries under `root` selected by `strategy`.
pub fn count_matches<R: DirectoryReader>(
    reader: R,
    root: &Path,
    strategy: Strategy,
    extensions: &ExtensionSet,
) -> Result<i64> {
    let counter = match strategy {
        Strategy::PostFilter => post_filter(reader, root, extensions)?,
        Strategy::PatternFilter => pattern_filter(reader, root, extensions)?,
        Strategy::PredicateFilter => predicate_filter(reader, root, extensions)?,
    };
    Ok(counter.value())
}

fn post_filter<R: DirectoryReader>(
    reader: R,
    root: &Path,
    extensions: &ExtensionSet,
) -> Result<WorkCounter> {
    let suffix = MatchStrategy::suffix(extensions.clone());
    let config = TraversalConfig::new(root).with_scope(Scope::FilesAndDirectories);
    let walker = Walker::new(reader, config);

    let mut counter = WorkCounter::new();
    for entry in walker.walk()? {
        if suffix.matches(&entry.file_name()) {
            counter.do_work(&entry);
        }
    }
    Ok(counter)
}

fn pattern_filter<R: DirectoryReader>(
    reader: R,
    root: &Path,
    extensions: &ExtensionSet,
) -> Result<WorkCounter> {
    // Compiled before the walk so a bad pattern never touches the disk
    let pattern = MatchStrategy::pattern(&extensions.to_pattern())?;
    filtered_walk(reader, root, pattern)
}

fn predicate_filter<R: DirectoryReader>(
    reader: R,
    root: &Path,
    extensions: &ExtensionSet,
) -> Result<WorkCounter> {
    let predicate = MatchStrategy::extension_predicate(extensions.clone());
    filtered_walk(reader, root, predicate)
}

fn filtered_walk<R: DirectoryReader>(
    reader: R,
    root: &Path,
    filter: MatchStrategy,
) -> Result<WorkCounter> {
    let config = TraversalConfig::new(root)
        .with_scope(Scope::FilesOnly)
        .with_filter(filter);
    let walker = Walker::new(reader, config);

    let mut counter = WorkCounter::new();
    for entry in walker.walk()? {
        counter.do_work(&entry);
    }
    Ok(counter)
}

/// C/C++ sources under `root`, filtered after enumeration.
pub fn post_filter_count(root: impl AsRef<Path>) -> Result<i64> {
    count_matches(
        FsReader,
        root.as_ref(),
        Strategy::PostFilter,
        &ExtensionSet::c_family(),
    )
}

/// C/C++ sources under `root`, filtered by a regex inside the walk.
pub fn pattern_filter_count(root: impl AsRef<Path>) -> Result<i64> {
    count_matches(
        FsReader,
        root.as_ref(),
        Strategy::PatternFilter,
        &ExtensionSet::c_family(),
    )
}

/// C/C++ sources under `root`, filtered by an extension predicate inside the walk.
pub fn predicate_filter_count(root: impl AsRef<Path>) -> Result<i64> {
    count_matches(
        FsReader,
        root.as_ref(),
        Strategy::PredicateFilter,
        &ExtensionSet::c_family(),
    )
}
