//! Recursive directory traversal
//!
//! A single depth-first engine serves every match strategy:
//!
//! - `DirectoryReader`: the filesystem seam (list children, stat a path)
//! - `Walker`: turns a `TraversalConfig` into a lazy `Walk` iterator
//! - `MatchStrategy`: optional per-entry decision pushed into the walk

mod config;
mod entry;
mod reader;
mod strategy;
mod walker;

pub use config::{Scope, TraversalConfig};
pub use entry::{EntryKind, FileSystemEntry};
pub use reader::{DirChild, DirectoryReader, FsChildren, FsReader, MemoryReader};
pub use strategy::{MatchStrategy, Predicate};
pub use walker::{Walk, Walker};
