//! Configuration for a single traversal

use std::path::{Path, PathBuf};

use super::entry::EntryKind;
use super::strategy::MatchStrategy;

/// Which entries a walk yields. Directories are descended into either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Regular files only (symlinks to files included)
    FilesOnly,
    /// Every entry: files, directories and anything else
    #[default]
    FilesAndDirectories,
}

impl Scope {
    pub fn includes(self, kind: EntryKind) -> bool {
        match self {
            Scope::FilesOnly => kind == EntryKind::File,
            Scope::FilesAndDirectories => true,
        }
    }
}

/// Root, optional filter and scope for one traversal.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub root: PathBuf,
    pub filter: Option<MatchStrategy>,
    pub scope: Scope,
}

impl TraversalConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filter: None,
            scope: Scope::default(),
        }
    }

    pub fn with_filter(mut self, filter: MatchStrategy) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
