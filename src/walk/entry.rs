//! Entries yielded by the walker

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::ext::filename_ext;

/// Kind of filesystem node. Symlinks report the kind of their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, fifos, devices and dangling links
    Other,
}

/// One node visited during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemEntry {
    path: PathBuf,
    kind: EntryKind,
    depth: usize,
    is_symlink: bool,
}

impl FileSystemEntry {
    pub fn new(path: PathBuf, kind: EntryKind, depth: usize, is_symlink: bool) -> Self {
        Self {
            path,
            kind,
            depth,
            is_symlink,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    /// Depth below the traversal root; direct children are at depth 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Final path component, lossily converted for non-UTF-8 names.
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Extension without its dot; empty for dotless and leading-dot names.
    pub fn extension(&self) -> String {
        let name = self.file_name();
        filename_ext(&name).trim_start_matches('.').to_string()
    }
}
