//! Depth-first walker producing a lazy entry sequence

use std::iter::FusedIterator;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{Result, WalkError};

use super::config::TraversalConfig;
use super::entry::{EntryKind, FileSystemEntry};
use super::reader::DirectoryReader;

/// Walks one directory tree with a fixed configuration.
///
/// Every call to [`Walker::walk`] starts a fresh traversal; a [`Walk`] cannot
/// be restarted once consumed.
#[derive(Debug)]
pub struct Walker<R> {
    reader: R,
    config: TraversalConfig,
}

impl<R: DirectoryReader> Walker<R> {
    pub fn new(reader: R, config: TraversalConfig) -> Self {
        Self { reader, config }
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Open the root and return the entry iterator.
    ///
    /// Fails if the root is missing, is not a directory, or cannot be opened.
    /// Failures below the root are logged and skipped.
    pub fn walk(&self) -> Result<Walk<'_, R>> {
        let root = self.config.root();
        match self.reader.metadata(root) {
            Ok(EntryKind::Directory) => {}
            Ok(_) => {
                return Err(WalkError::NotADirectory {
                    path: root.to_path_buf(),
                });
            }
            Err(e) => return Err(WalkError::from_io(root, e)),
        }

        let children = self
            .reader
            .read_dir(root)
            .map_err(|e| WalkError::from_io(root, e))?;

        debug!(root = %root.display(), scope = ?self.config.scope, "starting traversal");

        Ok(Walk {
            reader: &self.reader,
            config: &self.config,
            stack: vec![DirFrame {
                path: root.to_path_buf(),
                depth: 0,
                children,
            }],
            yielded: 0,
            skipped: 0,
        })
    }
}

/// Open listing of one directory on the descent stack.
struct DirFrame<C> {
    path: PathBuf,
    depth: usize,
    children: C,
}

/// Lazy depth-first sequence of entries below a root.
///
/// Holds at most one open listing per level of the current descent path.
pub struct Walk<'a, R: DirectoryReader> {
    reader: &'a R,
    config: &'a TraversalConfig,
    stack: Vec<DirFrame<R::Children>>,
    yielded: usize,
    skipped: usize,
}

impl<R: DirectoryReader> Walk<'_, R> {
    /// Subtrees skipped because their directory could not be opened.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Entries yielded so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    fn descend(&mut self, path: PathBuf, depth: usize) {
        match self.reader.read_dir(&path) {
            Ok(children) => self.stack.push(DirFrame {
                path,
                depth,
                children,
            }),
            Err(e) => {
                self.skipped += 1;
                warn!(path = %path.display(), error = %e, "skipping unreadable directory");
            }
        }
    }

    fn accepts(&self, entry: &FileSystemEntry) -> bool {
        if !self.config.scope.includes(entry.kind()) {
            return false;
        }
        match &self.config.filter {
            Some(strategy) => strategy.matches(&entry.file_name()),
            None => true,
        }
    }
}

impl<R: DirectoryReader> Iterator for Walk<'_, R> {
    type Item = FileSystemEntry;

    fn next(&mut self) -> Option<FileSystemEntry> {
        loop {
            let frame = self.stack.last_mut()?;
            let child = match frame.children.next() {
                Some(Ok(child)) => child,
                Some(Err(e)) => {
                    warn!(dir = %frame.path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
                None => {
                    self.stack.pop();
                    if self.stack.is_empty() {
                        debug!(
                            yielded = self.yielded,
                            skipped = self.skipped,
                            "traversal finished"
                        );
                    }
                    continue;
                }
            };

            let path = frame.path.join(&child.name);
            let depth = frame.depth + 1;

            // Linked directories are reported but never entered
            if child.kind == EntryKind::Directory && !child.is_symlink {
                self.descend(path.clone(), depth);
            }

            let entry = FileSystemEntry::new(path, child.kind, depth, child.is_symlink);
            if self.accepts(&entry) {
                self.yielded += 1;
                return Some(entry);
            }
        }
    }
}

impl<R: DirectoryReader> FusedIterator for Walk<'_, R> {}
