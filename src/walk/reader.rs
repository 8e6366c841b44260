//! Directory readers: the walker's only view of the filesystem

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::entry::EntryKind;

/// One child returned by [`DirectoryReader::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub name: OsString,
    /// Kind of the node, or of the link target for symlinks
    pub kind: EntryKind,
    pub is_symlink: bool,
}

/// Lists and stats paths on behalf of the walker.
///
/// `read_dir` hands back an iterator that owns whatever handle backs the
/// listing; the walker drops it as soon as the listing is exhausted.
pub trait DirectoryReader {
    type Children: Iterator<Item = io::Result<DirChild>>;

    /// Kind of `path`, following symlinks.
    fn metadata(&self, path: &Path) -> io::Result<EntryKind>;

    /// Immediate children of `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Self::Children>;
}

impl<R: DirectoryReader + ?Sized> DirectoryReader for &R {
    type Children = R::Children;

    fn metadata(&self, path: &Path) -> io::Result<EntryKind> {
        (**self).metadata(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Self::Children> {
        (**self).read_dir(path)
    }
}

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Reader backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirectoryReader for FsReader {
    type Children = FsChildren;

    fn metadata(&self, path: &Path) -> io::Result<EntryKind> {
        fs::metadata(path).map(|meta| kind_of(meta.file_type()))
    }

    fn read_dir(&self, path: &Path) -> io::Result<FsChildren> {
        fs::read_dir(path).map(|inner| FsChildren { inner })
    }
}

/// Open directory listing; the handle closes on drop.
#[derive(Debug)]
pub struct FsChildren {
    inner: fs::ReadDir,
}

impl Iterator for FsChildren {
    type Item = io::Result<DirChild>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e)),
        };
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => return Some(Err(e)),
        };

        let is_symlink = file_type.is_symlink();
        let kind = if is_symlink {
            // Dangling or looping links have no target kind
            fs::metadata(entry.path())
                .map(|meta| kind_of(meta.file_type()))
                .unwrap_or(EntryKind::Other)
        } else {
            kind_of(file_type)
        };

        Some(Ok(DirChild {
            name: entry.file_name(),
            kind,
            is_symlink,
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemNode {
    File,
    Dir { readable: bool },
}

/// In-memory tree for tests and benchmarks that must not touch the disk.
///
/// Children are listed in lexical order. Adding a path creates its missing
/// ancestors as readable directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    nodes: BTreeMap<PathBuf, MemNode>,
}

impl MemoryReader {
    /// Empty tree rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut reader = Self::default();
        reader.insert(root.into(), MemNode::Dir { readable: true });
        reader
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), MemNode::File);
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), MemNode::Dir { readable: true });
        self
    }

    /// Directory that exists but fails to open with `PermissionDenied`.
    pub fn with_unreadable_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), MemNode::Dir { readable: false });
        self
    }

    fn insert(&mut self, path: PathBuf, node: MemNode) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(MemNode::Dir { readable: true });
        }
        self.nodes.insert(path, node);
    }
}

impl DirectoryReader for MemoryReader {
    type Children = std::vec::IntoIter<io::Result<DirChild>>;

    fn metadata(&self, path: &Path) -> io::Result<EntryKind> {
        match self.nodes.get(path) {
            Some(MemNode::File) => Ok(EntryKind::File),
            Some(MemNode::Dir { .. }) => Ok(EntryKind::Directory),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Self::Children> {
        match self.nodes.get(path) {
            Some(MemNode::Dir { readable: true }) => {}
            Some(MemNode::Dir { readable: false }) => {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            Some(MemNode::File) => {
                return Err(io::Error::other(format!(
                    "{} is not a directory",
                    path.display()
                )));
            }
            None => return Err(io::Error::from(io::ErrorKind::NotFound)),
        }

        let children: Vec<_> = self
            .nodes
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, node)| {
                let name = child.file_name()?.to_os_string();
                let kind = match node {
                    MemNode::File => EntryKind::File,
                    MemNode::Dir { .. } => EntryKind::Directory,
                };
                Some(Ok(DirChild {
                    name,
                    kind,
                    is_symlink: false,
                }))
            })
            .collect();

        Ok(children.into_iter())
    }
}
