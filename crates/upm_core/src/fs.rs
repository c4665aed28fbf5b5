//! Filesystem collaborators.
//!
//! The assembler only asks whether a path exists; the executor creates
//! directories and writes files. Both go through [`Filesystem`] so that plans
//! can be checked and realized against disk or against memory.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

/// Filesystem operations needed to realize a build plan.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and any missing parents.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// A recorded filesystem operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOp {
    CreateDir(PathBuf),
    WriteFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(String),
}

/// In-memory filesystem that records every mutating call in order.
///
/// Used for dry runs and tests. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryFs {
    nodes: Arc<RwLock<BTreeMap<PathBuf, Node>>>,
    ops: Arc<RwLock<Vec<FsOp>>>,
    failing: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing directory. Not recorded as an operation.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.nodes.write().insert(path.into(), Node::Dir);
        self
    }

    /// Make writes to `path` fail with a permission error.
    pub fn fail_on(self, path: impl Into<PathBuf>) -> Self {
        self.failing.write().insert(path.into());
        self
    }

    /// Mutating operations performed so far.
    pub fn operations(&self) -> Vec<FsOp> {
        self.ops.read().clone()
    }

    /// Contents of a written file.
    pub fn read(&self, path: &Path) -> Option<String> {
        match self.nodes.read().get(path) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.read().get(path), Some(Node::Dir))
    }

    /// Number of paths currently present.
    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }

    fn check(&self, path: &Path) -> io::Result<()> {
        if self.failing.read().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write to {} refused", path.display()),
            ));
        }
        Ok(())
    }
}

impl Filesystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.read().contains_key(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.check(path)?;
        if let Some(Node::File(_)) = self.nodes.read().get(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            ));
        }

        let mut nodes = self.nodes.write();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
        drop(nodes);

        self.ops.write().push(FsOp::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check(path)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.is_dir(parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("parent directory {} does not exist", parent.display()),
                ));
            }
        }

        self.nodes
            .write()
            .insert(path.to_path_buf(), Node::File(contents.to_string()));
        self.ops.write().push(FsOp::WriteFile(path.to_path_buf()));
        Ok(())
    }
}
