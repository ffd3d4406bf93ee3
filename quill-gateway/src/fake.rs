//! In-memory [`FileSystem`] with request accounting, for tests.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::entry::{DirectoryEntry, sort_entries};
use crate::errors::GatewayError;
use crate::fs::FileSystem;

#[derive(Debug, Clone)]
enum FakeNode {
    Directory,
    File(String),
}

#[derive(Debug, Default)]
struct FakeInner {
    nodes: BTreeMap<PathBuf, FakeNode>,
    list_requests: HashMap<PathBuf, usize>,
    read_failures: HashMap<PathBuf, String>,
    write_failures: HashMap<PathBuf, String>,
}

/// In-memory filesystem that records how often each directory is listed.
#[derive(Debug, Default)]
pub struct FakeFileSystem {
    inner: Mutex<FakeInner>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its missing ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        {
            let mut inner = self.lock();
            for ancestor in path.as_ref().ancestors() {
                if ancestor.as_os_str().is_empty() {
                    continue;
                }
                inner
                    .nodes
                    .entry(ancestor.to_path_buf())
                    .or_insert(FakeNode::Directory);
            }
        }
        self
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(
        self,
        path: impl AsRef<Path>,
        content: impl Into<String>,
    ) -> Self {
        let path = path.as_ref();
        let this = match path.parent() {
            Some(parent) => self.with_dir(parent),
            None => self,
        };
        this.lock()
            .nodes
            .insert(path.to_path_buf(), FakeNode::File(content.into()));
        this
    }

    /// Make reads of `path` fail with `message`.
    pub fn fail_reads(self, path: impl AsRef<Path>, message: &str) -> Self {
        self.lock()
            .read_failures
            .insert(path.as_ref().to_path_buf(), message.to_string());
        self
    }

    /// Make writes to `path` fail with `message`.
    pub fn fail_writes(self, path: impl AsRef<Path>, message: &str) -> Self {
        self.lock()
            .write_failures
            .insert(path.as_ref().to_path_buf(), message.to_string());
        self
    }

    /// Number of listing requests issued for `path`.
    pub fn list_requests(&self, path: impl AsRef<Path>) -> usize {
        self.lock()
            .list_requests
            .get(path.as_ref())
            .copied()
            .unwrap_or(0)
    }

    /// Current content of the file at `path`, if any.
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.lock().nodes.get(path.as_ref()) {
            Some(FakeNode::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FakeInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSystem for FakeFileSystem {
    fn list_directory(
        &self,
        path: &Path,
    ) -> Result<Vec<DirectoryEntry>, GatewayError> {
        let mut inner = self.lock();
        *inner.list_requests.entry(path.to_path_buf()).or_default() += 1;

        match inner.nodes.get(path) {
            Some(FakeNode::Directory) => {},
            Some(FakeNode::File(_)) => {
                return Err(GatewayError::NotADirectory(path.to_path_buf()));
            },
            None => return Err(not_found(path)),
        }

        let mut entries: Vec<DirectoryEntry> = inner
            .nodes
            .iter()
            .filter(|(candidate, _)| candidate.parent() == Some(path))
            .filter_map(|(candidate, node)| {
                let name = candidate.file_name()?.to_string_lossy();
                let is_directory = matches!(node, FakeNode::Directory);
                Some(DirectoryEntry::new(
                    name.to_string(),
                    candidate.clone(),
                    is_directory,
                    !is_directory,
                ))
            })
            .collect();

        sort_entries(&mut entries);
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<String, GatewayError> {
        let inner = self.lock();
        if let Some(message) = inner.read_failures.get(path) {
            return Err(GatewayError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, message.clone()),
            ));
        }

        match inner.nodes.get(path) {
            Some(FakeNode::File(content)) => Ok(content.clone()),
            Some(FakeNode::Directory) => {
                Err(GatewayError::NotAFile(path.to_path_buf()))
            },
            None => Err(not_found(path)),
        }
    }

    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<(), GatewayError> {
        let mut inner = self.lock();
        if let Some(message) = inner.write_failures.get(path) {
            return Err(GatewayError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, message.clone()),
            ));
        }
        if matches!(inner.nodes.get(path), Some(FakeNode::Directory)) {
            return Err(GatewayError::NotAFile(path.to_path_buf()));
        }

        inner
            .nodes
            .insert(path.to_path_buf(), FakeNode::File(content.to_string()));
        Ok(())
    }

    fn file_size(&self, path: &Path) -> Result<u64, GatewayError> {
        match self.lock().nodes.get(path) {
            Some(FakeNode::File(content)) => Ok(content.len() as u64),
            Some(FakeNode::Directory) => {
                Err(GatewayError::NotAFile(path.to_path_buf()))
            },
            None => Err(not_found(path)),
        }
    }
}

fn not_found(path: &Path) -> GatewayError {
    GatewayError::io(
        path,
        io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
    )
}
