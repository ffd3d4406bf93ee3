use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single file or directory returned by a directory listing.
///
/// Serialises as `{ name, path, isDirectory, isFile }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    name: String,
    path: PathBuf,
    is_directory: bool,
    is_file: bool,
}

impl DirectoryEntry {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        is_directory: bool,
        is_file: bool,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_directory,
            is_file,
        }
    }

    /// Directory entry located under `parent`.
    pub fn directory(parent: &Path, name: &str) -> Self {
        Self::new(name, parent.join(name), true, false)
    }

    /// Regular file entry located under `parent`.
    pub fn file(parent: &Path, name: &str) -> Self {
        Self::new(name, parent.join(name), false, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }
}

impl Ord for DirectoryEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match (!self.is_directory).cmp(&(!other.is_directory)) {
            Ordering::Equal => match compare_names(&self.name, &other.name) {
                Ordering::Equal => self.path.cmp(&other.path),
                order => order,
            },
            order => order,
        }
    }
}

impl PartialOrd for DirectoryEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DirectoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DirectoryEntry {}

/// Order a listing: directories first, then by name within each group.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort();
}

/// Case-insensitive comparison with case-sensitive tiebreak.
fn compare_names(left: &str, right: &str) -> Ordering {
    let left_fold = left.chars().flat_map(char::to_lowercase);
    let right_fold = right.chars().flat_map(char::to_lowercase);
    match left_fold.cmp(right_fold) {
        Ordering::Equal => left.cmp(right),
        order => order,
    }
}
