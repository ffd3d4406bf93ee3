use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use quill_gateway::DirectoryEntry;

use super::model::{Children, FileNode, RootStatus, TreeRow};

/// Runtime state for the sidebar file tree.
///
/// Nodes are indexed by absolute path. The expanded set is the single
/// source of truth for folder visibility; child listings are cached on the
/// node and requested at most once per node for the life of a root.
#[derive(Debug)]
pub(crate) struct ExplorerState {
    root: Option<PathBuf>,
    root_label: Option<String>,
    root_status: RootStatus,
    top_level: Vec<PathBuf>,
    nodes: HashMap<PathBuf, FileNode>,
    expanded: HashSet<PathBuf>,
    active: Option<PathBuf>,
    hovered: Option<PathBuf>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            root: None,
            root_label: None,
            root_status: RootStatus::Idle,
            top_level: Vec::new(),
            nodes: HashMap::new(),
            expanded: HashSet::new(),
            active: None,
            hovered: None,
        }
    }
}

impl ExplorerState {
    // --- Read access ---

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub(crate) fn root_label(&self) -> Option<&str> {
        self.root_label.as_deref()
    }

    pub(crate) fn root_status(&self) -> &RootStatus {
        &self.root_status
    }

    pub(crate) fn node(&self, path: &Path) -> Option<&FileNode> {
        self.nodes.get(path)
    }

    pub(crate) fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.contains(path)
    }

    #[cfg(test)]
    pub(crate) fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    #[cfg(test)]
    pub(crate) fn active_path(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn hovered_path(&self) -> Option<&Path> {
        self.hovered.as_deref()
    }

    /// Visible rows in depth-first order.
    ///
    /// A folder's children appear only while its path is in the expanded
    /// set, whether or not they are cached.
    pub(crate) fn visible_rows(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        self.push_rows(&self.top_level, &mut rows);
        rows
    }

    fn push_rows<'a>(
        &'a self,
        paths: &'a [PathBuf],
        rows: &mut Vec<TreeRow<'a>>,
    ) {
        for path in paths {
            let Some(node) = self.nodes.get(path) else {
                continue;
            };
            let is_expanded = node.is_folder() && self.is_expanded(path);
            rows.push(TreeRow {
                node,
                is_expanded,
                is_active: self.active.as_deref() == Some(path.as_path()),
                is_hovered: self.hovered.as_deref() == Some(path.as_path()),
            });

            if is_expanded {
                if let Children::Fetched(children) = node.children() {
                    self.push_rows(children, rows);
                }
            }
        }
    }

    // --- Write access ---

    /// Replace the root, dropping every node, expansion and selection.
    pub(super) fn set_root(&mut self, root: PathBuf) {
        self.root_label = Some(root_label(&root));
        self.top_level.clear();
        self.nodes.clear();
        self.expanded.clear();
        self.active = None;
        self.hovered = None;
        self.expanded.insert(root.clone());
        self.root = Some(root);
        self.root_status = RootStatus::Loading;
    }

    /// Apply the root listing.
    ///
    /// Returns `false` when the root has changed since the load was started.
    pub(super) fn apply_root_entries(
        &mut self,
        root: &Path,
        entries: Vec<DirectoryEntry>,
    ) -> bool {
        if self.root.as_deref() != Some(root) {
            return false;
        }

        self.root_status = if entries.is_empty() {
            RootStatus::Empty
        } else {
            RootStatus::Ready
        };
        self.top_level = self.insert_nodes(entries, 0);
        true
    }

    /// Record a failed root listing; the tree renders as empty.
    pub(super) fn fail_root(&mut self, root: &Path, message: String) -> bool {
        if self.root.as_deref() != Some(root) {
            return false;
        }

        self.top_level.clear();
        self.root_status = RootStatus::Failed { message };
        true
    }

    /// Flip a folder between expanded and collapsed.
    ///
    /// Returns the directory to list when the folder is expanded for the
    /// first time. Collapsing keeps cached children.
    pub(super) fn toggle_folder(&mut self, path: &Path) -> Option<PathBuf> {
        let node = self.nodes.get_mut(path)?;
        if !node.is_folder() {
            return None;
        }

        if self.expanded.remove(path) {
            return None;
        }

        self.expanded.insert(path.to_path_buf());
        if *node.children() != Children::Unfetched {
            return None;
        }

        node.set_children(Children::Pending);
        Some(path.to_path_buf())
    }

    /// Apply a folder listing.
    ///
    /// Applies even if the folder was collapsed while the request was in
    /// flight. Returns `false` for unknown folders (stale root) and for
    /// folders whose children are already cached.
    pub(super) fn apply_folder_entries(
        &mut self,
        directory: &Path,
        entries: Vec<DirectoryEntry>,
    ) -> bool {
        let Some(node) = self.nodes.get(directory) else {
            return false;
        };
        if !node.is_folder() || matches!(node.children(), Children::Fetched(_))
        {
            return false;
        }

        let depth = node.depth() + 1;
        let children = self.insert_nodes(entries, depth);
        if let Some(node) = self.nodes.get_mut(directory) {
            node.set_children(Children::Fetched(children));
        }
        true
    }

    pub(super) fn set_active(&mut self, path: PathBuf) {
        self.active = Some(path);
    }

    pub(super) fn set_hovered(&mut self, path: PathBuf) {
        self.hovered = Some(path);
    }

    /// Clear the hover only if `path` still owns it; enter and leave
    /// notifications of neighbouring rows may arrive in either order.
    pub(super) fn clear_hovered(&mut self, path: &Path) {
        if self.hovered.as_deref() == Some(path) {
            self.hovered = None;
        }
    }

    fn insert_nodes(
        &mut self,
        entries: Vec<DirectoryEntry>,
        depth: usize,
    ) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = entry.path().to_path_buf();
            self.nodes
                .entry(path.clone())
                .or_insert_with(|| FileNode::new(entry, depth));
            paths.push(path);
        }
        paths
    }
}

/// Build the root label from a file system path.
fn root_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
