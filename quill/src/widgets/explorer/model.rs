use std::path::{Path, PathBuf};

use quill_gateway::DirectoryEntry;

/// Left padding of a depth-0 folder row.
pub(crate) const FOLDER_BASE_INDENT: f32 = 12.0;
/// Left padding of a depth-0 file row; files have no toggle button.
pub(crate) const FILE_BASE_INDENT: f32 = 28.0;
/// Extra padding per nesting level.
pub(crate) const INDENT_STEP: f32 = 16.0;

/// Fetch state of a folder's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Children {
    /// Never requested.
    Unfetched,
    /// Listing request issued, completion not yet applied.
    Pending,
    /// Listing applied; holds child paths in display order.
    Fetched(Vec<PathBuf>),
}

/// View-side node built from a directory entry.
#[derive(Debug, Clone)]
pub(crate) struct FileNode {
    entry: DirectoryEntry,
    depth: usize,
    children: Children,
}

impl FileNode {
    pub(crate) fn new(entry: DirectoryEntry, depth: usize) -> Self {
        Self {
            entry,
            depth,
            children: Children::Unfetched,
        }
    }

    pub(crate) fn name(&self) -> &str {
        self.entry.name()
    }

    pub(crate) fn path(&self) -> &Path {
        self.entry.path()
    }

    pub(crate) fn is_folder(&self) -> bool {
        self.entry.is_directory()
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn children(&self) -> &Children {
        &self.children
    }

    pub(super) fn set_children(&mut self, children: Children) {
        self.children = children;
    }

    /// Left padding of this node's row.
    pub(crate) fn indent(&self) -> f32 {
        indent_for_depth(self.depth, self.is_folder())
    }
}

/// Row indentation as a pure function of depth.
pub(crate) fn indent_for_depth(depth: usize, is_folder: bool) -> f32 {
    let base = if is_folder {
        FOLDER_BASE_INDENT
    } else {
        FILE_BASE_INDENT
    };
    base + depth as f32 * INDENT_STEP
}

/// Recover nesting depth from a rendered indentation.
#[cfg(test)]
pub(crate) fn depth_for_indent(indent: f32, is_folder: bool) -> usize {
    let base = if is_folder {
        FOLDER_BASE_INDENT
    } else {
        FILE_BASE_INDENT
    };
    ((indent - base) / INDENT_STEP).round().max(0.0) as usize
}

/// What the tree area shows when there are no rows to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RootStatus {
    /// No folder has been opened yet.
    Idle,
    Loading,
    Ready,
    /// The folder listed successfully but had no entries.
    Empty,
    /// The folder could not be listed.
    Failed { message: String },
}

impl RootStatus {
    /// Placeholder text for the tree area, if any.
    pub(crate) fn placeholder(&self) -> Option<String> {
        match self {
            Self::Idle => Some(String::from("No folder opened")),
            Self::Loading => Some(String::from("Loading…")),
            Self::Ready => None,
            Self::Empty => Some(String::from("Folder is empty")),
            Self::Failed { message } => {
                Some(format!("Unable to open folder: {message}"))
            },
        }
    }
}

/// A visible row in depth-first order.
#[derive(Debug, Clone)]
pub(crate) struct TreeRow<'a> {
    pub(crate) node: &'a FileNode,
    pub(crate) is_expanded: bool,
    pub(crate) is_active: bool,
    pub(crate) is_hovered: bool,
}

/// Read-only view model for the explorer tree.
#[derive(Debug, Clone)]
pub(crate) struct ExplorerTreeViewModel<'a> {
    pub(crate) root_label: Option<&'a str>,
    pub(crate) rows: Vec<TreeRow<'a>>,
    pub(crate) placeholder: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{depth_for_indent, indent_for_depth};

    #[test]
    fn given_any_depth_when_indented_then_depth_is_recoverable() {
        for depth in 0..12 {
            for is_folder in [true, false] {
                let indent = indent_for_depth(depth, is_folder);
                assert_eq!(depth_for_indent(indent, is_folder), depth);
            }
        }
    }

    #[test]
    fn given_root_level_rows_when_indented_then_base_offsets_apply() {
        assert_eq!(indent_for_depth(0, true), 12.0);
        assert_eq!(indent_for_depth(0, false), 28.0);
        assert_eq!(indent_for_depth(2, true), 44.0);
    }
}
