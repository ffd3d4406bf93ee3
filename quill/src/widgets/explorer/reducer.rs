use std::path::PathBuf;

use iced::Task;

use super::command::ExplorerCommand;
use super::event::ExplorerEffect;
use super::state::ExplorerState;

/// Reduce an explorer command into state updates and effects.
pub(crate) fn reduce(
    state: &mut ExplorerState,
    command: ExplorerCommand,
) -> Task<ExplorerEffect> {
    match command {
        ExplorerCommand::OpenFolder => {
            Task::done(ExplorerEffect::PickFolderRequested)
        },
        ExplorerCommand::FolderPicked { root: Some(root) }
        | ExplorerCommand::SetRoot { root } => reduce_set_root(state, root),
        ExplorerCommand::FolderPicked { root: None } => Task::none(),
        ExplorerCommand::RootLoaded { root, entries } => {
            if !state.apply_root_entries(&root, entries) {
                log::debug!("explorer ignored stale root listing");
            }
            Task::none()
        },
        ExplorerCommand::RootLoadFailed { root, message } => {
            log::warn!("explorer failed to load {}: {message}", root.display());
            let _ = state.fail_root(&root, message);
            Task::none()
        },
        ExplorerCommand::NodePressed { path } => {
            reduce_node_pressed(state, path)
        },
        ExplorerCommand::NodeHovered { path } => {
            state.set_hovered(path);
            Task::none()
        },
        ExplorerCommand::NodeHoverLeft { path } => {
            state.clear_hovered(&path);
            Task::none()
        },
        ExplorerCommand::FolderLoaded { directory, entries } => {
            if !state.apply_folder_entries(&directory, entries) {
                log::debug!("explorer ignored listing for {}", directory.display());
            }
            Task::none()
        },
        ExplorerCommand::FolderLoadFailed { directory, message } => {
            log::warn!(
                "explorer failed to load {}: {message}",
                directory.display()
            );
            let _ = state.apply_folder_entries(&directory, Vec::new());
            Task::none()
        },
        ExplorerCommand::MarkActive { path } => {
            state.set_active(path);
            Task::none()
        },
    }
}

fn reduce_set_root(
    state: &mut ExplorerState,
    root: PathBuf,
) -> Task<ExplorerEffect> {
    state.set_root(root.clone());
    Task::done(ExplorerEffect::LoadRootRequested { root })
}

/// Folders toggle; files ask to be opened.
fn reduce_node_pressed(
    state: &mut ExplorerState,
    path: PathBuf,
) -> Task<ExplorerEffect> {
    let Some(node) = state.node(&path) else {
        return Task::none();
    };

    if !node.is_folder() {
        let name = node.name().to_string();
        return Task::done(ExplorerEffect::OpenFileRequested { path, name });
    }

    match state.toggle_folder(&path) {
        Some(directory) => {
            Task::done(ExplorerEffect::LoadFolderRequested { directory })
        },
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use quill_gateway::DirectoryEntry;

    use super::*;
    use crate::widgets::explorer::model::RootStatus;

    fn with_root(entries: Vec<DirectoryEntry>) -> ExplorerState {
        let mut state = ExplorerState::default();
        let root = PathBuf::from("/work");
        let _ = reduce(&mut state, ExplorerCommand::SetRoot { root: root.clone() });
        let _ = reduce(&mut state, ExplorerCommand::RootLoaded { root, entries });
        state
    }

    #[test]
    fn given_cancelled_folder_picker_when_reduced_then_tree_is_kept() {
        let mut state = with_root(vec![DirectoryEntry::file(
            Path::new("/work"),
            "main.rs",
        )]);

        let _ = reduce(&mut state, ExplorerCommand::FolderPicked { root: None });

        assert_eq!(state.root(), Some(Path::new("/work")));
        assert_eq!(state.visible_rows().len(), 1);
    }

    #[test]
    fn given_picked_folder_when_reduced_then_root_is_replaced() {
        let mut state =
            with_root(vec![DirectoryEntry::directory(Path::new("/work"), "src")]);

        let _ = reduce(
            &mut state,
            ExplorerCommand::FolderPicked {
                root: Some(PathBuf::from("/other")),
            },
        );

        assert_eq!(state.root_label(), Some("other"));
        assert!(state.visible_rows().is_empty());
        assert_eq!(state.root_status(), &RootStatus::Loading);
    }

    #[test]
    fn given_folder_node_when_pressed_then_it_expands() {
        let mut state =
            with_root(vec![DirectoryEntry::directory(Path::new("/work"), "src")]);

        let _ = reduce(
            &mut state,
            ExplorerCommand::NodePressed {
                path: PathBuf::from("/work/src"),
            },
        );

        assert!(state.is_expanded(Path::new("/work/src")));
    }

    #[test]
    fn given_file_node_when_pressed_then_active_row_waits_for_load() {
        let mut state = with_root(vec![DirectoryEntry::file(
            Path::new("/work"),
            "main.rs",
        )]);

        let _ = reduce(
            &mut state,
            ExplorerCommand::NodePressed {
                path: PathBuf::from("/work/main.rs"),
            },
        );
        assert_eq!(state.active_path(), None);

        let _ = reduce(
            &mut state,
            ExplorerCommand::MarkActive {
                path: PathBuf::from("/work/main.rs"),
            },
        );
        assert_eq!(state.active_path(), Some(Path::new("/work/main.rs")));
    }

    #[test]
    fn given_folder_load_failure_when_reduced_then_folder_renders_empty() {
        let mut state =
            with_root(vec![DirectoryEntry::directory(Path::new("/work"), "src")]);
        let _ = reduce(
            &mut state,
            ExplorerCommand::NodePressed {
                path: PathBuf::from("/work/src"),
            },
        );

        let _ = reduce(
            &mut state,
            ExplorerCommand::FolderLoadFailed {
                directory: PathBuf::from("/work/src"),
                message: String::from("EACCES"),
            },
        );

        assert_eq!(state.visible_rows().len(), 1);
        assert!(state.is_expanded(Path::new("/work/src")));
    }

    #[test]
    fn given_hover_moves_up_when_old_row_leaves_last_then_new_row_stays_hovered()
    {
        let mut state = ExplorerState::default();

        let _ = reduce(
            &mut state,
            ExplorerCommand::NodeHovered {
                path: PathBuf::from("/work/b.rs"),
            },
        );
        let _ = reduce(
            &mut state,
            ExplorerCommand::NodeHovered {
                path: PathBuf::from("/work/a.rs"),
            },
        );
        let _ = reduce(
            &mut state,
            ExplorerCommand::NodeHoverLeft {
                path: PathBuf::from("/work/b.rs"),
            },
        );
        assert_eq!(state.hovered_path(), Some(Path::new("/work/a.rs")));

        let _ = reduce(
            &mut state,
            ExplorerCommand::NodeHoverLeft {
                path: PathBuf::from("/work/a.rs"),
            },
        );
        assert_eq!(state.hovered_path(), None);
    }
}
