#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use iced::window::Direction;
use iced::{Element, Size, Subscription, Task, Theme};
use quill_gateway::{FileSystem, HostPlatform, LocalFileSystem};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::AppTheme;
use crate::state::State;
use crate::storage::{EDITOR_CODE_KEY, LocalStore};
use crate::widgets::chrome::{
    ChromeCommand, ChromeEffect, ChromeEvent, ChromeWidget,
};
use crate::widgets::editor::{
    EditorCommand, EditorEffect, EditorEvent, EditorWidget,
};
use crate::widgets::explorer::{
    ExplorerCommand, ExplorerEffect, ExplorerEvent, ExplorerWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

const APP_NAME: &str = "Quill";

/// Workflows spanning more than one widget.
#[derive(Debug, Clone)]
pub(crate) enum AppFlowEvent {
    /// A file row was clicked in the explorer.
    OpenFileFromTree { path: PathBuf, name: String },
    /// The editor finished loading a file.
    FileOpened { path: PathBuf },
    /// Store the buffer and quit.
    PersistAndExit,
    /// Buffer persisted (or failed to); quit now.
    Exit,
}

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Explorer widget
    ExplorerUi(ExplorerEvent),
    ExplorerEffect(ExplorerEffect),
    ExplorerCommand(ExplorerCommand),
    // Editor widget
    EditorUi(EditorEvent),
    EditorEffect(EditorEffect),
    EditorCommand(EditorCommand),
    // Chrome widget
    ChromeUi(ChromeEvent),
    ChromeEffect(ChromeEffect),
    ChromeCommand(ChromeCommand),
    // Cross-widget flows
    Flow(AppFlowEvent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
    ResizeWindow(Direction),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) explorer: ExplorerWidget,
    pub(crate) editor: EditorWidget,
    pub(crate) chrome: ChromeWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) fs: Arc<dyn FileSystem>,
    pub(crate) store: LocalStore,
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let app = Self::with_parts(
            Arc::new(LocalFileSystem),
            LocalStore::open(),
            HostPlatform::current(),
            Instant::now(),
        );

        let restore = match app.store.get(EDITOR_CODE_KEY) {
            Some(content) => {
                log::info!("restoring buffer from previous session");
                Task::done(AppEvent::EditorCommand(EditorCommand::Restore {
                    content: content.to_string(),
                }))
            },
            None => Task::none(),
        };

        let open_root = match std::env::args_os().nth(1) {
            Some(root) => Task::done(AppEvent::ExplorerCommand(
                ExplorerCommand::SetRoot {
                    root: PathBuf::from(root),
                },
            )),
            None => Task::none(),
        };

        (app, Task::batch([restore, open_root]))
    }

    /// Assemble the app from explicit collaborators.
    pub(crate) fn with_parts(
        fs: Arc<dyn FileSystem>,
        store: LocalStore,
        platform: HostPlatform,
        now: Instant,
    ) -> Self {
        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };

        Self {
            fs,
            store,
            theme: AppTheme::default(),
            fonts: FontsConfig::default(),
            state: State::new(window_size),
            widgets: Widgets {
                explorer: ExplorerWidget::new(),
                editor: EditorWidget::new(now),
                chrome: ChromeWidget::new(platform),
            },
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("{} - {APP_NAME}", self.widgets.editor.display_name())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
