use iced::widget::{Space, Stack, column, container, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::components::primitive::resize_grips;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::chrome::view::action_bar;
use crate::widgets::editor::view::{editor_pane, find_bar, status_bar};
use crate::widgets::explorer::view::sidebar_tree;

const SEPARATOR_WIDTH: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.3;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props: ThemeProps<'_> = ThemeProps::new(&app.theme);
    let chrome_vm = app.widgets.chrome.vm();

    let header = action_bar::view(action_bar::ActionBarProps {
        title: app.title(),
        vm: chrome_vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::ChromeUi);

    let pane = editor_pane::view(editor_pane::EditorPaneProps {
        vm: app.widgets.editor.pane_vm(),
        fonts: &app.fonts.editor,
        theme: theme_props,
    })
    .map(AppEvent::EditorUi);

    let editor: Element<'_, AppEvent, Theme, iced::Renderer> =
        match app.widgets.editor.find_bar_vm() {
            Some(vm) => {
                let bar = find_bar::view(find_bar::FindBarProps {
                    vm,
                    theme: theme_props,
                })
                .map(AppEvent::EditorUi);
                column![bar, pane].height(Length::Fill).into()
            },
            None => pane,
        };

    let body: Element<'_, AppEvent, Theme, iced::Renderer> =
        if app.state.is_sidebar_hidden() {
            editor
        } else {
            let sidebar = container(
                sidebar_tree::view(sidebar_tree::SidebarTreeProps {
                    vm: app.widgets.explorer.tree_vm(),
                    theme: theme_props,
                })
                .map(AppEvent::ExplorerUi),
            )
            .width(Length::Fixed(app.state.sidebar_width()))
            .height(Length::Fill);

            row![sidebar, vertical_separator(theme_props), editor]
                .height(Length::Fill)
                .into()
        };

    let status = status_bar::view(status_bar::StatusBarProps {
        vm: app.widgets.editor.status_vm(),
        theme: theme_props,
    })
    .map(AppEvent::EditorUi);

    let layout = column![header, body, status]
        .width(Length::Fill)
        .height(Length::Fill);

    // No resize grips while the window covers the whole screen.
    let grips: Element<'_, AppEvent, Theme, iced::Renderer> =
        if chrome_vm.is_fullscreen || chrome_vm.is_maximized {
            Space::new().into()
        } else {
            resize_grips::view().map(|event| match event {
                resize_grips::ResizeGripEvent::Resize(dir) => {
                    AppEvent::ResizeWindow(dir)
                },
            })
        };

    Stack::with_children([layout.into(), grips])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn vertical_separator(
    theme_props: ThemeProps<'_>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();
    let mut color = palette.dim_white;
    color.a = SEPARATOR_ALPHA;

    container(Space::new())
        .width(Length::Fixed(SEPARATOR_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
