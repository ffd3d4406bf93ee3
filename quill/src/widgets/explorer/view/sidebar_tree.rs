use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, mouse_area, row, scrollable, text};
use iced::{Element, Length, alignment};

use crate::shared::ui::icons::{
    FOLDER, FOLDER_COLLAPSED_TOGGLE, FOLDER_EXPANDED_TOGGLE, file_icon,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::shared::ui::tree_style::{
    RowHighlight, sidebar_scroll_style, tree_row_style,
};
use crate::widgets::explorer::event::ExplorerEvent;
use crate::widgets::explorer::model::{ExplorerTreeViewModel, TreeRow};

const HEADER_HEIGHT: f32 = 30.0;
const HEADER_PADDING_X: f32 = 12.0;
const HEADER_FONT_SIZE: f32 = 11.0;

const BAR_HEIGHT: f32 = 26.0;
const BAR_PADDING_X: f32 = 12.0;
const BAR_FONT_SIZE: f32 = 12.0;

const TREE_ROW_HEIGHT: f32 = 24.0;
const TREE_FONT_SIZE: f32 = 13.0;
const TOGGLE_WIDTH: f32 = 12.0;
const TOGGLE_FONT_SIZE: f32 = 9.0;
const ICON_WIDTH: f32 = 18.0;
const TREE_ROW_SPACING: f32 = 4.0;

const PLACEHOLDER_PADDING: f32 = 16.0;

/// Props for the explorer sidebar tree view.
#[derive(Debug, Clone)]
pub(crate) struct SidebarTreeProps<'a> {
    pub(crate) vm: ExplorerTreeViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the explorer sidebar (header, root bar and tree).
pub(crate) fn view(
    props: SidebarTreeProps<'_>,
) -> Element<'_, ExplorerEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let header = explorer_header(palette);
    let mut content = column![header].width(Length::Fill);

    if let Some(label) = props.vm.root_label {
        content = content.push(root_bar(label, palette));
    }

    let body = match props.vm.placeholder {
        Some(message) => placeholder(message, palette),
        None => explorer_tree(props.vm.rows, palette),
    };

    container(content.push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.dim_black.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn explorer_header<'a>(
    palette: &'a IcedColorPalette,
) -> Element<'a, ExplorerEvent, iced::Theme, iced::Renderer> {
    let title = text("EXPLORER")
        .size(HEADER_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    let dim = palette.dim_foreground;
    let accent = palette.blue;
    let open_folder = button(text("Open Folder").size(HEADER_FONT_SIZE))
        .on_press(ExplorerEvent::OpenFolderPressed)
        .padding([2.0, 6.0])
        .style(move |_, status| button::Style {
            text_color: if matches!(status, button::Status::Hovered) {
                accent
            } else {
                dim
            },
            ..button::Style::default()
        });

    container(row![title, open_folder].align_y(alignment::Vertical::Center))
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn root_bar<'a>(
    label: &'a str,
    palette: &'a IcedColorPalette,
) -> Element<'a, ExplorerEvent, iced::Theme, iced::Renderer> {
    let overlay = palette.overlay;

    container(
        text(label)
            .size(BAR_FONT_SIZE)
            .width(Length::Fill)
            .wrapping(Wrapping::None),
    )
    .width(Length::Fill)
    .height(Length::Fixed(BAR_HEIGHT))
    .padding([0.0, BAR_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(overlay.into()),
        ..Default::default()
    })
    .into()
}

fn placeholder<'a>(
    message: String,
    palette: &'a IcedColorPalette,
) -> Element<'a, ExplorerEvent, iced::Theme, iced::Renderer> {
    let dim = palette.dim_foreground;

    container(text(message).size(TREE_FONT_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PLACEHOLDER_PADDING)
        .align_x(alignment::Horizontal::Center)
        .style(move |_| container::Style {
            text_color: Some(dim),
            ..Default::default()
        })
        .into()
}

fn explorer_tree<'a>(
    rows: Vec<TreeRow<'a>>,
    palette: &'a IcedColorPalette,
) -> Element<'a, ExplorerEvent, iced::Theme, iced::Renderer> {
    let entries: Vec<Element<'a, ExplorerEvent, iced::Theme, iced::Renderer>> =
        rows.into_iter().map(|row| tree_row(row, palette)).collect();

    let content = column(entries).width(Length::Fill).spacing(0);

    scrollable::Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
        ))
        .style(sidebar_scroll_style(palette.clone()))
        .into()
}

/// Render a single tree row with toggle, icon and label.
fn tree_row<'a>(
    row_vm: TreeRow<'a>,
    palette: &'a IcedColorPalette,
) -> Element<'a, ExplorerEvent, iced::Theme, iced::Renderer> {
    let node = row_vm.node;

    let toggle = if node.is_folder() {
        if row_vm.is_expanded {
            FOLDER_EXPANDED_TOGGLE
        } else {
            FOLDER_COLLAPSED_TOGGLE
        }
    } else {
        ""
    };
    let icon = if node.is_folder() {
        FOLDER
    } else {
        file_icon(node.name())
    };

    let dim = palette.dim_foreground;
    let toggle_view = container(text(toggle).size(TOGGLE_FONT_SIZE))
        .width(Length::Fixed(TOGGLE_WIDTH))
        .align_x(alignment::Horizontal::Center)
        .style(move |_| container::Style {
            text_color: Some(dim),
            ..Default::default()
        });

    let mut leading = row![].spacing(TREE_ROW_SPACING);
    if node.is_folder() {
        leading = leading.push(toggle_view);
    }

    let content = row![
        iced::widget::Space::new().width(Length::Fixed(node.indent())),
        leading,
        container(text(icon).size(TREE_FONT_SIZE))
            .width(Length::Fixed(ICON_WIDTH)),
        text(node.name())
            .size(TREE_FONT_SIZE)
            .width(Length::Fill)
            .wrapping(Wrapping::None),
    ]
    .spacing(TREE_ROW_SPACING)
    .align_y(alignment::Vertical::Center);

    let highlight = RowHighlight::of(row_vm.is_active, row_vm.is_hovered);
    let row_style = tree_row_style(palette, highlight);

    let styled_row = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TREE_ROW_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(move |_| row_style);

    let path = node.path().to_path_buf();

    mouse_area(styled_row)
        .on_enter(ExplorerEvent::NodeHovered { path: path.clone() })
        .on_exit(ExplorerEvent::NodeHoverLeft { path: path.clone() })
        .on_press(ExplorerEvent::NodePressed { path })
        .into()
}
