use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text};
use iced::{Element, Length, alignment};

use crate::shared::ui::theme::ThemeProps;
use crate::widgets::editor::event::EditorEvent;
use crate::widgets::editor::model::StatusBarViewModel;

const STATUS_BAR_HEIGHT: f32 = 24.0;
const STATUS_FONT_SIZE: f32 = 12.0;
const STATUS_PADDING_X: f32 = 10.0;
const STATUS_SPACING: f32 = 16.0;

/// Props for the bottom status bar.
#[derive(Debug, Clone)]
pub(crate) struct StatusBarProps<'a> {
    pub(crate) vm: StatusBarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render cursor position, file details, status text and the autosave
/// toggle.
pub(crate) fn view(
    props: StatusBarProps<'_>,
) -> Element<'_, EditorEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let vm = props.vm;

    let position = format!(
        "Line {}, Col {} | Lines: {}",
        vm.line, vm.column, vm.line_count
    );

    let mut left = row![label(position), label(vm.mode_name)]
        .spacing(STATUS_SPACING)
        .align_y(alignment::Vertical::Center);
    if let Some(size) = vm.file_size {
        left = left.push(label(size));
    }

    let autosave_label = if vm.autosave_enabled {
        "Auto-save: On"
    } else {
        "Auto-save: Off"
    };
    let accent = palette.blue;
    let foreground = palette.foreground;
    let autosave = button(text(autosave_label).size(STATUS_FONT_SIZE))
        .on_press(EditorEvent::AutosaveToggled)
        .padding([0.0, 4.0])
        .style(move |_, status| button::Style {
            text_color: if matches!(status, button::Status::Hovered) {
                accent
            } else {
                foreground
            },
            ..button::Style::default()
        });

    let content = row![
        container(left).width(Length::Fill),
        label(vm.message),
        autosave,
    ]
    .spacing(STATUS_SPACING)
    .align_y(alignment::Vertical::Center);

    let background = palette.dim_blue;
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(STATUS_BAR_HEIGHT))
        .padding([0.0, STATUS_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn label<'a>(
    value: impl ToString,
) -> Element<'a, EditorEvent, iced::Theme, iced::Renderer> {
    text(value.to_string())
        .size(STATUS_FONT_SIZE)
        .wrapping(Wrapping::None)
        .into()
}
