use iced::widget::{button, container, row, text, text_input};
use iced::{Element, Length, alignment};

use crate::shared::ui::icons::WINDOW_CLOSE;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::editor::event::EditorEvent;
use crate::widgets::editor::model::FindBarViewModel;

const BAR_HEIGHT: f32 = 34.0;
const BAR_PADDING_X: f32 = 10.0;
const INPUT_WIDTH: f32 = 220.0;
const FONT_SIZE: f32 = 12.0;
const SPACING: f32 = 8.0;

/// Props for the find/replace strip above the buffer.
pub(crate) struct FindBarProps<'a> {
    pub(crate) vm: FindBarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Query input with next, and replace controls in replace mode.
pub(crate) fn view(
    props: FindBarProps<'_>,
) -> Element<'_, EditorEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let vm = props.vm;

    let query = text_input("Find", vm.query)
        .id(vm.input_id.clone())
        .on_input(EditorEvent::FindQueryChanged)
        .on_submit(EditorEvent::FindNextPressed)
        .size(FONT_SIZE)
        .width(Length::Fixed(INPUT_WIDTH));

    let mut controls = row![query, action("Next", EditorEvent::FindNextPressed)]
        .spacing(SPACING)
        .align_y(alignment::Vertical::Center);

    if vm.show_replace {
        let replacement = text_input("Replace with", vm.replacement)
            .on_input(EditorEvent::ReplacementChanged)
            .on_submit(EditorEvent::ReplacePressed)
            .size(FONT_SIZE)
            .width(Length::Fixed(INPUT_WIDTH));
        controls = controls
            .push(replacement)
            .push(action("Replace", EditorEvent::ReplacePressed));
    }

    let content = row![
        container(controls).width(Length::Fill),
        action(WINDOW_CLOSE, EditorEvent::FindClosePressed),
    ]
    .align_y(alignment::Vertical::Center);

    let background = palette.dim_black;
    let foreground = palette.foreground;
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(BAR_HEIGHT))
        .padding([0.0, BAR_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn action<'a>(
    label: &'a str,
    event: EditorEvent,
) -> Element<'a, EditorEvent, iced::Theme, iced::Renderer> {
    button(text(label).size(FONT_SIZE))
        .on_press(event)
        .padding([2.0, 8.0])
        .into()
}
