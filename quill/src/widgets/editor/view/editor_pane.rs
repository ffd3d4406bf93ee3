use iced::widget::{container, text_editor};
use iced::{Element, Length};

use crate::shared::ui::fonts::EditorFonts;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::editor::event::EditorEvent;
use crate::widgets::editor::model::EditorPaneViewModel;

const EDITOR_PADDING: f32 = 8.0;

/// Props for the text editing surface.
pub(crate) struct EditorPaneProps<'a> {
    pub(crate) vm: EditorPaneViewModel<'a>,
    pub(crate) fonts: &'a EditorFonts,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the highlighted text editor filling the available space.
pub(crate) fn view(
    props: EditorPaneProps<'_>,
) -> Element<'_, EditorEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.background;
    let foreground = palette.foreground;
    let selection = palette.dim_blue;
    let placeholder = palette.dim_foreground;

    let editor = text_editor(props.vm.content)
        .highlight(
            props.vm.highlight_token,
            iced::highlighter::Theme::SolarizedDark,
        )
        .on_action(EditorEvent::ActionPerformed)
        .font(props.fonts.font_type)
        .size(props.fonts.size)
        .height(Length::Fill)
        .padding(EDITOR_PADDING)
        .style(move |theme, status| {
            let base = text_editor::default(theme, status);
            text_editor::Style {
                background: background.into(),
                border: iced::Border::default(),
                placeholder,
                value: foreground,
                selection,
                ..base
            }
        });

    container(editor)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
