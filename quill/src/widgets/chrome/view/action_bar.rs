use iced::widget::{MouseArea, Row, Space, Stack, container, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::icon_button::{
    IconButtonEvent, IconButtonProps, IconButtonVariant,
    view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{
    SIDEBAR_TOGGLE, WINDOW_CLOSE, WINDOW_MAXIMIZE, WINDOW_MINIMIZE,
    WINDOW_RESTORE,
};
use crate::shared::ui::theme::{StyleOverrides, ThemeProps};
use crate::widgets::chrome::event::ChromeEvent;
use crate::widgets::chrome::model::ChromeViewModel;

pub(crate) const ACTION_BAR_HEIGHT: f32 = 32.0;
const ACTION_BAR_TITLE_SCALE: f32 = 0.9;
const ACTION_BAR_CONTROL_BUTTON_SIZE: f32 = 24.0;
const ACTION_BAR_CONTROL_GLYPH_SIZE: f32 = 14.0;
const ACTION_BAR_HORIZONTAL_PADDING: f32 = 8.0;
const ACTION_BAR_SPACING: f32 = 8.0;
const ACTION_BAR_CONTROLS_SPACING: f32 = 4.0;

/// Props for rendering the action bar.
#[derive(Debug, Clone)]
pub(crate) struct ActionBarProps<'a> {
    pub(crate) title: String,
    pub(crate) vm: ChromeViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the draggable title bar with sidebar toggle and window controls.
pub(crate) fn view<'a>(props: ActionBarProps<'a>) -> Element<'a, ChromeEvent> {
    let title_font_size = props.fonts.ui.size * ACTION_BAR_TITLE_SCALE;
    let palette = props.theme.theme.iced_palette();
    let overrides = props.theme.overrides;
    let dim_foreground = palette.dim_foreground;
    let dim_black = palette.dim_black;

    let title = container(
        text(props.title)
            .size(title_font_size)
            .font(props.fonts.ui.font_type),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| iced::widget::container::Style {
        text_color: Some(resolve_text_color(dim_foreground, overrides)),
        ..Default::default()
    });

    let sidebar_toggle =
        icon_button(SIDEBAR_TOGGLE, IconButtonVariant::Standard, props.theme)
            .map(|_| ChromeEvent::SidebarTogglePressed);

    let controls = window_controls(props.theme, props.vm.is_maximized);

    let base_row: Row<'a, ChromeEvent> = if props.vm.controls_leading {
        row![controls, sidebar_toggle, Space::new().width(Length::Fill)]
    } else {
        row![sidebar_toggle, Space::new().width(Length::Fill), controls]
    };
    let base_row = base_row
        .spacing(ACTION_BAR_SPACING)
        .padding([0.0, ACTION_BAR_HORIZONTAL_PADDING])
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    let drag_surface = MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(ChromeEvent::TitleBarPressed)
    .on_double_click(ChromeEvent::TitleBarDoubleClicked);

    let content = Stack::new().push(drag_surface).push(title).push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(resolve_background(dim_black, overrides).into()),
            ..Default::default()
        })
        .into()
}

fn window_controls(
    theme: ThemeProps<'_>,
    is_maximized: bool,
) -> Element<'_, ChromeEvent> {
    let maximize_glyph = if is_maximized {
        WINDOW_RESTORE
    } else {
        WINDOW_MAXIMIZE
    };

    row![
        icon_button(WINDOW_MINIMIZE, IconButtonVariant::Standard, theme)
            .map(|_| ChromeEvent::MinimizePressed),
        icon_button(maximize_glyph, IconButtonVariant::Standard, theme)
            .map(|_| ChromeEvent::MaximizePressed),
        icon_button(WINDOW_CLOSE, IconButtonVariant::Danger, theme)
            .map(|_| ChromeEvent::ClosePressed),
    ]
    .spacing(ACTION_BAR_CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn icon_button<'a>(
    glyph: &'static str,
    variant: IconButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent> {
    icon_button_view(IconButtonProps {
        glyph,
        theme,
        size: ACTION_BAR_CONTROL_BUTTON_SIZE,
        glyph_size: ACTION_BAR_CONTROL_GLYPH_SIZE,
        variant,
    })
}

fn resolve_background(
    default_color: iced::Color,
    overrides: Option<StyleOverrides>,
) -> iced::Color {
    overrides
        .and_then(|o| o.background)
        .unwrap_or(default_color)
}

fn resolve_text_color(
    default_color: iced::Color,
    overrides: Option<StyleOverrides>,
) -> iced::Color {
    overrides
        .and_then(|o| o.foreground)
        .unwrap_or(default_color)
}
