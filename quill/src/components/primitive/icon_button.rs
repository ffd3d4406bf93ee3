use iced::widget::{button, container, text};
use iced::{Element, Length, alignment};

use crate::shared::ui::theme::{StyleOverrides, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    Standard,
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) glyph: &'static str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) glyph_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// Render a square glyph button used for window controls.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_variant_colors(
        props.variant,
        palette.dim_foreground,
        palette.blue,
        palette.red,
        props.theme.overrides,
    );

    let glyph = container(text(props.glyph).size(props.glyph_size))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(glyph)
        .on_press(IconButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let text_color = if matches!(status, button::Status::Hovered) {
                hover_color
            } else {
                base_color
            };
            button::Style {
                text_color,
                ..button::Style::default()
            }
        })
        .into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    default_base: iced::Color,
    accent: iced::Color,
    danger: iced::Color,
    overrides: Option<StyleOverrides>,
) -> (iced::Color, iced::Color) {
    if let Some(color) = overrides.and_then(|o| o.foreground) {
        return (color, color);
    }

    match variant {
        IconButtonVariant::Standard => (default_base, accent),
        IconButtonVariant::Danger => (default_base, danger),
    }
}

#[cfg(test)]
mod tests {
    use super::{IconButtonVariant, resolve_variant_colors};
    use crate::shared::ui::theme::StyleOverrides;

    #[test]
    fn given_danger_variant_when_resolving_without_override_then_hover_uses_danger()
     {
        let base = iced::Color::from_rgb(0.1, 0.2, 0.3);
        let accent = iced::Color::from_rgb(0.4, 0.5, 0.6);
        let danger = iced::Color::from_rgb(0.7, 0.8, 0.9);

        let resolved = resolve_variant_colors(
            IconButtonVariant::Danger,
            base,
            accent,
            danger,
            None,
        );

        assert_eq!(resolved, (base, danger));
    }

    #[test]
    fn given_foreground_override_when_resolving_then_override_wins() {
        let override_color = iced::Color::from_rgb(0.3, 0.2, 0.1);
        let overrides = Some(StyleOverrides {
            background: None,
            foreground: Some(override_color),
        });

        let resolved = resolve_variant_colors(
            IconButtonVariant::Standard,
            iced::Color::BLACK,
            iced::Color::WHITE,
            iced::Color::WHITE,
            overrides,
        );

        assert_eq!(resolved, (override_color, override_color));
    }
}
