use iced::widget::{container, scrollable};
use iced::{Background, Border, Color};

use super::theme::IcedColorPalette;

const ACTIVE_ALPHA: f32 = 0.7;
const HOVER_ALPHA: f32 = 0.6;
const SCROLLER_IDLE_ALPHA: f32 = 0.35;
const SCROLLER_ENGAGED_ALPHA: f32 = 0.8;

/// Highlight applied to a file tree row.
///
/// The opened file keeps its highlight while the pointer is over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowHighlight {
    Plain,
    Hovered,
    Active,
}

impl RowHighlight {
    pub(crate) fn of(is_active: bool, is_hovered: bool) -> Self {
        match (is_active, is_hovered) {
            (true, _) => Self::Active,
            (false, true) => Self::Hovered,
            (false, false) => Self::Plain,
        }
    }

    fn background(self, palette: &IcedColorPalette) -> Option<Background> {
        let tint = |color: Color, alpha: f32| Color { a: alpha, ..color };
        match self {
            Self::Plain => None,
            Self::Hovered => Some(tint(palette.overlay, HOVER_ALPHA).into()),
            Self::Active => Some(tint(palette.dim_blue, ACTIVE_ALPHA).into()),
        }
    }
}

/// Container style of a file tree row.
pub(crate) fn tree_row_style(
    palette: &IcedColorPalette,
    highlight: RowHighlight,
) -> container::Style {
    container::Style {
        background: highlight.background(palette),
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

/// Square-cornered sidebar scrollbar that brightens while in use.
pub(crate) fn sidebar_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let alpha = match status {
            scrollable::Status::Active { .. } => SCROLLER_IDLE_ALPHA,
            scrollable::Status::Hovered { .. }
            | scrollable::Status::Dragged { .. } => SCROLLER_ENGAGED_ALPHA,
        };

        let rail = &mut style.vertical_rail;
        rail.background = None;
        rail.border = Border::default();
        rail.scroller.border = Border::default();
        rail.scroller.background = Background::Color(Color {
            a: alpha,
            ..palette.dim_foreground
        });

        style
    }
}

#[cfg(test)]
mod tests {
    use super::{RowHighlight, tree_row_style};
    use crate::shared::ui::theme::{ColorPalette, IcedColorPalette};

    #[test]
    fn given_active_row_under_pointer_when_styled_then_active_highlight_wins() {
        assert_eq!(RowHighlight::of(true, true), RowHighlight::Active);
        assert_eq!(RowHighlight::of(false, true), RowHighlight::Hovered);
        assert_eq!(RowHighlight::of(false, false), RowHighlight::Plain);
    }

    #[test]
    fn given_plain_row_when_styled_then_no_background_is_painted() {
        let palette = IcedColorPalette::from(&ColorPalette::default());

        let plain = tree_row_style(&palette, RowHighlight::Plain);
        let active = tree_row_style(&palette, RowHighlight::Active);

        assert!(plain.background.is_none());
        assert!(active.background.is_some());
        assert_eq!(plain.text_color, Some(palette.foreground));
    }
}
