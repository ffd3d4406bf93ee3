use iced::theme::Palette;
use iced::{Color, Theme};

/// Editor color palette as hex strings.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) dim_black: String,
    pub(crate) dim_blue: String,
    pub(crate) dim_white: String,
    pub(crate) dim_foreground: String,
    pub(crate) overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            dim_black: String::from("#0F1115"),
            dim_blue: String::from("#2F638F"),
            dim_white: String::from("#6C7385"),
            dim_foreground: String::from("#6B7280"),
            overlay: String::from("#232530"),
        }
    }
}

/// Parsed palette ready for iced styling closures.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_blue: Color,
    pub(crate) dim_white: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            blue: parse_hex_color(&p.blue),
            dim_black: parse_hex_color(&p.dim_black),
            dim_blue: parse_hex_color(&p.dim_blue),
            dim_white: parse_hex_color(&p.dim_white),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

/// Parse `#RRGGBB`, falling back to black on malformed input.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    match hex_channels(value) {
        Some((r, g, b)) => Color::from_rgb8(r, g, b),
        None => {
            log::warn!("invalid palette color {value}, using black");
            Color::BLACK
        },
    }
}

fn hex_channels(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    Some((channel(0..2).ok()?, channel(2..4).ok()?, channel(4..6).ok()?))
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("quill-dark"),
            iced_palette: IcedColorPalette::from(&ColorPalette::default()),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            warning: palette.yellow,
            danger: palette.red,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_hex_color;

    #[test]
    fn given_valid_hex_when_parsed_then_color_channels_match() {
        let color = parse_hex_color("#FF0000");

        assert_eq!(color, iced::Color::from_rgb8(255, 0, 0));
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_black_is_used() {
        assert_eq!(parse_hex_color("not-a-color"), iced::Color::BLACK);
        assert_eq!(parse_hex_color("#12345"), iced::Color::BLACK);
        assert_eq!(parse_hex_color("#GG0000"), iced::Color::BLACK);
    }

    #[test]
    fn given_lowercase_hex_when_parsed_then_channels_match() {
        assert_eq!(
            parse_hex_color("#1e1e2a"),
            iced::Color::from_rgb8(0x1e, 0x1e, 0x2a)
        );
    }
}
