use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Raw hex palette as stored in the shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) overlay: String,
    pub(crate) accent: String,
    pub(crate) dim_accent: String,
    pub(crate) dim_foreground: String,
    pub(crate) separator: String,
    pub(crate) danger: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) dark_background: String,
    pub(crate) dark_foreground: String,
    pub(crate) dark_overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#1F1F1F"),
            background: String::from("#F5F5F5"),
            surface: String::from("#FFFFFF"),
            overlay: String::from("#F0F0F0"),
            accent: String::from("#1890FF"),
            dim_accent: String::from("#E6F4FF"),
            dim_foreground: String::from("#8C8C8C"),
            separator: String::from("#D9D9D9"),
            danger: String::from("#FF4D4F"),
            success: String::from("#52C41A"),
            warning: String::from("#FAAD14"),
            // DARK SIDEBAR
            dark_background: String::from("#001529"),
            dark_foreground: String::from("#FFFFFFA6"),
            dark_overlay: String::from("#002140"),
        }
    }
}

/// Palette converted to iced colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) accent: Color,
    pub(crate) dim_accent: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) separator: Color,
    pub(crate) danger: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) dark_background: Color,
    pub(crate) dark_foreground: Color,
    pub(crate) dark_overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let d = ColorPalette::default();
        let color = |value: &str, fallback: &str| {
            parse_hex_color(value).unwrap_or_else(|| {
                log::warn!("invalid palette color {value:?}, using {fallback}");
                parse_hex_color(fallback).unwrap_or(Color::BLACK)
            })
        };

        Self {
            foreground: color(&p.foreground, &d.foreground),
            background: color(&p.background, &d.background),
            surface: color(&p.surface, &d.surface),
            overlay: color(&p.overlay, &d.overlay),
            accent: color(&p.accent, &d.accent),
            dim_accent: color(&p.dim_accent, &d.dim_accent),
            dim_foreground: color(&p.dim_foreground, &d.dim_foreground),
            separator: color(&p.separator, &d.separator),
            danger: color(&p.danger, &d.danger),
            success: color(&p.success, &d.success),
            warning: color(&p.warning, &d.warning),
            dark_background: color(&p.dark_background, &d.dark_background),
            dark_foreground: color(&p.dark_foreground, &d.dark_foreground),
            dark_overlay: color(&p.dark_overlay, &d.dark_overlay),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !matches!(hex.len(), 6 | 8)
        || !hex.chars().all(|c| c.is_ascii_hexdigit())
    {
        return None;
    }

    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16);
    let r = channel(0).ok()?;
    let g = channel(2).ok()?;
    let b = channel(4).ok()?;
    let a = if hex.len() == 8 { channel(6).ok()? } else { u8::MAX };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
}

/// Hex-encoded style overrides accepted from configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StyleConfig {
    pub(crate) background: Option<String>,
    pub(crate) foreground: Option<String>,
}

impl StyleConfig {
    /// Convert configured colors into overrides, `None` when nothing is set.
    pub(crate) fn to_overrides(&self) -> Option<StyleOverrides> {
        let background = self.background.as_deref().and_then(parse_hex_color);
        let foreground = self.foreground.as_deref().and_then(parse_hex_color);

        if background.is_none() && foreground.is_none() {
            return None;
        }

        Some(StyleOverrides {
            background,
            foreground,
        })
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a raw palette.
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

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

    /// Return a copy carrying the given overrides.
    pub(crate) fn with_overrides(
        self,
        overrides: Option<StyleOverrides>,
    ) -> Self {
        Self { overrides, ..self }
    }
}

/// Owns the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Replace the current theme with a custom palette.
    pub(crate) fn set_custom_palette(&mut self, palette: &ColorPalette) {
        self.current = AppTheme::from_palette(String::from("custom"), palette);
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{
        ColorPalette, IcedColorPalette, StyleConfig, parse_hex_color,
    };

    #[test]
    fn given_rgb_hex_when_parsed_then_alpha_is_opaque() {
        let color = parse_hex_color("#1890FF").expect("color should parse");
        assert_eq!(color, Color::from_rgb8(0x18, 0x90, 0xFF));
    }

    #[test]
    fn given_rgba_hex_when_parsed_then_alpha_is_applied() {
        let color = parse_hex_color("#00000080").expect("color should parse");
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_none_is_returned() {
        assert!(parse_hex_color("1890FF").is_none());
        assert!(parse_hex_color("#18").is_none());
        assert!(parse_hex_color("#GG90FF").is_none());
    }

    #[test]
    fn given_invalid_palette_entry_when_converting_then_default_is_used() {
        let palette = ColorPalette {
            accent: String::from("blue"),
            ..ColorPalette::default()
        };

        let converted = IcedColorPalette::from(&palette);
        let expected = IcedColorPalette::from(&ColorPalette::default());

        assert_eq!(converted.accent, expected.accent);
    }

    #[test]
    fn given_empty_style_config_when_converting_then_no_overrides() {
        assert!(StyleConfig::default().to_overrides().is_none());

        let style = StyleConfig {
            background: Some(String::from("#101010")),
            foreground: None,
        };
        let overrides = style.to_overrides().expect("overrides expected");
        assert_eq!(overrides.background, parse_hex_color("#101010"));
        assert!(overrides.foreground.is_none());
    }
}
