use iced::Color;

use crate::components::primitive::menu_item::MenuItemColors;
use crate::theme::{IcedColorPalette, StyleOverrides};
use crate::widgets::sidebar::model::MenuTheme;

const HANDLE_ALPHA: f32 = 0.3;
const HOVER_ALPHA: f32 = 0.6;

/// Resolved colors for one sidebar render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarColors {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    pub(crate) muted: Color,
    pub(crate) accent: Color,
    pub(crate) selected_foreground: Color,
    pub(crate) selected_background: Color,
    pub(crate) hover_background: Color,
    pub(crate) handle: Color,
    pub(crate) handle_active: Color,
}

impl SidebarColors {
    /// Pick colors for the menu theme, then apply caller overrides.
    pub(crate) fn resolve(
        theme: MenuTheme,
        palette: &IcedColorPalette,
        overrides: Option<StyleOverrides>,
    ) -> Self {
        let mut handle = palette.separator;
        handle.a = HANDLE_ALPHA;

        let (background, foreground, hover_base) = match theme {
            MenuTheme::Light => {
                (palette.surface, palette.foreground, palette.dim_accent)
            },
            MenuTheme::Dark => (
                palette.dark_background,
                palette.dark_foreground,
                palette.dark_overlay,
            ),
        };
        let (selected_foreground, selected_background) = match theme {
            MenuTheme::Light => (palette.accent, palette.dim_accent),
            MenuTheme::Dark => (Color::WHITE, palette.accent),
        };

        let mut hover_background = hover_base;
        hover_background.a = HOVER_ALPHA;

        let overrides = overrides.unwrap_or_default();

        Self {
            background: overrides.background.unwrap_or(background),
            foreground: overrides.foreground.unwrap_or(foreground),
            muted: palette.dim_foreground,
            accent: palette.accent,
            selected_foreground,
            selected_background,
            hover_background,
            handle,
            handle_active: palette.accent,
        }
    }

    /// Colors consumed by menu rows.
    pub(crate) fn menu_item(&self) -> MenuItemColors {
        MenuItemColors {
            foreground: self.foreground,
            accent: self.selected_foreground,
            selected_background: self.selected_background,
            hover_background: self.hover_background,
        }
    }
}
