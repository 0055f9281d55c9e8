use iced::Element;
use serde::{Deserialize, Serialize};

use super::event::SidebarIntent;
use super::view::style::SidebarColors;
use crate::fonts::FontsConfig;
use crate::icons::IconName;
use crate::theme::{StyleOverrides, ThemeProps};

/// Width of the drag handle on the sidebar's right edge.
pub(crate) const RESIZE_HANDLE_WIDTH: f32 = 4.0;
/// Distance below `min_width` at which a drag collapses the sidebar.
pub(crate) const COLLAPSE_THRESHOLD_OFFSET: f32 = 50.0;

/// Menu entry descriptor supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MenuItem {
    pub(crate) key: String,
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) icon: Option<IconName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<MenuItem>,
}

impl MenuItem {
    /// Build a menu entry without children.
    pub(crate) fn leaf(key: &str, label: &str, icon: Option<IconName>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon,
            children: Vec::new(),
        }
    }

    /// Return whether the entry opens a submenu instead of navigating.
    pub(crate) fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Find a menu entry by key anywhere in the tree.
pub(crate) fn find_menu_item<'a>(
    items: &'a [MenuItem],
    key: &str,
) -> Option<&'a MenuItem> {
    items.iter().find_map(|item| {
        if item.key == key {
            Some(item)
        } else {
            find_menu_item(&item.children, key)
        }
    })
}

/// Submenu presentation mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub(crate) enum MenuMode {
    /// At most one submenu is open at a time.
    Vertical,
    /// Submenus expand in place and stay open independently.
    #[default]
    Inline,
}

/// Sidebar color scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub(crate) enum MenuTheme {
    #[default]
    Light,
    Dark,
}

/// Pixel bounds governing the sidebar width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarBounds {
    pub(crate) width: f32,
    pub(crate) collapsed_width: f32,
    pub(crate) min_width: f32,
    pub(crate) max_width: f32,
}

impl SidebarBounds {
    /// Pointer position below which a drag collapses the sidebar.
    pub(crate) fn collapse_threshold(&self) -> f32 {
        self.min_width - COLLAPSE_THRESHOLD_OFFSET
    }
}

/// Context handed to a header/footer render function.
pub(crate) struct SlotContext<'a> {
    pub(crate) collapsed: bool,
    pub(crate) toggle: SidebarIntent,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) colors: SidebarColors,
}

/// Render function producing slot content from the current sidebar state.
pub(crate) type SlotRenderer =
    Box<dyn for<'a> Fn(SlotContext<'a>) -> Element<'a, SidebarIntent>>;

/// Content placed above or below the menu.
#[derive(Default)]
pub(crate) enum SidebarSlot {
    #[default]
    Empty,
    Static(String),
    Render(SlotRenderer),
}

impl SidebarSlot {
    /// Wrap a render function receiving the collapsed flag and toggle.
    pub(crate) fn render<F>(render: F) -> Self
    where
        F: for<'a> Fn(SlotContext<'a>) -> Element<'a, SidebarIntent> + 'static,
    {
        SidebarSlot::Render(Box::new(render))
    }
}

impl std::fmt::Debug for SidebarSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SidebarSlot::Empty => f.write_str("Empty"),
            SidebarSlot::Static(text) => {
                f.debug_tuple("Static").field(text).finish()
            },
            SidebarSlot::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Externally supplied sidebar configuration.
#[derive(Debug)]
pub(crate) struct SidebarProps {
    pub(crate) bounds: SidebarBounds,
    pub(crate) resizable: bool,
    pub(crate) default_collapsed: bool,
    pub(crate) menu_items: Vec<MenuItem>,
    pub(crate) default_selected_keys: Vec<String>,
    pub(crate) default_open_keys: Vec<String>,
    pub(crate) menu_mode: MenuMode,
    pub(crate) menu_theme: MenuTheme,
    pub(crate) overrides: Option<StyleOverrides>,
    pub(crate) header: SidebarSlot,
    pub(crate) footer: SidebarSlot,
}

impl Default for SidebarProps {
    fn default() -> Self {
        Self {
            bounds: SidebarBounds {
                width: 250.0,
                collapsed_width: 80.0,
                min_width: 150.0,
                max_width: 600.0,
            },
            resizable: true,
            default_collapsed: false,
            menu_items: Vec::new(),
            default_selected_keys: Vec::new(),
            default_open_keys: Vec::new(),
            menu_mode: MenuMode::Inline,
            menu_theme: MenuTheme::Light,
            overrides: None,
            header: SidebarSlot::Empty,
            footer: SidebarSlot::Empty,
        }
    }
}

/// Read-only view model for sidebar rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) collapsed: bool,
    pub(crate) rendered_width: f32,
    pub(crate) is_resizing: bool,
    pub(crate) resizable: bool,
    pub(crate) menu_items: &'a [MenuItem],
    pub(crate) selected_key: Option<&'a str>,
    pub(crate) open_keys: &'a [String],
    pub(crate) menu_theme: MenuTheme,
    pub(crate) overrides: Option<StyleOverrides>,
    pub(crate) header: &'a SidebarSlot,
    pub(crate) footer: &'a SidebarSlot,
}

#[cfg(test)]
mod tests {
    use super::{MenuItem, SidebarBounds, find_menu_item};

    #[test]
    fn given_min_width_when_threshold_requested_then_offset_is_fifty() {
        let bounds = SidebarBounds {
            width: 250.0,
            collapsed_width: 80.0,
            min_width: 150.0,
            max_width: 600.0,
        };
        assert_eq!(bounds.collapse_threshold(), 100.0);
    }

    #[test]
    fn given_nested_menu_when_searching_then_child_is_found() {
        let mut user = MenuItem::leaf("user", "User", None);
        user.children.push(MenuItem::leaf("profile", "Profile", None));
        let items = vec![MenuItem::leaf("home", "Home", None), user];

        assert!(find_menu_item(&items, "user").is_some_and(MenuItem::is_group));
        assert_eq!(
            find_menu_item(&items, "profile").map(|item| item.label.as_str()),
            Some("Profile")
        );
        assert!(find_menu_item(&items, "missing").is_none());
    }
}
