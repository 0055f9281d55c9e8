use serde::{Deserialize, Serialize};

use crate::icons::IconName;
use crate::theme::{ColorPalette, StyleConfig};
use crate::widgets::sidebar::model::{MenuItem, MenuMode, MenuTheme};
use crate::widgets::title_bar::model::BarItem;

pub(crate) const DEFAULT_TITLE: &str = "Mycelium";
pub(crate) const DEFAULT_SIDEBAR_WIDTH: f32 = 250.0;
pub(crate) const DEFAULT_COLLAPSED_WIDTH: f32 = 80.0;
pub(crate) const DEFAULT_MIN_WIDTH: f32 = 150.0;
pub(crate) const DEFAULT_MAX_WIDTH: f32 = 600.0;

/// Root shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ShellConfig {
    pub(crate) title: String,
    pub(crate) title_bar: TitleBarConfig,
    pub(crate) sidebar: SidebarConfig,
    pub(crate) menu: Vec<MenuItem>,
    pub(crate) profile: ProfileConfig,
    pub(crate) palette: ColorPalette,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_TITLE),
            title_bar: TitleBarConfig::default(),
            sidebar: SidebarConfig::default(),
            menu: vec![MenuItem::leaf("home", "Home", Some(IconName::Home))],
            profile: ProfileConfig::default(),
            palette: ColorPalette::default(),
        }
    }
}

impl ShellConfig {
    /// Return a copy with sidebar bounds made consistent.
    pub(crate) fn normalized(mut self) -> Self {
        self.sidebar = self.sidebar.normalized();
        self
    }
}

/// Title bar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct TitleBarConfig {
    pub(crate) icon: Option<IconName>,
    pub(crate) left: Vec<BarItem>,
    pub(crate) right: Vec<BarItem>,
    pub(crate) style: StyleConfig,
    pub(crate) double_click_maximize: bool,
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            icon: Some(IconName::Compass),
            left: Vec::new(),
            right: Vec::new(),
            style: StyleConfig::default(),
            double_click_maximize: false,
        }
    }
}

/// Sidebar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SidebarConfig {
    pub(crate) width: f32,
    pub(crate) collapsed_width: f32,
    pub(crate) min_width: f32,
    pub(crate) max_width: f32,
    pub(crate) resizable: bool,
    pub(crate) default_collapsed: bool,
    pub(crate) menu_mode: MenuMode,
    pub(crate) menu_theme: MenuTheme,
    pub(crate) default_selected_keys: Vec<String>,
    pub(crate) default_open_keys: Vec<String>,
    pub(crate) style: StyleConfig,
    pub(crate) footer: Option<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDEBAR_WIDTH,
            collapsed_width: DEFAULT_COLLAPSED_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            resizable: true,
            default_collapsed: false,
            menu_mode: MenuMode::Inline,
            menu_theme: MenuTheme::Light,
            default_selected_keys: vec![String::from("home")],
            default_open_keys: vec![String::from("user")],
            style: StyleConfig::default(),
            footer: None,
        }
    }
}

impl SidebarConfig {
    /// Return a copy whose widths satisfy
    /// `0 <= min_width <= width <= max_width`.
    pub(crate) fn normalized(mut self) -> Self {
        self.width = valid_width(self.width, "width", DEFAULT_SIDEBAR_WIDTH);
        self.collapsed_width = valid_width(
            self.collapsed_width,
            "collapsed_width",
            DEFAULT_COLLAPSED_WIDTH,
        );
        self.min_width =
            valid_width(self.min_width, "min_width", DEFAULT_MIN_WIDTH);
        self.max_width =
            valid_width(self.max_width, "max_width", DEFAULT_MAX_WIDTH);

        if self.min_width > self.max_width {
            log::warn!(
                "sidebar min_width {} exceeds max_width {}, swapping",
                self.min_width,
                self.max_width
            );
            std::mem::swap(&mut self.min_width, &mut self.max_width);
        }

        let clamped = self.width.clamp(self.min_width, self.max_width);
        if clamped != self.width {
            log::warn!(
                "sidebar width {} outside [{}, {}], using {clamped}",
                self.width,
                self.min_width,
                self.max_width
            );
            self.width = clamped;
        }

        self
    }
}

fn valid_width(value: f32, field: &str, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("sidebar {field} {value} is invalid, using {fallback}");
        fallback
    }
}

/// Profile shown in the sidebar header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ProfileConfig {
    pub(crate) name: String,
    pub(crate) description: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: String::from("Guest"),
            description: String::from("Local workspace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MIN_WIDTH, ShellConfig, SidebarConfig};
    use crate::widgets::sidebar::model::{MenuMode, MenuTheme};
    use crate::widgets::title_bar::model::BarItem;

    #[test]
    fn given_default_config_when_built_then_matches_shell_defaults() {
        let config = ShellConfig::default();

        assert_eq!(config.title, "Mycelium");
        assert_eq!(config.sidebar.width, 250.0);
        assert_eq!(config.sidebar.collapsed_width, 80.0);
        assert_eq!(config.sidebar.min_width, 150.0);
        assert_eq!(config.sidebar.max_width, 600.0);
        assert!(config.sidebar.resizable);
        assert_eq!(config.sidebar.menu_mode, MenuMode::Inline);
        assert_eq!(config.sidebar.menu_theme, MenuTheme::Light);
        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.menu[0].key, "home");
        assert!(!config.title_bar.double_click_maximize);
    }

    #[test]
    fn given_partial_json_when_deserialized_then_missing_fields_use_defaults()
    {
        let config: ShellConfig = serde_json::from_str(
            r#"{ "title": "Spores", "sidebar": { "min_width": 200 } }"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.title, "Spores");
        assert_eq!(config.sidebar.min_width, 200.0);
        assert_eq!(config.sidebar.max_width, 600.0);
        assert_eq!(config.menu[0].key, "home");
    }

    #[test]
    fn given_bar_items_when_deserialized_then_kinds_are_tagged() {
        let config: ShellConfig = serde_json::from_str(
            r#"{ "title_bar": { "right": [
                { "kind": "label", "text": "v0.1" },
                { "kind": "link", "key": "docs", "label": "Docs" }
            ] } }"#,
        )
        .expect("bar items should parse");

        assert_eq!(
            config.title_bar.right,
            vec![
                BarItem::Label {
                    text: String::from("v0.1")
                },
                BarItem::Link {
                    key: String::from("docs"),
                    label: String::from("Docs"),
                },
            ]
        );
    }

    #[test]
    fn given_inverted_bounds_when_normalized_then_bounds_are_swapped() {
        let config = SidebarConfig {
            min_width: 600.0,
            max_width: 150.0,
            ..SidebarConfig::default()
        }
        .normalized();

        assert_eq!(config.min_width, 150.0);
        assert_eq!(config.max_width, 600.0);
        assert_eq!(config.width, 250.0);
    }

    #[test]
    fn given_width_outside_bounds_when_normalized_then_width_is_clamped() {
        let config = SidebarConfig {
            width: 900.0,
            ..SidebarConfig::default()
        }
        .normalized();
        assert_eq!(config.width, 600.0);

        let config = SidebarConfig {
            width: 10.0,
            ..SidebarConfig::default()
        }
        .normalized();
        assert_eq!(config.width, DEFAULT_MIN_WIDTH);
    }

    #[test]
    fn given_negative_width_when_normalized_then_default_is_used() {
        let config = SidebarConfig {
            min_width: -5.0,
            ..SidebarConfig::default()
        }
        .normalized();

        assert_eq!(config.min_width, DEFAULT_MIN_WIDTH);
    }
}
