use serde::{Deserialize, Serialize};

use super::event::{InteractiveKind, PressTarget};
use crate::icons::IconName;
use crate::theme::StyleOverrides;

/// Item rendered in the left or right title bar slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum BarItem {
    /// Plain text; pressing it drags the window like the bar background.
    Label { text: String },
    Button { key: String, label: String },
    Link { key: String, label: String },
}

impl BarItem {
    /// Press target for this item.
    pub(crate) fn press_target(&self) -> PressTarget {
        match self {
            BarItem::Label { .. } => PressTarget::Surface,
            BarItem::Button { key, .. } => PressTarget::Interactive {
                key: key.clone(),
                kind: InteractiveKind::Button,
            },
            BarItem::Link { key, .. } => PressTarget::Interactive {
                key: key.clone(),
                kind: InteractiveKind::Link,
            },
        }
    }
}

/// Externally supplied title bar props.
#[derive(Debug, Clone, Default)]
pub(crate) struct TitleBarProps {
    pub(crate) title: String,
    pub(crate) icon: Option<IconName>,
    pub(crate) left: Vec<BarItem>,
    pub(crate) right: Vec<BarItem>,
    pub(crate) overrides: Option<StyleOverrides>,
    pub(crate) double_click_maximize: bool,
}

/// Read-only view model for the title bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TitleBarViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) icon: Option<IconName>,
    pub(crate) left: &'a [BarItem],
    pub(crate) right: &'a [BarItem],
    pub(crate) overrides: Option<StyleOverrides>,
    pub(crate) is_maximized: bool,
}

#[cfg(test)]
mod tests {
    use super::BarItem;
    use crate::widgets::title_bar::event::{InteractiveKind, PressTarget};

    #[test]
    fn given_label_item_when_resolving_target_then_surface_is_returned() {
        let item = BarItem::Label {
            text: String::from("v0.1"),
        };

        assert_eq!(item.press_target(), PressTarget::Surface);
    }

    #[test]
    fn given_link_item_when_resolving_target_then_key_is_carried() {
        let item = BarItem::Link {
            key: String::from("docs"),
            label: String::from("Docs"),
        };

        assert_eq!(
            item.press_target(),
            PressTarget::Interactive {
                key: String::from("docs"),
                kind: InteractiveKind::Link,
            }
        );
    }
}
