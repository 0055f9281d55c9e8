use iced::widget::{Column, scrollable};
use iced::{Element, Length};

use super::style::SidebarColors;
use crate::components::primitive::menu_item::{
    self, MenuItemChevron, MenuItemProps,
};
use crate::widgets::sidebar::SidebarIntent;
use crate::widgets::sidebar::model::MenuItem;

const MENU_SPACING: f32 = 4.0;
const MENU_PADDING: f32 = 4.0;

/// Props for rendering the navigation menu.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuProps<'a> {
    pub(crate) items: &'a [MenuItem],
    pub(crate) selected_key: Option<&'a str>,
    pub(crate) open_keys: &'a [String],
    pub(crate) collapsed: bool,
    pub(crate) colors: SidebarColors,
}

/// A menu entry visible in the current render pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuRow<'a> {
    pub(crate) item: &'a MenuItem,
    pub(crate) depth: usize,
    pub(crate) is_open: bool,
}

/// Render the scrollable navigation menu.
pub(crate) fn view(props: MenuProps<'_>) -> Element<'_, SidebarIntent> {
    let item_colors = props.colors.menu_item();

    let column = visible_rows(props.items, props.open_keys, props.collapsed)
        .into_iter()
        .fold(Column::new(), |column, entry| {
            let key = entry.item.key.clone();
            let chevron = entry.item.is_group().then_some(if entry.is_open {
                MenuItemChevron::Open
            } else {
                MenuItemChevron::Closed
            });

            let row = menu_item::view(MenuItemProps {
                label: &entry.item.label,
                icon: entry.item.icon.map(|icon| icon.svg()),
                depth: entry.depth,
                is_selected: props.selected_key == Some(key.as_str()),
                is_highlighted: entry.item.is_group()
                    && props.selected_key.is_some_and(|selected| {
                        contains_key(entry.item, selected)
                    }),
                icon_only: props.collapsed,
                chevron: if props.collapsed { None } else { chevron },
                colors: item_colors,
            })
            .map(move |_| SidebarIntent::MenuItemPressed { key: key.clone() });

            column.push(row)
        })
        .spacing(MENU_SPACING)
        .padding(MENU_PADDING)
        .width(Length::Fill);

    scrollable::Scrollable::with_direction(
        column,
        scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Flatten the menu tree into the rows currently visible, in configured
/// order. Submenus are expanded only when open and the sidebar is expanded.
pub(crate) fn visible_rows<'a>(
    items: &'a [MenuItem],
    open_keys: &[String],
    collapsed: bool,
) -> Vec<MenuRow<'a>> {
    let mut rows = Vec::new();
    for item in items {
        push_row(item, 0, open_keys, collapsed, &mut rows);
    }
    rows
}

fn push_row<'a>(
    item: &'a MenuItem,
    depth: usize,
    open_keys: &[String],
    collapsed: bool,
    rows: &mut Vec<MenuRow<'a>>,
) {
    let is_open =
        item.is_group() && open_keys.iter().any(|key| *key == item.key);
    rows.push(MenuRow {
        item,
        depth,
        is_open,
    });

    if is_open && !collapsed {
        for child in &item.children {
            push_row(child, depth + 1, open_keys, collapsed, rows);
        }
    }
}

fn contains_key(item: &MenuItem, key: &str) -> bool {
    item.children
        .iter()
        .any(|child| child.key == key || contains_key(child, key))
}
