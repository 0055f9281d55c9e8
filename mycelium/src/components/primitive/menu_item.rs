use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, container, row, svg, text};
use iced::{Color, Element, Length, alignment};

use crate::icons;

const MENU_ITEM_HEIGHT: f32 = 40.0;
const MENU_ITEM_FONT_SIZE: f32 = 14.0;
const MENU_ITEM_ICON_SIZE: f32 = 16.0;
const MENU_ITEM_CHEVRON_SIZE: f32 = 12.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 16.0;
const MENU_ITEM_INDENT: f32 = 24.0;
const MENU_ITEM_SPACING: f32 = 10.0;
const MENU_ITEM_RADIUS: f32 = 6.0;

/// UI events emitted by a menu item.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

/// Colors used to paint a menu row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MenuItemColors {
    pub(crate) foreground: Color,
    pub(crate) accent: Color,
    pub(crate) selected_background: Color,
    pub(crate) hover_background: Color,
}

/// Submenu indicator shown at the end of a group row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItemChevron {
    Open,
    Closed,
}

/// Props for rendering a menu item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) icon: Option<&'static [u8]>,
    pub(crate) depth: usize,
    pub(crate) is_selected: bool,
    pub(crate) is_highlighted: bool,
    pub(crate) icon_only: bool,
    pub(crate) chevron: Option<MenuItemChevron>,
    pub(crate) colors: MenuItemColors,
}

/// Render a single navigation row.
pub(crate) fn view<'a>(props: MenuItemProps<'a>) -> Element<'a, MenuItemEvent> {
    let colors = props.colors;
    let content_color = if props.is_selected || props.is_highlighted {
        colors.accent
    } else {
        colors.foreground
    };

    let icon: Element<'a, MenuItemEvent> = match props.icon {
        Some(bytes) => svg::Svg::new(svg::Handle::from_memory(bytes))
            .width(Length::Fixed(MENU_ITEM_ICON_SIZE))
            .height(Length::Fixed(MENU_ITEM_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(content_color),
            })
            .into(),
        None if props.icon_only => text(initial(props.label))
            .size(MENU_ITEM_FONT_SIZE)
            .color(content_color)
            .into(),
        None => Space::new().width(Length::Shrink).into(),
    };

    let content: Element<'a, MenuItemEvent> = if props.icon_only {
        container(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    } else {
        let label = text(props.label)
            .size(MENU_ITEM_FONT_SIZE)
            .color(content_color)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left)
            .align_y(alignment::Vertical::Center);

        let mut line = row![
            Space::new().width(Length::Fixed(indent_for_depth(props.depth))),
            icon,
            label
        ]
        .spacing(MENU_ITEM_SPACING)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);

        if let Some(chevron) = props.chevron {
            let bytes = match chevron {
                MenuItemChevron::Open => icons::CHEVRON_DOWN,
                MenuItemChevron::Closed => icons::CHEVRON_RIGHT,
            };
            line = line.push(
                svg::Svg::new(svg::Handle::from_memory(bytes))
                    .width(Length::Fixed(MENU_ITEM_CHEVRON_SIZE))
                    .height(Length::Fixed(MENU_ITEM_CHEVRON_SIZE))
                    .style(move |_, _| svg::Style {
                        color: Some(content_color),
                    }),
            );
        }

        line.into()
    };

    let is_selected = props.is_selected;
    button(content)
        .padding([0.0, MENU_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(move |_, status| menu_button_style(colors, is_selected, status))
        .on_press(MenuItemEvent::Pressed)
        .into()
}

fn indent_for_depth(depth: usize) -> f32 {
    depth as f32 * MENU_ITEM_INDENT
}

fn initial(label: &str) -> String {
    label
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn menu_button_style(
    colors: MenuItemColors,
    is_selected: bool,
    status: ButtonStatus,
) -> button::Style {
    let background = if is_selected {
        Some(colors.selected_background.into())
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => {
                Some(colors.hover_background.into())
            },
            _ => None,
        }
    };

    button::Style {
        background,
        text_color: colors.foreground,
        border: iced::Border {
            width: 0.0,
            radius: MENU_ITEM_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::button::Status as ButtonStatus;
    use iced::{Background, Color};

    use super::{MenuItemColors, indent_for_depth, initial, menu_button_style};

    fn colors() -> MenuItemColors {
        MenuItemColors {
            foreground: Color::from_rgb(0.1, 0.1, 0.1),
            accent: Color::from_rgb(0.0, 0.5, 1.0),
            selected_background: Color::from_rgb(0.9, 0.95, 1.0),
            hover_background: Color::from_rgb(0.8, 0.8, 0.8),
        }
    }

    #[test]
    fn given_hovered_status_when_building_style_then_uses_hover_background() {
        let style = menu_button_style(colors(), false, ButtonStatus::Hovered);

        assert_eq!(
            style.background,
            Some(Background::Color(colors().hover_background))
        );
    }

    #[test]
    fn given_selected_row_when_building_style_then_selection_wins_over_hover()
    {
        let style = menu_button_style(colors(), true, ButtonStatus::Hovered);

        assert_eq!(
            style.background,
            Some(Background::Color(colors().selected_background))
        );
    }

    #[test]
    fn given_idle_row_when_building_style_then_background_is_transparent() {
        let style = menu_button_style(colors(), false, ButtonStatus::Active);

        assert_eq!(style.background, None);
        assert_eq!(style.text_color, colors().foreground);
    }

    #[test]
    fn given_label_when_collapsed_then_initial_is_uppercased() {
        assert_eq!(initial("home"), "H");
        assert_eq!(initial(""), "");
        assert_eq!(indent_for_depth(2), 48.0);
    }
}
