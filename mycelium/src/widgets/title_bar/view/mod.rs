use iced::widget::{
    MouseArea, Row, Space, Stack, button, container, row, svg, text,
};
use iced::{Color, Element, Length, alignment, mouse};

use super::event::{PressTarget, TitleBarIntent};
use super::model::{BarItem, TitleBarViewModel};
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::fonts::FontsConfig;
use crate::icons::{
    WINDOW_CLOSE, WINDOW_MAXIMIZE, WINDOW_MINIMIZE, WINDOW_RESTORE,
};
use crate::theme::{StyleOverrides, ThemeProps};

pub(crate) const TITLE_BAR_HEIGHT: f32 = 36.0;
const ICON_SIZE: f32 = 18.0;
const CONTROL_BUTTON_SIZE: f32 = 28.0;
const CONTROL_ICON_SIZE: f32 = 16.0;
const HORIZONTAL_PADDING: f32 = 12.0;
const ZONE_SPACING: f32 = 8.0;
const CONTROLS_SPACING: f32 = 4.0;
const ITEM_FONT_SCALE: f32 = 0.9;
const ITEM_PADDING: [f32; 2] = [2.0, 10.0];
const ITEM_RADIUS: f32 = 4.0;

/// Props for rendering the title bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TitleBarViewProps<'a> {
    pub(crate) vm: TitleBarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

#[derive(Debug, Clone, Copy)]
struct BarColors {
    background: Color,
    foreground: Color,
    muted: Color,
    accent: Color,
    item_background: Color,
}

/// Render the draggable title bar.
///
/// The drag surface sits at the bottom of a stack. Interactive children
/// above it report a pointer interaction, which keeps presses on them from
/// ever reaching the surface.
pub(crate) fn view(
    props: TitleBarViewProps<'_>,
) -> Element<'_, TitleBarIntent> {
    let vm = props.vm;
    let colors = resolve_colors(props.theme, vm.overrides);
    let item_size = props.fonts.ui.size * ITEM_FONT_SCALE;

    let mut leading = Row::new()
        .spacing(ZONE_SPACING)
        .align_y(alignment::Vertical::Center);

    if let Some(icon) = vm.icon {
        let logo = svg::Svg::new(svg::Handle::from_memory(icon.svg()))
            .width(Length::Fixed(ICON_SIZE))
            .height(Length::Fixed(ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(colors.accent),
            });
        leading = leading.push(
            MouseArea::new(logo)
                .on_press(TitleBarIntent::IconPressed)
                .interaction(mouse::Interaction::Pointer),
        );
    }

    leading = leading.push(
        text(vm.title)
            .font(props.fonts.heading.font_type)
            .size(props.fonts.ui.size)
            .color(colors.foreground),
    );

    let leading = vm.left.iter().fold(leading, |zone, item| {
        zone.push(bar_item(item, colors, item_size))
    });

    let trailing = vm
        .right
        .iter()
        .fold(Row::new(), |zone, item| {
            zone.push(bar_item(item, colors, item_size))
        })
        .spacing(ZONE_SPACING)
        .align_y(alignment::Vertical::Center);

    let maximize_icon = if vm.is_maximized {
        WINDOW_RESTORE
    } else {
        WINDOW_MAXIMIZE
    };

    let control_theme = props.theme.with_overrides(vm.overrides);
    let controls = row![
        control(WINDOW_MINIMIZE, IconButtonVariant::Standard, control_theme)
            .map(|_| TitleBarIntent::MinimizeWindow),
        control(maximize_icon, IconButtonVariant::Standard, control_theme)
            .map(|_| TitleBarIntent::ToggleMaximize),
        control(WINDOW_CLOSE, IconButtonVariant::Danger, control_theme)
            .map(|_| TitleBarIntent::CloseWindow),
    ]
    .spacing(CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center);

    let base_row = row![
        leading,
        Space::new().width(Length::Fill),
        trailing,
        controls
    ]
    .spacing(ZONE_SPACING)
    .padding([0.0, HORIZONTAL_PADDING])
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    let content = Stack::new().push(drag_surface()).push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TITLE_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(colors.background.into()),
            text_color: Some(colors.foreground),
            ..Default::default()
        })
        .into()
}

fn drag_surface<'a>() -> Element<'a, TitleBarIntent> {
    let pressed = |button| TitleBarIntent::Pressed {
        button,
        target: PressTarget::Surface,
    };

    MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(pressed(mouse::Button::Left))
    .on_right_press(pressed(mouse::Button::Right))
    .on_middle_press(pressed(mouse::Button::Middle))
    .on_double_click(TitleBarIntent::DoubleClicked {
        target: PressTarget::Surface,
    })
    .into()
}

fn bar_item(
    item: &BarItem,
    colors: BarColors,
    size: f32,
) -> Element<'_, TitleBarIntent> {
    let target = item.press_target();
    let pressed = move |button| TitleBarIntent::Pressed {
        button,
        target: target.clone(),
    };

    match item {
        BarItem::Label { text: content } => {
            text(content.as_str()).size(size).color(colors.muted).into()
        },
        BarItem::Button { label, .. } => button(text(label.as_str()).size(size))
            .on_press(pressed(mouse::Button::Left))
            .padding(ITEM_PADDING)
            .style(move |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        colors.item_background
                    },
                    _ => Color::TRANSPARENT,
                };

                button::Style {
                    background: Some(background.into()),
                    text_color: colors.foreground,
                    border: iced::Border {
                        radius: ITEM_RADIUS.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .into(),
        BarItem::Link { label, .. } => MouseArea::new(
            text(label.as_str()).size(size).color(colors.accent),
        )
        .on_press(pressed(mouse::Button::Left))
        .on_right_press(pressed(mouse::Button::Right))
        .interaction(mouse::Interaction::Pointer)
        .into(),
    }
}

fn control<'a>(
    icon: &'static [u8],
    variant: IconButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, icon_button::IconButtonEvent> {
    icon_button::view(IconButtonProps {
        icon,
        theme,
        size: CONTROL_BUTTON_SIZE,
        icon_size: CONTROL_ICON_SIZE,
        variant,
    })
}

fn resolve_colors(
    theme: ThemeProps<'_>,
    overrides: Option<StyleOverrides>,
) -> BarColors {
    let palette = theme.theme.iced_palette();

    BarColors {
        background: overrides
            .and_then(|overrides| overrides.background)
            .unwrap_or(palette.surface),
        foreground: overrides
            .and_then(|overrides| overrides.foreground)
            .unwrap_or(palette.foreground),
        muted: palette.dim_foreground,
        accent: palette.accent,
        item_background: palette.overlay,
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::resolve_colors;
    use crate::theme::{AppTheme, StyleOverrides, ThemeProps};

    #[test]
    fn given_no_overrides_when_resolving_then_palette_surface_is_used() {
        let theme = AppTheme::default();
        let colors = resolve_colors(ThemeProps::new(&theme), None);

        assert_eq!(colors.background, theme.iced_palette().surface);
        assert_eq!(colors.foreground, theme.iced_palette().foreground);
    }

    #[test]
    fn given_background_override_when_resolving_then_override_wins() {
        let theme = AppTheme::default();
        let background = Color::from_rgb(0.2, 0.4, 0.6);
        let colors = resolve_colors(
            ThemeProps::new(&theme),
            Some(StyleOverrides {
                background: Some(background),
                foreground: None,
            }),
        );

        assert_eq!(colors.background, background);
        assert_eq!(colors.foreground, theme.iced_palette().foreground);
    }
}
