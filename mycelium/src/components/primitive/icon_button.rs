use iced::widget::{button, container, svg};
use iced::{Color, Element, Length, alignment};

use crate::theme::{StyleOverrides, ThemeProps};

const ICON_BUTTON_PADDING: f32 = 0.0;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    Standard,
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// Resting, hovered and background colors of an icon button.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IconButtonColors {
    base: Color,
    hover: Color,
    hover_background: Option<Color>,
}

/// Render a square icon button; used by the window controls.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let colors = resolve_colors(
        props.variant,
        palette.dim_foreground,
        palette.accent,
        palette.danger,
        props.theme.overrides,
    );

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                colors.hover
            } else {
                colors.base
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    colors.hover_background.map(Into::into)
                },
                _ => None,
            };

            button::Style {
                background,
                ..button::Style::default()
            }
        })
        .into()
}

fn resolve_colors(
    variant: IconButtonVariant,
    default_base: Color,
    accent: Color,
    danger: Color,
    overrides: Option<StyleOverrides>,
) -> IconButtonColors {
    let base = overrides
        .and_then(|overrides| overrides.foreground)
        .unwrap_or(default_base);

    match variant {
        IconButtonVariant::Standard => IconButtonColors {
            base,
            hover: overrides
                .and_then(|overrides| overrides.foreground)
                .unwrap_or(accent),
            hover_background: None,
        },
        // Close keeps its red hover regardless of overrides.
        IconButtonVariant::Danger => IconButtonColors {
            base,
            hover: Color::WHITE,
            hover_background: Some(danger),
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{IconButtonVariant, resolve_colors};
    use crate::theme::StyleOverrides;

    const BASE: Color = Color::from_rgb(0.1, 0.2, 0.3);
    const ACCENT: Color = Color::from_rgb(0.4, 0.5, 0.6);
    const DANGER: Color = Color::from_rgb(0.7, 0.8, 0.9);

    #[test]
    fn given_standard_variant_when_resolving_then_hover_uses_accent() {
        let variant = IconButtonVariant::Standard;
        let colors = resolve_colors(variant, BASE, ACCENT, DANGER, None);

        assert_eq!(colors.base, BASE);
        assert_eq!(colors.hover, ACCENT);
        assert_eq!(colors.hover_background, None);
    }

    #[test]
    fn given_danger_variant_when_resolving_then_hover_fills_with_danger() {
        let variant = IconButtonVariant::Danger;
        let colors = resolve_colors(variant, BASE, ACCENT, DANGER, None);

        assert_eq!(colors.base, BASE);
        assert_eq!(colors.hover, Color::WHITE);
        assert_eq!(colors.hover_background, Some(DANGER));
    }

    #[test]
    fn given_foreground_override_when_resolving_then_icon_uses_override() {
        let override_color = Color::from_rgb(0.3, 0.2, 0.1);
        let overrides = Some(StyleOverrides {
            background: None,
            foreground: Some(override_color),
        });

        let standard = resolve_colors(
            IconButtonVariant::Standard,
            BASE,
            ACCENT,
            DANGER,
            overrides,
        );
        let danger = resolve_colors(
            IconButtonVariant::Danger,
            BASE,
            ACCENT,
            DANGER,
            overrides,
        );

        assert_eq!(standard.base, override_color);
        assert_eq!(standard.hover, override_color);
        assert_eq!(danger.base, override_color);
        assert_eq!(danger.hover_background, Some(DANGER));
    }
}
