use iced::widget::{column, container, mouse_area, row, svg, text};
use iced::{Color, Element, Font, Length, alignment, mouse};

use crate::icons::IconName;

const AVATAR_SIZE: f32 = 48.0;
const AVATAR_ICON_SIZE: f32 = 24.0;
const CARD_SPACING: f32 = 12.0;
const DESCRIPTION_FONT_SIZE: f32 = 12.0;

/// UI events emitted by the profile card.
#[derive(Debug, Clone)]
pub(crate) enum ProfileCardEvent {
    AvatarPressed,
}

/// Colors used by the profile card.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileCardColors {
    pub(crate) avatar_background: Color,
    pub(crate) avatar_foreground: Color,
    pub(crate) foreground: Color,
    pub(crate) muted: Color,
}

/// Props for rendering the profile card.
#[derive(Debug, Clone)]
pub(crate) struct ProfileCardProps {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) compact: bool,
    pub(crate) name_font: Font,
    pub(crate) name_size: f32,
    pub(crate) colors: ProfileCardColors,
}

/// Render an avatar with name and description; only the avatar when compact.
pub(crate) fn view<'a>(
    props: ProfileCardProps,
) -> Element<'a, ProfileCardEvent> {
    let colors = props.colors;

    let icon = svg::Svg::new(svg::Handle::from_memory(IconName::User.svg()))
        .width(Length::Fixed(AVATAR_ICON_SIZE))
        .height(Length::Fixed(AVATAR_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(colors.avatar_foreground),
        });

    let avatar = container(icon)
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(colors.avatar_background.into()),
            border: iced::Border {
                radius: (AVATAR_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let avatar = mouse_area(avatar)
        .on_press(ProfileCardEvent::AvatarPressed)
        .interaction(mouse::Interaction::Pointer);

    if props.compact {
        return container(avatar)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into();
    }

    let details = column![
        text(props.name)
            .font(props.name_font)
            .size(props.name_size)
            .color(colors.foreground),
        text(props.description)
            .size(DESCRIPTION_FONT_SIZE)
            .color(colors.muted),
    ]
    .width(Length::Fill);

    row![avatar, details]
        .spacing(CARD_SPACING)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .into()
}
