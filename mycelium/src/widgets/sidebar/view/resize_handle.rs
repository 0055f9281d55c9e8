use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length, mouse};

use super::style::SidebarColors;
use crate::widgets::sidebar::SidebarIntent;
use crate::widgets::sidebar::model::RESIZE_HANDLE_WIDTH;

/// Render the drag handle on the sidebar's trailing edge.
///
/// Every button press is forwarded so the reducer can reject non-primary
/// buttons. Moves arrive through the resize subscription. A release over
/// the handle is reported here as well, since it can land in the same
/// event batch as the press, before the subscription exists.
pub(crate) fn view<'a>(
    is_resizing: bool,
    colors: SidebarColors,
) -> Element<'a, SidebarIntent> {
    let color = if is_resizing {
        colors.handle_active
    } else {
        colors.handle
    };

    let fill = Space::new().width(Length::Fill).height(Length::Fill);
    let strip = container(fill)
        .width(Length::Fixed(RESIZE_HANDLE_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        });

    mouse_area(strip)
        .on_press(SidebarIntent::HandlePressed {
            button: mouse::Button::Left,
        })
        .on_right_press(SidebarIntent::HandlePressed {
            button: mouse::Button::Right,
        })
        .on_middle_press(SidebarIntent::HandlePressed {
            button: mouse::Button::Middle,
        })
        .on_release(SidebarIntent::PointerReleased)
        .interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}
