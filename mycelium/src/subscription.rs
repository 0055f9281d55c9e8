use iced::{Event, Subscription, event, mouse, window};

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Pointer listeners live only for the duration of a sidebar drag.
    if app.widgets.sidebar.is_resizing() {
        subs.push(event::listen_with(resize_pointer_event));
    }

    Subscription::batch(subs)
}

fn resize_pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let intent = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            SidebarIntent::PointerMoved { x: position.x }
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            SidebarIntent::PointerReleased
        },
        _ => return None,
    };

    Some(AppEvent::Sidebar(SidebarEvent::Intent(intent)))
}

#[cfg(test)]
mod tests {
    use iced::{Event, Point, event, mouse, window};

    use super::resize_pointer_event;
    use crate::app::AppEvent;
    use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

    fn translate(event: Event) -> Option<SidebarIntent> {
        match resize_pointer_event(
            event,
            event::Status::Ignored,
            window::Id::unique(),
        ) {
            Some(AppEvent::Sidebar(SidebarEvent::Intent(intent))) => {
                Some(intent)
            },
            _ => None,
        }
    }

    #[test]
    fn given_cursor_move_when_resizing_then_window_x_is_forwarded() {
        let intent = translate(Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(300.0, 42.0),
        }));

        assert_eq!(intent, Some(SidebarIntent::PointerMoved { x: 300.0 }));
    }

    #[test]
    fn given_primary_release_when_resizing_then_drag_ends() {
        let intent = translate(Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )));

        assert_eq!(intent, Some(SidebarIntent::PointerReleased));
    }

    #[test]
    fn given_other_events_when_resizing_then_nothing_is_forwarded() {
        let intent = translate(Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Right,
        )));

        assert_eq!(intent, None);
    }
}
