use iced::{Size, Task, window};

use crate::app::{App, AppEvent};
use crate::layout::{content_size, screen_size_from_window};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};
use crate::widgets::title_bar::{TitleBarEvent, TitleBarIntent};

pub(super) fn handle(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Resized(size) => {
            handle_resize(app, size);
            sync_maximized()
        },
        // A drag cannot finish while the window is away; release the
        // pointer listeners instead of waiting for a button-up.
        window::Event::Unfocused if app.widgets.sidebar.is_resizing() => {
            Task::done(AppEvent::Sidebar(SidebarEvent::Intent(
                SidebarIntent::PointerReleased,
            )))
        },
        _ => Task::none(),
    }
}

fn handle_resize(app: &mut App, size: Size) {
    app.state.set_screen_size(screen_size_from_window(size));
    sync_layout(app);
}

/// Maximize and restore always resize, so the title bar re-reads the
/// window state here instead of tracking its own requests.
fn sync_maximized() -> Task<AppEvent> {
    request("query maximized", |id| {
        window::is_maximized(id).map(|is_maximized| {
            AppEvent::TitleBar(TitleBarEvent::Intent(
                TitleBarIntent::MaximizedChanged(is_maximized),
            ))
        })
    })
}

pub(super) fn handle_drag_resize(
    direction: window::Direction,
) -> Task<AppEvent> {
    request("drag resize", move |id| window::drag_resize(id, direction))
}

/// Recompute the routed content area from the current sidebar width.
pub(super) fn sync_layout(app: &mut App) {
    app.state.content_size = content_size(
        app.state.screen_size,
        app.widgets.sidebar.occupied_width(),
    );
}

/// Issue a native window request against the latest window.
///
/// Native requests are best effort: without a window the request is
/// dropped and logged.
pub(super) fn request<F>(action: &'static str, task: F) -> Task<AppEvent>
where
    F: Fn(window::Id) -> Task<AppEvent> + Send + 'static,
{
    window::latest().then(move |id| match id {
        Some(id) => task(id),
        None => {
            log::debug!("window {action} skipped: no window available");
            Task::none()
        },
    })
}
