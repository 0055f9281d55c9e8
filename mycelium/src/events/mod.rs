mod sidebar;
mod title_bar;
mod window;

use iced::Task;

use crate::app::{App, AppEvent};

/// Root dispatch: route each event to the handler owning it.
pub(crate) fn handle(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::TitleBar(event) => title_bar::handle(app, event),
        AppEvent::Sidebar(event) => sidebar::handle(app, event),
        AppEvent::NavigateTo { key } => {
            if app.state.navigate(key) {
                log::info!(
                    "navigated to {}",
                    app.state.active_route().unwrap_or_default()
                );
            }
            Task::none()
        },
        AppEvent::SyncLayout => {
            window::sync_layout(app);
            Task::none()
        },
        AppEvent::Window(event) => window::handle(app, event),
        AppEvent::ResizeWindow(direction) => {
            window::handle_drag_resize(direction)
        },
    }
}
