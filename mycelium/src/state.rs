use iced::Size;

/// Window geometry and navigation state owned by the app.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) screen_size: Size,
    pub(crate) content_size: Size,
    active_route: Option<String>,
}

impl State {
    /// Create state for the given initial screen size.
    pub(crate) fn new(screen_size: Size) -> Self {
        Self {
            screen_size,
            content_size: screen_size,
            active_route: None,
        }
    }

    /// Update the screen size after a window resize.
    pub(crate) fn set_screen_size(&mut self, size: Size) {
        self.screen_size = size;
    }

    pub(crate) fn active_route(&self) -> Option<&str> {
        self.active_route.as_deref()
    }

    /// Switch the routed content, returning whether it changed.
    pub(crate) fn navigate(&mut self, key: String) -> bool {
        if self.active_route.as_deref() == Some(key.as_str()) {
            return false;
        }
        self.active_route = Some(key);
        true
    }
}
