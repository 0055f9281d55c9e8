use iced::mouse;

/// Intent events handled by the sidebar presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SidebarIntent {
    ToggleCollapsed,
    HandlePressed { button: mouse::Button },
    PointerMoved { x: f32 },
    PointerReleased,
    MenuItemPressed { key: String },
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SidebarEffect {
    CollapsedChanged(bool),
    WidthChanged(f32),
    MenuItemSelected { key: String },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
