use iced::mouse;

/// Kind of interactive element inside the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InteractiveKind {
    Button,
    Link,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PressTarget {
    /// Non-interactive bar area: background, icon gap, title text, labels.
    Surface,
    /// A slot item that handles clicks itself.
    Interactive { key: String, kind: InteractiveKind },
}

/// Intent events handled by the title bar presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TitleBarIntent {
    Pressed {
        button: mouse::Button,
        target: PressTarget,
    },
    DoubleClicked {
        target: PressTarget,
    },
    IconPressed,
    MinimizeWindow,
    ToggleMaximize,
    CloseWindow,
    /// Maximized state reported by the window itself.
    MaximizedChanged(bool),
}

/// Effect events produced by the title bar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TitleBarEffect {
    StartWindowDrag,
    ToggleMaximize,
    MinimizeWindow,
    CloseWindow,
    ToggleSidebar,
    ItemActivated { key: String },
}

/// Title bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum TitleBarEvent {
    Intent(TitleBarIntent),
    Effect(TitleBarEffect),
}
