use super::model::{MenuMode, SidebarBounds};

/// Changes produced by a single pointer move while resizing.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(super) struct ResizeOutcome {
    pub(super) collapsed: Option<bool>,
    pub(super) width: Option<f32>,
}

/// Internal runtime state for sidebar width, collapse and resize tracking.
#[derive(Debug)]
pub(super) struct SidebarState {
    collapsed: bool,
    current_width: f32,
    resizing: bool,
    menu: MenuState,
}

impl SidebarState {
    pub(super) fn new(
        bounds: SidebarBounds,
        default_collapsed: bool,
        menu: MenuState,
    ) -> Self {
        Self {
            collapsed: default_collapsed,
            current_width: bounds.width,
            resizing: false,
            menu,
        }
    }

    pub(super) fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub(super) fn current_width(&self) -> f32 {
        self.current_width
    }

    pub(super) fn is_resizing(&self) -> bool {
        self.resizing
    }

    pub(super) fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub(super) fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    /// Width the sidebar occupies on screen.
    pub(super) fn rendered_width(&self, bounds: &SidebarBounds) -> f32 {
        if self.collapsed {
            bounds.collapsed_width
        } else {
            self.current_width
        }
    }

    /// Flip the collapsed flag and return the new value.
    pub(super) fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Enter resizing mode, returning `false` when already resizing.
    pub(super) fn begin_resize(&mut self) -> bool {
        if self.resizing {
            return false;
        }
        self.resizing = true;
        true
    }

    /// Leave resizing mode, returning `false` when not resizing.
    pub(super) fn end_resize(&mut self) -> bool {
        if !self.resizing {
            return false;
        }
        self.resizing = false;
        true
    }

    /// Apply a pointer position to the width/collapse state.
    ///
    /// Positions below the collapse threshold collapse the sidebar and keep
    /// the last expanded width. Any other position expands it with the width
    /// clamped into `[min_width, max_width]`. Only values that actually
    /// changed are reported.
    pub(super) fn drag_to(
        &mut self,
        x: f32,
        bounds: &SidebarBounds,
    ) -> ResizeOutcome {
        let mut outcome = ResizeOutcome::default();
        if !self.resizing || !x.is_finite() {
            return outcome;
        }

        if x < bounds.collapse_threshold() {
            if !self.collapsed {
                self.collapsed = true;
                outcome.collapsed = Some(true);
            }
            return outcome;
        }

        if self.collapsed {
            self.collapsed = false;
            outcome.collapsed = Some(false);
        }

        let width = x.clamp(bounds.min_width, bounds.max_width);
        if width != self.current_width {
            self.current_width = width;
            outcome.width = Some(width);
        }

        outcome
    }
}

/// Selection and submenu state for the navigation menu.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct MenuState {
    selected_key: Option<String>,
    open_keys: Vec<String>,
}

impl MenuState {
    pub(super) fn new(
        default_selected_keys: &[String],
        default_open_keys: &[String],
        mode: MenuMode,
    ) -> Self {
        let mut open_keys: Vec<String> = Vec::new();
        for key in default_open_keys {
            if !open_keys.contains(key) {
                open_keys.push(key.clone());
            }
        }
        if mode == MenuMode::Vertical {
            open_keys.truncate(1);
        }

        Self {
            selected_key: default_selected_keys.first().cloned(),
            open_keys,
        }
    }

    pub(super) fn selected_key(&self) -> Option<&str> {
        self.selected_key.as_deref()
    }

    pub(super) fn open_keys(&self) -> &[String] {
        &self.open_keys
    }

    /// Select a leaf entry, returning `false` when it was already selected.
    pub(super) fn select(&mut self, key: &str) -> bool {
        if self.selected_key.as_deref() == Some(key) {
            return false;
        }
        self.selected_key = Some(key.to_string());
        true
    }

    /// Make sure a submenu is open, honoring the menu mode.
    pub(super) fn open(&mut self, key: &str, mode: MenuMode) {
        if !self.open_keys.iter().any(|open| open == key) {
            self.toggle_open(key, mode);
        }
    }

    /// Open or close a submenu according to the menu mode.
    pub(super) fn toggle_open(&mut self, key: &str, mode: MenuMode) {
        let is_open = self.open_keys.iter().any(|open| open == key);
        match (mode, is_open) {
            (_, true) => self.open_keys.retain(|open| open != key),
            (MenuMode::Inline, false) => self.open_keys.push(key.to_string()),
            (MenuMode::Vertical, false) => {
                self.open_keys = vec![key.to_string()];
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuState, ResizeOutcome, SidebarState};
    use crate::widgets::sidebar::model::{MenuMode, SidebarBounds};

    const BOUNDS: SidebarBounds = SidebarBounds {
        width: 250.0,
        collapsed_width: 80.0,
        min_width: 150.0,
        max_width: 600.0,
    };

    fn resizing_state() -> SidebarState {
        let mut state =
            SidebarState::new(BOUNDS, false, MenuState::default());
        assert!(state.begin_resize());
        state
    }

    #[test]
    fn given_position_below_threshold_when_dragged_then_sidebar_collapses() {
        for x in [-20.0, 0.0, 50.0, 99.9] {
            let mut state = resizing_state();
            let outcome = state.drag_to(x, &BOUNDS);

            assert!(state.is_collapsed(), "x = {x}");
            assert_eq!(state.current_width(), 250.0);
            assert_eq!(
                outcome,
                ResizeOutcome {
                    collapsed: Some(true),
                    width: None,
                }
            );
        }
    }

    #[test]
    fn given_position_within_bounds_when_dragged_then_width_follows_pointer() {
        for x in [150.0, 151.5, 300.0, 599.0, 600.0] {
            let mut state = resizing_state();
            let _ = state.drag_to(x, &BOUNDS);

            assert!(!state.is_collapsed(), "x = {x}");
            assert_eq!(state.current_width(), x);
        }
    }

    #[test]
    fn given_position_between_threshold_and_min_when_dragged_then_width_clamps_to_min()
     {
        for x in [100.0, 120.0, 149.9] {
            let mut state = resizing_state();
            let _ = state.drag_to(x, &BOUNDS);

            assert!(!state.is_collapsed(), "x = {x}");
            assert_eq!(state.current_width(), 150.0);
        }
    }

    #[test]
    fn given_position_above_max_when_dragged_then_width_clamps_to_max() {
        let mut state = resizing_state();
        let outcome = state.drag_to(900.0, &BOUNDS);

        assert!(!state.is_collapsed());
        assert_eq!(state.current_width(), 600.0);
        assert_eq!(outcome.width, Some(600.0));
    }

    #[test]
    fn given_collapsed_sidebar_when_dragged_back_then_expands_once() {
        let mut state = resizing_state();
        let _ = state.drag_to(90.0, &BOUNDS);

        let outcome = state.drag_to(300.0, &BOUNDS);
        assert_eq!(
            outcome,
            ResizeOutcome {
                collapsed: Some(false),
                width: Some(300.0),
            }
        );

        let outcome = state.drag_to(300.0, &BOUNDS);
        assert_eq!(outcome, ResizeOutcome::default());
    }

    #[test]
    fn given_not_resizing_when_dragged_then_state_is_unchanged() {
        let mut state = SidebarState::new(BOUNDS, false, MenuState::default());
        let outcome = state.drag_to(300.0, &BOUNDS);

        assert_eq!(outcome, ResizeOutcome::default());
        assert_eq!(state.current_width(), 250.0);
    }

    #[test]
    fn given_non_finite_position_when_dragged_then_state_is_unchanged() {
        let mut state = resizing_state();
        let outcome = state.drag_to(f32::NAN, &BOUNDS);

        assert_eq!(outcome, ResizeOutcome::default());
        assert!(!state.is_collapsed());
    }

    #[test]
    fn given_collapsed_state_when_rendered_then_uses_collapsed_width() {
        let mut state = resizing_state();
        let _ = state.drag_to(400.0, &BOUNDS);
        let _ = state.drag_to(10.0, &BOUNDS);

        assert_eq!(state.rendered_width(&BOUNDS), 80.0);
        assert_eq!(state.current_width(), 400.0);
    }

    #[test]
    fn given_resize_session_when_begun_twice_then_second_begin_is_rejected() {
        let mut state = resizing_state();
        assert!(!state.begin_resize());
        assert!(state.end_resize());
        assert!(!state.end_resize());
    }

    #[test]
    fn given_vertical_mode_when_opening_submenus_then_only_one_stays_open() {
        let mut menu = MenuState::new(&[], &[], MenuMode::Vertical);
        menu.toggle_open("user", MenuMode::Vertical);
        menu.toggle_open("team", MenuMode::Vertical);

        assert_eq!(menu.open_keys(), ["team".to_string()]);
    }

    #[test]
    fn given_inline_mode_when_opening_submenus_then_all_stay_open() {
        let mut menu = MenuState::new(&[], &[], MenuMode::Inline);
        menu.toggle_open("user", MenuMode::Inline);
        menu.toggle_open("team", MenuMode::Inline);
        menu.toggle_open("user", MenuMode::Inline);

        assert_eq!(menu.open_keys(), ["team".to_string()]);
    }

    #[test]
    fn given_default_keys_when_menu_built_then_first_selected_key_wins() {
        let selected = vec!["home".to_string(), "user".to_string()];
        let open = vec!["a".to_string(), "a".to_string(), "b".to_string()];

        let inline = MenuState::new(&selected, &open, MenuMode::Inline);
        assert_eq!(inline.selected_key(), Some("home"));
        assert_eq!(inline.open_keys(), ["a".to_string(), "b".to_string()]);

        let vertical = MenuState::new(&selected, &open, MenuMode::Vertical);
        assert_eq!(vertical.open_keys(), ["a".to_string()]);
    }
}
