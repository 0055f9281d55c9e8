/// Title bar runtime state.
#[derive(Debug, Default)]
pub(crate) struct TitleBarState {
    is_maximized: bool,
}

impl TitleBarState {
    pub(crate) fn is_maximized(&self) -> bool {
        self.is_maximized
    }

    /// Record the window's maximized state, returning `false` when unchanged.
    pub(crate) fn set_maximized(&mut self, is_maximized: bool) -> bool {
        if self.is_maximized == is_maximized {
            return false;
        }
        self.is_maximized = is_maximized;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::TitleBarState;

    #[test]
    fn given_reported_state_when_set_then_only_changes_are_accepted() {
        let mut state = TitleBarState::default();

        assert!(!state.set_maximized(false));
        assert!(state.set_maximized(true));
        assert!(!state.set_maximized(true));
        assert!(state.is_maximized());
    }
}
