use iced::{Task, mouse};

use super::event::{PressTarget, TitleBarEffect, TitleBarEvent, TitleBarIntent};
use super::state::TitleBarState;

/// Read-only context for title bar reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TitleBarCtx {
    pub(crate) double_click_maximize: bool,
}

/// Reduce a title bar intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut TitleBarState,
    event: TitleBarIntent,
    ctx: TitleBarCtx,
) -> Task<TitleBarEvent> {
    match apply(state, event, ctx) {
        Some(effect) => Task::done(TitleBarEvent::Effect(effect)),
        None => Task::none(),
    }
}

pub(super) fn apply(
    state: &mut TitleBarState,
    event: TitleBarIntent,
    ctx: TitleBarCtx,
) -> Option<TitleBarEffect> {
    match event {
        TitleBarIntent::Pressed { button, target } => {
            resolve_press(button, target)
        },
        TitleBarIntent::DoubleClicked { target } => {
            if !ctx.double_click_maximize {
                log::trace!("title bar double click ignored");
                return None;
            }
            match target {
                PressTarget::Surface => Some(TitleBarEffect::ToggleMaximize),
                PressTarget::Interactive { .. } => None,
            }
        },
        TitleBarIntent::IconPressed => Some(TitleBarEffect::ToggleSidebar),
        TitleBarIntent::MinimizeWindow => Some(TitleBarEffect::MinimizeWindow),
        TitleBarIntent::ToggleMaximize => Some(TitleBarEffect::ToggleMaximize),
        TitleBarIntent::CloseWindow => Some(TitleBarEffect::CloseWindow),
        TitleBarIntent::MaximizedChanged(is_maximized) => {
            if state.set_maximized(is_maximized) {
                log::debug!("window maximized: {is_maximized}");
            }
            None
        },
    }
}

/// Decide what a press on the bar means.
///
/// Only the primary button acts. Interactive children keep their click and
/// never start a window drag.
pub(crate) fn resolve_press(
    button: mouse::Button,
    target: PressTarget,
) -> Option<TitleBarEffect> {
    if button != mouse::Button::Left {
        return None;
    }

    match target {
        PressTarget::Surface => Some(TitleBarEffect::StartWindowDrag),
        PressTarget::Interactive { key, .. } => {
            Some(TitleBarEffect::ItemActivated { key })
        },
    }
}
