use iced::{Task, mouse};

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::model::{MenuItem, MenuMode, SidebarBounds, find_menu_item};
use super::state::SidebarState;

/// Read-only context for sidebar reduction.
pub(crate) struct SidebarCtx<'a> {
    pub(crate) bounds: SidebarBounds,
    pub(crate) resizable: bool,
    pub(crate) menu_mode: MenuMode,
    pub(crate) menu_items: &'a [MenuItem],
}

/// Reduce a sidebar intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx<'_>,
) -> Task<SidebarEvent> {
    let effects = apply(state, event, ctx);
    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(SidebarEvent::Effect(effect))),
    )
}

/// Apply an intent to state and collect the resulting effects in order.
pub(super) fn apply(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx<'_>,
) -> Vec<SidebarEffect> {
    match event {
        SidebarIntent::ToggleCollapsed => {
            let collapsed = state.toggle_collapsed();
            vec![SidebarEffect::CollapsedChanged(collapsed)]
        },
        SidebarIntent::HandlePressed { button } => {
            if ctx.resizable
                && button == mouse::Button::Left
                && state.begin_resize()
            {
                log::debug!("sidebar resize started");
            }
            Vec::new()
        },
        SidebarIntent::PointerMoved { x } => {
            let outcome = state.drag_to(x, &ctx.bounds);
            let mut effects = Vec::new();
            if let Some(collapsed) = outcome.collapsed {
                effects.push(SidebarEffect::CollapsedChanged(collapsed));
            }
            if let Some(width) = outcome.width {
                effects.push(SidebarEffect::WidthChanged(width));
            }
            effects
        },
        SidebarIntent::PointerReleased => {
            if state.end_resize() {
                log::debug!(
                    "sidebar resize finished at width {}",
                    state.current_width()
                );
            }
            Vec::new()
        },
        SidebarIntent::MenuItemPressed { key } => {
            match find_menu_item(ctx.menu_items, &key) {
                // Children are hidden while collapsed, so expand first.
                Some(item) if item.is_group() && state.is_collapsed() => {
                    state.menu_mut().open(&key, ctx.menu_mode);
                    let collapsed = state.toggle_collapsed();
                    vec![SidebarEffect::CollapsedChanged(collapsed)]
                },
                Some(item) if item.is_group() => {
                    state.menu_mut().toggle_open(&key, ctx.menu_mode);
                    Vec::new()
                },
                Some(_) if state.menu_mut().select(&key) => {
                    vec![SidebarEffect::MenuItemSelected { key }]
                },
                Some(_) => Vec::new(),
                None => {
                    log::warn!("unknown sidebar menu key: {key}");
                    Vec::new()
                },
            }
        },
    }
}
