use iced::{Task, window};

use super::window::request;
use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};
use crate::widgets::title_bar::{TitleBarEffect, TitleBarEvent};

pub(super) fn handle(app: &mut App, event: TitleBarEvent) -> Task<AppEvent> {
    match event {
        TitleBarEvent::Intent(event) => app
            .widgets
            .title_bar
            .reduce(event)
            .map(AppEvent::TitleBar),
        TitleBarEvent::Effect(effect) => handle_effect(effect),
    }
}

fn handle_effect(effect: TitleBarEffect) -> Task<AppEvent> {
    match effect {
        TitleBarEffect::StartWindowDrag => request("drag", window::drag),
        TitleBarEffect::ToggleMaximize => {
            request("toggle maximize", window::toggle_maximize)
        },
        TitleBarEffect::MinimizeWindow => {
            request("minimize", |id| window::minimize(id, true))
        },
        TitleBarEffect::CloseWindow => request("close", window::close),
        TitleBarEffect::ToggleSidebar => Task::done(AppEvent::Sidebar(
            SidebarEvent::Intent(SidebarIntent::ToggleCollapsed),
        )),
        TitleBarEffect::ItemActivated { key } => {
            log::info!("title bar item activated: {key}");
            Task::none()
        },
    }
}
