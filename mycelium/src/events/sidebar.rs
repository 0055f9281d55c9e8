use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEffect, SidebarEvent};

pub(super) fn handle(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => {
            app.widgets.sidebar.reduce(event).map(AppEvent::Sidebar)
        },
        SidebarEvent::Effect(effect) => handle_effect(effect),
    }
}

fn handle_effect(effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::CollapsedChanged(collapsed) => {
            log::info!(
                "sidebar {}",
                if collapsed { "collapsed" } else { "expanded" }
            );
            Task::done(AppEvent::SyncLayout)
        },
        SidebarEffect::WidthChanged(width) => {
            log::debug!("sidebar width changed to {width}");
            Task::done(AppEvent::SyncLayout)
        },
        SidebarEffect::MenuItemSelected { key } => {
            Task::done(AppEvent::NavigateTo { key })
        },
    }
}
