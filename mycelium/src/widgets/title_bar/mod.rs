mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{TitleBarEffect, TitleBarEvent, TitleBarIntent};
use iced::Task;
use model::{TitleBarProps, TitleBarViewModel};
use reducer::TitleBarCtx;
use state::TitleBarState;

/// Title bar widget: drag surface, slots and window controls.
pub(crate) struct TitleBarWidget {
    props: TitleBarProps,
    state: TitleBarState,
}

impl TitleBarWidget {
    pub(crate) fn new(props: TitleBarProps) -> Self {
        Self {
            props,
            state: TitleBarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: TitleBarIntent,
    ) -> Task<TitleBarEvent> {
        let ctx = TitleBarCtx {
            double_click_maximize: self.props.double_click_maximize,
        };
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> TitleBarViewModel<'_> {
        TitleBarViewModel {
            title: &self.props.title,
            icon: self.props.icon,
            left: &self.props.left,
            right: &self.props.right,
            overrides: self.props.overrides,
            is_maximized: self.state.is_maximized(),
        }
    }

    pub(crate) fn title(&self) -> &str {
        &self.props.title
    }
}
