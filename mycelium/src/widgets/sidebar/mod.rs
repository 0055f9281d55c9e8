mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
use model::{SidebarProps, SidebarViewModel};
use reducer::SidebarCtx;
use state::{MenuState, SidebarState};

/// Sidebar widget owning its props and private interaction state.
///
/// State lives as long as the widget; nothing is persisted.
pub(crate) struct SidebarWidget {
    props: SidebarProps,
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct the sidebar from externally supplied props.
    pub(crate) fn new(props: SidebarProps) -> Self {
        let menu = MenuState::new(
            &props.default_selected_keys,
            &props.default_open_keys,
            props.menu_mode,
        );
        let state =
            SidebarState::new(props.bounds, props.default_collapsed, menu);

        Self { props, state }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
    ) -> Task<SidebarEvent> {
        let ctx = SidebarCtx {
            bounds: self.props.bounds,
            resizable: self.props.resizable,
            menu_mode: self.props.menu_mode,
            menu_items: &self.props.menu_items,
        };
        reducer::reduce(&mut self.state, event, &ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel<'_> {
        SidebarViewModel {
            collapsed: self.state.is_collapsed(),
            rendered_width: self.rendered_width(),
            is_resizing: self.state.is_resizing(),
            resizable: self.props.resizable,
            menu_items: &self.props.menu_items,
            selected_key: self.state.menu().selected_key(),
            open_keys: self.state.menu().open_keys(),
            menu_theme: self.props.menu_theme,
            overrides: self.props.overrides,
            header: &self.props.header,
            footer: &self.props.footer,
        }
    }

    /// Return whether a resize drag is in progress.
    pub(crate) fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    /// Width the sidebar panel occupies, excluding the resize handle.
    pub(crate) fn rendered_width(&self) -> f32 {
        self.state.rendered_width(&self.props.bounds)
    }

    /// Width of the panel plus its resize handle, if any.
    pub(crate) fn occupied_width(&self) -> f32 {
        if self.props.resizable {
            self.rendered_width() + model::RESIZE_HANDLE_WIDTH
        } else {
            self.rendered_width()
        }
    }

    /// Return the currently selected menu key.
    pub(crate) fn selected_key(&self) -> Option<&str> {
        self.state.menu().selected_key()
    }

    /// Look up the label of a menu entry by key.
    pub(crate) fn menu_label(&self, key: &str) -> Option<&str> {
        model::find_menu_item(&self.props.menu_items, key)
            .map(|item| item.label.as_str())
    }
}
