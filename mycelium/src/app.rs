#[path = "subscription.rs"]
mod subscription;
#[path = "view.rs"]
pub(crate) mod view;

use iced::window::Direction;
use iced::{Color, Element, Size, Subscription, Task, Theme, window};

use crate::components::primitive::profile_card::{
    self, ProfileCardColors, ProfileCardProps,
};
use crate::config::model::ProfileConfig;
use crate::config::{ShellConfig, load_initial_config};
use crate::fonts::FontsConfig;
use crate::layout::screen_size_from_window;
use crate::state::State;
use crate::theme::ThemeManager;
use crate::widgets::sidebar::model::{SidebarBounds, SidebarProps, SidebarSlot};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};
use crate::widgets::title_bar::model::TitleBarProps;
use crate::widgets::title_bar::{TitleBarEvent, TitleBarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Title bar widget
    TitleBar(TitleBarEvent),
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Cross-widget flows
    NavigateTo { key: String },
    SyncLayout,
    // Window
    Window(window::Event),
    ResizeWindow(Direction),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) title_bar: TitleBarWidget,
    pub(crate) sidebar: SidebarWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = load_initial_config();

        let mut theme_manager = ThemeManager::new();
        theme_manager.set_custom_palette(&config.palette);

        let widgets = Widgets {
            title_bar: TitleBarWidget::new(title_bar_props(&config)),
            sidebar: SidebarWidget::new(sidebar_props(&config)),
        };

        let window_size =
            Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
        let mut state = State::new(screen_size_from_window(window_size));
        if let Some(key) = widgets.sidebar.selected_key() {
            state.navigate(key.to_string());
        }

        let app = Self {
            theme_manager,
            fonts: FontsConfig::default(),
            state,
            widgets,
        };

        (app, Task::done(AppEvent::SyncLayout))
    }

    pub(crate) fn title(&self) -> String {
        self.widgets.title_bar.title().to_string()
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        crate::events::handle(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        view::view(self)
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }
}

fn title_bar_props(config: &ShellConfig) -> TitleBarProps {
    let title_bar = &config.title_bar;

    TitleBarProps {
        title: config.title.clone(),
        icon: title_bar.icon,
        left: title_bar.left.clone(),
        right: title_bar.right.clone(),
        overrides: title_bar.style.to_overrides(),
        double_click_maximize: title_bar.double_click_maximize,
    }
}

fn sidebar_props(config: &ShellConfig) -> SidebarProps {
    let sidebar = &config.sidebar;

    SidebarProps {
        bounds: SidebarBounds {
            width: sidebar.width,
            collapsed_width: sidebar.collapsed_width,
            min_width: sidebar.min_width,
            max_width: sidebar.max_width,
        },
        resizable: sidebar.resizable,
        default_collapsed: sidebar.default_collapsed,
        menu_items: config.menu.clone(),
        default_selected_keys: sidebar.default_selected_keys.clone(),
        default_open_keys: sidebar.default_open_keys.clone(),
        menu_mode: sidebar.menu_mode,
        menu_theme: sidebar.menu_theme,
        overrides: sidebar.style.to_overrides(),
        header: profile_header(config.profile.clone()),
        footer: sidebar
            .footer
            .clone()
            .map_or(SidebarSlot::Empty, SidebarSlot::Static),
    }
}

/// Header slot showing the profile card; the avatar toggles collapse.
fn profile_header(profile: ProfileConfig) -> SidebarSlot {
    SidebarSlot::render(move |ctx| {
        let toggle = ctx.toggle;
        let palette = ctx.theme.theme.iced_palette();

        profile_card::view(ProfileCardProps {
            name: profile.name.clone(),
            description: profile.description.clone(),
            compact: ctx.collapsed,
            name_font: ctx.fonts.heading.font_type,
            name_size: ctx.fonts.ui.size,
            colors: ProfileCardColors {
                avatar_background: ctx.colors.accent,
                avatar_foreground: Color::WHITE,
                foreground: ctx.colors.foreground,
                muted: palette.dim_foreground,
            },
        })
        .map(move |_| toggle.clone())
    })
}
