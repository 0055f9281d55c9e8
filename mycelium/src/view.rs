use iced::widget::{Space, Stack, column, container, mouse_area, row, text};
use iced::{Element, Length, alignment, mouse};

use crate::app::{App, AppEvent};
use crate::components::primitive::resize_grips;
use crate::layout::HEADER_SEPARATOR_HEIGHT;
use crate::theme::ThemeProps;
use crate::widgets::sidebar::{self, SidebarEvent};
use crate::widgets::title_bar::{self, TitleBarEvent};

const SEPARATOR_ALPHA: f32 = 0.3;
const CONTENT_PADDING: f32 = 24.0;
const CONTENT_SPACING: f32 = 8.0;
const CAPTION_SCALE: f32 = 0.85;

/// Render the root application view.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);

    let header = view_header(app, theme_props);

    let sidebar = sidebar::view::view(sidebar::view::SidebarViewProps {
        vm: app.widgets.sidebar.vm(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| AppEvent::Sidebar(SidebarEvent::Intent(event)));

    let body = row![sidebar, view_route(app, theme_props)]
        .width(Length::Fill)
        .height(Length::Fill);

    let base = column![header, body]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, AppEvent>> = vec![base.into()];

    if app.widgets.sidebar.is_resizing() {
        // Keep the resize cursor while the pointer leaves the handle.
        layers.push(
            mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                .interaction(mouse::Interaction::ResizingHorizontally)
                .into(),
        );
    } else {
        layers.push(resize_grips::view().map(|event| match event {
            resize_grips::ResizeGripEvent::Resize(direction) => {
                AppEvent::ResizeWindow(direction)
            },
        }));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header: title bar + separator.
fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent> {
    let palette = theme_props.theme.iced_palette();

    let title_bar =
        title_bar::view::view(title_bar::view::TitleBarViewProps {
            vm: app.widgets.title_bar.vm(),
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(|event| AppEvent::TitleBar(TitleBarEvent::Intent(event)));

    let mut separator_color = palette.separator;
    separator_color.a = SEPARATOR_ALPHA;
    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(separator_color.into()),
            ..Default::default()
        });

    column![title_bar, separator]
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}

/// Render the routed page for the active menu entry.
fn view_route<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent> {
    let palette = theme_props.theme.iced_palette();
    let route = app.state.active_route();
    let heading = route
        .and_then(|key| app.widgets.sidebar.menu_label(key))
        .unwrap_or("Welcome");

    let size = app.state.content_size;
    let caption = match route {
        Some(key) => format!(
            "/{key} \u{00b7} {:.0} \u{00d7} {:.0}",
            size.width, size.height
        ),
        None => String::from("Select an entry in the sidebar"),
    };

    let page = column![
        text(heading)
            .font(app.fonts.heading.font_type)
            .size(app.fonts.heading.size * 1.5)
            .color(palette.foreground),
        text(caption)
            .size(app.fonts.ui.size * CAPTION_SCALE)
            .color(palette.dim_foreground),
    ]
    .spacing(CONTENT_SPACING);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CONTENT_PADDING)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.background.into()),
            ..Default::default()
        })
        .into()
}
