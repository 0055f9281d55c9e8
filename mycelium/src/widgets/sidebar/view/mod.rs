pub(crate) mod menu;
pub(crate) mod resize_handle;
pub(crate) mod style;

use iced::widget::{Column, container, row, text};
use iced::{Element, Length, alignment};

use self::style::SidebarColors;
use super::SidebarIntent;
use super::model::{SidebarSlot, SidebarViewModel, SlotContext};
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::fonts::FontsConfig;
use crate::icons::{SIDEBAR_COLLAPSE, SIDEBAR_EXPAND};
use crate::theme::ThemeProps;

const SLOT_PADDING: f32 = 16.0;
const FOOTER_FONT_SCALE: f32 = 0.85;
const TRIGGER_SIZE: f32 = 28.0;
const TRIGGER_ICON_SIZE: f32 = 16.0;
const TRIGGER_PADDING: f32 = 8.0;

/// Props for the sidebar view aggregator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the sidebar panel: header, menu, footer and the resize handle.
pub(crate) fn view(props: SidebarViewProps<'_>) -> Element<'_, SidebarIntent> {
    let vm = props.vm;
    let colors = SidebarColors::resolve(
        vm.menu_theme,
        props.theme.theme.iced_palette(),
        vm.overrides,
    );

    let mut content = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(header) = slot_view(vm.header, &props, colors) {
        content = content.push(
            container(header)
                .padding(SLOT_PADDING)
                .width(Length::Fill),
        );
    }

    content = content.push(menu::view(menu::MenuProps {
        items: vm.menu_items,
        selected_key: vm.selected_key,
        open_keys: vm.open_keys,
        collapsed: vm.collapsed,
        colors,
    }));

    if let Some(footer) = slot_view(vm.footer, &props, colors) {
        content = content.push(
            container(footer)
                .padding(SLOT_PADDING)
                .width(Length::Fill),
        );
    }

    content = content.push(collapse_trigger(vm.collapsed, &props));

    let panel = container(content)
        .width(Length::Fixed(vm.rendered_width))
        .height(Length::Fill)
        .clip(true)
        .style(move |_| iced::widget::container::Style {
            background: Some(colors.background.into()),
            text_color: Some(colors.foreground),
            ..Default::default()
        });

    if vm.resizable {
        row![panel, resize_handle::view(vm.is_resizing, colors)]
            .height(Length::Fill)
            .into()
    } else {
        panel.into()
    }
}

fn collapse_trigger<'a>(
    collapsed: bool,
    props: &SidebarViewProps<'a>,
) -> Element<'a, SidebarIntent> {
    let icon = if collapsed {
        SIDEBAR_EXPAND
    } else {
        SIDEBAR_COLLAPSE
    };

    let trigger = icon_button::view(IconButtonProps {
        icon,
        theme: props.theme,
        size: TRIGGER_SIZE,
        icon_size: TRIGGER_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|_| SidebarIntent::ToggleCollapsed);

    let align = if collapsed {
        alignment::Horizontal::Center
    } else {
        alignment::Horizontal::Right
    };

    container(trigger)
        .width(Length::Fill)
        .padding(TRIGGER_PADDING)
        .align_x(align)
        .into()
}

fn slot_view<'a>(
    slot: &'a SidebarSlot,
    props: &SidebarViewProps<'a>,
    colors: SidebarColors,
) -> Option<Element<'a, SidebarIntent>> {
    match slot {
        SidebarSlot::Empty => None,
        SidebarSlot::Static(content) => Some(
            text(content.as_str())
                .size(props.fonts.ui.size * FOOTER_FONT_SCALE)
                .color(colors.muted)
                .into(),
        ),
        SidebarSlot::Render(render) => Some(render(SlotContext {
            collapsed: props.vm.collapsed,
            toggle: SidebarIntent::ToggleCollapsed,
            theme: props.theme,
            fonts: props.fonts,
            colors,
        })),
    }
}
