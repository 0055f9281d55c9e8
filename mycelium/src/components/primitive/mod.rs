pub(crate) mod icon_button;
pub(crate) mod menu_item;
pub(crate) mod profile_card;
pub(crate) mod resize_grips;
