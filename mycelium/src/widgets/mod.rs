pub(crate) mod sidebar;
pub(crate) mod title_bar;
