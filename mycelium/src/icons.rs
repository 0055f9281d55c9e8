use serde::{Deserialize, Serialize};

pub(crate) const WINDOW_MAXIMIZE: &[u8] =
    include_bytes!("../assets/svg/window_maximize.svg");
pub(crate) const WINDOW_RESTORE: &[u8] =
    include_bytes!("../assets/svg/window_restore.svg");
pub(crate) const WINDOW_MINIMIZE: &[u8] =
    include_bytes!("../assets/svg/window_minimize.svg");
pub(crate) const WINDOW_CLOSE: &[u8] =
    include_bytes!("../assets/svg/window_close.svg");
pub(crate) const SIDEBAR_COLLAPSE: &[u8] =
    include_bytes!("../assets/svg/sidebar_collapse.svg");
pub(crate) const SIDEBAR_EXPAND: &[u8] =
    include_bytes!("../assets/svg/sidebar_expand.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../assets/svg/chevron_down.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../assets/svg/chevron_right.svg");

const HOME: &[u8] = include_bytes!("../assets/svg/home.svg");
const COMPASS: &[u8] = include_bytes!("../assets/svg/compass.svg");
const USER: &[u8] = include_bytes!("../assets/svg/user.svg");
const SETTINGS: &[u8] = include_bytes!("../assets/svg/settings.svg");
const FOLDER: &[u8] = include_bytes!("../assets/svg/folder.svg");
const FILE: &[u8] = include_bytes!("../assets/svg/file.svg");

/// Named icons that can be referenced from the shell configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub(crate) enum IconName {
    Home,
    #[default]
    Compass,
    User,
    Settings,
    Folder,
    File,
}

impl IconName {
    /// Return embedded SVG bytes for the icon.
    pub(crate) fn svg(self) -> &'static [u8] {
        match self {
            IconName::Home => HOME,
            IconName::Compass => COMPASS,
            IconName::User => USER,
            IconName::Settings => SETTINGS,
            IconName::Folder => FOLDER,
            IconName::File => FILE,
        }
    }
}
