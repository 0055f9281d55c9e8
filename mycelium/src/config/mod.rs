mod errors;
pub(crate) mod model;
mod storage;

pub(crate) use model::ShellConfig;
use storage::{ConfigLoadStatus, load_config};

/// Load the shell configuration, degrading to defaults on any failure.
pub(crate) fn load_initial_config() -> ShellConfig {
    match load_config() {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("shell config loaded");
                },
                ConfigLoadStatus::Missing => {
                    log::debug!("shell config not found, using defaults");
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!("shell config invalid: {message}");
                },
            }
            config
        },
        Err(err) => {
            log::warn!("shell config read failed: {err}");
            ShellConfig::default()
        },
    }
}
