use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::ShellConfig;

const CONFIG_PATH_ENV: &str = "MYCELIUM_CONFIG";

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: ShellConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: ShellConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ShellConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    load_config_from_path(&config_path())
}

pub(super) fn load_config_from_path(
    path: &Path,
) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                ShellConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<ShellConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(
            config.normalized(),
            ConfigLoadStatus::Loaded,
        )),
        Err(err) => Ok(ConfigLoad::new(
            ShellConfig::default(),
            ConfigLoadStatus::Invalid(ConfigError::from(err).to_string()),
        )),
    }
}

fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("mycelium")
            .join("shell.json");
    }

    std::env::temp_dir().join("mycelium").join("shell.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{ConfigLoadStatus, ShellConfig, load_config_from_path};

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status()
    {
        let root = test_temp_dir("missing");
        let path = root.join("shell.json");

        let loaded = load_config_from_path(&path)
            .expect("missing config should not be an error");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Missing));
        assert_eq!(config, ShellConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("shell.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_config_from_path(&path)
            .expect("loading invalid config should not fail with io error");
        let (config, status) = loaded.into_parts();

        assert_eq!(config, ShellConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_config_is_normalized() {
        let root = test_temp_dir("valid");
        let path = root.join("shell.json");
        fs::write(
            &path,
            r#"{
                "title": "Spores",
                "sidebar": { "width": 1000, "menu_mode": "vertical" },
                "menu": [
                    { "key": "home", "label": "Home", "icon": "home" },
                    { "key": "user", "label": "User", "children": [
                        { "key": "profile", "label": "Profile" }
                    ] }
                ]
            }"#,
        )
        .expect("test payload should be written");

        let loaded =
            load_config_from_path(&path).expect("valid config should load");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Loaded));
        assert_eq!(config.title, "Spores");
        assert_eq!(config.sidebar.width, config.sidebar.max_width);
        assert_eq!(config.menu.len(), 2);
        assert_eq!(config.menu[1].children[0].key, "profile");

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_directory_path_when_load_then_io_error_is_returned() {
        let root = test_temp_dir("directory");

        assert!(load_config_from_path(&root).is_err());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "mycelium-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
