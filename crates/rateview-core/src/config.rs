use crate::{Error, Result};
use rateview_types::RelativeStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. RATEVIEW_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.rateview
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("RATEVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("rateview"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rateview"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub style: RelativeStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "warn" or "rateview_core=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load `config.toml` from `data_dir`; a missing file yields defaults
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_from(&data_dir.join(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = Config {
            display: DisplayConfig {
                style: RelativeStyle::Short,
            },
            log: LogConfig {
                level: "debug".to_string(),
            },
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[display]\nstyle = \"short\"\n").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.display.style, RelativeStyle::Short);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_invalid_style_is_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[display]\nstyle = \"loud\"\n").unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let path = resolve_data_dir(Some("/tmp/rateview-data")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/rateview-data"));
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let path = resolve_data_dir(Some("~/x")).unwrap();
        match std::env::var_os("HOME") {
            Some(home) => assert_eq!(path, PathBuf::from(home).join("x")),
            None => assert_eq!(path, PathBuf::from("~/x")),
        }
    }

    #[test]
    fn test_tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("/data/~/x"), PathBuf::from("/data/~/x"));
        assert_eq!(expand_tilde("~x"), PathBuf::from("~x"));
    }

    #[test]
    fn test_data_dir_priority() {
        unsafe {
            std::env::set_var("RATEVIEW_PATH", "/env/rateview");
        }

        let explicit = resolve_data_dir(Some("/explicit/rateview")).unwrap();
        let from_env = resolve_data_dir(None).unwrap();

        unsafe {
            std::env::remove_var("RATEVIEW_PATH");
        }

        assert_eq!(explicit, PathBuf::from("/explicit/rateview"));
        assert_eq!(from_env, PathBuf::from("/env/rateview"));
    }
}
