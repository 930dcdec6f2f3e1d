use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "DINDARSHIKA_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("dindarshika").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".dindarshika.toml"));
    }

    locations
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub today_char: char,
    pub focus_char: Option<char>,
    pub show_lunar_month: bool,
    pub show_event_labels: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            today_char: '*',
            focus_char: None,
            show_lunar_month: true,
            show_event_labels: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interval of clock refreshes in milliseconds.
    #[serde(rename = "tick_rate")]
    tick_rate_ms: u64,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_rate_ms: 500,
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.tick_rate_ms == 0 {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                "tick_rate must be greater than zero",
            ));
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Config::parse(&content).map_err(|e| {
            let msg = format!("{}: {}", path.display(), e);
            e.with_msg(&msg)
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Loads the config from `path` if given. Otherwise the first existing file
/// among the default locations is used, falling back to the defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Loading config from {}", path.display());
        return Config::from_file(path);
    }

    for location in find_configfile_locations() {
        if !location.is_file() {
            continue;
        }

        match Config::from_file(&location) {
            Ok(config) => {
                log::info!("Loaded config from {}", location.display());
                return Ok(config);
            }
            Err(e) => log::warn!("Skipping config {}: {}", location.display(), e),
        }
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::default().tick_rate(), Duration::from_millis(500));
    }

    #[test]
    fn partial_theme() {
        let config = Config::parse(
            r#"
            tick_rate = 1000

            [theme]
            today_char = "@"
            show_lunar_month = false
            "#,
        )
        .unwrap();

        assert_eq!(config.tick_rate(), Duration::from_secs(1));
        assert_eq!(config.theme.today_char, '@');
        assert!(!config.theme.show_lunar_month);
        assert!(config.theme.show_event_labels);
        assert_eq!(config.theme.focus_char, None);
    }

    #[test]
    fn invalid_config_is_reported() {
        let err = Config::parse("tick_rate = \"fast\"").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));

        let err = Config::parse("tick_rate = 0").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = env::temp_dir().join("dindarshika-does-not-exist.toml");
        let err = load_suitable_config(Some(&path)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let path = env::temp_dir().join(format!("dindarshika-{}.toml", std::process::id()));
        fs::write(&path, "[theme]\nfocus_char = \">\"\n").unwrap();
        let config = load_suitable_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.theme.focus_char, Some('>'));
    }
}
