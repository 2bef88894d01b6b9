use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    /// Append the payload hex to every decoded message.
    pub show_raw_data: bool,
    /// BlueZ adapter for `monitor`, e.g. "hci1". Default adapter when unset.
    pub adapter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_raw_data: false,
            adapter: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Reads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(cfg) => {
                    info!("Loaded config from {}", path.display());
                    cfg
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Config::default()
                }
            },
            Err(_) => {
                info!("No config file at {}, using defaults", path.display());
                Config::default()
            }
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

pub fn config_path() -> PathBuf {
    dirs_path().join("config.toml")
}

fn dirs_path() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("pods-proximity")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("pods-proximity")
    } else {
        PathBuf::from(".config").join("pods-proximity")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let cfg = Config::from_toml(
            r#"
            format = "json"
            show_raw_data = true
            adapter = "hci1"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.show_raw_data);
        assert_eq!(cfg.adapter.as_deref(), Some("hci1"));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Config::from_toml("format = \"xml\"").is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let cfg = Config::load_from(Path::new("/nonexistent/pods-proximity/config.toml"));
        assert_eq!(cfg, Config::default());
    }
}
