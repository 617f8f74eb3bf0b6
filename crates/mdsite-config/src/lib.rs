use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the site configuration file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "mdsite.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout: where markdown comes from, where HTML goes, and the URL
/// prefix the site is served under.
///
/// Every field is optional in the TOML file and falls back to the
/// conventional layout of a site checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Prefix for root-relative `href`/`src` attributes, `/` when served at the root.
    pub basepath: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            static_dir: PathBuf::from("static"),
            basepath: String::from("/"),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.expand_paths();

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Expands shell variables and tilde in every configured directory.
    ///
    /// Paths that fail to expand (e.g. an unset variable) are kept as written.
    pub fn expand_paths(&mut self) {
        for path in [
            &mut self.content_dir,
            &mut self.template_path,
            &mut self.output_dir,
            &mut self.static_dir,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
