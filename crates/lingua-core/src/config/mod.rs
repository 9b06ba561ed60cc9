mod defaults;


use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::LinguaError;
use defaults::*;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "lingua.toml";

/// Top-level lingua configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lingua: LinguaConfig,
}

/// Where the language files live and which language backs every lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct LinguaConfig {
    /// Directory holding the catalog and one `<language>.toml` per language.
    #[serde(default = "default_lib_dir")]
    pub lib_dir: String,
    /// File name of the catalog inside `lib_dir`.
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Language used when the preferred one cannot answer.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Tracing filter applied when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LinguaConfig {
    fn default() -> Self {
        Self {
            lib_dir: default_lib_dir(),
            catalog: default_catalog(),
            default_language: default_language(),
            log_level: default_log_level(),
        }
    }
}

impl LinguaConfig {
    /// Library directory with `~/` expanded.
    pub fn lib_path(&self) -> PathBuf {
        PathBuf::from(shellexpand(&self.lib_dir))
    }

    /// Full path of the language catalog.
    pub fn catalog_path(&self) -> PathBuf {
        self.lib_path().join(&self.catalog)
    }

    /// Full path of the message table for `language`.
    ///
    /// Language names are case-insensitive; files are stored lowercase.
    pub fn language_path(&self, language: &str) -> PathBuf {
        self.lib_path()
            .join(format!("{}.toml", language.trim().to_lowercase()))
    }

    /// Full path of the default language's message table.
    pub fn default_language_path(&self) -> PathBuf {
        self.language_path(&self.default_language)
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: impl AsRef<Path>) -> Result<Config, LinguaError> {
    let path = path.as_ref();
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LinguaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| LinguaError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
