use super::changelog::{BuiltinSource, ChangelogSource, FileSource, PageConfig};
use super::severity_config::SeverityConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "shipnotes.toml";

/// where changelog content comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// changelog file (.toml or .json); the built-in data set when unset
    pub path: Option<PathBuf>,
}

/// main configuration for shipnotes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipnotesConfig {
    /// page text and section labels
    #[serde(default)]
    pub page: PageConfig,

    /// changelog content location
    #[serde(default)]
    pub source: SourceConfig,

    /// severity of each validation issue type
    #[serde(default)]
    pub validation: SeverityConfig,
}

impl ShipnotesConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: ShipnotesConfig =
            toml::from_str(&contents).map_err(|e| Error::TomlParseError {
                origin: path.display().to_string(),
                source: e,
            })?;

        // source paths are relative to the config file
        if let Some(source_path) = config.source.path.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.source.path = Some(base.join(source_path));
        }

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// find and load `shipnotes.toml` in `dir`
    ///
    /// returns default config if the file is missing or cannot be parsed
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Self {
        match Self::find_config_file(&dir) {
            Some(config_path) => Self::load_from_file(&config_path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring unreadable configuration, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// find configuration file in `dir`
    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let config_path = dir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }

    /// content source selected by this configuration
    pub fn changelog_source(&self) -> Box<dyn ChangelogSource> {
        match &self.source.path {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(BuiltinSource),
        }
    }
}
