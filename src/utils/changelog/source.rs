// changelog content sources

use super::builtin::builtin_changelog;
use super::types::{Changelog, ReleaseEntry};
use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// on-disk encodings a changelog can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    /// guess the format from a file extension; anything unknown is read as toml
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => SourceFormat::Json,
            _ => SourceFormat::Toml,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Toml => write!(f, "toml"),
            SourceFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(SourceFormat::Toml),
            "json" => Ok(SourceFormat::Json),
            _ => Err(format!("invalid source format: {}, use 'toml' or 'json'", s)),
        }
    }
}

/// anything that can supply the ordered release list at startup
pub trait ChangelogSource {
    fn load(&self) -> Result<Changelog>;

    /// short human-readable origin, used in logs and reports
    fn describe(&self) -> String;
}

/// the release list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl ChangelogSource for BuiltinSource {
    fn load(&self) -> Result<Changelog> {
        Ok(builtin_changelog().clone())
    }

    fn describe(&self) -> String {
        "built-in".to_string()
    }
}

/// a `.toml` or `.json` file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: SourceFormat,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SourceFormat::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(mut self, format: SourceFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChangelogSource for FileSource {
    fn load(&self) -> Result<Changelog> {
        let content = fs::read_to_string(&self.path).map_err(|e| Error::FileReadError {
            path: self.path.clone(),
            source: e,
        })?;

        let changelog = parse_changelog(&content, self.format, &self.describe())?;
        tracing::info!(
            path = %self.path.display(),
            format = %self.format,
            releases = changelog.len(),
            "loaded changelog"
        );
        Ok(changelog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// content already held in memory
#[derive(Debug, Clone)]
pub struct StrSource {
    content: String,
    format: SourceFormat,
}

impl StrSource {
    pub fn new(content: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            content: content.into(),
            format,
        }
    }
}

impl ChangelogSource for StrSource {
    fn load(&self) -> Result<Changelog> {
        parse_changelog(&self.content, self.format, &self.describe())
    }

    fn describe(&self) -> String {
        format!("<inline {}>", self.format)
    }
}

/// parse changelog content in the given format
///
/// json accepts either a bare array of releases or an object with a
/// `release`/`releases` key; unknown top-level keys are rejected
pub fn parse_changelog(content: &str, format: SourceFormat, origin: &str) -> Result<Changelog> {
    match format {
        SourceFormat::Toml => toml::from_str(content).map_err(|e| Error::TomlParseError {
            origin: origin.to_string(),
            source: e,
        }),
        SourceFormat::Json => {
            let json_error = |e: serde_json::Error| Error::JsonParseError {
                origin: origin.to_string(),
                source: e,
            };
            if content.trim_start().starts_with('[') {
                serde_json::from_str::<Vec<ReleaseEntry>>(content)
                    .map(Changelog::new)
                    .map_err(json_error)
            } else {
                serde_json::from_str(content).map_err(json_error)
            }
        }
    }
}
