use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        origin: String,
        source: toml::de::Error,
    },
    JsonParseError {
        origin: String,
        source: serde_json::Error,
    },
    SerializeError {
        source: serde_json::Error,
    },
    IoError(std::io::Error),
    ValidationFailed {
        errors: usize,
        warnings: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::FileWriteError { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { origin, source } => {
                write!(f, "failed to parse toml from {} ({})", origin, source)
            }
            Error::JsonParseError { origin, source } => {
                write!(f, "failed to parse json from {} ({})", origin, source)
            }
            Error::SerializeError { source } => {
                write!(f, "failed to serialize document ({})", source)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
            Error::ValidationFailed { errors, warnings } => {
                write!(
                    f,
                    "changelog validation failed: {} error(s), {} warning(s)",
                    errors, warnings
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::FileWriteError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::JsonParseError { source, .. } => Some(source),
            Error::SerializeError { source } => Some(source),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}
