// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// `submit_raw` was called with a kind tag outside the known set.
    /// The submission is dropped without touching scheduler state.
    UnknownKind(String),
    /// An alert key is absent from the fixed alert table. This indicates a
    /// content/data bug rather than a runtime condition; callers should
    /// treat it as fatal.
    UnknownAlertKey(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::UnknownKind(kind) => write!(f, "Unknown notification kind: {}", kind),
            Error::UnknownAlertKey(key) => write!(f, "Unknown alert key: {}", key),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
