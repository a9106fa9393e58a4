// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Reasons a bundled font could not be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The embedded asset disappeared between listing and reading.
    MissingAsset(String),

    /// The renderer rejected the font data.
    LoadFailed(String),
}

impl FontError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FontError::MissingAsset(_) => "error-font-missing",
            FontError::LoadFailed(_) => "error-font-load",
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::MissingAsset(name) => write!(f, "Font asset not found: {}", name),
            FontError::LoadFailed(name) => write!(f, "Font could not be loaded: {}", name),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
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

pub type Result<T> = std::result::Result<T, Error>;
