// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by configuration loading and position parsing.
///
/// Notification operations themselves never fail: closing an unknown id or
/// opening outside an interactive environment is a silent no-op.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// A corner identifier that is not one of the four known positions.
    Position(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Position(e) => write!(f, "Unknown position: {}", e),
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
