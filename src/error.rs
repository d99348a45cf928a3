//! Crate-level error types.

use std::fmt;

/// Errors produced by the splashring crate.
///
/// Only the options-file API returns errors. The animation entry points
/// (`start`, `request_disappear`, `tick`, `render`) never fail: misuse is
/// ignored or logged, never propagated out of a drawing callback.
#[derive(Debug)]
pub enum SplashError {
    /// Generic I/O failure while reading or writing an options file.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for SplashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for SplashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for SplashError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
