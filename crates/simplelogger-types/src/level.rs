//! Severity levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Detailed information for debugging
    Debug,
    /// General informational messages
    Info,
    /// Warning messages
    #[serde(alias = "warning")]
    Warn,
    /// Error messages
    Error,
    /// Logged, then the caller unwinds
    Panic,
    /// Logged, then the caller terminates the process
    Fatal,
}

impl Level {
    /// All levels in ascending order of severity
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
        Level::Fatal,
    ];

    /// Lowercase name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    /// Uppercase name of the level
    pub fn as_capital_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    /// Ordinal of the level, `0` for `Debug`
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Inverse of [`Level::as_u8`]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Debug
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    /// The rejected input, as given
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level: {}", self.name)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive; `warning` is accepted for `Warn`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ParseLevelError {
                name: s.to_string(),
            }),
        }
    }
}
