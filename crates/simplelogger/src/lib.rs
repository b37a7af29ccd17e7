//! simplelogger - a process-wide structured logging facade
//!
//! This crate gives an application one logging entry point with a
//! configurable level and configurable destinations:
//! - Leveled calls from `debug` up to `fatal`, each message prefixed with a
//!   `YYYY-MM-DD HH:MM:SS.mmm - ` timestamp
//! - A live threshold that can be changed without rebuilding the logger
//! - Output destinations (standard streams or files) that can be replaced at
//!   runtime
//! - Panic and fatal tiers that return an [`Escalation`] to the caller
//!   instead of unwinding or exiting on their own
//!
//! Formatting, filtering and writing are done by the `tracing` /
//! `tracing-subscriber` backend.
//!
//! # Example
//!
//! ```rust
//! use simplelogger::{errorf, infof, parse_level, set_level};
//!
//! set_level(parse_level("info"));
//! infof!("worker {} started", 3);
//! errorf!("lost connection to {}", "db-1");
//! ```

#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod backend;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod escalation;
pub mod facade;
pub mod level;
pub mod sink;

// Re-export commonly used types
pub use config::{EncoderConfig, Encoding, LevelEncoder, LogConfig, TimeEncoder, DEFAULT_CONFIG_JSON};
pub use errors::{LogError, LogErrorKind, Result};
pub use escalation::Escalation;
pub use facade::{
    get_level, global, init, parse_level, set_level, set_output, CapturedEvent, LogFacade, TestCapture,
};
pub use level::AtomicLevel;
pub use simplelogger_types::{Destination, Level, ParseLevelError};
