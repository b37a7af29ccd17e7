//! Process-wide logging facade
//!
//! This module provides:
//! - [`LogFacade`], an injectable facade with its own logger instance
//! - A process-wide facade via [`init`] / [`global`] and the free functions
//!   mirroring its methods
//! - Calling macros (`debugf!` … `fatalf!`, `log_error!`, `trace_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use simplelogger::{infof, set_level, Level};
//!
//! set_level(Level::Info);
//! infof!("ready after {} ms", 12);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

mod logger;

pub use init::{get_level, global, init, parse_level, set_level, set_output};
pub use logger::{message_timestamp, LogFacade};
pub use test_capture::{CapturedEvent, TestCapture};
