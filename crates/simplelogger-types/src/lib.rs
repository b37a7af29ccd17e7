//! Core types shared by the simplelogger facade
//!
//! This crate holds the types that do not depend on the logging backend:
//!
//! - **Level**: ordered severity tiers, from `Debug` up to `Fatal`
//! - **Destination**: a parsed output target (standard stream or file)
//! - **Schema constants**: default field keys, markers and timestamp layout

pub mod destination;
pub mod level;
pub mod schema;

pub use destination::Destination;
pub use level::{Level, ParseLevelError};
