//! Canonical constants for encoded log lines and destinations

// Default field keys
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_TIME: &str = "ts";

// Destination markers
pub const DEST_STDERR: &str = "stderr";
pub const DEST_STDOUT: &str = "stdout";
pub const DEST_FILE_SCHEME: &str = "file://";

/// Layout of the timestamp prepended to every message (`YYYY-MM-DD HH:MM:SS.mmm`)
pub const MESSAGE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Separator between the message timestamp and the message body
pub const MESSAGE_SEPARATOR: &str = " - ";
