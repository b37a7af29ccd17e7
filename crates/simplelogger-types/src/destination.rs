//! Output destinations

use crate::schema::{DEST_FILE_SCHEME, DEST_STDERR, DEST_STDOUT};
use std::fmt;
use std::path::PathBuf;

/// A named target that receives rendered log lines
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The standard error stream
    Stderr,
    /// The standard output stream
    Stdout,
    /// A file, opened for append and created if missing
    File(PathBuf),
}

impl Destination {
    /// Parse a destination string
    ///
    /// `"stderr"` and `"stdout"` name the standard streams. Anything else is a
    /// file path; a leading `file://` is stripped.
    pub fn parse(s: &str) -> Self {
        match s {
            DEST_STDERR => Destination::Stderr,
            DEST_STDOUT => Destination::Stdout,
            path => {
                let path = path.strip_prefix(DEST_FILE_SCHEME).unwrap_or(path);
                Destination::File(PathBuf::from(path))
            }
        }
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        Destination::parse(s)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stderr => f.write_str(DEST_STDERR),
            Destination::Stdout => f.write_str(DEST_STDOUT),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}
