use simplelogger_types::ParseLevelError;
use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code usable in assertions and in the lines the
/// facade reports on its error destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogErrorKind {
    UnknownLevel,
    NoDestinations,
    OpenDestination,
    InvalidConfig,
    Sync,
    AlreadyInitialized,
}

impl LogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LogErrorKind::UnknownLevel => "ERR_UNKNOWN_LEVEL",
            LogErrorKind::NoDestinations => "ERR_NO_DESTINATIONS",
            LogErrorKind::OpenDestination => "ERR_OPEN_DESTINATION",
            LogErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            LogErrorKind::Sync => "ERR_SYNC",
            LogErrorKind::AlreadyInitialized => "ERR_ALREADY_INITIALIZED",
        }
    }
}

/// Errors raised while configuring or building a logger
#[derive(Error, Debug)]
pub enum LogError {
    /// A level name matched none of the known levels
    #[error(transparent)]
    UnknownLevel(#[from] ParseLevelError),

    /// An output list was empty
    #[error("No output destinations configured")]
    NoDestinations,

    /// A destination could not be opened for writing
    #[error("Cannot open log destination {destination}: {source}")]
    OpenDestination {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// A configuration document could not be parsed
    #[error("Invalid logging configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A destination could not be flushed
    #[error("Failed to sync log destination {destination}: {source}")]
    Sync {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// The process-wide facade was set up twice
    #[error("Global logger already initialized")]
    AlreadyInitialized,
}

impl LogError {
    /// Get the error kind
    pub fn kind(&self) -> LogErrorKind {
        match self {
            LogError::UnknownLevel(_) => LogErrorKind::UnknownLevel,
            LogError::NoDestinations => LogErrorKind::NoDestinations,
            LogError::OpenDestination { .. } => LogErrorKind::OpenDestination,
            LogError::InvalidConfig(_) => LogErrorKind::InvalidConfig,
            LogError::Sync { .. } => LogErrorKind::Sync,
            LogError::AlreadyInitialized => LogErrorKind::AlreadyInitialized,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
