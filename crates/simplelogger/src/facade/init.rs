//! The process-wide facade
//!
//! The first use of [`global`] builds the default configuration unless
//! [`init`] ran before it.

use crate::config::LogConfig;
use crate::errors::{LogError, Result};
use crate::facade::logger::LogFacade;
use simplelogger_types::Level;
use std::sync::OnceLock;

static GLOBAL: OnceLock<LogFacade> = OnceLock::new();

/// Install the process-wide facade with `config`
///
/// Must run before anything logs through [`global`]; a second call, or a call
/// after the default facade was built, fails with
/// [`LogError::AlreadyInitialized`].
///
/// # Example
///
/// ```no_run
/// use simplelogger::{init, LogConfig, Level};
///
/// let config = LogConfig::default().with_level(Level::Warn);
/// if let Err(err) = init(config) {
///     eprintln!("logging setup failed: {err}");
///     std::process::exit(1);
/// }
/// ```
pub fn init(config: LogConfig) -> Result<&'static LogFacade> {
    let facade = LogFacade::new(config)?;
    GLOBAL
        .set(facade)
        .map_err(|_| LogError::AlreadyInitialized)?;
    GLOBAL.get().ok_or(LogError::AlreadyInitialized)
}

/// The process-wide facade
///
/// A process that cannot log to its standard error stream cannot report
/// anything else either: if the default configuration is rejected, the cause
/// is printed and the process exits with status 1.
pub fn global() -> &'static LogFacade {
    GLOBAL.get_or_init(|| match LogFacade::with_defaults() {
        Ok(facade) => facade,
        Err(err) => {
            eprintln!("simplelogger: cannot build default logger: {}", err);
            std::process::exit(crate::escalation::FATAL_EXIT_CODE);
        }
    })
}

/// Set the threshold of the process-wide facade
pub fn set_level(level: Level) {
    global().set_level(level);
}

/// Threshold of the process-wide facade
pub fn get_level() -> Level {
    global().level()
}

/// See [`LogFacade::parse_level`]
pub fn parse_level(name: &str) -> Level {
    global().parse_level(name)
}

/// See [`LogFacade::set_output`]
pub fn set_output<I, S>(destinations: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    global().set_output(destinations)
}
