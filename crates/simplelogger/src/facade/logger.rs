//! The logging facade

use crate::backend::LoggerInstance;
use crate::config::LogConfig;
use crate::errors::Result;
use crate::escalation::Escalation;
use crate::facade::test_capture::TestCapture;
use crate::level::AtomicLevel;
use arc_swap::ArcSwap;
use simplelogger_types::schema::{MESSAGE_SEPARATOR, MESSAGE_TIME_FORMAT};
use simplelogger_types::Level;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Timestamp prepended to every message, `YYYY-MM-DD HH:MM:SS.mmm` in local time
pub fn message_timestamp() -> String {
    chrono::Local::now().format(MESSAGE_TIME_FORMAT).to_string()
}

/// Leveled logging over a rebuildable backend logger
///
/// The facade owns the live configuration, the current threshold and the
/// active [`LoggerInstance`]. Level changes are applied in place; output
/// changes build a new instance, sync the old one and swap.
///
/// # Example
///
/// ```
/// use simplelogger::{LogConfig, LogFacade, Level};
///
/// let facade = LogFacade::new(LogConfig::default().with_level(Level::Info)).unwrap();
/// facade.debugf(format_args!("suppressed"));
/// facade.infof(format_args!("listening on {}", 8080));
/// assert_eq!(facade.level(), Level::Info);
/// ```
pub struct LogFacade {
    config: Mutex<LogConfig>,
    level: AtomicLevel,
    active: ArcSwap<LoggerInstance>,
    capture: Option<TestCapture>,
}

impl LogFacade {
    /// Build a facade and its first logger instance
    pub fn new(config: LogConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Build a facade from [`LogConfig::default`]
    pub fn with_defaults() -> Result<Self> {
        Self::new(LogConfig::default())
    }

    /// Build a facade whose every instance also records into a [`TestCapture`]
    pub fn with_capture(config: LogConfig) -> Result<(Self, TestCapture)> {
        let capture = TestCapture::new();
        let facade = Self::build(config, Some(capture.clone()))?;
        Ok((facade, capture))
    }

    fn build(config: LogConfig, capture: Option<TestCapture>) -> Result<Self> {
        let level = AtomicLevel::new(config.level);
        let instance = LoggerInstance::build(&config, &level, capture.as_ref())?;
        Ok(Self {
            config: Mutex::new(config),
            level,
            active: ArcSwap::from_pointee(instance),
            capture,
        })
    }

    /// Change the threshold of the live logger
    pub fn set_level(&self, level: Level) {
        self.level.set(level);
        self.lock_config().level = level;
    }

    /// Current threshold
    pub fn level(&self) -> Level {
        self.level.get()
    }

    /// Case-insensitive level lookup with a `Debug` fallback
    ///
    /// An unknown name is reported as one error-level line and mapped to
    /// `Debug`. Use `name.parse::<Level>()` to detect the fallback instead.
    pub fn parse_level(&self, name: &str) -> Level {
        match name.parse() {
            Ok(level) => level,
            Err(err) => {
                self.errorf(format_args!("ParseLevel: {}", err));
                Level::Debug
            }
        }
    }

    /// Route normal and error output to `destinations`
    ///
    /// On failure the previous logger stays active and the configuration is
    /// left unchanged.
    pub fn set_output<I, S>(&self, destinations: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let outputs: Vec<String> = destinations.into_iter().map(Into::into).collect();
        self.reconfigure(|config| {
            config.output_paths = outputs.clone();
            config.error_output_paths = outputs;
        })
    }

    /// Route only the facade's own failure reports to `destinations`
    pub fn set_error_output<I, S>(&self, destinations: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let outputs: Vec<String> = destinations.into_iter().map(Into::into).collect();
        self.reconfigure(|config| config.error_output_paths = outputs)
    }

    /// Snapshot of the live configuration
    pub fn config(&self) -> LogConfig {
        self.lock_config().clone()
    }

    /// Flush every output of the active logger
    pub fn sync(&self) -> Result<()> {
        self.active.load().sync()
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// Log at panic level; the caller decides whether to unwind
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> Escalation {
        Escalation::Panic {
            message: self.logf(Level::Panic, args),
        }
    }

    /// Log at fatal level and sync; the caller decides whether to exit
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> Escalation {
        let message = self.logf(Level::Fatal, args);
        self.sync_or_report();
        Escalation::Fatal { message }
    }

    /// Log the concatenation of `values` at error level
    pub fn error(&self, values: &[&dyn fmt::Display]) {
        self.log_values(Level::Error, values);
    }

    pub fn panic(&self, values: &[&dyn fmt::Display]) -> Escalation {
        Escalation::Panic {
            message: self.log_values(Level::Panic, values),
        }
    }

    pub fn fatal(&self, values: &[&dyn fmt::Display]) -> Escalation {
        let message = self.log_values(Level::Fatal, values);
        self.sync_or_report();
        Escalation::Fatal { message }
    }

    /// Log the current stack, then the formatted message, both at error level
    pub fn trace_error(&self, args: fmt::Arguments<'_>) {
        let stack = format!("{:?}", backtrace::Backtrace::new());
        self.error(&[&stack]);
        self.errorf(args);
    }

    fn logf(&self, level: Level, args: fmt::Arguments<'_>) -> String {
        let message = format!("{}{}{}", message_timestamp(), MESSAGE_SEPARATOR, args);
        self.active.load().emit(level, &message);
        message
    }

    fn log_values(&self, level: Level, values: &[&dyn fmt::Display]) -> String {
        let mut message = message_timestamp();
        message.push_str(MESSAGE_SEPARATOR);
        for value in values {
            message.push_str(&value.to_string());
        }
        self.active.load().emit(level, &message);
        message
    }

    fn reconfigure(&self, change: impl FnOnce(&mut LogConfig)) -> Result<()> {
        let mut config = self.lock_config();
        let mut next = config.clone();
        change(&mut next);
        self.rebuild(&next)?;
        *config = next;
        Ok(())
    }

    fn rebuild(&self, config: &LogConfig) -> Result<()> {
        let instance = LoggerInstance::build(config, &self.level, self.capture.as_ref())?;
        let previous = self.active.load_full();
        if let Err(err) = previous.sync() {
            previous.report(&format!("{}: {}", err.code(), err));
        }
        self.active.store(Arc::new(instance));
        Ok(())
    }

    fn sync_or_report(&self) {
        let active = self.active.load();
        if let Err(err) = active.sync() {
            active.report(&format!("{}: {}", err.code(), err));
        }
    }

    fn lock_config(&self) -> MutexGuard<'_, LogConfig> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for LogFacade {
    fn drop(&mut self) {
        self.sync_or_report();
    }
}
