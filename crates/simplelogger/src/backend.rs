//! Logger instances built on the `tracing` backend
//!
//! A [`LoggerInstance`] is a `tracing::Dispatch` assembled from a
//! [`LogConfig`]: a registry, a fmt layer with the [`LineEncoder`] writing to
//! the configured sinks, and a [`SeverityFilter`] reading the shared
//! [`AtomicLevel`]. Events are emitted into that dispatch only, so two
//! instances never observe each other's lines.

use crate::config::LogConfig;
use crate::encoder::LineEncoder;
use crate::errors::Result;
use crate::facade::test_capture::TestCapture;
use crate::level::AtomicLevel;
use crate::sink::SinkSet;
use simplelogger_types::Level;
use tracing::subscriber::Interest;
use tracing::{Dispatch, Metadata};
use tracing_subscriber::layer::{Context, Filter, SubscriberExt};
use tracing_subscriber::Layer;

pub(crate) const TARGET: &str = "simplelogger";
pub(crate) const PANIC_TARGET: &str = "simplelogger::panic";
pub(crate) const FATAL_TARGET: &str = "simplelogger::fatal";

/// Recover the facade severity of an event
///
/// The backend has no tiers above `ERROR`; panic and fatal events are emitted
/// at `ERROR` under their own targets.
pub fn severity_of(metadata: &Metadata<'_>) -> Level {
    match metadata.target() {
        PANIC_TARGET => Level::Panic,
        FATAL_TARGET => Level::Fatal,
        _ => match *metadata.level() {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            _ => Level::Debug,
        },
    }
}

/// Per-layer filter enforcing the live threshold
#[derive(Debug, Clone)]
pub struct SeverityFilter {
    level: AtomicLevel,
}

impl SeverityFilter {
    pub fn new(level: AtomicLevel) -> Self {
        Self { level }
    }
}

impl<S> Filter<S> for SeverityFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.level.enabled(severity_of(metadata))
    }

    // The threshold changes at runtime, so the answer must never be cached
    // per callsite.
    fn callsite_enabled(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }
}

/// A live logger built from one configuration
pub struct LoggerInstance {
    dispatch: Dispatch,
    outputs: SinkSet,
    error_outputs: SinkSet,
}

impl LoggerInstance {
    /// Open the configured sinks and assemble the subscriber
    pub fn build(config: &LogConfig, level: &AtomicLevel, capture: Option<&TestCapture>) -> Result<Self> {
        let outputs = SinkSet::open(&config.output_paths)?;
        let error_outputs = SinkSet::open(&config.error_output_paths)?;

        let fmt_layer = tracing_subscriber::fmt::layer()
            .event_format(LineEncoder::new(config.encoding, config.encoder_config.clone()))
            .with_writer(outputs.make_writer())
            .with_filter(SeverityFilter::new(level.clone()));
        let capture_layer = capture.map(|capture| {
            capture
                .layer()
                .with_filter(SeverityFilter::new(level.clone()))
        });

        let subscriber = tracing_subscriber::registry()
            .with(fmt_layer)
            .with(capture_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            outputs,
            error_outputs,
        })
    }

    /// Record one message at `level`
    pub fn emit(&self, level: Level, message: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            Level::Debug => tracing::debug!(target: TARGET, "{}", message),
            Level::Info => tracing::info!(target: TARGET, "{}", message),
            Level::Warn => tracing::warn!(target: TARGET, "{}", message),
            Level::Error => tracing::error!(target: TARGET, "{}", message),
            Level::Panic => tracing::error!(target: PANIC_TARGET, "{}", message),
            Level::Fatal => tracing::error!(target: FATAL_TARGET, "{}", message),
        });
    }

    /// Flush every output sink
    pub fn sync(&self) -> Result<()> {
        self.outputs.sync()
    }

    /// Write a line about the facade's own failure to the error destinations
    pub fn report(&self, message: &str) {
        self.error_outputs.write_line(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(dir: &tempfile::TempDir, name: &str) -> (LogConfig, std::path::PathBuf) {
        let path = dir.path().join(name);
        let config = LogConfig::default().with_outputs([path.display().to_string()]);
        (config, path)
    }

    #[test]
    fn test_emit_every_level() {
        let level = AtomicLevel::new(Level::Debug);
        let dir = tempfile::tempdir().unwrap();
        let (config, path) = file_config(&dir, "levels.log");
        let instance = LoggerInstance::build(&config, &level, None).unwrap();

        for level in Level::ALL {
            instance.emit(level, level.as_str());
        }
        instance.sync().unwrap();

        let lines: Vec<String> = std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        let expected: Vec<String> = Level::ALL
            .iter()
            .map(|l| format!("{}\t{}", l.as_str(), l.as_str()))
            .collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_filter_follows_live_level() {
        let level = AtomicLevel::new(Level::Debug);
        let dir = tempfile::tempdir().unwrap();
        let (config, path) = file_config(&dir, "live.log");
        let instance = LoggerInstance::build(&config, &level, None).unwrap();

        instance.emit(Level::Debug, "before");
        level.set(Level::Panic);
        instance.emit(Level::Error, "hidden");
        instance.emit(Level::Panic, "shown");
        instance.sync().unwrap();

        let output = std::fs::read_to_string(path).unwrap();
        assert_eq!(output, "debug\tbefore\npanic\tshown\n");
    }

    #[test]
    fn test_instances_are_isolated() {
        let level = AtomicLevel::new(Level::Debug);
        let dir = tempfile::tempdir().unwrap();
        let (config_a, path_a) = file_config(&dir, "a.log");
        let (config_b, path_b) = file_config(&dir, "b.log");
        let a = LoggerInstance::build(&config_a, &level, None).unwrap();
        let b = LoggerInstance::build(&config_b, &level, None).unwrap();

        a.emit(Level::Info, "only a");
        b.emit(Level::Info, "only b");

        assert_eq!(std::fs::read_to_string(path_a).unwrap(), "info\tonly a\n");
        assert_eq!(std::fs::read_to_string(path_b).unwrap(), "info\tonly b\n");
    }

    #[test]
    fn test_build_fails_on_unopenable_output() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope").join("x.log");
        let config = LogConfig::default().with_outputs([missing.display().to_string()]);

        let err = LoggerInstance::build(&config, &AtomicLevel::default(), None)
            .err()
            .unwrap();
        assert_eq!(err.code(), "ERR_OPEN_DESTINATION");
    }

    #[test]
    fn test_report_goes_to_error_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let (config, out_path) = file_config(&dir, "out.log");
        let err_path = dir.path().join("err.log");
        let config = config.with_error_outputs([err_path.display().to_string()]);
        let instance = LoggerInstance::build(&config, &AtomicLevel::default(), None).unwrap();

        instance.report("sync failed");

        assert_eq!(std::fs::read_to_string(err_path).unwrap(), "sync failed\n");
        assert_eq!(std::fs::read_to_string(out_path).unwrap(), "");
    }
}
