//! Line encoders plugged into the backend's fmt layer

use crate::backend::severity_of;
use crate::config::{EncoderConfig, Encoding};
use std::collections::BTreeMap;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Collects the message and any other fields of an event
#[derive(Default)]
pub(crate) struct FieldVisitor {
    pub(crate) message: String,
    pub(crate) fields: BTreeMap<String, serde_json::Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        if field.name() == "message" {
            self.message = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{:?}", value).into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }
}

/// Renders events as console or JSON lines
#[derive(Debug, Clone)]
pub struct LineEncoder {
    encoding: Encoding,
    config: EncoderConfig,
}

impl LineEncoder {
    pub fn new(encoding: Encoding, config: EncoderConfig) -> Self {
        Self { encoding, config }
    }

    fn write_console(&self, writer: &mut Writer<'_>, level: &str, visitor: FieldVisitor) -> fmt::Result {
        if self.config.time_key.is_some() {
            let now = chrono::Local::now();
            write!(writer, "{}\t", self.config.time_encoder.encode_text(now))?;
        }
        write!(writer, "{}\t{}", level, visitor.message)?;
        if !visitor.fields.is_empty() {
            let extra = serde_json::to_string(&visitor.fields).map_err(|_| fmt::Error)?;
            write!(writer, "\t{}", extra)?;
        }
        writeln!(writer)
    }

    fn write_json(&self, writer: &mut Writer<'_>, level: &str, visitor: FieldVisitor) -> fmt::Result {
        let mut object = serde_json::Map::new();
        object.insert(self.config.level_key.clone(), level.into());
        if let Some(time_key) = &self.config.time_key {
            let now = chrono::Local::now();
            object.insert(time_key.clone(), self.config.time_encoder.encode(now));
        }
        object.insert(self.config.message_key.clone(), visitor.message.into());
        for (key, value) in visitor.fields {
            object.entry(key).or_insert(value);
        }
        let line = serde_json::to_string(&object).map_err(|_| fmt::Error)?;
        writeln!(writer, "{}", line)
    }
}

impl<S, N> FormatEvent<S, N> for LineEncoder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = self
            .config
            .level_encoder
            .encode(severity_of(event.metadata()));
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        match self.encoding {
            Encoding::Console => self.write_console(&mut writer, level, visitor),
            Encoding::Json => self.write_json(&mut writer, level, visitor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TARGET;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct BufferWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn output(&self) -> String {
            String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn render(encoding: Encoding, config: EncoderConfig, emit: impl FnOnce()) -> String {
        let writer = BufferWriter::default();
        let layer = tracing_subscriber::fmt::layer()
            .event_format(LineEncoder::new(encoding, config))
            .with_writer(writer.clone());
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, emit);
        writer.output()
    }

    #[test]
    fn test_console_line() {
        let output = render(Encoding::Console, EncoderConfig::default(), || {
            tracing::warn!(target: TARGET, "disk almost full");
        });
        assert_eq!(output, "warn\tdisk almost full\n");
    }

    #[test]
    fn test_console_extra_fields() {
        let output = render(Encoding::Console, EncoderConfig::default(), || {
            tracing::info!(target: TARGET, attempt = 3, "retrying");
        });
        assert_eq!(output, "info\tretrying\t{\"attempt\":3}\n");
    }

    #[test]
    fn test_console_with_time_column() {
        let config = EncoderConfig {
            time_key: Some("ts".to_string()),
            ..EncoderConfig::default()
        };
        let output = render(Encoding::Console, config, || {
            tracing::error!(target: TARGET, "boom");
        });
        let columns: Vec<&str> = output.trim_end().split('\t').collect();
        assert_eq!(columns.len(), 3);
        assert!(columns[0].contains('T'));
        assert_eq!(columns[1], "error");
        assert_eq!(columns[2], "boom");
    }

    #[test]
    fn test_json_uses_configured_keys() {
        let config = EncoderConfig {
            message_key: "msg".to_string(),
            level_key: "severity".to_string(),
            ..EncoderConfig::default()
        };
        let output = render(Encoding::Json, config, || {
            tracing::debug!(target: TARGET, "cache miss");
        });
        let line: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(line["severity"], "debug");
        assert_eq!(line["msg"], "cache miss");
        assert!(line.get("ts").is_none());
    }

    #[test]
    fn test_panic_target_maps_to_panic_level() {
        let config = EncoderConfig {
            level_encoder: crate::config::LevelEncoder::Capital,
            ..EncoderConfig::default()
        };
        let output = render(Encoding::Console, config, || {
            tracing::error!(target: crate::backend::PANIC_TARGET, "unrecoverable");
        });
        assert_eq!(output, "PANIC\tunrecoverable\n");
    }
}
