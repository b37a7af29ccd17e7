//! Logging configuration
//!
//! The configuration is a small JSON document. The process-wide default is
//! [`DEFAULT_CONFIG_JSON`] with the ISO-8601 time encoder; callers may supply
//! their own document through [`LogConfig::from_json`] or build one with the
//! `with_*` methods.

use crate::errors::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use simplelogger_types::schema::{DEST_STDERR, FIELD_LEVEL, FIELD_MESSAGE};
use simplelogger_types::{Destination, Level};

/// The document the default configuration is derived from
pub const DEFAULT_CONFIG_JSON: &str = r#"{
    "level": "debug",
    "outputPaths": ["stderr"],
    "errorOutputPaths": ["stderr"],
    "encoding": "console",
    "encoderConfig": {
        "messageKey": "message",
        "levelKey": "level",
        "levelEncoder": "lowercase"
    }
}"#;

/// Line encoding style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Tab-separated, human-readable
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

/// How the level column is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelEncoder {
    #[default]
    Lowercase,
    Capital,
}

impl LevelEncoder {
    pub fn encode(&self, level: Level) -> &'static str {
        match self {
            LevelEncoder::Lowercase => level.as_str(),
            LevelEncoder::Capital => level.as_capital_str(),
        }
    }
}

/// How the time column is rendered, when a time key is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeEncoder {
    /// `2006-01-02T15:04:05.000-0700`
    #[default]
    Iso8601,
    Rfc3339,
    /// Seconds since the Unix epoch, fractional
    Epoch,
    /// Milliseconds since the Unix epoch
    Millis,
}

impl TimeEncoder {
    /// Value for structured encodings
    pub fn encode(&self, now: DateTime<Local>) -> serde_json::Value {
        match self {
            TimeEncoder::Iso8601 => now.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string().into(),
            TimeEncoder::Rfc3339 => now.to_rfc3339().into(),
            TimeEncoder::Epoch => (now.timestamp_millis() as f64 / 1000.0).into(),
            TimeEncoder::Millis => now.timestamp_millis().into(),
        }
    }

    /// Value for the console encoding
    pub fn encode_text(&self, now: DateTime<Local>) -> String {
        match self.encode(now) {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }
    }
}

/// Field naming and rendering for encoded lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncoderConfig {
    #[serde(default = "default_message_key")]
    pub message_key: String,
    #[serde(default = "default_level_key")]
    pub level_key: String,
    /// No time column is written when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_key: Option<String>,
    #[serde(default)]
    pub level_encoder: LevelEncoder,
    #[serde(default)]
    pub time_encoder: TimeEncoder,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            message_key: default_message_key(),
            level_key: default_level_key(),
            time_key: None,
            level_encoder: LevelEncoder::Lowercase,
            time_encoder: TimeEncoder::Iso8601,
        }
    }
}

/// Complete logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    #[serde(default)]
    pub level: Level,
    /// Destinations for log lines
    #[serde(default = "default_outputs")]
    pub output_paths: Vec<String>,
    /// Destinations for the facade's own failures
    #[serde(default = "default_outputs")]
    pub error_output_paths: Vec<String>,
    #[serde(default)]
    pub encoding: Encoding,
    #[serde(default)]
    pub encoder_config: EncoderConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            output_paths: default_outputs(),
            error_output_paths: default_outputs(),
            encoding: Encoding::Console,
            encoder_config: EncoderConfig::default(),
        }
    }
}

impl LogConfig {
    /// Parse a configuration document
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Set the minimum level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replace the output destinations
    pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_paths = outputs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the error destinations
    pub fn with_error_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.error_output_paths = outputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.encoder_config.message_key = key.into();
        self
    }

    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.encoder_config.level_key = key.into();
        self
    }

    /// Add a time column under `key`
    pub fn with_time_key(mut self, key: impl Into<String>) -> Self {
        self.encoder_config.time_key = Some(key.into());
        self
    }

    pub fn with_level_encoder(mut self, encoder: LevelEncoder) -> Self {
        self.encoder_config.level_encoder = encoder;
        self
    }

    pub fn with_time_encoder(mut self, encoder: TimeEncoder) -> Self {
        self.encoder_config.time_encoder = encoder;
        self
    }

    /// Parsed output destinations
    pub fn destinations(&self) -> Vec<Destination> {
        self.output_paths.iter().map(|s| Destination::parse(s)).collect()
    }

    /// Parsed error destinations
    pub fn error_destinations(&self) -> Vec<Destination> {
        self.error_output_paths
            .iter()
            .map(|s| Destination::parse(s))
            .collect()
    }
}

fn default_message_key() -> String {
    FIELD_MESSAGE.to_string()
}

fn default_level_key() -> String {
    FIELD_LEVEL.to_string()
}

fn default_outputs() -> Vec<String> {
    vec![DEST_STDERR.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_matches_embedded_document() {
        let parsed = LogConfig::from_json(DEFAULT_CONFIG_JSON).unwrap();
        assert_eq!(parsed, LogConfig::default());
    }

    #[test]
    fn test_default_values() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.output_paths, vec!["stderr"]);
        assert_eq!(config.error_output_paths, vec!["stderr"]);
        assert_eq!(config.encoding, Encoding::Console);
        assert_eq!(config.encoder_config.message_key, "message");
        assert_eq!(config.encoder_config.level_key, "level");
        assert_eq!(config.encoder_config.time_key, None);
        assert_eq!(config.encoder_config.time_encoder, TimeEncoder::Iso8601);
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::default()
            .with_level(Level::Warn)
            .with_outputs(["stdout", "/tmp/app.log"])
            .with_encoding(Encoding::Json)
            .with_time_key("ts")
            .with_level_encoder(LevelEncoder::Capital);

        assert_eq!(config.level, Level::Warn);
        assert_eq!(
            config.destinations(),
            vec![Destination::Stdout, Destination::parse("/tmp/app.log")]
        );
        assert_eq!(config.error_destinations(), vec![Destination::Stderr]);
        assert_eq!(config.encoder_config.time_key.as_deref(), Some("ts"));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = LogConfig::from_json(r#"{"level": "warning", "encoding": "json"}"#).unwrap();
        assert_eq!(config.level, Level::Warn);
        assert_eq!(config.encoding, Encoding::Json);
        assert_eq!(config.output_paths, vec!["stderr"]);
    }

    #[test]
    fn test_from_json_rejects_unknown_level() {
        let err = LogConfig::from_json(r#"{"level": "verbose"}"#).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_CONFIG");
    }

    #[test]
    fn test_level_encoder() {
        assert_eq!(LevelEncoder::Lowercase.encode(Level::Panic), "panic");
        assert_eq!(LevelEncoder::Capital.encode(Level::Panic), "PANIC");
    }

    #[test]
    fn test_time_encoders() {
        let now = Local.timestamp_millis_opt(1_700_000_000_123).unwrap();

        assert_eq!(TimeEncoder::Millis.encode(now), serde_json::json!(1_700_000_000_123_i64));
        assert_eq!(TimeEncoder::Epoch.encode_text(now), "1700000000.123");

        let iso = TimeEncoder::Iso8601.encode_text(now);
        assert!(iso.contains('T'));
        assert!(iso.contains(".123"));
    }
}
