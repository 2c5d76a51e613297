//! Encoder configuration: field keys and per-element encoding strategies

use super::log_entry::Caller;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the level is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelEncoding {
    /// `error`
    #[default]
    Lowercase,
    /// `error` wrapped in ANSI colour
    LowercaseColor,
    /// `ERROR`
    Capital,
    /// `ERROR` wrapped in ANSI colour
    CapitalColor,
}

impl LevelEncoding {
    pub fn encode(&self, level: LogLevel) -> String {
        match self {
            LevelEncoding::Lowercase => level.to_lowercase_str().to_string(),
            LevelEncoding::Capital => level.to_str().to_string(),
            LevelEncoding::LowercaseColor => Self::colorize(level, level.to_lowercase_str()),
            LevelEncoding::CapitalColor => Self::colorize(level, level.to_str()),
        }
    }

    #[cfg(feature = "color")]
    fn colorize(level: LogLevel, text: &str) -> String {
        use colored::Colorize;
        text.color(level.color_code()).to_string()
    }

    #[cfg(not(feature = "color"))]
    fn colorize(_level: LogLevel, text: &str) -> String {
        text.to_string()
    }
}

/// How `Duration` field values are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationEncoding {
    /// Floating-point seconds
    #[default]
    Seconds,
    /// Floating-point milliseconds
    Millis,
    /// Integer nanoseconds
    Nanos,
    /// Human readable, e.g. `1.5s`
    String,
}

impl DurationEncoding {
    pub fn encode(&self, duration: Duration) -> serde_json::Value {
        let float = |value: f64| {
            serde_json::Number::from_f64(value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null)
        };
        match self {
            DurationEncoding::Seconds => float(duration.as_secs_f64()),
            DurationEncoding::Millis => float(duration.as_secs_f64() * 1e3),
            DurationEncoding::Nanos => {
                serde_json::Value::from(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
            }
            DurationEncoding::String => serde_json::Value::String(format!("{:?}", duration)),
        }
    }
}

/// How the caller location is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerEncoding {
    /// Last directory and file name: `core/logger.rs:42`
    #[default]
    Short,
    /// Path as compiled: `src/core/logger.rs:42`
    Full,
}

impl CallerEncoding {
    pub fn encode(&self, caller: &Caller) -> String {
        match self {
            CallerEncoding::Short => caller.short(),
            CallerEncoding::Full => caller.full(),
        }
    }
}

/// How the logger name is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameEncoding {
    /// Full dotted name: `server.http.router`
    #[default]
    Full,
    /// Final segment only: `router`
    Last,
}

impl NameEncoding {
    pub fn encode(&self, name: &str) -> String {
        match self {
            NameEncoding::Full => name.to_string(),
            NameEncoding::Last => name.rsplit('.').next().unwrap_or(name).to_string(),
        }
    }
}

/// Field keys and encoding strategies shared by the JSON and console encoders.
///
/// An empty key leaves that element out of every record.
///
/// # Examples
///
/// ```
/// use logfacade::{EncoderConfig, LevelEncoding};
///
/// let config = EncoderConfig::production().with_message_key("message");
/// assert_eq!(config.level_encoding, LevelEncoding::Lowercase);
/// assert_eq!(config.message_key, "message");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub time_key: String,
    pub level_key: String,
    pub name_key: String,
    pub caller_key: String,
    pub message_key: String,
    pub stacktrace_key: String,
    pub line_ending: String,
    /// Separator between elements of a console line
    pub console_separator: String,
    pub level_encoding: LevelEncoding,
    pub time_encoding: TimestampFormat,
    pub duration_encoding: DurationEncoding,
    pub caller_encoding: CallerEncoding,
    pub name_encoding: NameEncoding,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            time_key: "time".to_string(),
            level_key: "level".to_string(),
            name_key: "logger".to_string(),
            caller_key: "file".to_string(),
            message_key: "msg".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            line_ending: "\n".to_string(),
            console_separator: "\t".to_string(),
            level_encoding: LevelEncoding::CapitalColor,
            time_encoding: TimestampFormat::DateTime,
            duration_encoding: DurationEncoding::Seconds,
            caller_encoding: CallerEncoding::Short,
            name_encoding: NameEncoding::Full,
        }
    }
}

impl EncoderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase levels, for machine-read JSON
    #[must_use]
    pub fn production() -> Self {
        Self::default().with_level_encoding(LevelEncoding::Lowercase)
    }

    /// Colourised capital levels, for humans at a terminal
    #[must_use]
    pub fn development() -> Self {
        Self::default().with_level_encoding(LevelEncoding::CapitalColor)
    }

    #[must_use]
    pub fn with_time_key(mut self, key: impl Into<String>) -> Self {
        self.time_key = key.into();
        self
    }

    #[must_use]
    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.level_key = key.into();
        self
    }

    #[must_use]
    pub fn with_name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    #[must_use]
    pub fn with_caller_key(mut self, key: impl Into<String>) -> Self {
        self.caller_key = key.into();
        self
    }

    #[must_use]
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    #[must_use]
    pub fn with_stacktrace_key(mut self, key: impl Into<String>) -> Self {
        self.stacktrace_key = key.into();
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, ending: impl Into<String>) -> Self {
        self.line_ending = ending.into();
        self
    }

    #[must_use]
    pub fn with_level_encoding(mut self, encoding: LevelEncoding) -> Self {
        self.level_encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_time_encoding(mut self, format: TimestampFormat) -> Self {
        self.time_encoding = format;
        self
    }

    #[must_use]
    pub fn with_duration_encoding(mut self, encoding: DurationEncoding) -> Self {
        self.duration_encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_caller_encoding(mut self, encoding: CallerEncoding) -> Self {
        self.caller_encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_name_encoding(mut self, encoding: NameEncoding) -> Self {
        self.name_encoding = encoding;
        self
    }
}
