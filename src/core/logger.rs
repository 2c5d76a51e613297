//! Main logger implementation

use super::{
    checked_entry::CheckedEntry,
    encoder::Encoding,
    encoder_config::EncoderConfig,
    error::{LoggerError, Result},
    log_context::{FieldValue, LogContext},
    log_core::{Core, IoCore, NopCore},
    log_entry::{Caller, Entry},
    log_level::{AtomicLevel, LogLevel},
    metrics::LoggerMetrics,
    sink::Sink,
    sugar::SugaredLogger,
};
use crate::sinks::{ConsoleSink, DiscardSink, MultiSink};
use serde::{Deserialize, Serialize};
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::str::FromStr;
use std::sync::{Arc, Once};

/// Preset selecting the whole logger configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// JSON records, `error` threshold, no destination unless one is attached
    #[default]
    Production,
    /// Colourised console records on stdout, `info` threshold
    Development,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Production => write!(f, "production"),
            Mode::Development => write!(f, "development"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Mode::Production),
            "development" | "dev" => Ok(Mode::Development),
            _ => Err(format!("Invalid mode: '{}'", s)),
        }
    }
}

/// Structured, leveled logger.
///
/// Cloning is cheap and every clone writes through the same core. Derived
/// loggers (`named`, `with`) are independent snapshots: they never change
/// when the logger they came from is replaced.
///
/// # Example
///
/// ```
/// use logfacade::prelude::*;
///
/// let memory = MemorySink::new();
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .sink(memory.clone())
///     .build()
///     .unwrap();
///
/// logger.debug("hidden", LogContext::new());
/// logger.info("start", fields!("port" => 8080));
///
/// assert_eq!(memory.lines().len(), 1);
/// assert!(memory.contents().contains("\"port\":8080"));
/// ```
#[derive(Clone)]
pub struct Logger {
    core: Arc<dyn Core>,
    name: Option<String>,
    development: bool,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
    level: Option<AtomicLevel>,
    /// Written/dropped counters shared by every derived logger
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Wrap an arbitrary core with default options: no name, no caller,
    /// no stack traces, production `dpanic` behaviour.
    #[must_use]
    pub fn new(core: Arc<dyn Core>) -> Self {
        Self {
            core,
            name: None,
            development: false,
            add_caller: false,
            stacktrace_level: None,
            level: None,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Logger that drops everything
    #[must_use]
    pub fn noop() -> Self {
        Self::new(Arc::new(NopCore))
    }

    /// JSON encoding, lowercase levels, `error` threshold, explicit discard
    /// destination.
    #[must_use]
    pub fn production() -> Self {
        LoggerBuilder::production().assemble()
    }

    /// Console encoding, colourised levels, `info` threshold, stdout.
    #[must_use]
    pub fn development() -> Self {
        LoggerBuilder::development().assemble()
    }

    #[must_use]
    pub fn for_mode(mode: Mode) -> Self {
        LoggerBuilder::for_mode(mode).assemble()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logfacade::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .encoding(Encoding::Console)
    ///     .stderr()
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Low-level core, for composition such as [`Tee`](super::Tee)
    pub fn core(&self) -> Arc<dyn Core> {
        Arc::clone(&self.core)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_development(&self) -> bool {
        self.development
    }

    /// Runtime-adjustable threshold, when the logger was built with one
    pub fn level(&self) -> Option<&AtomicLevel> {
        self.level.as_ref()
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.core.enabled(level)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    /// Child logger whose name is `name` appended to this one with a `.`
    #[must_use]
    pub fn named(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.clone();
        }
        let mut logger = self.clone();
        logger.name = Some(match &self.name {
            Some(parent) => format!("{}.{}", parent, name),
            None => name.to_string(),
        });
        logger
    }

    /// Child logger that adds `fields` to every record
    #[must_use]
    pub fn with(&self, fields: LogContext) -> Logger {
        if fields.is_empty() {
            return self.clone();
        }
        let mut logger = self.clone();
        logger.core = self.core.with(&fields);
        logger
    }

    /// Loosely typed view of this logger
    #[must_use]
    pub fn sugar(&self) -> SugaredLogger {
        SugaredLogger::new(self.clone())
    }

    /// Check whether `level` would be written.
    ///
    /// Returns `None` when the level is filtered, so expensive fields are
    /// only built when needed. `panic` and `fatal` are never filtered.
    ///
    /// ```
    /// use logfacade::prelude::*;
    ///
    /// let memory = MemorySink::new();
    /// let logger = Logger::builder().sink(memory.clone()).build().unwrap();
    ///
    /// assert!(logger.check(LogLevel::Debug, "skipped").is_none());
    /// if let Some(entry) = logger.check(LogLevel::Warn, "slow query") {
    ///     entry.field("elapsed_ms", 1200).write().unwrap();
    /// }
    /// assert_eq!(memory.lines().len(), 1);
    /// ```
    #[track_caller]
    pub fn check(&self, level: LogLevel, message: impl Into<String>) -> Option<CheckedEntry> {
        if level < LogLevel::Panic && !self.core.enabled(level) {
            return None;
        }
        let entry = self.entry(level, message.into(), Location::caller());
        Some(CheckedEntry::new(self.clone(), entry))
    }

    /// Log at any level.
    ///
    /// Returns the termination request for `dpanic` (development only),
    /// `panic` and `fatal`; see [`LoggerError::terminate`].
    #[track_caller]
    pub fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        fields: LogContext,
    ) -> Result<()> {
        let message = message.into();
        let caller = Location::caller();
        if level < LogLevel::DPanic {
            self.emit(level, message, &fields, caller);
            return Ok(());
        }
        self.emit(level, message.clone(), &fields, caller);
        self.after_write(level, message)
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, fields: LogContext) {
        self.emit(LogLevel::Debug, message.into(), &fields, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>, fields: LogContext) {
        self.emit(LogLevel::Info, message.into(), &fields, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, fields: LogContext) {
        self.emit(LogLevel::Warn, message.into(), &fields, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>, fields: LogContext) {
        self.emit(LogLevel::Error, message.into(), &fields, Location::caller());
    }

    /// Error-level record for "should never happen" states.
    ///
    /// A development logger returns `Err(LoggerError::DPanic)` after the
    /// record is written; a production logger returns `Ok(())`.
    #[track_caller]
    pub fn dpanic(&self, message: impl Into<String>, fields: LogContext) -> Result<()> {
        self.log(LogLevel::DPanic, message, fields)
    }

    /// Write a panic record regardless of threshold, sync, and return
    /// `Err(LoggerError::Panic)`.
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>, fields: LogContext) -> Result<()> {
        self.log(LogLevel::Panic, message, fields)
    }

    /// Write a fatal record regardless of threshold, sync, and return
    /// `Err(LoggerError::Fatal)`. Call [`LoggerError::terminate`] on it to exit.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>, fields: LogContext) -> Result<()> {
        self.log(LogLevel::Fatal, message, fields)
    }

    /// Flush buffered records in every sink
    pub fn sync(&self) -> Result<()> {
        self.core.sync()
    }

    fn emit(
        &self,
        level: LogLevel,
        message: String,
        fields: &LogContext,
        caller: &'static Location<'static>,
    ) {
        if level < LogLevel::Panic && !self.core.enabled(level) {
            return;
        }
        let entry = self.entry(level, message, caller);
        self.write_entry(&entry, fields);
    }

    fn entry(&self, level: LogLevel, message: String, caller: &'static Location<'static>) -> Entry {
        let mut entry = Entry::new(level, message).with_name(self.name.clone());
        if self.add_caller {
            entry = entry.with_caller(Caller::from(caller));
        }
        if self.stacktrace_level.is_some_and(|threshold| level >= threshold) {
            entry = entry.with_stack(Backtrace::force_capture().to_string());
        }
        entry
    }

    /// Write through the core; failures are counted and reported, never returned
    pub(crate) fn write_entry(&self, entry: &Entry, fields: &LogContext) {
        match self.core.write(entry, fields) {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(e) => {
                self.metrics.record_dropped();
                eprintln!("[LOGGER ERROR] Failed to write {} entry: {}", entry.level, e);
            }
        }
    }

    /// Termination request that follows a record at `level`
    pub(crate) fn after_write(&self, level: LogLevel, message: String) -> Result<()> {
        let err = match level {
            LogLevel::DPanic if self.development => LoggerError::dpanic(message),
            LogLevel::Panic => LoggerError::panic(message),
            LogLevel::Fatal => LoggerError::fatal(message),
            _ => return Ok(()),
        };
        if let Err(e) = self.sync() {
            eprintln!("[LOGGER ERROR] Failed to sync before {}: {}", level, e);
        }
        Err(err)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("development", &self.development)
            .field("add_caller", &self.add_caller)
            .field("stacktrace_level", &self.stacktrace_level)
            .field("level", &self.level.as_ref().map(AtomicLevel::level))
            .finish_non_exhaustive()
    }
}

static DISCARD_WARNING: Once = Once::new();

fn warn_no_destination() {
    DISCARD_WARNING.call_once(|| {
        eprintln!(
            "[LOGGER WARNING] Logger has no destination configured; records are encoded \
             and discarded. Attach a sink to keep them."
        );
    });
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use logfacade::prelude::*;
///
/// let logger = LoggerBuilder::production()
///     .sink(MemorySink::new())
///     .name("billing")
///     .field("service", "billing-api")
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.name(), Some("billing"));
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    encoding: Encoding,
    encoder_config: EncoderConfig,
    sinks: Vec<Box<dyn Sink>>,
    discard: bool,
    development: bool,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
    name: Option<String>,
    fields: LogContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    ///
    /// Info threshold, JSON with production encoder settings, caller
    /// capture on, no stack traces and no sinks.
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            encoding: Encoding::Json,
            encoder_config: EncoderConfig::production(),
            sinks: Vec::new(),
            discard: false,
            development: false,
            add_caller: true,
            stacktrace_level: None,
            name: None,
            fields: LogContext::new(),
        }
    }

    pub fn production() -> Self {
        Self::new()
            .min_level(LogLevel::Error)
            .encoding(Encoding::Json)
            .encoder_config(EncoderConfig::production())
            .stacktrace(LogLevel::DPanic)
            .discard()
    }

    pub fn development() -> Self {
        Self::new()
            .min_level(LogLevel::Info)
            .encoding(Encoding::Console)
            .encoder_config(EncoderConfig::development())
            .stacktrace(LogLevel::Error)
            .development_mode(true)
            .stdout()
    }

    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Production => Self::production(),
            Mode::Development => Self::development(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoder_config(mut self, config: EncoderConfig) -> Self {
        self.encoder_config = config;
        self
    }

    /// Add a destination
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn stdout(self) -> Self {
        self.sink(ConsoleSink::stdout())
    }

    #[must_use = "builder methods return a new value"]
    pub fn stderr(self) -> Self {
        self.sink(ConsoleSink::stderr())
    }

    /// Accept running without any destination.
    ///
    /// Records are still encoded, then dropped. A one-time warning is printed
    /// to stderr when such a logger is built. Has no effect once a sink is added.
    #[must_use = "builder methods return a new value"]
    pub fn discard(mut self) -> Self {
        self.discard = true;
        self
    }

    /// Remove all destinations added so far, including preset ones
    #[must_use = "builder methods return a new value"]
    pub fn clear_sinks(mut self) -> Self {
        self.sinks.clear();
        self
    }

    /// Development loggers turn `dpanic` records into termination requests
    #[must_use = "builder methods return a new value"]
    pub fn development_mode(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    /// Record the source location of each logging call
    #[must_use = "builder methods return a new value"]
    pub fn add_caller(mut self, add_caller: bool) -> Self {
        self.add_caller = add_caller;
        self
    }

    /// Capture a stack trace for records at or above `level`
    #[must_use = "builder methods return a new value"]
    pub fn stacktrace(mut self, level: LogLevel) -> Self {
        self.stacktrace_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn without_stacktrace(mut self) -> Self {
        self.stacktrace_level = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Field added to every record
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    /// Build the Logger
    ///
    /// Fails when no sink was added and [`discard`](Self::discard) was not
    /// requested, so a logger never silently writes nowhere. Also fails on a
    /// custom timestamp layout with unknown strftime specifiers.
    pub fn build(self) -> Result<Logger> {
        if self.sinks.is_empty() && !self.discard {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "no destination configured; add a sink or call discard() to drop records deliberately",
            ));
        }
        self.encoder_config.time_encoding.validate()?;
        Ok(self.assemble())
    }

    pub(crate) fn assemble(self) -> Logger {
        let mut sink = MultiSink::new();
        for s in self.sinks {
            sink.push(s);
        }
        if sink.is_empty() {
            warn_no_destination();
            sink.push(Box::new(DiscardSink));
        }

        let level = AtomicLevel::new(self.level);
        let core = IoCore::new(self.encoding, self.encoder_config, sink, level.clone());
        let core: Arc<dyn Core> = if self.fields.is_empty() {
            Arc::new(core)
        } else {
            core.with(&self.fields)
        };

        Logger {
            core,
            name: self.name,
            development: self.development,
            add_caller: self.add_caller,
            stacktrace_level: self.stacktrace_level,
            level: Some(level),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
