//! Loosely typed logging on top of [`Logger`]
//!
//! Messages accept anything that implements `Display`, and the `*w` methods
//! take fields as key/value pairs instead of a prepared [`LogContext`].

use super::error::Result;
use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;
use super::logger::Logger;
use std::fmt::Display;

/// Sugared view of a [`Logger`]
///
/// # Example
///
/// ```
/// use logfacade::prelude::*;
///
/// let memory = MemorySink::new();
/// let logger = Logger::builder().sink(memory.clone()).build().unwrap();
/// let sugar = logger.sugar();
///
/// sugar.info(format_args!("listening on {}", 8080));
/// sugar.warnw("slow request", [("path", FieldValue::from("/search")), ("ms", 950.into())]);
///
/// assert_eq!(memory.lines().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct SugaredLogger {
    base: Logger,
}

fn to_context<I, K, V>(pairs: I) -> LogContext
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    pairs.into_iter().collect()
}

impl SugaredLogger {
    pub fn new(base: Logger) -> Self {
        Self { base }
    }

    /// Back to the strongly typed logger
    pub fn desugar(&self) -> Logger {
        self.base.clone()
    }

    #[must_use]
    pub fn named(&self, name: &str) -> SugaredLogger {
        Self::new(self.base.named(name))
    }

    /// Child logger that adds the given pairs to every record
    #[must_use]
    pub fn with<I, K, V>(&self, pairs: I) -> SugaredLogger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self::new(self.base.with(to_context(pairs)))
    }

    pub fn sync(&self) -> Result<()> {
        self.base.sync()
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        if self.base.enabled(LogLevel::Debug) {
            self.base.debug(message.to_string(), LogContext::new());
        }
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) {
        if self.base.enabled(LogLevel::Info) {
            self.base.info(message.to_string(), LogContext::new());
        }
    }

    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        if self.base.enabled(LogLevel::Warn) {
            self.base.warn(message.to_string(), LogContext::new());
        }
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        if self.base.enabled(LogLevel::Error) {
            self.base.error(message.to_string(), LogContext::new());
        }
    }

    #[track_caller]
    pub fn dpanic(&self, message: impl Display) -> Result<()> {
        self.base.dpanic(message.to_string(), LogContext::new())
    }

    #[track_caller]
    pub fn panic(&self, message: impl Display) -> Result<()> {
        self.base.panic(message.to_string(), LogContext::new())
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> Result<()> {
        self.base.fatal(message.to_string(), LogContext::new())
    }

    #[track_caller]
    pub fn debugw<I, K, V>(&self, message: impl Into<String>, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if self.base.enabled(LogLevel::Debug) {
            self.base.debug(message, to_context(pairs));
        }
    }

    #[track_caller]
    pub fn infow<I, K, V>(&self, message: impl Into<String>, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if self.base.enabled(LogLevel::Info) {
            self.base.info(message, to_context(pairs));
        }
    }

    #[track_caller]
    pub fn warnw<I, K, V>(&self, message: impl Into<String>, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if self.base.enabled(LogLevel::Warn) {
            self.base.warn(message, to_context(pairs));
        }
    }

    #[track_caller]
    pub fn errorw<I, K, V>(&self, message: impl Into<String>, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if self.base.enabled(LogLevel::Error) {
            self.base.error(message, to_context(pairs));
        }
    }
}

impl From<Logger> for SugaredLogger {
    fn from(base: Logger) -> Self {
        Self::new(base)
    }
}
