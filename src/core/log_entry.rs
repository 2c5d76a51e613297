//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;
use std::panic::Location;

/// Source location of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// `dir/file.rs:line`, keeping only the last directory
    pub fn short(&self) -> String {
        let mut segments = self.file.rsplit(['/', '\\']);
        let file = segments.next().unwrap_or(self.file);
        match segments.next() {
            Some(dir) if !dir.is_empty() => format!("{}/{}:{}", dir, file, self.line),
            _ => format!("{}:{}", file, self.line),
        }
    }

    pub fn full(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full())
    }
}

/// A single record before encoding; structured fields travel separately
#[derive(Debug, Clone)]
pub struct Entry {
    pub level: LogLevel,
    pub time: DateTime<Local>,
    pub logger_name: Option<String>,
    pub message: String,
    pub caller: Option<Caller>,
    pub stack: Option<String>,
}

impl Entry {
    /// The message is kept verbatim; each encoder applies its own escaping.
    pub fn new(level: LogLevel, message: impl AsRef<str>) -> Self {
        Self {
            level,
            time: Local::now(),
            logger_name: None,
            message: message.as_ref().to_string(),
            caller: None,
            stack: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.logger_name = name;
        self
    }

    #[must_use]
    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }
}
