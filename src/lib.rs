//! # logfacade
//!
//! Structured, leveled logging with two presets: a production logger that
//! writes JSON at `error` and above, and a development logger that writes
//! colourised console lines to stdout at `info` and above.
//!
//! ## Features
//!
//! - **Leveled API**: debug, info, warn, error, dpanic, panic and fatal
//! - **Structured fields**: ordered, typed key/value pairs on every record
//! - **Composable**: named and field-scoped child loggers, teeing cores
//! - **Explicit termination**: panic and fatal hand back an error to act on
//! - **Optional global**: a process-wide slot for code that cannot thread a
//!   logger through
//!
//! ```
//! use logfacade::prelude::*;
//!
//! let memory = MemorySink::new();
//! let logger = LoggerBuilder::production().sink(memory.clone()).build().unwrap();
//!
//! logger.error("fail", fields!("code" => 500));
//!
//! let record: serde_json::Value = serde_json::from_str(&memory.lines()[0]).unwrap();
//! assert_eq!(record["level"], "error");
//! assert_eq!(record["msg"], "fail");
//! assert_eq!(record["code"], 500);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        AtomicLevel, CheckedEntry, Core, EncoderConfig, Encoding, FieldValue, IoCore, LogContext,
        LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Mode, Result, Sink,
        SugaredLogger, Tee, TimestampFormat,
    };
    pub use crate::fields;
    pub use crate::sinks::{ConsoleSink, DiscardSink, FileSink, MemorySink, MultiSink};
}

pub use crate::core::{
    AtomicLevel, Caller, CallerEncoding, CheckedEntry, Core, DurationEncoding, EncoderConfig,
    Encoding, Entry, FieldValue, IoCore, LevelEncoding, LogContext, LogLevel, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Mode, NameEncoding, NopCore, Result, Sink,
    SugaredLogger, Tee, TimestampFormat,
};
pub use sinks::{ConsoleSink, ConsoleTarget, DiscardSink, FileSink, MemorySink, MultiSink};
