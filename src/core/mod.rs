//! Core logger types and traits

pub mod checked_entry;
pub mod encoder;
pub mod encoder_config;
pub mod error;
pub mod log_context;
pub mod log_core;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod sugar;
pub mod timestamp;

pub use checked_entry::CheckedEntry;
pub use encoder::Encoding;
pub use encoder_config::{
    CallerEncoding, DurationEncoding, EncoderConfig, LevelEncoding, NameEncoding,
};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_core::{Core, IoCore, NopCore, Tee};
pub use log_entry::{Caller, Entry};
pub use log_level::{AtomicLevel, LogLevel};
pub use logger::{Logger, LoggerBuilder, Mode};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use sugar::SugaredLogger;
pub use timestamp::TimestampFormat;
