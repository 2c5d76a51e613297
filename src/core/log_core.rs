//! Cores: the encode + filter + write layer underneath a [`Logger`]
//!
//! [`Logger`]: super::Logger

use super::{
    encoder::Encoding,
    encoder_config::EncoderConfig,
    error::{LoggerError, Result},
    log_context::LogContext,
    log_entry::Entry,
    log_level::{AtomicLevel, LogLevel},
    sink::Sink,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Decides whether a level is enabled, encodes entries, and writes them.
///
/// Implementations must be cheap to query from many threads; `write` is only
/// called for entries the logger has already decided to emit.
pub trait Core: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;

    /// A core that adds `fields` to every entry it writes
    fn with(&self, fields: &LogContext) -> Arc<dyn Core>;

    fn write(&self, entry: &Entry, fields: &LogContext) -> Result<()>;

    fn sync(&self) -> Result<()>;
}

/// Core that encodes entries and writes them to a sink
#[derive(Clone)]
pub struct IoCore {
    encoding: Encoding,
    config: Arc<EncoderConfig>,
    level: AtomicLevel,
    sink: Arc<Mutex<Box<dyn Sink>>>,
    context: LogContext,
}

impl IoCore {
    pub fn new<S: Sink + 'static>(
        encoding: Encoding,
        config: EncoderConfig,
        sink: S,
        level: AtomicLevel,
    ) -> Self {
        Self::from_boxed(encoding, config, Box::new(sink), level)
    }

    pub fn from_boxed(
        encoding: Encoding,
        config: EncoderConfig,
        sink: Box<dyn Sink>,
        level: AtomicLevel,
    ) -> Self {
        Self {
            encoding,
            config: Arc::new(config),
            level,
            sink: Arc::new(Mutex::new(sink)),
            context: LogContext::new(),
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn encoder_config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn level(&self) -> &AtomicLevel {
        &self.level
    }
}

impl Core for IoCore {
    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        self.level.enabled(level)
    }

    fn with(&self, fields: &LogContext) -> Arc<dyn Core> {
        let mut core = self.clone();
        core.context.extend(fields);
        Arc::new(core)
    }

    fn write(&self, entry: &Entry, fields: &LogContext) -> Result<()> {
        let record = if self.context.is_empty() {
            self.encoding.encode(&self.config, entry, fields)?
        } else {
            let mut merged = self.context.clone();
            merged.extend(fields);
            self.encoding.encode(&self.config, entry, &merged)?
        };

        let mut sink = self.sink.lock();
        sink.write(record.as_bytes())?;

        // Records above error may precede a process exit
        if entry.level > LogLevel::Error {
            sink.sync()?;
        }
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        self.sink.lock().sync()
    }
}

/// Core that duplicates entries into several cores
///
/// # Example
///
/// ```
/// use logfacade::prelude::*;
/// use std::sync::Arc;
///
/// let audit = MemorySink::new();
/// let audit_core = IoCore::new(
///     Encoding::Json,
///     EncoderConfig::production(),
///     audit.clone(),
///     AtomicLevel::new(LogLevel::Warn),
/// );
///
/// let base = Logger::builder().discard().build().unwrap();
/// let logger = Logger::new(Arc::new(Tee::new(vec![base.core(), Arc::new(audit_core)])));
///
/// logger.warn("disk almost full", LogContext::new());
/// assert_eq!(audit.lines().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Tee {
    cores: Vec<Arc<dyn Core>>,
}

impl Tee {
    pub fn new(cores: Vec<Arc<dyn Core>>) -> Self {
        Self { cores }
    }

    pub fn len(&self) -> usize {
        self.cores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    fn collect(results: Vec<Result<()>>) -> Result<()> {
        let total = results.len();
        let failures: Vec<String> = results
            .into_iter()
            .filter_map(|r| r.err().map(|e| e.to_string()))
            .collect();
        match failures.len() {
            0 => Ok(()),
            failed => Err(LoggerError::MultiSink {
                failed,
                total,
                summary: failures.join("; "),
            }),
        }
    }
}

impl Core for Tee {
    fn enabled(&self, level: LogLevel) -> bool {
        self.cores.iter().any(|core| core.enabled(level))
    }

    fn with(&self, fields: &LogContext) -> Arc<dyn Core> {
        Arc::new(Tee::new(
            self.cores.iter().map(|core| core.with(fields)).collect(),
        ))
    }

    fn write(&self, entry: &Entry, fields: &LogContext) -> Result<()> {
        let results = self
            .cores
            .iter()
            .filter(|core| core.enabled(entry.level) || entry.level >= LogLevel::Panic)
            .map(|core| core.write(entry, fields))
            .collect();
        Self::collect(results)
    }

    fn sync(&self) -> Result<()> {
        Self::collect(self.cores.iter().map(|core| core.sync()).collect())
    }
}

/// Core that is never enabled and writes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NopCore;

impl Core for NopCore {
    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn with(&self, _fields: &LogContext) -> Arc<dyn Core> {
        Arc::new(NopCore)
    }

    fn write(&self, _entry: &Entry, _fields: &LogContext) -> Result<()> {
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        Ok(())
    }
}
