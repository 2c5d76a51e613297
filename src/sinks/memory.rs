//! In-memory sink, mostly useful for tests and for capturing output

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects records in a shared buffer.
///
/// Clones share the buffer, so one clone can be handed to a logger while
/// another is kept to inspect what was written.
///
/// ```
/// use logfacade::prelude::*;
///
/// let memory = MemorySink::new();
/// let logger = Logger::builder().sink(memory.clone()).build().unwrap();
///
/// logger.info("hello", LogContext::new());
/// assert_eq!(memory.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
    syncs: Arc<Mutex<usize>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Number of times `sync` was called
    pub fn sync_count(&self) -> usize {
        *self.syncs.lock()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        self.buffer.lock().extend_from_slice(record);
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        *self.syncs.lock() += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
