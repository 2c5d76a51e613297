//! Sink that fans records out to several sinks

use crate::core::{LoggerError, Result, Sink};

/// Writes every record to each inner sink.
///
/// A failing sink never stops the others from receiving the record; the
/// failures are collected into a single [`LoggerError::MultiSink`].
#[derive(Default)]
pub struct MultiSink {
    sinks: Vec<Box<dyn Sink>>,
}

impl MultiSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn push(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    #[must_use]
    pub fn with_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    fn for_each<F>(&mut self, mut op: F) -> Result<()>
    where
        F: FnMut(&mut Box<dyn Sink>) -> Result<()>,
    {
        let total = self.sinks.len();
        let mut failures = Vec::new();

        for sink in self.sinks.iter_mut() {
            if let Err(e) = op(&mut *sink) {
                failures.push(format!("{}: {}", sink.name(), e));
            }
        }

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

impl Sink for MultiSink {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        self.for_each(|sink| sink.write(record))
    }

    fn sync(&mut self) -> Result<()> {
        self.for_each(|sink| sink.sync())
    }

    fn name(&self) -> &str {
        "multi"
    }
}
