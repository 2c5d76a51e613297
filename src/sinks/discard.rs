//! Sink that accepts and drops every record

use crate::core::{Result, Sink};

/// Accepts every record and keeps none of it.
///
/// Selecting this sink is how a logger is deliberately configured with no
/// destination; records are still encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn write(&mut self, _record: &[u8]) -> Result<()> {
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
