//! Entries that already passed the level check
//!
//! Returned by [`Logger::check`](super::Logger::check) so callers can skip
//! building fields for records that would be filtered anyway.

use super::error::Result;
use super::log_context::{FieldValue, LogContext};
use super::log_entry::Entry;
use super::logger::Logger;

/// A record that will be written when [`write`](Self::write) is called
#[must_use = "a checked entry does nothing until written"]
pub struct CheckedEntry {
    logger: Logger,
    entry: Entry,
    fields: LogContext,
}

impl CheckedEntry {
    pub(crate) fn new(logger: Logger, entry: Entry) -> Self {
        Self {
            logger,
            entry,
            fields: LogContext::new(),
        }
    }

    /// Add a structured field
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    /// Add every field of `context`; later keys win
    pub fn fields(mut self, context: LogContext) -> Self {
        self.fields.extend(&context);
        self
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Write the record.
    ///
    /// Has the same termination behaviour as the matching leveled call on
    /// the logger that produced this entry.
    pub fn write(self) -> Result<()> {
        let Self {
            logger,
            entry,
            fields,
        } = self;
        logger.write_entry(&entry, &fields);
        logger.after_write(entry.level, entry.message)
    }
}
