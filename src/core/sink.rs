//! Sink trait for log output destinations

use super::error::Result;

/// A destination for encoded records.
///
/// `write` receives one complete record, line ending included. `sync`
/// pushes anything buffered down to the underlying device.
pub trait Sink: Send + Sync {
    fn write(&mut self, record: &[u8]) -> Result<()>;
    fn sync(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
