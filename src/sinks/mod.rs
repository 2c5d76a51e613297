//! Sink implementations

pub mod console;
pub mod discard;
pub mod file;
pub mod memory;
pub mod multi;

pub use console::{ConsoleSink, ConsoleTarget};
pub use discard::DiscardSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use multi::MultiSink;

pub use crate::core::Sink;
