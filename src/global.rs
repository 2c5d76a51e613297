//! Process-wide logger slot
//!
//! For code that cannot be handed a [`Logger`]. The slot starts empty; until
//! one of the `init*` functions runs, every call here is a no-op and
//! [`logger`] returns [`Logger::noop`]. Replacing the installed logger is
//! atomic. Loggers obtained earlier through [`logger`], [`named`] or
//! [`sugar`] keep writing with the configuration they were created from.
//!
//! # Example
//!
//! ```
//! use logfacade::{global, LogContext};
//!
//! global::init_development();
//! global::info("service starting", LogContext::new().with_field("port", 8080));
//! global::sync().ok();
//! ```

use crate::core::{
    CheckedEntry, Core, LogContext, LogLevel, Logger, Result, SugaredLogger,
};
use parking_lot::RwLock;
use std::sync::Arc;

static GLOBAL: RwLock<Option<Logger>> = parking_lot::const_rwlock(None);

/// Install the production preset
pub fn init_production() {
    init(Logger::production());
}

/// Install the development preset
pub fn init_development() {
    init(Logger::development());
}

/// Install `logger`, returning the one it replaces
pub fn init(logger: Logger) -> Option<Logger> {
    GLOBAL.write().replace(logger)
}

/// Remove the installed logger; later calls are no-ops again
pub fn take() -> Option<Logger> {
    GLOBAL.write().take()
}

pub fn is_initialized() -> bool {
    GLOBAL.read().is_some()
}

/// Snapshot of the installed logger
pub fn logger() -> Logger {
    GLOBAL.read().clone().unwrap_or_default()
}

#[track_caller]
pub fn debug(message: impl Into<String>, fields: LogContext) {
    logger().debug(message, fields);
}

#[track_caller]
pub fn info(message: impl Into<String>, fields: LogContext) {
    logger().info(message, fields);
}

#[track_caller]
pub fn warn(message: impl Into<String>, fields: LogContext) {
    logger().warn(message, fields);
}

#[track_caller]
pub fn error(message: impl Into<String>, fields: LogContext) {
    logger().error(message, fields);
}

/// See [`Logger::dpanic`]
#[track_caller]
pub fn dpanic(message: impl Into<String>, fields: LogContext) -> Result<()> {
    logger().dpanic(message, fields)
}

/// See [`Logger::panic`]. Before initialisation nothing is written, but the
/// termination request is still returned.
#[track_caller]
pub fn panic(message: impl Into<String>, fields: LogContext) -> Result<()> {
    logger().panic(message, fields)
}

/// See [`Logger::fatal`]
#[track_caller]
pub fn fatal(message: impl Into<String>, fields: LogContext) -> Result<()> {
    logger().fatal(message, fields)
}

pub fn sugar() -> SugaredLogger {
    logger().sugar()
}

pub fn named(name: &str) -> Logger {
    logger().named(name)
}

pub fn core() -> Arc<dyn Core> {
    logger().core()
}

#[track_caller]
pub fn check(level: LogLevel, message: impl Into<String>) -> Option<CheckedEntry> {
    logger().check(level, message)
}

pub fn sync() -> Result<()> {
    logger().sync()
}
