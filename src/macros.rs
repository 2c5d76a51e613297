//! Logging macros for ergonomic log message formatting.
//!
//! The leveled macros format their message like `format!` and accept
//! structured fields after a `;`.
//!
//! # Examples
//!
//! ```
//! use logfacade::prelude::*;
//! use logfacade::{info, warn};
//!
//! let memory = MemorySink::new();
//! let logger = Logger::builder().sink(memory.clone()).build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With fields
//! warn!(logger, "Retry attempt {} of {}", 3, 5; "backoff_ms" => 250, "host" => "db-1");
//!
//! assert_eq!(memory.lines().len(), 3);
//! ```

/// Build a [`LogContext`](crate::LogContext) from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use logfacade::fields;
///
/// let context = fields!("user_id" => 42, "action" => "login");
/// assert_eq!(context.len(), 2);
/// assert!(fields!().is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::LogContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut context = $crate::LogContext::new();
        $( context.add_field($key, $value); )+
        context
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_call {
    ($logger:expr, $method:ident, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+ $(,)?) => {
        $logger.$method(format!($fmt $(, $arg)*), $crate::fields!($($key => $value),+))
    };
    ($logger:expr, $method:ident, $($arg:tt)+) => {
        $logger.$method(format!($($arg)+), $crate::LogContext::new())
    };
}

/// Log a message at a runtime level.
///
/// Evaluates to the `Result` returned by [`Logger::log`](crate::Logger::log).
///
/// # Examples
///
/// ```
/// # use logfacade::prelude::*;
/// # let logger = Logger::builder().discard().build().unwrap();
/// use logfacade::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500; "retryable" => false).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+ $(,)?) => {
        $logger.log($level, format!($fmt $(, $arg)*), $crate::fields!($($key => $value),+))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $crate::LogContext::new())
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logfacade::prelude::*;
/// # let logger = Logger::builder().discard().build().unwrap();
/// use logfacade::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_call!($logger, debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logfacade::prelude::*;
/// # let logger = Logger::builder().discard().build().unwrap();
/// use logfacade::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100; "batch" => 7);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_call!($logger, info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_call!($logger, warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logfacade::prelude::*;
/// # let logger = Logger::builder().discard().build().unwrap();
/// use logfacade::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_call!($logger, error, $($arg)+)
    };
}

/// Log a dpanic-level message; evaluates to `Result<()>`.
#[macro_export]
macro_rules! dpanic {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_call!($logger, dpanic, $($arg)+)
    };
}

/// Log a fatal-level message; evaluates to `Result<()>`.
///
/// # Examples
///
/// ```
/// # use logfacade::prelude::*;
/// # let logger = Logger::builder().discard().build().unwrap();
/// use logfacade::fatal;
/// let request = fatal!(logger, "Unable to recover from error: {}", "disk full");
/// assert!(request.unwrap_err().is_termination());
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_call!($logger, fatal, $($arg)+)
    };
}
