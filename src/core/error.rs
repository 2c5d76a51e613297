//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A single sink refused a write or sync
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },

    /// One or more sinks of a multi-sink failed
    #[error("{failed} of {total} sinks failed: {summary}")]
    MultiSink {
        failed: usize,
        total: usize,
        summary: String,
    },

    /// A dpanic record was written by a development-mode logger
    #[error("dpanic: {message}")]
    DPanic { message: String },

    /// A panic record was written
    #[error("panic: {message}")]
    Panic { message: String },

    /// A fatal record was written
    #[error("fatal: {message}")]
    Fatal { message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    pub fn dpanic(message: impl Into<String>) -> Self {
        LoggerError::DPanic {
            message: message.into(),
        }
    }

    pub fn panic(message: impl Into<String>) -> Self {
        LoggerError::Panic {
            message: message.into(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        LoggerError::Fatal {
            message: message.into(),
        }
    }

    /// Whether this error asks the caller to stop the current execution path
    pub fn is_termination(&self) -> bool {
        matches!(
            self,
            LoggerError::DPanic { .. } | LoggerError::Panic { .. } | LoggerError::Fatal { .. }
        )
    }

    /// Carry out the termination requested by a panic-class record.
    ///
    /// `Fatal` exits the process with status 1. `Panic` and `DPanic` unwind
    /// the current thread with the record's message. Any other error panics
    /// with its display text.
    ///
    /// ```should_panic
    /// use logfacade::prelude::*;
    ///
    /// let logger = Logger::builder().discard().build().unwrap();
    /// if let Err(err) = logger.panic("invariant broken", LogContext::new()) {
    ///     err.terminate();
    /// }
    /// ```
    pub fn terminate(self) -> ! {
        match self {
            LoggerError::Fatal { .. } => std::process::exit(1),
            LoggerError::Panic { message } | LoggerError::DPanic { message } => {
                panic!("{}", message)
            }
            other => panic!("{}", other),
        }
    }
}
