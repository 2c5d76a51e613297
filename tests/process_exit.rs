//! Termination behaviour of fatal and panic records
//!
//! `fatal` followed by `terminate` ends the process, so it is exercised in a
//! child process running this same test binary.

use logfacade::prelude::*;
use std::env;
use std::panic::{self, AssertUnwindSafe};
use std::process::Command;

const CHILD_ENV: &str = "LOGFACADE_FATAL_CHILD";

/// Runs inside the child: write a fatal record to stdout, then exit
#[test]
fn fatal_child() {
    if env::var_os(CHILD_ENV).is_none() {
        return;
    }
    let logger = Logger::development();
    if let Err(err) = logger.fatal("boom", fields!("reason" => "disk full")) {
        err.terminate();
    }
    unreachable!("fatal always requests termination");
}

#[test]
fn test_fatal_exits_with_status_one() {
    let exe = env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["--exact", "fatal_child", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("Failed to spawn child");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("boom"), "child stdout: {}", stdout);
    assert!(stdout.contains("disk full"));
}

#[test]
fn test_panic_unwinds_after_writing() {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .min_level(LogLevel::Fatal)
        .sink(memory.clone())
        .build()
        .unwrap();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        if let Err(err) = logger.panic("invariant broken", LogContext::new()) {
            err.terminate();
        }
    }));

    let payload = result.expect_err("panic record must unwind");
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default();
    assert_eq!(message, "invariant broken");
    assert!(memory.contents().contains("\"level\":\"panic\""));
}

#[test]
fn test_dpanic_unwinds_only_in_development() {
    let production = Logger::builder().discard().build().unwrap();
    assert!(production.dpanic("tolerated", LogContext::new()).is_ok());

    let development = Logger::builder().discard().development_mode(true).build().unwrap();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        if let Err(err) = development.dpanic("not tolerated", LogContext::new()) {
            err.terminate();
        }
    }));
    assert!(result.is_err());
}
