//! Basic usage of logfacade
//!
//! Run with: cargo run --example basic_usage

use logfacade::prelude::*;
use logfacade::{global, info, warn};
use std::time::Duration;

fn main() {
    println!("=== Development logger ===\n");

    let logger = Logger::development();

    logger.debug("hidden below the info threshold", LogContext::new());
    logger.info("server starting", fields!("port" => 8080, "tls" => false));
    logger.warn(
        "slow dependency",
        fields!("service" => "billing", "latency" => Duration::from_millis(1250)),
    );

    // Named and field-scoped children
    let http = logger.named("http").with(fields!("request_id" => "r-42"));
    http.info("request accepted", fields!("path" => "/v1/orders"));
    http.named("router").info("route matched", LogContext::new());

    // Macros format the message and take fields after `;`
    info!(logger, "{} workers ready", 4);
    warn!(logger, "retrying in {}ms", 250; "attempt" => 2);

    // Loosely typed API
    let sugar = logger.sugar();
    sugar.info(format_args!("cache warmed with {} entries", 1024));
    sugar.infow("user login", [("user", "alice"), ("method", "sso")]);

    // Skip building fields when the level is filtered
    if let Some(entry) = logger.check(LogLevel::Debug, "expensive detail") {
        entry.field("dump", "...").write().ok();
    }

    // Raise verbosity at runtime
    if let Some(level) = logger.level() {
        level.set_level(LogLevel::Debug);
    }
    logger.debug("now visible", LogContext::new());

    // Errors carry a stack trace in development mode
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    logger.error("startup degraded", LogContext::new().with_error(&err));

    // dpanic asks development code to stop; here we only report it
    if let Err(e) = logger.dpanic("impossible state reached", LogContext::new()) {
        println!("\ndpanic requested termination: {}", e);
    }

    println!("\n=== Global logger ===\n");

    global::init_development();
    global::info("via the process-wide slot", fields!("pid" => std::process::id()));
    global::named("jobs").warn("queue backlog", fields!("depth" => 128));

    if let Err(e) = global::sync() {
        eprintln!("sync failed: {}", e);
    }
}
