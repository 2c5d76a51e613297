//! Production logger writing JSON records to a file
//!
//! Run with: cargo run --example production_file

use logfacade::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let path = std::env::temp_dir().join("logfacade_production_demo.log");
    println!("Writing JSON records to {}", path.display());

    let logger = LoggerBuilder::production()
        .sink(FileSink::new(&path)?)
        .stderr()
        .name("billing")
        .field("service", "billing-api")
        .build()?;

    // Filtered: production keeps error and above
    logger.info("request served", fields!("status" => 200));

    logger.error(
        "payment declined",
        fields!("code" => 500, "order_id" => 9001, "retryable" => true),
    );

    // dpanic is logged with a stack trace but does not stop production code
    logger.dpanic("ledger out of balance", fields!("delta" => -3))?;

    // Tee the same records into an audit file with a lower threshold
    let audit_path = std::env::temp_dir().join("logfacade_audit_demo.log");
    let audit = IoCore::new(
        Encoding::Json,
        EncoderConfig::production(),
        FileSink::new(&audit_path)?,
        AtomicLevel::new(LogLevel::Warn),
    );
    let teed = Logger::new(Arc::new(Tee::new(vec![logger.core(), Arc::new(audit)])));
    teed.warn("card nearing expiry", fields!("customer" => "c-17"));

    logger.sync()?;
    teed.sync()?;

    println!(
        "Metrics: {} written, {} dropped",
        logger.metrics().total_logged(),
        logger.dropped_count()
    );

    // Fatal writes, syncs, and hands back the exit request
    if let Err(e) = logger.fatal("unrecoverable: ledger locked", LogContext::new()) {
        println!("Exiting: {}", e);
        e.terminate();
    }
    Ok(())
}
