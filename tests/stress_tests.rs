//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - No record is lost or torn when many threads share one logger
//! - Threshold changes under load never corrupt output
//! - Sink failures under load are counted, not propagated

use logfacade::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const THREADS: usize = 16;
const PER_THREAD: usize = 500;

/// Every record from every thread arrives as one complete JSON line
#[test]
fn test_no_records_lost_under_contention() {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .sink(memory.clone())
        .build()
        .unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.with(fields!("thread" => t));
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.info("load", fields!("seq" => i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let record: serde_json::Value = serde_json::from_str(line).expect("torn record");
        let key = (record["thread"].as_u64().unwrap(), record["seq"].as_u64().unwrap());
        assert!(seen.insert(key), "duplicate record {:?}", key);
    }
    assert_eq!(logger.metrics().total_logged(), (THREADS * PER_THREAD) as u64);
}

/// Flipping the threshold while writers run only changes how much is written
#[test]
fn test_level_changes_under_load() {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .min_level(LogLevel::Error)
        .sink(memory.clone())
        .build()
        .unwrap();
    let running = Arc::new(AtomicBool::new(true));

    let toggler = {
        let logger = logger.clone();
        let running = Arc::clone(&running);
        thread::spawn(move || {
            let level = logger.level().expect("builder loggers carry a level");
            while running.load(Ordering::Relaxed) {
                level.set_level(LogLevel::Debug);
                thread::sleep(Duration::from_micros(50));
                level.set_level(LogLevel::Error);
            }
        })
    };

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..1000 {
                    logger.debug("maybe", fields!("i" => i));
                    logger.error("always", fields!("i" => i));
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().expect("Writer panicked");
    }
    running.store(false, Ordering::Relaxed);
    toggler.join().expect("Toggler panicked");

    let lines = memory.lines();
    let errors = lines.iter().filter(|l| l.contains("\"always\"")).count();
    assert_eq!(errors, 4000);
    assert!(lines
        .iter()
        .all(|l| serde_json::from_str::<serde_json::Value>(l).is_ok()));
}

struct FlakySink {
    calls: usize,
}

impl Sink for FlakySink {
    fn write(&mut self, _record: &[u8]) -> Result<()> {
        self.calls += 1;
        if self.calls % 2 == 0 {
            Err(LoggerError::sink("flaky", "every second write fails"))
        } else {
            Ok(())
        }
    }

    fn sync(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "flaky"
    }
}

/// Half the writes fail; the logger keeps going and counts them
#[test]
fn test_sink_failures_under_load() {
    let logger = Logger::builder()
        .sink(FlakySink { calls: 0 })
        .build()
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    logger.warn("flaky", LogContext::new());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let metrics = logger.metrics();
    assert_eq!(metrics.total_logged() + metrics.dropped_count(), 2000);
    assert_eq!(metrics.dropped_count(), 1000);
    assert!((metrics.drop_rate() - 50.0).abs() < f64::EPSILON);
}

/// Concurrent writers to one file produce whole lines only
#[test]
fn test_file_sink_under_contention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    let logger = LoggerBuilder::production()
        .min_level(LogLevel::Info)
        .sink(FileSink::new(&log_file).expect("Failed to open log file"))
        .build()
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = logger.named(&format!("w{}", t));
            thread::spawn(move || {
                for i in 0..200 {
                    logger.info("persist", fields!("i" => i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    logger.sync().expect("Failed to sync");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1600);
    assert!(lines
        .iter()
        .all(|l| serde_json::from_str::<serde_json::Value>(l).is_ok()));
}
