//! Criterion benchmarks for logfacade

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logfacade::prelude::*;
use logfacade::Entry;
use std::sync::Arc;
use std::thread;

fn discard_logger(level: LogLevel, encoding: Encoding) -> Logger {
    Logger::builder()
        .min_level(level)
        .encoding(encoding)
        .sink(DiscardSink)
        .build()
        .unwrap()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("production", |b| {
        b.iter(|| black_box(Logger::production()));
    });

    group.bench_function("named", |b| {
        let logger = discard_logger(LogLevel::Info, Encoding::Json);
        b.iter(|| black_box(logger.named(black_box("worker"))));
    });

    group.bench_function("with_fields", |b| {
        let logger = discard_logger(LogLevel::Info, Encoding::Json);
        b.iter(|| black_box(logger.with(fields!("request_id" => "r-1", "tenant" => "acme"))));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_leveled_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("leveled_logging");
    group.throughput(Throughput::Elements(1));

    for encoding in [Encoding::Json, Encoding::Console] {
        let logger = discard_logger(LogLevel::Info, encoding);

        let name = format!("{:?}", encoding);

        group.bench_with_input(
            BenchmarkId::new("filtered_debug", &name),
            &logger,
            |b, logger| {
                b.iter(|| logger.debug(black_box("Debug message"), LogContext::new()));
            },
        );

        group.bench_with_input(BenchmarkId::new("info", &name), &logger, |b, logger| {
            b.iter(|| logger.info(black_box("Info message"), LogContext::new()));
        });

        group.bench_with_input(
            BenchmarkId::new("info_with_fields", &name),
            &logger,
            |b, logger| {
                b.iter(|| {
                    logger.info(
                        black_box("Request processed"),
                        fields!("user_id" => 12345, "latency_ms" => 42.5, "status" => 200),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_sugared_and_checked(c: &mut Criterion) {
    let mut group = c.benchmark_group("sugared_and_checked");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(LogLevel::Info, Encoding::Json);
    let sugar = logger.sugar();

    group.bench_function("sugar_infow", |b| {
        b.iter(|| sugar.infow(black_box("login"), [("user", "alice"), ("method", "sso")]));
    });

    group.bench_function("check_filtered", |b| {
        b.iter(|| black_box(logger.check(LogLevel::Debug, "skipped").is_none()));
    });

    group.bench_function("check_write", |b| {
        b.iter(|| {
            if let Some(entry) = logger.check(LogLevel::Warn, "slow query") {
                entry.field("elapsed_ms", 1200).write().ok();
            }
        });
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let logger = Arc::new(discard_logger(LogLevel::Info, Encoding::Json));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                logger.info("concurrent", fields!("i" => i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().ok();
                }
            });
        });
    }

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let entry = Entry::new(LogLevel::Error, "fail").with_name(Some("api.handler".to_string()));
    let fields = fields!("code" => 500, "path" => "/v1/orders", "retryable" => false);
    let production = EncoderConfig::production();
    let development = EncoderConfig::development();

    group.bench_function("json", |b| {
        b.iter(|| Encoding::Json.encode(&production, black_box(&entry), black_box(&fields)));
    });

    group.bench_function("console", |b| {
        b.iter(|| Encoding::Console.encode(&development, black_box(&entry), black_box(&fields)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_leveled_logging,
    bench_sugared_and_checked,
    bench_concurrent_logging,
    bench_encoding,
);

criterion_main!(benches);
