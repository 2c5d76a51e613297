//! Property-based tests for logfacade using proptest

use logfacade::prelude::*;
use logfacade::{Entry, LevelEncoding};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::DPanic),
        Just(LogLevel::Panic),
        Just(LogLevel::Fatal),
    ]
}

fn json_logger(level: LogLevel) -> (Logger, MemorySink) {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .min_level(level)
        .sink(memory.clone())
        .build()
        .unwrap();
    (logger, memory)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Upper-case names parse back to the same level
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let text = if use_lower {
            level.to_lowercase_str().to_string()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(text.parse::<LogLevel>().unwrap(), level);
    }

    /// Ordering follows the numeric representation
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;
        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    #[test]
    fn test_log_level_invalid_parse(invalid_str in "[0-9#@!]+") {
        prop_assert!(invalid_str.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

proptest! {
    /// Below-threshold records never reach the sink; others always do
    #[test]
    fn test_threshold_filtering(threshold in any_level(), level in prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]) {
        let (logger, memory) = json_logger(threshold);
        logger.log(level, "sample", LogContext::new()).unwrap();

        let expected = usize::from(level >= threshold);
        prop_assert_eq!(memory.lines().len(), expected);
    }

    /// Runtime threshold changes take effect on the next call
    #[test]
    fn test_atomic_level_changes(first in any_level(), second in any_level(), level in any_level()) {
        let atomic = AtomicLevel::new(first);
        prop_assert_eq!(atomic.enabled(level), level >= first);
        atomic.set_level(second);
        prop_assert_eq!(atomic.enabled(level), level >= second);
    }
}

// ============================================================================
// Message Escaping Tests
// ============================================================================

proptest! {
    /// Console messages never break the line or add a column
    #[test]
    fn test_console_message_escaping(message in ".*") {
        let config = EncoderConfig::default().with_level_encoding(LevelEncoding::Capital);
        let entry = Entry::new(LogLevel::Info, &message);
        let line = Encoding::Console.encode(&config, &entry, &LogContext::new()).unwrap();

        let body = line.strip_suffix('\n').unwrap();
        prop_assert!(!body.contains('\n'));
        prop_assert!(!body.contains('\r'));
        prop_assert_eq!(body.split('\t').count(), 3);
    }

    /// JSON messages come back unchanged, control characters included
    #[test]
    fn test_json_message_roundtrip(message in ".*") {
        let (logger, memory) = json_logger(LogLevel::Debug);
        logger.info(message.clone(), LogContext::new());

        let lines = memory.lines();
        prop_assert_eq!(lines.len(), 1);
        let record: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        prop_assert_eq!(record["msg"].as_str(), Some(message.as_str()));
    }

    /// Whatever the message, one call produces exactly one line
    #[test]
    fn test_log_injection_prevention(
        legitimate_msg in "[a-zA-Z0-9 ]+",
        injected_msg in "[a-zA-Z0-9 ]+"
    ) {
        let memory = MemorySink::new();
        let logger = Logger::builder()
            .encoding(Encoding::Console)
            .encoder_config(EncoderConfig::default().with_level_encoding(LevelEncoding::Capital))
            .sink(memory.clone())
            .build()
            .unwrap();

        let message = format!("{}\nERROR {}", legitimate_msg, injected_msg);
        logger.info(message, LogContext::new());
        prop_assert_eq!(memory.lines().len(), 1);
    }
}

// ============================================================================
// Encoding Tests
// ============================================================================

proptest! {
    /// JSON records always parse and carry the message and fields verbatim
    #[test]
    fn test_json_record_is_valid(
        message in ".*",
        key in "[a-z_]{1,12}",
        value in any::<i64>()
    ) {
        prop_assume!(!["time", "level", "logger", "file", "msg", "stacktrace"].contains(&key.as_str()));
        let (logger, memory) = json_logger(LogLevel::Debug);
        logger.info(message.clone(), LogContext::new().with_field(key.clone(), value));

        let lines = memory.lines();
        prop_assert_eq!(lines.len(), 1);
        let record: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        prop_assert_eq!(record["msg"].as_str(), Some(message.as_str()));
        prop_assert_eq!(record[key.as_str()].as_i64(), Some(value));
    }

    /// Field insertion order survives encoding
    #[test]
    fn test_field_order(keys in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let mut unique: Vec<String> = Vec::new();
        for key in keys {
            if !unique.contains(&key) && !["time", "level", "file", "msg"].contains(&key.as_str()) {
                unique.push(key);
            }
        }
        prop_assume!(!unique.is_empty());

        let (logger, memory) = json_logger(LogLevel::Debug);
        let context: LogContext = unique.iter().map(|k| (k.clone(), true)).collect();
        logger.info("ordered", context);

        let record: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&memory.lines()[0]).unwrap();
        let user_keys: Vec<&String> = record.keys().skip(4).collect();
        let expected: Vec<&String> = unique.iter().collect();
        prop_assert_eq!(user_keys, expected);
    }

    /// Logger names join with dots in call order
    #[test]
    fn test_named_joins(parts in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let logger = Logger::builder().discard().build().unwrap();
        let named = parts.iter().fold(logger, |l, part| l.named(part));
        let expected = parts.join(".");
        prop_assert_eq!(named.name(), Some(expected.as_str()));
    }
}
