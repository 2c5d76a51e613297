//! Timestamp formatting utilities
//!
//! Record timestamps are taken in local time. The default layout is
//! `YYYY-MM-DD HH:MM:SS`; ISO 8601, RFC 3339, epoch and custom strftime
//! layouts are also available.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout options
///
/// # Examples
///
/// ```
/// use logfacade::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let time = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::DateTime.format(&time), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Floating-point seconds since the Unix epoch: `1736332245.123`
    EpochSeconds,

    /// Integer milliseconds since the Unix epoch
    EpochMillis,

    /// Integer nanoseconds since the Unix epoch
    EpochNanos,

    /// Custom strftime format
    ///
    /// ```
    /// use logfacade::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Render a timestamp as text
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::DateTime => datetime.format(DATE_TIME_LAYOUT).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::EpochSeconds => Self::epoch_seconds(datetime).to_string(),
            TimestampFormat::EpochMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::EpochNanos => Self::epoch_nanos(datetime).to_string(),
            TimestampFormat::Custom(layout) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(layout)).is_err() {
                    // Unparsable layout: fall back rather than lose the record
                    return datetime.format(DATE_TIME_LAYOUT).to_string();
                }
                out
            }
        }
    }

    /// Reject custom layouts containing unknown strftime specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(layout) = self {
            if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime layout '{}'", layout),
                ));
            }
        }
        Ok(())
    }

    /// Render a timestamp for a JSON record; epoch layouts stay numeric
    #[must_use]
    pub fn to_json_value(&self, datetime: &DateTime<Local>) -> serde_json::Value {
        match self {
            TimestampFormat::EpochSeconds => serde_json::Number::from_f64(Self::epoch_seconds(datetime))
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            TimestampFormat::EpochMillis => datetime.timestamp_millis().into(),
            TimestampFormat::EpochNanos => Self::epoch_nanos(datetime).into(),
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }

    fn epoch_seconds(datetime: &DateTime<Local>) -> f64 {
        datetime.timestamp() as f64 + f64::from(datetime.timestamp_subsec_nanos()) / 1e9
    }

    fn epoch_nanos(datetime: &DateTime<Local>) -> i64 {
        datetime
            .timestamp_nanos_opt()
            .unwrap_or_else(|| datetime.timestamp_micros().saturating_mul(1_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_datetime_format() {
        let result = TimestampFormat::DateTime.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45.123"));
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
    }

    #[test]
    fn test_epoch_formats_are_ordered() {
        let secs: f64 = TimestampFormat::EpochSeconds
            .format(&fixed_datetime())
            .parse()
            .expect("valid epoch seconds");
        let millis: i64 = TimestampFormat::EpochMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid epoch millis");
        let nanos: i64 = TimestampFormat::EpochNanos
            .format(&fixed_datetime())
            .parse()
            .expect("valid epoch nanos");

        assert!(secs > 0.0);
        assert_eq!(millis / 1000, secs as i64);
        assert_eq!(nanos / 1_000_000, millis);
    }

    #[test]
    fn test_json_values() {
        assert!(TimestampFormat::EpochMillis
            .to_json_value(&fixed_datetime())
            .is_number());
        assert_eq!(
            TimestampFormat::DateTime.to_json_value(&fixed_datetime()),
            serde_json::Value::String("2025-01-08 10:30:45".to_string())
        );
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_layout_falls_back() {
        let format = TimestampFormat::Custom("%Q %Y".to_string());
        assert!(format.validate().is_err());
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08 10:30:45");
        assert_eq!(
            format.to_json_value(&fixed_datetime()),
            serde_json::Value::String("2025-01-08 10:30:45".to_string())
        );
    }

    #[test]
    fn test_validate_accepts_known_layouts() {
        assert!(TimestampFormat::DateTime.validate().is_ok());
        assert!(TimestampFormat::EpochMillis.validate().is_ok());
        assert!(TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string())
            .validate()
            .is_ok());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string(&TimestampFormat::DateTime).expect("serialize");
        assert_eq!(json, "\"DateTime\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
