//! Record encoders
//!
//! Two encodings are provided:
//! - Json: one JSON object per line, for machines
//! - Console: separator-delimited text with fields as inline JSON, for humans

use super::encoder_config::EncoderConfig;
use super::error::Result;
use super::log_context::LogContext;
use super::log_entry::Entry;
use serde::{Deserialize, Serialize};

/// Prefix for user fields whose key is taken by a record element
const COLLISION_PREFIX: &str = "fields.";

/// Escape line breaks and tabs so a message stays in its own column
fn escape_console(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Encoding used to render entries into bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Example: `{"time":"2025-01-08 10:30:45","level":"error","msg":"fail","code":500}`
    #[default]
    Json,

    /// Example: `2025-01-08 10:30:45	INFO	main.rs:12	start	{"port":8080}`
    Console,
}

impl Encoding {
    /// Encode one entry with its fields, including the line ending
    pub fn encode(
        &self,
        config: &EncoderConfig,
        entry: &Entry,
        fields: &LogContext,
    ) -> Result<String> {
        match self {
            Encoding::Json => Self::encode_json(config, entry, fields),
            Encoding::Console => Self::encode_console(config, entry, fields),
        }
    }

    fn encode_json(config: &EncoderConfig, entry: &Entry, fields: &LogContext) -> Result<String> {
        let mut object = serde_json::Map::new();

        if !config.time_key.is_empty() {
            object.insert(
                config.time_key.clone(),
                config.time_encoding.to_json_value(&entry.time),
            );
        }
        if !config.level_key.is_empty() {
            object.insert(
                config.level_key.clone(),
                serde_json::Value::String(config.level_encoding.encode(entry.level)),
            );
        }
        if let (false, Some(name)) = (config.name_key.is_empty(), &entry.logger_name) {
            object.insert(
                config.name_key.clone(),
                serde_json::Value::String(config.name_encoding.encode(name)),
            );
        }
        if let (false, Some(caller)) = (config.caller_key.is_empty(), &entry.caller) {
            object.insert(
                config.caller_key.clone(),
                serde_json::Value::String(config.caller_encoding.encode(caller)),
            );
        }
        if !config.message_key.is_empty() {
            object.insert(
                config.message_key.clone(),
                serde_json::Value::String(entry.message.clone()),
            );
        }
        if let (false, Some(stack)) = (config.stacktrace_key.is_empty(), &entry.stack) {
            object.insert(
                config.stacktrace_key.clone(),
                serde_json::Value::String(stack.clone()),
            );
        }

        // User fields come last and keep their order. A field named like an
        // element already written is moved under `fields.<key>`.
        for (key, value) in fields.iter() {
            let key = if object.contains_key(key) {
                format!("{}{}", COLLISION_PREFIX, key)
            } else {
                key.to_string()
            };
            object.insert(key, value.to_json_value(config.duration_encoding));
        }

        let mut line = serde_json::to_string(&serde_json::Value::Object(object))?;
        line.push_str(&config.line_ending);
        Ok(line)
    }

    fn encode_console(
        config: &EncoderConfig,
        entry: &Entry,
        fields: &LogContext,
    ) -> Result<String> {
        let mut parts: Vec<String> = Vec::with_capacity(6);

        if !config.time_key.is_empty() {
            parts.push(config.time_encoding.format(&entry.time));
        }
        if !config.level_key.is_empty() {
            parts.push(config.level_encoding.encode(entry.level));
        }
        if let (false, Some(name)) = (config.name_key.is_empty(), &entry.logger_name) {
            parts.push(config.name_encoding.encode(name));
        }
        if let (false, Some(caller)) = (config.caller_key.is_empty(), &entry.caller) {
            parts.push(config.caller_encoding.encode(caller));
        }
        if !config.message_key.is_empty() {
            parts.push(escape_console(&entry.message));
        }
        if !fields.is_empty() {
            let object = fields.to_json_object(config.duration_encoding);
            parts.push(serde_json::to_string(&serde_json::Value::Object(object))?);
        }

        let mut line = parts.join(&config.console_separator);
        if let (false, Some(stack)) = (config.stacktrace_key.is_empty(), &entry.stack) {
            line.push('\n');
            line.push_str(stack.trim_end());
        }
        line.push_str(&config.line_ending);
        Ok(line)
    }
}

impl std::str::FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "console" => Ok(Encoding::Console),
            _ => Err(format!("Invalid encoding: '{}'", s)),
        }
    }
}
