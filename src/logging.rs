use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Serialize)]
struct LogEvent<'a> {
    level: Level,
    event: &'a str,
    message: &'a str,
    timestamp_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Value>,
}

impl<'a> LogEvent<'a> {
    /// `Value::Null` metadata is left out of the line.
    fn new(level: Level, event: &'a str, message: &'a str, metadata: &'a Value) -> Self {
        Self {
            level,
            event,
            message,
            timestamp_ms: current_timestamp_ms(),
            metadata: (!metadata.is_null()).then_some(metadata),
        }
    }
}

/// Log lines go to stderr so command output on stdout stays machine readable.
fn emit(level: Level, event: &str, message: &str, metadata: &Value) {
    let entry = LogEvent::new(level, event, message, metadata);

    match serde_json::to_string(&entry) {
        Ok(payload) => eprintln!("{payload}"),
        Err(err) => eprintln!(
            "{{\"level\":\"error\",\"event\":\"logging_failure\",\"message\":\"failed to serialise log\",\"error\":\"{err}\"}}"
        ),
    }
}

pub fn info(event: &str, message: &str, metadata: Value) {
    emit(Level::Info, event, message, &metadata);
}

pub fn warn(event: &str, message: &str, metadata: Value) {
    emit(Level::Warn, event, message, &metadata);
}

pub fn error(event: &str, message: &str, metadata: Value) {
    emit(Level::Error, event, message, &metadata);
}

fn current_timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
