use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    /// Case-insensitive; unknown names fall back to `default`.
    pub fn parse_or(value: Option<&str>, default: Self) -> Self {
        match value
            .map(str::trim)
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" => Self::Warn,
            _ => default,
        }
    }
}

/// Emits one structured event unless `level` is below `min_level`.
pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if level < min_level {
        return;
    }

    let line = event_payload(now_unix_millis(), level, event, fields).to_string();
    emit(level, &line);
}

fn event_payload(ts: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert(
        "level".to_string(),
        Value::String(level.as_str().to_string()),
    );
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, line: &str) {
    match level {
        LogLevel::Warn => eprintln!("{line}"),
        LogLevel::Debug | LogLevel::Info => println!("{line}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}
