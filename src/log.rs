use std::sync::atomic::{AtomicU8, Ordering};

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

static MAX_LEVEL: AtomicU8 = AtomicU8::new(DEFAULT_LOG_LEVEL.rank());

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    /// Parses a level name case-insensitively, falling back to `default`.
    pub fn parse_or(value: Option<&str>, default: LogLevel) -> LogLevel {
        match value
            .map(str::trim)
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "error" => Self::Error,
            _ => default,
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Error => 2,
        }
    }
}

pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level.rank(), Ordering::Relaxed);
}

pub fn enabled(level: LogLevel) -> bool {
    level.rank() >= MAX_LEVEL.load(Ordering::Relaxed)
}

/// Builds one structured log line. Extra fields are merged after the fixed
/// `ts`/`level`/`event` keys and may not override them.
pub fn format_event(
    ts_millis: u64,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts_millis)),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.entry(key).or_insert(value);
        }
    }

    serde_json::Value::Object(payload)
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if !enabled(level) {
        return;
    }

    let line = format_event(now_unix_millis(), level, event, fields).to_string();
    emit(&line);
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}
