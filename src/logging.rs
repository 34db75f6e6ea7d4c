use serde_json::{Map, Number, Value};

const BANNER: &[(&str, &str)] = &[
    (
        "%c Welcome to my portfolio! 🚀",
        "color: #00ff88; font-size: 20px; font-weight: bold;",
    ),
    (
        "%c Feel free to explore the code!",
        "color: #ffffff; font-size: 14px;",
    ),
    (
        "%c Technologies: HTML5, CSS3, Rust + WebAssembly",
        "color: #a0a0a0; font-size: 12px;",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if level < min_level {
        return;
    }

    emit(&event_payload(now_unix_millis(), level, event, fields).to_string());
}

fn event_payload(ts: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

pub fn print_banner() {
    for (line, style) in BANNER {
        emit_styled(line, style);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    gloo::console::log!(line);
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn emit_styled(line: &str, style: &str) {
    gloo::console::log!(line, style);
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_styled(line: &str, _style: &str) {
    println!("{}", line.trim_start_matches("%c").trim_start());
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
