use chrono::Utc;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use serde_json::Value;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter>
{
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

pub fn current_time_millis() -> i64
{
    Utc::now().timestamp_millis()
}

/// Absolute expiry for a lifetime in seconds; `None` and `Some(0)` never expire.
pub fn expiration_millis(ttl: Option<u64>) -> Option<i64>
{
    match ttl {
        Some(seconds) if seconds > 0 => {
            let millis = i64::try_from(seconds).unwrap_or(i64::MAX).saturating_mul(1000);
            Some(current_time_millis().saturating_add(millis))
        }
        _ => None
    }
}

pub fn is_expired(expires_at: Option<i64>) -> bool
{
    expires_at.is_some_and(|at| current_time_millis() >= at)
}

/// Mirrors the "empty" notion used for required driver parameters:
/// null, false, 0, "", "0", [] and {} all count as not provided.
pub fn is_blank(value: &Value) -> bool
{
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// A command line value as JSON, falling back to a plain string.
pub fn parse_cli_value(input: &str) -> Value
{
    serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()))
}
