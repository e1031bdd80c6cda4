//! Structured logging.
//!
//! JSON lines when running in production mode, a human-readable single
//! line otherwise. Errors and warnings go to stderr so they survive
//! stdout redirection; an optional file sink can be attached at startup.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Severity, ordered so that a level filter is a simple comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Unknown strings fall back to the quietest level.
    pub fn parse(level: &str) -> Self {
        match level.to_uppercase().as_str() {
            "TRACE" => LogLevel::Trace,
            "DEBUG" => LogLevel::Debug,
            "INFO" => LogLevel::Info,
            "WARN" => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

/// One emitted record.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub target: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub log_to_stdout: bool,
    pub json_format: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let logging = &crate::config::get_config().logging;
        Self {
            level: LogLevel::parse(&logging.level),
            log_to_stdout: logging.log_to_stdout,
            json_format: logging.json_format,
        }
    }
}

pub struct Logger {
    config: LoggerConfig,
    file: Option<Mutex<BufWriter<std::fs::File>>>,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config, file: None }
    }

    /// Attach an append-mode file sink next to stdout.
    pub fn with_file(config: LoggerConfig, path: &Path) -> Result<Self, String> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("Log faylı açıla bilmədi: {}", e))?;

        Ok(Self {
            config,
            file: Some(Mutex::new(BufWriter::new(file))),
        })
    }

    fn render(&self, entry: &LogEntry) -> String {
        if self.config.json_format {
            serde_json::to_string(entry).unwrap_or_else(|_| "{}".to_string())
        } else {
            let data = entry
                .data
                .as_ref()
                .map(|d| format!(" | {}", d))
                .unwrap_or_default();
            format!(
                "{} [{}] [{}] {}{}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                entry.level.as_str(),
                entry.target,
                entry.message,
                data
            )
        }
    }

    fn emit(&self, entry: &LogEntry) {
        if entry.level > self.config.level {
            return;
        }

        let line = self.render(entry);

        if self.config.log_to_stdout {
            match entry.level {
                LogLevel::Error | LogLevel::Warn => eprintln!("{}", line),
                _ => println!("{}", line),
            }
        }

        if let Some(file) = &self.file {
            if let Ok(mut writer) = file.lock() {
                let _ = writeln!(writer, "{}", line);
                let _ = writer.flush();
            }
        }
    }

    pub fn log(
        &self,
        level: LogLevel,
        target: &'static str,
        message: &str,
        data: Option<serde_json::Value>,
    ) {
        self.emit(&LogEntry {
            timestamp: Local::now(),
            level,
            target,
            message: message.to_string(),
            data,
        });
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the global logger (stdout/stderr only). Fails when a logger
/// was already installed.
pub fn init_global_logger() -> Result<(), String> {
    GLOBAL_LOGGER
        .set(Logger::new(LoggerConfig::default()))
        .map_err(|_| "Logger artıq qurulub".to_string())
}

/// Install the global logger with an additional file sink.
pub fn init_global_logger_with_file(path: &Path) -> Result<(), String> {
    let logger = Logger::with_file(LoggerConfig::default(), path)?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| "Logger artıq qurulub".to_string())
}

pub fn get_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

#[macro_export]
macro_rules! log_error {
    ($target:expr, $msg:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.log($crate::logger::LogLevel::Error, $target, $msg, None);
        }
    };
    ($target:expr, $msg:expr, $data:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.log($crate::logger::LogLevel::Error, $target, $msg, Some($data));
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($target:expr, $msg:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.log($crate::logger::LogLevel::Warn, $target, $msg, None);
        }
    };
    ($target:expr, $msg:expr, $data:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.log($crate::logger::LogLevel::Warn, $target, $msg, Some($data));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($target:expr, $msg:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.log($crate::logger::LogLevel::Info, $target, $msg, None);
        }
    };
    ($target:expr, $msg:expr, $data:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.log($crate::logger::LogLevel::Info, $target, $msg, Some($data));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($target:expr, $msg:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.log($crate::logger::LogLevel::Debug, $target, $msg, None);
        }
    };
    ($target:expr, $msg:expr, $data:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.log($crate::logger::LogLevel::Debug, $target, $msg, Some($data));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering_filters_quieter_levels() {
        assert!(LogLevel::Debug > LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::Warn);
    }

    #[test]
    fn parse_falls_back_to_error() {
        assert_eq!(LogLevel::parse("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::parse("nonsense"), LogLevel::Error);
    }

    #[test]
    fn json_entry_omits_empty_data() {
        let entry = LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Info,
            target: "TEST",
            message: "salam".to_string(),
            data: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"data\""));
        assert!(json.contains("\"INFO\""));
    }
}
