//! Built-in line-oriented backend
//!
//! This is the logger occupying the global slot until something else is
//! registered. It writes one framed line per call to any `Write + Send`
//! sink, either as plain text or as a JSON object.

use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

#[cfg(feature = "color")]
use colored::Colorize;

use super::error::Result;
use super::fields::Fields;
use super::level::Level;
use super::logger::{Logger, SharedLogger};

/// Environment variable consulted by [`TextLogger::from_env`]
pub const LEVEL_ENV_VAR: &str = "DLOG_LEVEL";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Default backend writing framed text or JSON lines.
///
/// Plain format: `[<timestamp>] [LEVEL] <message> key=value ...`
///
/// Write failures are swallowed: a facade must never turn a log call into an
/// application error.
#[derive(Clone)]
pub struct TextLogger {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    min_level: Level,
    fields: Fields,
    json: bool,
    #[cfg(feature = "color")]
    colors: bool,
}

impl TextLogger {
    /// Logger over standard error, the process-wide default
    pub fn stderr() -> Self {
        let logger = Self::with_writer(Box::new(std::io::stderr()));
        #[cfg(feature = "color")]
        let logger = logger.with_colors(true);
        logger
    }

    /// Logger over standard output
    pub fn stdout() -> Self {
        let logger = Self::with_writer(Box::new(std::io::stdout()));
        #[cfg(feature = "color")]
        let logger = logger.with_colors(true);
        logger
    }

    /// Logger over an arbitrary sink, colors off
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            min_level: Level::Debug,
            fields: Fields::new(),
            json: false,
            #[cfg(feature = "color")]
            colors: false,
        }
    }

    /// Stderr logger with its minimum level read from `DLOG_LEVEL`.
    ///
    /// Falls back to `Info` when the variable is unset or does not parse.
    pub fn from_env() -> Self {
        let level = std::env::var(LEVEL_ENV_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::Info);
        Self::stderr().with_min_level(level)
    }

    /// Set the minimum level
    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Emit JSON objects instead of plain text lines
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Enable or disable colored level names
    #[cfg(feature = "color")]
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    fn format_text(&self, level: Level, message: &fmt::Arguments<'_>) -> String {
        let level_str = {
            #[cfg(feature = "color")]
            {
                if self.colors {
                    format!("{:5}", level.to_str())
                        .color(level.color_code())
                        .to_string()
                } else {
                    format!("{:5}", level.to_str())
                }
            }
            #[cfg(not(feature = "color"))]
            {
                format!("{:5}", level.to_str())
            }
        };

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        let base = format!("[{}] [{}] {}", timestamp, level_str, message);

        if self.fields.is_empty() {
            base
        } else {
            format!("{} {}", base, self.fields)
        }
    }

    fn format_json(&self, level: Level, message: &fmt::Arguments<'_>) -> String {
        // Fields go in first so the core keys win any name collision; a
        // field named `level` must not be able to forge the line's level.
        let mut object = serde_json::Map::new();
        if let serde_json::Value::Object(fields) = self.fields.to_json_value() {
            object.extend(fields);
        }
        object.insert(
            "timestamp".to_string(),
            serde_json::Value::String(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()),
        );
        object.insert(
            "level".to_string(),
            serde_json::Value::String(level.to_str().to_string()),
        );
        object.insert(
            "message".to_string(),
            serde_json::Value::String(message.to_string()),
        );
        serde_json::Value::Object(object).to_string()
    }
}

impl Default for TextLogger {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Logger for TextLogger {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let line = if self.json {
            self.format_json(level, &message)
        } else {
            self.format_text(level, &message)
        };

        let mut writer = self.writer.lock();
        let _ = writeln!(writer.as_mut(), "{}", line);
    }

    fn with_fields(&self, fields: Fields) -> SharedLogger {
        let mut derived = self.clone();
        derived.fields = derived.fields.merged(fields);
        SharedLogger::new(derived)
    }

    fn at_level(&self, level: Level) -> SharedLogger {
        SharedLogger::new(self.clone().with_min_level(level))
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}
