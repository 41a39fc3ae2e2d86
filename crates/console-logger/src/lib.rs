//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the browser console,
//! routed to the console method matching their level so devtools filtering
//! keeps working.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Logger writing `[target] message` lines to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::log_1(&line),
            Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Format a record as `[module] message`, keeping only the last path segment
/// of the target (`moods_ui::api::mood` becomes `mood`).
pub fn format_line(target: &str, args: &std::fmt::Arguments) -> String {
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short, args)
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::MetadataBuilder;

    #[test]
    fn test_format_line_shortens_target() {
        let line = format_line("moods_ui::api::mood", &format_args!("sent #{}", 3));
        assert_eq!(line, "[mood] sent #3");
    }

    #[test]
    fn test_format_line_plain_target() {
        let line = format_line("app", &format_args!("mounted"));
        assert_eq!(line, "[app] mounted");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let warn = MetadataBuilder::new().level(Level::Warn).target("x").build();
        let debug = MetadataBuilder::new().level(Level::Debug).target("x").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_off_disables_everything() {
        let logger = ConsoleLogger::new(LevelFilter::Off);
        let error = MetadataBuilder::new().level(Level::Error).target("x").build();
        assert!(!logger.enabled(&error));
    }

    #[test]
    fn test_second_init_is_rejected() {
        assert!(init(LevelFilter::Info).is_ok());
        assert!(init(LevelFilter::Debug).is_err());
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
