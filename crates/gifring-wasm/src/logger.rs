//! Routes `log` facade output to the browser console.

use log::{Level, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => web_sys::console::error_1(&message.into()),
            Level::Warn => web_sys::console::warn_1(&message.into()),
            _ => web_sys::console::log_1(&message.into()),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once; later calls are
/// ignored because a logger is already set.
pub fn init_console_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}
