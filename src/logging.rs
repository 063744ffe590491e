#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable consulted for the log level.
pub const LOG_ENV: &str = "TOY_ROBOT_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // Reports go to stdout, so diagnostics stay on stderr.
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from `TOY_ROBOT_LOG`.
/// Defaults to `warn` if the variable is not set or invalid.
pub fn init_logging() {
    init_logging_with(None);
}

/// Like [`init_logging`], but an explicit `level` wins over the environment.
pub fn init_logging_with(level: Option<LevelFilter>) {
    let level = level
        .or_else(|| env::var(LOG_ENV).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
