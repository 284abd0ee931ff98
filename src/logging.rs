#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "TICTACTOE_LOG";

/// Pick the level: explicit override, then `TICTACTOE_LOG`, then `warn`.
pub fn resolve_level(override_level: Option<LevelFilter>) -> LevelFilter {
    override_level
        .or_else(|| env::var(LOG_ENV).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Records never reach stdout, which carries
/// only the game itself.
pub fn init_logging(override_level: Option<LevelFilter>) {
    let level = resolve_level(override_level);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
