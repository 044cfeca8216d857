//! Console logger for host runs.
//!
//! Implements [`log::Log`] with the board's system-log line format,
//! `[HH:MM:SS] [LEVEL] message`, stamped with uptime since the
//! logger was installed. Lines go to stderr so stdout stays free for
//! JSON output.

use std::io::Write;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::diagnostics::format_uptime;

pub struct ConsoleLogger {
    start: Instant,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            start: Instant::now(),
            level,
        }
    }

    /// Install as the global logger.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    fn tag(level: Level) -> &'static str {
        match level {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
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
        let stamp = format_uptime(self.start.elapsed().as_secs());
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "[{}] [{}] {}",
            stamp,
            Self::tag(record.level()),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
