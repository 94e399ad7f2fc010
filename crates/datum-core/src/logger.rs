//! Explicitly constructed logger
//!
//! A `Logger` owns its formatter and sink. There is no process-wide
//! registry: callers build one and pass it where it is needed.

use datum_security::PII_FIELDS;

use crate::{Level, LineSink, LogRecord, RedactingFormatter, Result};

pub const DEFAULT_LOGGER_NAME: &str = "user_data";

pub struct Logger<S: LineSink> {
    name: String,
    level: Level,
    formatter: RedactingFormatter,
    sink: S,
}

impl<S: LineSink> Logger<S> {
    pub fn new(
        name: impl Into<String>,
        level: Level,
        formatter: RedactingFormatter,
        sink: S,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            formatter,
            sink,
        }
    }

    /// `user_data` logger at INFO, masking the PII fields
    pub fn user_data(sink: S) -> Result<Self> {
        let formatter = RedactingFormatter::new(PII_FIELDS)?;
        Ok(Self::new(DEFAULT_LOGGER_NAME, Level::Info, formatter, sink))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Format and write `message` if `level` passes the threshold.
    /// Returns whether a line was written.
    pub fn log(&mut self, level: Level, message: &str) -> Result<bool> {
        if !self.is_enabled_for(level) {
            return Ok(false);
        }

        let record = LogRecord::new(self.name.as_str(), level, message);
        self.emit(&record)?;
        Ok(true)
    }

    /// Write a prepared record, bypassing the level check
    pub fn emit(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.formatter.format(record);
        self.sink.write_line(&line)?;
        Ok(())
    }

    pub fn debug(&mut self, message: &str) -> Result<bool> {
        self.log(Level::Debug, message)
    }

    pub fn info(&mut self, message: &str) -> Result<bool> {
        self.log(Level::Info, message)
    }

    pub fn warning(&mut self, message: &str) -> Result<bool> {
        self.log(Level::Warning, message)
    }

    pub fn error(&mut self, message: &str) -> Result<bool> {
        self.log(Level::Error, message)
    }

    pub fn critical(&mut self, message: &str) -> Result<bool> {
        self.log(Level::Critical, message)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
