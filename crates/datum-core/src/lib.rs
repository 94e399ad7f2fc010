//! Core logging model for datum
//!
//! This crate contains:
//! - Log records and levels
//! - The redacting formatter and line sinks
//! - An explicitly constructed logger (no global registry)
//! - Row-to-message rendering

pub mod error;
pub mod format;
pub mod logger;
pub mod record;
pub mod row;
pub mod sink;

pub use error::{Error, Result};
pub use format::{DEFAULT_TAG, RedactingFormatter};
pub use logger::{DEFAULT_LOGGER_NAME, Logger};
pub use record::{Level, LogRecord};
pub use row::{NULL_TEXT, Row, USER_COLUMNS, render_row};
pub use sink::{LineSink, MemorySink, WriterSink};
