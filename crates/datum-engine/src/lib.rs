//! Line emitter: reads rows, renders them as `key=value;` messages and logs
//! them through the redacting logger.

use datum_config::{Config, DatabaseSettings};
use datum_core::{LineSink, Logger, RedactingFormatter, Row, render_row};
use datum_security::{FieldRedactor, RedactError};
use datum_storage::{Database, RowSource, StorageError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum EmitError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Core(#[from] datum_core::Error),

    #[error(transparent)]
    Redaction(#[from] RedactError),
}

pub type Result<T> = std::result::Result<T, EmitError>;

/// Where the `key` half of each `key=value` pair comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnNames {
    /// Fixed names, zipped with the row values
    Fixed(Vec<String>),
    /// Names reported by the query
    FromSource,
}

pub struct Emitter<S: LineSink> {
    logger: Logger<S>,
    columns: ColumnNames,
    separator: String,
}

impl<S: LineSink> Emitter<S> {
    pub fn new(logger: Logger<S>, columns: ColumnNames, separator: impl Into<String>) -> Self {
        Self {
            logger,
            columns,
            separator: separator.into(),
        }
    }

    /// Build the logger and column list from `config`
    pub fn from_config(config: &Config, sink: S) -> Result<Self> {
        let redaction = &config.redaction;
        let redactor = FieldRedactor::new(&redaction.fields, &redaction.token, &redaction.separator)?;
        let formatter = RedactingFormatter::with_redactor(redactor, config.logger.tag.as_str());
        let logger = Logger::new(
            config.logger.name.as_str(),
            config.logger.level,
            formatter,
            sink,
        );

        Ok(Self::new(
            logger,
            ColumnNames::Fixed(config.query.columns.clone()),
            redaction.separator.as_str(),
        ))
    }

    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    pub fn logger(&self) -> &Logger<S> {
        &self.logger
    }

    pub fn into_logger(self) -> Logger<S> {
        self.logger
    }

    /// Unredacted message for `row`
    pub fn render(&self, row: &Row) -> String {
        match &self.columns {
            ColumnNames::Fixed(names) => render_row(names, &row.values, &self.separator),
            ColumnNames::FromSource => row.render(&self.separator),
        }
    }

    fn emit_row(&mut self, row: &Row) -> datum_core::Result<()> {
        let message = self.render(row);
        self.logger.info(&message)?;
        Ok(())
    }

    /// Log every row `sql` returns, then close `source`.
    ///
    /// The source is closed on every path. If both the read and the close
    /// fail, the read error is returned.
    pub async fn run<R>(&mut self, source: &mut R, sql: &str) -> Result<usize>
    where
        R: RowSource + ?Sized,
    {
        let outcome = source
            .for_each_row(sql, &mut |row| self.emit_row(&row))
            .await;
        let closed = source.close().await;

        match (outcome, closed) {
            (Ok(count), Ok(())) => {
                info!(rows = count, "rows emitted");
                Ok(count)
            }
            (Ok(_), Err(e)) => Err(e.into()),
            (Err(e), Ok(())) => Err(e.into()),
            (Err(e), Err(close_err)) => {
                warn!(error = %close_err, "close failed after read error");
                Err(e.into())
            }
        }
    }
}

/// Connect with `settings` and emit every row of `sql`.
///
/// Nothing is written if the connection cannot be opened.
pub async fn emit_from_database<S: LineSink>(
    settings: &DatabaseSettings,
    sql: &str,
    emitter: &mut Emitter<S>,
) -> Result<usize> {
    let mut db = Database::connect(settings).await?;
    emitter.run(&mut db, sql).await
}
