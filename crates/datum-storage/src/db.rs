//! sqlx-backed row source

use async_trait::async_trait;
use datum_config::DatabaseSettings;
use datum_core::Row;
use futures_util::TryStreamExt;
use futures_util::stream::BoxStream;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::sqlite::SqliteConnection;
use sqlx::{Column, ColumnIndex, Connection, Decode, Executor};
use tracing::{debug, info, warn};

use crate::source::{RowCallback, RowSource};
use crate::{Result, StorageError};

enum Backend {
    MySql(MySqlConnection),
    Sqlite(SqliteConnection),
}

/// A single open database connection
pub struct Database {
    backend: Option<Backend>,
}

impl Database {
    /// Connect using `DATABASE_URL` if set, otherwise MySQL with the
    /// host/user/password/database settings.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        if let Some(url) = settings.url.as_deref() {
            return Self::connect_url(url).await;
        }

        let options = MySqlConnectOptions::new()
            .host(&settings.host)
            .username(&settings.username)
            .password(&settings.password)
            .database(&settings.database);

        let conn = MySqlConnection::connect_with(&options)
            .await
            .map_err(StorageError::Connection)?;

        info!(host = %settings.host, database = %settings.database, "connected to MySQL");

        Ok(Self {
            backend: Some(Backend::MySql(conn)),
        })
    }

    /// Connect by URL. Supports `mysql://`, `mariadb://` and `sqlite:`.
    pub async fn connect_url(url: &str) -> Result<Self> {
        let scheme = url.split(':').next().unwrap_or_default();

        let backend = match scheme {
            "mysql" | "mariadb" => Backend::MySql(
                MySqlConnection::connect(url)
                    .await
                    .map_err(StorageError::Connection)?,
            ),
            "sqlite" => Backend::Sqlite(
                SqliteConnection::connect(url)
                    .await
                    .map_err(StorageError::Connection)?,
            ),
            other => return Err(StorageError::UnsupportedUrl(other.to_string())),
        };

        info!(scheme, "connected");

        Ok(Self {
            backend: Some(backend),
        })
    }

    pub fn is_open(&self) -> bool {
        self.backend.is_some()
    }
}

#[async_trait]
impl RowSource for Database {
    async fn for_each_row(&mut self, sql: &str, on_row: &mut RowCallback<'_>) -> Result<usize> {
        let count = match self.backend.as_mut().ok_or(StorageError::Closed)? {
            Backend::MySql(conn) => drain(conn.fetch(sql), on_row).await?,
            Backend::Sqlite(conn) => drain(conn.fetch(sql), on_row).await?,
        };

        debug!(rows = count, "query finished");
        Ok(count)
    }

    async fn close(&mut self) -> Result<()> {
        let result = match self.backend.take() {
            Some(Backend::MySql(conn)) => conn.close().await,
            Some(Backend::Sqlite(conn)) => conn.close().await,
            None => return Ok(()),
        };

        result.map_err(|e| {
            warn!(error = %e, "error while closing connection");
            StorageError::Close(e)
        })
    }
}

async fn drain<R>(
    mut rows: BoxStream<'_, std::result::Result<R, sqlx::Error>>,
    on_row: &mut RowCallback<'_>,
) -> Result<usize>
where
    R: sqlx::Row,
    usize: ColumnIndex<R>,
    for<'r> Option<String>: Decode<'r, R::Database>,
{
    let mut count = 0;
    while let Some(row) = rows.try_next().await.map_err(StorageError::Query)? {
        on_row(decode_row(&row)?)?;
        count += 1;
    }
    Ok(count)
}

/// Read every column as text.
///
/// Queries without bind arguments run over the text protocol, so numbers
/// and dates arrive as their textual form.
fn decode_row<R>(row: &R) -> Result<Row>
where
    R: sqlx::Row,
    usize: ColumnIndex<R>,
    for<'r> Option<String>: Decode<'r, R::Database>,
{
    let columns = row
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    let values = (0..row.len())
        .map(|i| row.try_get_unchecked::<Option<String>, _>(i))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(StorageError::Decode)?;

    Ok(Row::new(columns, values))
}
