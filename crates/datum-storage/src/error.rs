//! Error types for datum-storage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to connect: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Failed to read column value: {0}")]
    Decode(#[source] sqlx::Error),

    #[error("Failed to close connection: {0}")]
    Close(#[source] sqlx::Error),

    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedUrl(String),

    #[error("Connection already closed")]
    Closed,

    #[error(transparent)]
    Sink(#[from] datum_core::Error),
}
