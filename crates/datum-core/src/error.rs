use datum_security::RedactError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redaction error: {0}")]
    Redaction(#[from] RedactError),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
