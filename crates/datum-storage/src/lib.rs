//! Row sources for datum
//!
//! This crate provides:
//! - The `RowSource` trait the emitter reads from
//! - A sqlx-backed `Database` (MySQL, SQLite) reading every value as text

pub mod db;
pub mod error;
pub mod source;

pub use db::Database;
pub use error::{Result, StorageError};
pub use source::{RowCallback, RowSource};
