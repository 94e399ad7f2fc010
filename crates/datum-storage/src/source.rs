//! Row source trait

use async_trait::async_trait;
use datum_core::Row;

use crate::Result;

/// Per-row consumer. An error stops iteration.
pub type RowCallback<'a> = dyn FnMut(Row) -> datum_core::Result<()> + Send + 'a;

/// Something that yields table rows in a stable column order
#[async_trait]
pub trait RowSource: Send {
    /// Run `sql` and hand every row to `on_row`, in order.
    /// Returns the number of rows consumed.
    async fn for_each_row(&mut self, sql: &str, on_row: &mut RowCallback<'_>) -> Result<usize>;

    /// Release the underlying resource. Calling it twice is a no-op.
    async fn close(&mut self) -> Result<()>;
}
