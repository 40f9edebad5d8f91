//! The query-executor capability operations run against.

use std::future::Future;
use std::pin::Pin;

use crate::Error;

/// One result row. Values arrive as strings; SQL `NULL` is `None`.
pub type Row = Vec<Option<String>>;

/// Something that can run a SQL statement and hand back its rows.
///
/// Implemented by [`crate::StatementClient`] for real warehouses. Existence
/// checks and schema operations only depend on this trait.
pub trait Warehouse: Send + Sync {
    /// Run a statement to completion, returning all rows.
    fn execute<'a>(
        &'a self,
        sql: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Row>, Error>> + Send + 'a>>;
}

/// The first column of a row, if present and not null.
pub(crate) fn first_column(row: &Row) -> Option<&str> {
    row.first().and_then(|value| value.as_deref())
}
