//! Traced warehouse wrapper.
//!
//! Renders statements and logs every one of them via tracing.

use dpctl_sql::{Stmt, render};
use tracing::Instrument;

use crate::{Error, Row, Warehouse};

/// A wrapper around a warehouse that logs all statements via tracing.
///
/// # Example
///
/// ```ignore
/// use dpctl::WarehouseExt;
///
/// let rows = client.traced().run(&Stmt::ShowCatalogs).await?;
/// ```
pub struct TracedWarehouse<'a, W: Warehouse> {
    warehouse: &'a W,
}

impl<'a, W: Warehouse> TracedWarehouse<'a, W> {
    /// Create a new traced wrapper.
    pub fn new(warehouse: &'a W) -> Self {
        Self { warehouse }
    }

    /// Render and run a statement, returning all rows.
    pub async fn run(&self, stmt: &Stmt) -> Result<Vec<Row>, Error> {
        let sql = render(stmt);
        self.execute(&sql).await
    }

    /// Run raw SQL, returning all rows.
    pub async fn execute(&self, sql: &str) -> Result<Vec<Row>, Error> {
        let span = tracing::debug_span!(
            "warehouse.execute",
            sql = %sql,
            rows = tracing::field::Empty,
        );
        let rows = self
            .warehouse
            .execute(sql)
            .instrument(span.clone())
            .await
            .inspect_err(|e| {
                let _guard = span.enter();
                tracing::debug!(error = %e, "statement failed");
            })?;
        span.record("rows", rows.len());
        span.in_scope(|| tracing::debug!("statement finished"));
        Ok(rows)
    }
}

/// Extension trait to get a traced wrapper from a warehouse.
pub trait WarehouseExt: Warehouse + Sized {
    /// Wrap this warehouse in a `TracedWarehouse` for statement logging.
    fn traced(&self) -> TracedWarehouse<'_, Self> {
        TracedWarehouse::new(self)
    }
}

impl<W: Warehouse> WarehouseExt for W {}
