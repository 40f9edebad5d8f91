//! Existence checks.
//!
//! Both checks list everything and scan for an exact match of the first
//! column. Result sets are small; there is no pagination.

use dpctl_config::MetastoreType;
use dpctl_sql::Stmt;

use crate::warehouse::first_column;
use crate::{Error, Warehouse, WarehouseExt};

/// Whether a catalog named `catalog` exists.
pub async fn catalog_exists<W: Warehouse>(warehouse: &W, catalog: &str) -> Result<bool, Error> {
    let rows = warehouse.traced().run(&Stmt::ShowCatalogs).await?;
    Ok(rows.iter().any(|row| first_column(row) == Some(catalog)))
}

/// Whether a schema named `schema` exists.
///
/// Unity metastores list the schemas of `catalog`; hive metastores list
/// every schema and ignore `catalog`.
pub async fn schema_exists<W: Warehouse>(
    warehouse: &W,
    catalog: &str,
    schema: &str,
    metastore: MetastoreType,
) -> Result<bool, Error> {
    let stmt = match metastore {
        MetastoreType::Unity => Stmt::ShowSchemas {
            catalog: Some(catalog.to_string()),
        },
        MetastoreType::Hive => Stmt::ShowSchemas { catalog: None },
    };
    let rows = warehouse.traced().run(&stmt).await?;
    Ok(rows.iter().any(|row| first_column(row) == Some(schema)))
}
