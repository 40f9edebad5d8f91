//! Schema deletion.

use std::fmt;

use dpctl_config::MetastoreType;
use dpctl_sql::{SchemaRef, Stmt};
use tracing::info;

use crate::{Error, Target, Warehouse, WarehouseExt, catalog_exists, schema_exists};

/// What a delete run found and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The catalog does not exist; nothing was deleted.
    CatalogMissing(String),

    /// The schema does not exist; nothing was deleted.
    SchemaMissing(SchemaRef),

    /// The schema and everything in it was dropped.
    Dropped(SchemaRef),
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::CatalogMissing(catalog) => {
                write!(f, "Catalog '{catalog}' does not exist. Nothing to delete.")
            }
            DeleteOutcome::SchemaMissing(schema) => {
                write!(f, "Schema '{schema}' does not exist. Nothing to delete.")
            }
            DeleteOutcome::Dropped(schema) => write!(f, "Schema '{schema}' deleted."),
        }
    }
}

/// Drop the product's schema with `CASCADE`, if it exists.
///
/// Irreversible: every table and view in the schema goes with it. The
/// catalog itself is left in place.
pub async fn delete<W: Warehouse>(warehouse: &W, target: &Target) -> Result<DeleteOutcome, Error> {
    let schema = target.schema();

    let exists = match target.catalog() {
        Some(catalog) => {
            if !catalog_exists(warehouse, catalog).await? {
                return Ok(DeleteOutcome::CatalogMissing(catalog.to_string()));
            }
            schema_exists(warehouse, catalog, &schema.schema, MetastoreType::Unity).await?
        }
        None => schema_exists(warehouse, "", &schema.schema, MetastoreType::Hive).await?,
    };

    if !exists {
        return Ok(DeleteOutcome::SchemaMissing(schema.clone()));
    }

    info!(schema = %schema, "dropping schema");
    warehouse
        .traced()
        .run(&Stmt::DropSchema {
            schema: schema.clone(),
            cascade: true,
        })
        .await?;

    Ok(DeleteOutcome::Dropped(schema.clone()))
}
