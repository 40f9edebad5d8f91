//! Schema provisioning.

use dpctl_config::DataProduct;
use dpctl_sql::{CreateSchemaStmt, Stmt};
use tracing::info;

use crate::{Error, Target, Warehouse, WarehouseExt, catalog_exists};

/// What a provisioning run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub target: Target,

    /// The catalog did not exist and was created by this run.
    pub created_catalog: bool,
}

/// Ensure the product's schema (and, on unity, its catalog) exists.
///
/// Only unity targets carry a catalog.
///
/// Nothing is rolled back: if the schema statement fails after the catalog
/// was created, the catalog stays.
pub async fn provision<W: Warehouse>(
    warehouse: &W,
    product: &DataProduct,
    target: &Target,
) -> Result<ProvisionReport, Error> {
    let mut created_catalog = false;

    if let Some(catalog) = target.catalog() {
        if !catalog_exists(warehouse, catalog).await? {
            info!(catalog, "catalog does not exist, creating");
            warehouse
                .traced()
                .run(&Stmt::CreateCatalog {
                    catalog: catalog.to_string(),
                })
                .await?;
            created_catalog = true;
        }
    }

    info!(schema = %target.schema(), "creating schema");
    warehouse
        .traced()
        .run(&create_schema_stmt(product, target))
        .await?;

    Ok(ProvisionReport {
        target: target.clone(),
        created_catalog,
    })
}

/// The schema statement: the description as comment, ownership as properties.
pub fn create_schema_stmt(product: &DataProduct, target: &Target) -> Stmt {
    CreateSchemaStmt::new(target.schema().clone())
        .comment(&product.description)
        .property("dataproduct_owner", &product.owner)
        .property("dataproduct_name", &product.name)
        .property("platform", &product.platform)
        .property("domain", &product.domain)
        .into()
}
