//! Catalog and schema names derived from a data product.
//!
//! Unity metastores get one catalog per platform, domain and environment:
//! `{platform}_{domain}_{environment}`, holding a schema named after the
//! product. Hive metastores have no catalogs, so the whole triple goes into
//! the schema name: `{platform}_{domain}_{name}`. Dashes become underscores
//! in schema names.

use dpctl_config::{DataProduct, Environment, MetastoreType};
use dpctl_sql::SchemaRef;

/// Where a data product lives in a warehouse.
///
/// Only built by [`Target::new`], so unity targets always carry a catalog and
/// hive targets never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    metastore: MetastoreType,
    schema: SchemaRef,
}

impl Target {
    /// Derive the target for a product in a named environment.
    pub fn new(product: &DataProduct, environment: &str, metastore: MetastoreType) -> Self {
        let schema = match metastore {
            MetastoreType::Unity => {
                let catalog = format!("{}_{}_{}", product.platform, product.domain, environment);
                SchemaRef::qualified(catalog, product.name.replace('-', "_"))
            }
            MetastoreType::Hive => SchemaRef::flat(
                format!("{}_{}_{}", product.platform, product.domain, product.name)
                    .replace('-', "_"),
            ),
        };
        Self { metastore, schema }
    }

    /// Derive the target for a product in a resolved environment.
    pub fn for_environment(product: &DataProduct, environment: &Environment) -> Self {
        Self::new(product, &environment.name, environment.metastore)
    }

    pub fn metastore(&self) -> MetastoreType {
        self.metastore
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// The catalog, for two-level metastores.
    pub fn catalog(&self) -> Option<&str> {
        self.schema.catalog.as_deref()
    }
}
