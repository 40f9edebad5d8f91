//! Schema lifecycle tooling for data products on Databricks SQL warehouses.
//!
//! This crate provides:
//! - Catalog/schema naming for unity and hive metastores
//! - Existence checks over any [`Warehouse`]
//! - Idempotent provisioning and cascading deletion of a product's schema
//! - Rewriting the lifecycle stage in `catalog-info.yaml`
//!
//! # Naming
//!
//! Given `platform: p`, `domain: d`, `name: my-prod` in the `dev`
//! environment, a unity metastore gets catalog `p_d_dev` and schema
//! `p_d_dev.my_prod`; a hive metastore gets schema `p_d_my_prod`.
//!
//! # Example
//!
//! ```ignore
//! let ctx = RunContext::resolve(|k| std::env::var(k).ok(), path, descriptor)?;
//! let client = StatementClient::new(&ctx.environment, token)?;
//! let report = provision(&client, &ctx.product, &ctx.target).await?;
//! ```

mod context;
mod delete;
mod error;
mod exists;
pub mod lifecycle;
mod naming;
mod provision;
mod statement_api;
mod traced;
mod warehouse;

pub use context::RunContext;
pub use delete::{DeleteOutcome, delete};
pub use error::Error;
pub use exists::{catalog_exists, schema_exists};
pub use lifecycle::{CATALOG_INFO_FILE, update_lifecycle};
pub use naming::Target;
pub use provision::{ProvisionReport, create_schema_stmt, provision};
pub use statement_api::StatementClient;
pub use traced::{TracedWarehouse, WarehouseExt};
pub use warehouse::{Row, Warehouse};

pub use dpctl_sql::{SchemaRef, Stmt};

// Re-export config types for convenience
pub use dpctl_config::{
    ConfigError, DESCRIPTOR_FILE, DataProduct, ENVIRONMENTS_FILE, Environment, Environments,
    Invocation, MetastoreType, access_token,
};
