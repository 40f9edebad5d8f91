//! Configuration types for dpctl.
//!
//! Three inputs decide what a run touches:
//! - process environment variables (`GITHUB_REF_NAME`, `ENVIRONMENT`, `DATABRICKS_TOKEN`)
//! - `environments.yaml`, mapping environment names to warehouse settings
//! - `dataproduct.yaml`, the data product descriptor
//!
//! Everything here is resolved before any network I/O happens.

mod descriptor;
mod environment;
mod invocation;

pub use descriptor::DataProduct;
pub use environment::{Environment, EnvironmentSettings, Environments, MetastoreType};
pub use invocation::{ALLOWED_BRANCHES, Invocation, access_token};

use std::path::{Path, PathBuf};

/// Default path of the environment settings file.
pub const ENVIRONMENTS_FILE: &str = "environments.yaml";

/// Default path of the data product descriptor.
pub const DESCRIPTOR_FILE: &str = "dataproduct.yaml";

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported branch: {0}")]
    UnsupportedBranch(String),

    #[error("environment `{0}` is not declared in environments.yaml")]
    UnknownEnvironment(String),

    #[error("DATABRICKS_TOKEN not set")]
    MissingToken,

    #[error("unsupported metastore_type: {0}")]
    UnsupportedMetastore(String),

    #[error("unsupported databricks_endpoint `{0}`: expected /sql/1.0/warehouses/<id>")]
    UnsupportedEndpoint(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Read a config file to a string, attributing failures to the path.
pub(crate) fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_error(path: &Path, message: impl ToString) -> ConfigError {
    ConfigError::Parse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
