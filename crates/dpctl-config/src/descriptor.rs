//! The data product descriptor (`dataproduct.yaml`).

use std::path::Path;

use facet::Facet;

use crate::{ConfigError, parse_error, read};

/// Static metadata identifying a data product.
///
/// `platform`, `domain` and `name` derive the catalog and schema names;
/// `owner` and `description` are attached to the schema.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
pub struct DataProduct {
    pub platform: String,
    pub domain: String,
    pub name: String,
    pub owner: String,
    pub description: String,
}

impl DataProduct {
    /// Load from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        facet_yaml::from_str::<DataProduct>(&content).map_err(|e| parse_error(path, e))
    }
}
