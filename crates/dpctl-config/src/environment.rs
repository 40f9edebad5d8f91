//! Per-environment warehouse settings (`environments.yaml`).

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use facet::Facet;

use crate::{ConfigError, parse_error, read};

/// Contents of `environments.yaml`.
///
/// ```yaml
/// environments:
///   dev:
///     databricks_host: adb-123.azuredatabricks.net
///     databricks_endpoint: /sql/1.0/warehouses/abc123
///     metastore_type: unity
/// ```
#[derive(Facet, Debug, Clone)]
pub struct Environments {
    pub environments: HashMap<String, EnvironmentSettings>,
}

/// Settings for one environment, as written in the file.
#[derive(Facet, Debug, Clone)]
pub struct EnvironmentSettings {
    /// Workspace host, with or without a scheme.
    pub databricks_host: String,

    /// HTTP path of the SQL warehouse.
    pub databricks_endpoint: String,

    /// `unity` or `hive`; `unity` when omitted.
    #[facet(default)]
    pub metastore_type: Option<String>,
}

impl Environments {
    /// Load from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        facet_yaml::from_str::<Environments>(&content).map_err(|e| parse_error(path, e))
    }

    /// Select the settings of a declared environment and validate them.
    pub fn select(&self, name: &str) -> Result<Environment, ConfigError> {
        let settings = self
            .environments
            .get(name)
            .ok_or_else(|| ConfigError::UnknownEnvironment(name.to_string()))?;

        let metastore = match settings.metastore_type.as_deref() {
            None => MetastoreType::default(),
            Some(value) => value.parse()?,
        };

        Ok(Environment {
            name: name.to_string(),
            host: settings.databricks_host.clone(),
            endpoint: settings.databricks_endpoint.clone(),
            metastore,
        })
    }
}

/// A resolved environment: the one record a run works against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    pub host: String,
    pub endpoint: String,
    pub metastore: MetastoreType,
}

impl Environment {
    /// Base URL of the workspace API.
    ///
    /// Hosts are usually written without a scheme; those get `https://`.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }

    /// Warehouse id, taken from an endpoint of the form `/sql/1.0/warehouses/<id>`.
    pub fn warehouse_id(&self) -> Result<&str, ConfigError> {
        let unsupported = || ConfigError::UnsupportedEndpoint(self.endpoint.clone());

        let path = self.endpoint.trim_end_matches('/');
        let (prefix, id) = path.rsplit_once('/').ok_or_else(unsupported)?;
        if !prefix.ends_with("/warehouses") || id.is_empty() {
            return Err(unsupported());
        }
        Ok(id)
    }
}

/// Metastore flavor of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetastoreType {
    /// Two-level `catalog.schema` namespace.
    #[default]
    Unity,

    /// Flat schema namespace, no catalogs.
    Hive,
}

impl MetastoreType {
    pub fn as_str(self) -> &'static str {
        match self {
            MetastoreType::Unity => "unity",
            MetastoreType::Hive => "hive",
        }
    }
}

impl FromStr for MetastoreType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unity" => Ok(MetastoreType::Unity),
            "hive" => Ok(MetastoreType::Hive),
            other => Err(ConfigError::UnsupportedMetastore(other.to_string())),
        }
    }
}

impl fmt::Display for MetastoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
