//! Lifecycle stage in `catalog-info.yaml`.
//!
//! The document is parsed, `spec.lifecycle` is set, and the whole document
//! is written back. Keys keep their order; an existing `lifecycle` key
//! keeps its position and a new one goes last.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::Error;

/// Default path of the metadata file.
pub const CATALOG_INFO_FILE: &str = "catalog-info.yaml";

/// Set `spec.lifecycle` in the file at `path` and rewrite it.
///
/// The file is left untouched on any error.
pub fn update_lifecycle(path: &Path, value: &str) -> Result<(), Error> {
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }

    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = std::fs::read_to_string(path).map_err(io_error)?;
    let mut document: Value = serde_yaml::from_str(&content)?;
    set_lifecycle(&mut document, value)?;
    let updated = serde_yaml::to_string(&document)?;
    std::fs::write(path, updated).map_err(io_error)?;

    tracing::debug!(path = %path.display(), lifecycle = value, "lifecycle updated");
    Ok(())
}

/// Set `spec.lifecycle` in a parsed document, creating `spec` when it is
/// absent or null.
pub fn set_lifecycle(document: &mut Value, value: &str) -> Result<(), Error> {
    let root = document
        .as_mapping_mut()
        .ok_or(Error::NotAMapping("document root"))?;

    let spec = root
        .entry(Value::String("spec".to_string()))
        .or_insert(Value::Null);
    if spec.is_null() {
        *spec = Value::Mapping(Mapping::new());
    }

    let spec = spec.as_mapping_mut().ok_or(Error::NotAMapping("spec"))?;
    spec.insert(
        Value::String("lifecycle".to_string()),
        Value::String(value.to_string()),
    );
    Ok(())
}
