//! In-memory warehouse for exercising schema operations.
//!
//! Understands exactly the statements dpctl renders. Identifiers are taken
//! from backtick-quoted segments, so names with backticks are not supported.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use dpctl::{Error, Row, Warehouse};

#[derive(Default)]
struct State {
    catalogs: Vec<String>,
    /// Schemas keyed by catalog; `None` is the flat hive namespace.
    schemas: HashMap<Option<String>, Vec<String>>,
    log: Vec<String>,
    fail_prefix: Option<String>,
}

#[derive(Default)]
pub struct FakeWarehouse {
    state: Mutex<State>,
}

impl FakeWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(self, catalog: &str) -> Self {
        self.state.lock().unwrap().catalogs.push(catalog.to_string());
        self
    }

    pub fn with_schema(self, catalog: Option<&str>, schema: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .schemas
            .entry(catalog.map(str::to_string))
            .or_default()
            .push(schema.to_string());
        self
    }

    /// Fail every statement starting with `prefix`.
    pub fn failing_on(self, prefix: &str) -> Self {
        self.state.lock().unwrap().fail_prefix = Some(prefix.to_string());
        self
    }

    /// Every statement received, in order.
    pub fn statements(&self) -> Vec<String> {
        self.state.lock().unwrap().log.clone()
    }

    /// Statements other than `SHOW ...`.
    pub fn ddl(&self) -> Vec<String> {
        self.statements()
            .into_iter()
            .filter(|s| !s.starts_with("SHOW"))
            .collect()
    }

    pub fn has_catalog(&self, catalog: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .catalogs
            .iter()
            .any(|c| c == catalog)
    }

    pub fn has_schema(&self, catalog: Option<&str>, schema: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .schemas
            .get(&catalog.map(str::to_string))
            .is_some_and(|schemas| schemas.iter().any(|s| s == schema))
    }

    fn apply(&self, sql: &str) -> Result<Vec<Row>, Error> {
        let mut state = self.state.lock().unwrap();
        state.log.push(sql.to_string());

        if let Some(prefix) = &state.fail_prefix {
            if sql.starts_with(prefix.as_str()) {
                return Err(failed("injected failure"));
            }
        }

        if sql == "SHOW CATALOGS" {
            return Ok(rows(&state.catalogs));
        }
        if let Some(rest) = sql.strip_prefix("SHOW SCHEMAS IN ") {
            let catalog = idents(rest).remove(0);
            if !state.catalogs.contains(&catalog) {
                return Err(failed("[NO_SUCH_CATALOG_EXCEPTION]"));
            }
            let schemas = state.schemas.get(&Some(catalog)).cloned().unwrap_or_default();
            return Ok(rows(&schemas));
        }
        if sql == "SHOW SCHEMAS" {
            let schemas = state.schemas.get(&None).cloned().unwrap_or_default();
            return Ok(rows(&schemas));
        }
        if let Some(rest) = sql.strip_prefix("CREATE CATALOG IF NOT EXISTS ") {
            let catalog = idents(rest).remove(0);
            if !state.catalogs.contains(&catalog) {
                state.catalogs.push(catalog);
            }
            return Ok(Vec::new());
        }
        if let Some(rest) = sql.strip_prefix("CREATE SCHEMA IF NOT EXISTS ") {
            let name = rest.split(" COMMENT ").next().unwrap_or(rest);
            let (catalog, schema) = split_name(idents(name));
            if let Some(catalog) = &catalog {
                if !state.catalogs.contains(catalog) {
                    return Err(failed("[NO_SUCH_CATALOG_EXCEPTION]"));
                }
            }
            let schemas = state.schemas.entry(catalog).or_default();
            if !schemas.contains(&schema) {
                schemas.push(schema);
            }
            return Ok(Vec::new());
        }
        if let Some(rest) = sql.strip_prefix("DROP SCHEMA IF EXISTS ") {
            let (catalog, schema) = split_name(idents(rest.trim_end_matches(" CASCADE")));
            if let Some(schemas) = state.schemas.get_mut(&catalog) {
                schemas.retain(|s| s != &schema);
            }
            return Ok(Vec::new());
        }

        Err(failed("unsupported statement"))
    }
}

impl Warehouse for FakeWarehouse {
    fn execute<'a>(
        &'a self,
        sql: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Row>, Error>> + Send + 'a>> {
        let result = self.apply(sql);
        Box::pin(async move { result })
    }
}

fn failed(message: &str) -> Error {
    Error::Statement {
        state: "FAILED".to_string(),
        message: message.to_string(),
    }
}

fn rows(names: &[String]) -> Vec<Row> {
    names.iter().map(|n| vec![Some(n.clone())]).collect()
}

/// The backtick-quoted segments of `sql`.
fn idents(sql: &str) -> Vec<String> {
    sql.split('`')
        .skip(1)
        .step_by(2)
        .map(str::to_string)
        .collect()
}

fn split_name(mut parts: Vec<String>) -> (Option<String>, String) {
    let schema = parts.pop().unwrap();
    (parts.pop(), schema)
}
