//! SQL statements.

use std::fmt;

use crate::{Ident, Lit, SchemaRef};

/// A statement dpctl sends to a warehouse.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `SHOW CATALOGS`
    ShowCatalogs,

    /// `SHOW SCHEMAS`, optionally scoped to a catalog.
    ShowSchemas { catalog: Option<String> },

    /// `CREATE CATALOG IF NOT EXISTS`
    CreateCatalog { catalog: String },

    /// `CREATE SCHEMA IF NOT EXISTS ... COMMENT ... WITH DBPROPERTIES (...)`
    CreateSchema(CreateSchemaStmt),

    /// `DROP SCHEMA IF EXISTS ... [CASCADE]`
    DropSchema { schema: SchemaRef, cascade: bool },
}

/// A CREATE SCHEMA statement.
#[derive(Debug, Clone)]
pub struct CreateSchemaStmt {
    pub schema: SchemaRef,
    pub comment: Option<String>,
    pub properties: Vec<(String, String)>,
}

impl CreateSchemaStmt {
    pub fn new(schema: SchemaRef) -> Self {
        Self {
            schema,
            comment: None,
            properties: Vec::new(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }
}

impl From<CreateSchemaStmt> for Stmt {
    fn from(stmt: CreateSchemaStmt) -> Self {
        Stmt::CreateSchema(stmt)
    }
}

/// Render a statement to SQL text.
pub fn render(stmt: &Stmt) -> String {
    stmt.to_string()
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::ShowCatalogs => write!(f, "SHOW CATALOGS"),
            Stmt::ShowSchemas { catalog: None } => write!(f, "SHOW SCHEMAS"),
            Stmt::ShowSchemas {
                catalog: Some(catalog),
            } => write!(f, "SHOW SCHEMAS IN {}", Ident(catalog)),
            Stmt::CreateCatalog { catalog } => {
                write!(f, "CREATE CATALOG IF NOT EXISTS {}", Ident(catalog))
            }
            Stmt::CreateSchema(stmt) => stmt.fmt(f),
            Stmt::DropSchema { schema, cascade } => {
                write!(f, "DROP SCHEMA IF EXISTS {}", schema.quoted())?;
                if *cascade {
                    write!(f, " CASCADE")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for CreateSchemaStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE SCHEMA IF NOT EXISTS {}", self.schema.quoted())?;
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", Lit(comment))?;
        }
        if !self.properties.is_empty() {
            write!(f, " WITH DBPROPERTIES (")?;
            for (i, (key, value)) in self.properties.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} = {}", Lit(key), Lit(value))?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
