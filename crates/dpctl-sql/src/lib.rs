//! Databricks SQL rendering.
//!
//! Build a [`Stmt`], then render it to a string. Identifiers are always
//! backtick-quoted and string literals always escaped, so nothing taken
//! from a descriptor file ends up in a statement verbatim.

mod stmt;
pub use stmt::*;


use std::fmt;

/// A Databricks string literal wrapper.
///
/// Display writes the value single-quoted, with `\` and `'` escaped by a
/// backslash. Spark SQL concatenates adjacent literals, so doubling the
/// quote (`''`) would not escape it.
///
/// # Example
/// ```
/// use dpctl_sql::Lit;
/// assert_eq!(format!("{}", Lit("foo")), "'foo'");
/// assert_eq!(format!("{}", Lit("it's")), r"'it\'s'");
/// ```
pub struct Lit<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> fmt::Display for Lit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'")?;
        for c in self.0.as_ref().chars() {
            match c {
                '\'' => write!(f, "\\'")?,
                '\\' => write!(f, "\\\\")?,
                _ => write!(f, "{}", c)?,
            }
        }
        write!(f, "'")
    }
}

/// A Databricks identifier wrapper.
///
/// Display writes the value quoted with backticks, doubling embedded ones.
///
/// # Example
/// ```
/// use dpctl_sql::Ident;
/// assert_eq!(format!("{}", Ident("sales")), "`sales`");
/// assert_eq!(format!("{}", Ident("a`b")), "`a``b`");
/// ```
pub struct Ident<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> fmt::Display for Ident<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`")?;
        for c in self.0.as_ref().chars() {
            if c == '`' {
                write!(f, "``")?;
            } else {
                write!(f, "{}", c)?;
            }
        }
        write!(f, "`")
    }
}

/// Escape a string literal for SQL.
pub fn escape_string(s: &str) -> String {
    format!("{}", Lit(s))
}

/// Quote an identifier.
pub fn quote_ident(name: &str) -> String {
    format!("{}", Ident(name))
}

/// A schema name, optionally qualified by its catalog.
///
/// Display writes the plain dotted form (`catalog.schema`), which is also
/// how the name is reported to operators. Use [`SchemaRef::quoted`] inside
/// statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRef {
    pub catalog: Option<String>,
    pub schema: String,
}

impl SchemaRef {
    /// A schema in a two-level namespace.
    pub fn qualified(catalog: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            catalog: Some(catalog.into()),
            schema: schema.into(),
        }
    }

    /// A schema in a flat namespace.
    pub fn flat(schema: impl Into<String>) -> Self {
        Self {
            catalog: None,
            schema: schema.into(),
        }
    }

    /// Quoted form for use in statements.
    pub fn quoted(&self) -> String {
        match &self.catalog {
            Some(catalog) => format!("{}.{}", Ident(catalog), Ident(&self.schema)),
            None => quote_ident(&self.schema),
        }
    }
}

impl fmt::Display for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.catalog {
            Some(catalog) => write!(f, "{}.{}", catalog, self.schema),
            None => write!(f, "{}", self.schema),
        }
    }
}
