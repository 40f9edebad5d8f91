//! Values supplied by the CI runner through environment variables.

use secrecy::Secret;

use crate::ConfigError;

/// Branches a run may be started from.
pub const ALLOWED_BRANCHES: [&str; 3] = ["main", "dev", "test"];

const BRANCH_VAR: &str = "GITHUB_REF_NAME";
const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
const TOKEN_VAR: &str = "DATABRICKS_TOKEN";
const DEFAULT_NAME: &str = "dev";

/// Branch and environment a run was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub branch: String,
    pub environment: String,
}

impl Invocation {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through a variable lookup. Both values default to `dev`;
    /// the branch must be one of [`ALLOWED_BRANCHES`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let branch = lookup(BRANCH_VAR).unwrap_or_else(|| DEFAULT_NAME.to_string());
        let environment = lookup(ENVIRONMENT_VAR).unwrap_or_else(|| DEFAULT_NAME.to_string());

        if !ALLOWED_BRANCHES.contains(&branch.as_str()) {
            return Err(ConfigError::UnsupportedBranch(branch));
        }

        Ok(Self {
            branch,
            environment,
        })
    }
}

/// Read the warehouse access token. An empty value counts as unset.
pub fn access_token(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Secret<String>, ConfigError> {
    match lookup(TOKEN_VAR) {
        Some(token) if !token.is_empty() => Ok(Secret::new(token)),
        _ => Err(ConfigError::MissingToken),
    }
}
