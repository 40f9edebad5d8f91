use std::path::PathBuf;

use dpctl_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("warehouse API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("statement {state}: {message}")]
    Statement { state: String, message: String },

    #[error("failed to decode warehouse response: {0}")]
    Decode(String),

    #[error("{} not found", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0} is not a mapping")]
    NotAMapping(&'static str),
}
