//! Errors raised while loading raw properties or writing generated output
//!
//! Generation itself cannot fail; only the plumbing around it can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfabError {
    #[error("failed to load raw configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("failed to serialize agent configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize raw configuration: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
