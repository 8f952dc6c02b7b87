use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Name lookup failed: {0}")]
    NamingLookupFailed(String),

    #[error("Persistence failed: {0}")]
    PersistenceFailed(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),
}
