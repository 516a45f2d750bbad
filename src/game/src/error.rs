use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Agent(#[from] agent::Error),

    #[error("failed to read config {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
