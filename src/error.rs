use std::path::PathBuf;

use thiserror::Error;

pub type FlagsResult<T> = Result<T, FlagsError>;

#[derive(Debug, Error)]
pub enum FlagsError {
    #[error("invalid sweep config: {0}")]
    InvalidConfig(String),

    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("invalid successor table: {0}")]
    InvalidTable(String),

    #[error("i/o failure on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
