use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown script identifier: {0}")]
    UnknownScript(String),
}

pub type Result<T> = std::result::Result<T, Error>;
