//! Error types for loading and dispatching documents.
//!
//! Field-level mapping never fails; these errors only arise before mapping
//! starts, when a document cannot be parsed or routed.

use thiserror::Error;

/// Errors raised while preparing a document for mapping.
#[derive(Debug, Error)]
pub enum MapError {
    /// The document is not valid JSON.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root is not a JSON object.
    #[error("{entity} document must be a JSON object")]
    NotAnObject { entity: &'static str },

    /// The requested entity kind is not one the mapper knows.
    #[error("unknown entity kind: {0}")]
    UnknownEntity(String),
}

/// Convenience alias for mapper results.
pub type MapResult<T> = std::result::Result<T, MapError>;
