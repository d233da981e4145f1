//! Error types for object encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding STIX objects.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The document is not valid JSON or does not match the object's shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document has no `type` property.
    #[error("object has no type property")]
    MissingType,

    /// The `type` property names an object this crate does not model.
    #[error("unsupported object type: {0}")]
    UnsupportedType(String),

    /// The `id` prefix names a different object type than `type`.
    #[error("id {id} does not belong to a {object_type} object")]
    IdTypeMismatch { object_type: String, id: String },
}

/// Convenience type alias for object operations.
pub type Result<T> = std::result::Result<T, ObjectError>;
