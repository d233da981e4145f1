//! Error types for resource operations.

use thiserror::Error;

/// Errors that can occur while loading or encoding resources.
///
/// Registry mutations themselves never fail; errors only arise at the
/// configuration and serialization boundary.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The registry configuration could not be parsed.
    #[error("invalid registry config: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON encoding or decoding failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading a configuration file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for resource operations.
pub type Result<T> = std::result::Result<T, ResourceError>;
