//! Error types for shop-billing.

/// Result type for wire encoding and decoding.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors that can occur while moving charges on or off the wire.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Malformed JSON or a field of the wrong type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but the expected envelope key was absent.
    #[error("missing envelope key: {key}")]
    MissingEnvelope {
        /// The key that was expected.
        key: &'static str,
    },
}
