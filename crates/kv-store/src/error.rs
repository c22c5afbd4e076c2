use thiserror::Error;

/// Errors that can occur when interacting with the durable store.
#[derive(Debug, Error)]
pub enum KvStoreError {
    /// The underlying store could not be reached.
    ///
    /// Retryable by the caller; the core never retries internally.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, KvStoreError>;
