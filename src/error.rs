//! Error types shared by the key and address pipeline.

use crate::crypto::AddressError;

/// Errors produced while generating a key or deriving its address.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The secure random source could not supply bytes.
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),

    /// A private key of zero or at least the secp256k1 group order.
    #[error("Invalid scalar: private key must be in [1, n-1]")]
    InvalidScalar,

    /// Malformed bytes handed to a pipeline stage.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Address(#[from] AddressError),

    /// The worker thread pool could not be built.
    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
