//! Error types shared by the widget's adapters.
//!
//! ERROR HANDLING
//! ==============
//! None of these escape the public widget API. Persistence and responder
//! failures are logged and converted into recovery outcomes at the module
//! boundary so the conversation always stays usable.

/// Failures reading or writing the durable storage slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (disabled, private mode, not a browser).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected a read.
    #[error("storage read failed: {0}")]
    Read(String),

    /// The backend rejected a write (quota exceeded, etc.).
    #[error("storage write failed: {0}")]
    Write(String),

    /// The transcript could not be encoded or the stored value could not be decoded.
    #[error("history codec failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Failures of a single responder exchange.
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("responder returned status {status}")]
    Status { status: u16 },

    /// No response was obtained (network unreachable, request build failure).
    #[error("responder transport failed: {0}")]
    Transport(String),

    /// A success response carried a body that is not the expected JSON.
    #[error("responder payload malformed: {0}")]
    Decode(String),
}

/// Invalid widget configuration supplied by the hosting page.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
