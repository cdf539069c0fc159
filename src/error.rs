//! Error types for the scan search library.
//!
//! The matcher itself is total and never fails; errors arise only at the
//! JSON boundary where a corpus is decoded or a response is encoded.

/// Result type alias for scan search operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the corpus boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Corpus input did not match the scanned-text interchange shape
    #[error("Malformed corpus: {0}")]
    MalformedCorpus(String),

    /// Search response could not be encoded to JSON
    #[error("Failed to encode search response: {0}")]
    ResponseEncode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
