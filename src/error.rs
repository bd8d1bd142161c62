//! Error types for regionwire
//!
//! Provides a unified error type for request configuration, encoding and
//! response decoding.

use thiserror::Error;

/// Result type alias using WireError
pub type Result<T> = std::result::Result<T, WireError>;

/// Unified error type for regionwire operations
#[derive(Debug, Error)]
pub enum WireError {
    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid column family: {0}")]
    InvalidFamily(String),

    #[error("Invalid column qualifier: {0}")]
    InvalidQualifier(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("{field} too long: {len} bytes (max {max})")]
    EncodingOverflow {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// The legacy encoder disagreed with the size predictor. Always a bug.
    #[error("Size prediction violated: predicted {predicted} bytes, encoder reached {written}")]
    SizeMismatch { predicted: usize, written: usize },

    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Protobuf decode error: {0}")]
    Protobuf(#[from] prost::DecodeError),

    #[error("Response too large: {len} bytes (max {max})")]
    ResponseTooLarge { len: usize, max: usize },
}
