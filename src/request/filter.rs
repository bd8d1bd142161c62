//! Filter contract
//!
//! Filters are opaque to the codec: they arrive already serialized, together
//! with the server-side class name that knows how to read them.

use bytes::Bytes;

/// A server-side filter that can serialize itself.
pub trait ScanFilter {
    /// Server-side name of the filter.
    fn name(&self) -> Bytes;

    /// The filter's serialized form. Never interpreted by this crate.
    fn serialize(&self) -> Bytes;
}
