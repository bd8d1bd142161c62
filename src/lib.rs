//! # regionwire
//!
//! Wire codec for single-row lookups against a region-based key-value store:
//! - Validating, chainable request configuration
//! - Version-gated choice between the legacy and structured encodings
//! - Exact size prediction for the legacy pre-sized buffer
//! - Reply decoding that stitches inline cells and the trailing cell block
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       GetRequest                             │
//! │              (family, qualifiers, versions, ...)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Version Selector                          │
//! │              (server capability tag → format)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Legacy    │          │ Structured  │
//!   │ size + write│          │  message    │
//!   └─────────────┘          └─────────────┘
//!
//!   reply ──► GetResponse message ──► inline cells ─┐
//!             trailing cell block ──► block cells ──┴─► Vec<Cell> / bool
//! ```
//!
//! ## Example
//!
//! ```
//! use regionwire::{GetCodec, GetRequest, RegionInfo, ServerVersion};
//!
//! let request = GetRequest::with_family("users", "row1", "cf")
//!     .and_then(|r| r.set_max_versions(3))
//!     .unwrap();
//! let region = RegionInfo::new("users", "users,,1.abcdef.");
//! let outbound = GetCodec::default()
//!     .encode(&request, &region, ServerVersion::V092_OR_ABOVE)
//!     .unwrap();
//! assert_eq!(outbound.method, b"get");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod cell;
pub mod region;
pub mod request;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, WireError};
pub use config::CodecConfig;
pub use cell::Cell;
pub use region::{RegionInfo, RowLock};
pub use request::{GetRequest, RequestKind, ScanFilter};
pub use protocol::{EncodedGet, GetCodec, GetResult, OutboundGet, ServerVersion, WireFormat};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of regionwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
