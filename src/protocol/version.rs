//! Version selector
//!
//! The server's capability tag decides which wire format a request is
//! encoded with and which method token goes in front of it.
//!
//! | tag                      | format     | lookup  | existence |
//! |--------------------------|------------|---------|-----------|
//! | `>= V095_OR_ABOVE`       | structured | `Get`   | `Get`     |
//! | `<  V095_OR_ABOVE`       | legacy     | `get`   | `exists`  |

use std::fmt;

use crate::request::RequestKind;

/// Method token for lookups on legacy servers
pub const METHOD_GET: &[u8] = b"get";

/// Method token for existence checks on legacy servers
pub const METHOD_EXISTS: &[u8] = b"exists";

/// Method token for both kinds once the server speaks the structured protocol
pub const METHOD_GET_STRUCTURED: &[u8] = b"Get";

/// Ordered capability tag announced by a server connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion(pub u8);

impl ServerVersion {
    /// Version not negotiated yet
    pub const UNKNOWN: ServerVersion = ServerVersion(0);

    /// 0.90 and older servers
    pub const V090_AND_BEFORE: ServerVersion = ServerVersion(24);

    /// Servers that read the "cache blocks" flag of a legacy Get (0.90+)
    pub const CACHE_BLOCKS: ServerVersion = ServerVersion(26);

    /// Servers that read the attributes map of a legacy Get (0.92+)
    pub const V092_OR_ABOVE: ServerVersion = ServerVersion(29);

    /// Servers that speak the structured message protocol (0.95+)
    pub const V095_OR_ABOVE: ServerVersion = ServerVersion(95);

    pub fn tag(&self) -> u8 {
        self.0
    }

    /// The wire format requests to this server must use.
    pub fn wire_format(&self) -> WireFormat {
        if *self >= Self::V095_OR_ABOVE {
            WireFormat::Structured
        } else {
            WireFormat::Legacy
        }
    }

    pub(crate) fn has_cache_blocks_flag(&self) -> bool {
        *self >= Self::CACHE_BLOCKS
    }

    pub(crate) fn has_attributes_map(&self) -> bool {
        *self >= Self::V092_OR_ABOVE
    }
}

impl From<u8> for ServerVersion {
    fn from(tag: u8) -> Self {
        ServerVersion(tag)
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// The two request encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Hand-rolled positional encoding into a pre-sized buffer
    Legacy,

    /// Structured (protobuf) message
    Structured,
}

/// Method token to send for a request of `kind` to a server at `version`.
pub fn method_name(kind: RequestKind, version: ServerVersion) -> &'static [u8] {
    match version.wire_format() {
        WireFormat::Structured => METHOD_GET_STRUCTURED,
        WireFormat::Legacy if kind.is_exists() => METHOD_EXISTS,
        WireFormat::Legacy => METHOD_GET,
    }
}
