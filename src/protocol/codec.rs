//! Protocol codec
//!
//! Entry points for both directions of a row lookup. Encoding picks the
//! wire format from the server's capability tag; decoding always reads the
//! structured reply.

use bytes::Bytes;
use prost::Message;

use crate::config::CodecConfig;
use crate::error::Result;
use crate::region::RegionInfo;
use crate::request::GetRequest;

use super::legacy::serialize_legacy;
use super::pb;
use super::response::{decode_get_response, GetResult};
use super::structured::build_get_request;
use super::version::{method_name, ServerVersion, WireFormat};

/// An encoded request body.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedGet {
    /// Fully written legacy buffer, exactly as long as predicted
    Legacy(Bytes),

    /// Structured message, framed by the transport
    Structured(pb::GetRequest),
}

/// What goes to the transport: method token plus request body.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundGet {
    pub method: &'static [u8],
    pub body: EncodedGet,
}

impl OutboundGet {
    pub fn wire_format(&self) -> WireFormat {
        match self.body {
            EncodedGet::Legacy(_) => WireFormat::Legacy,
            EncodedGet::Structured(_) => WireFormat::Structured,
        }
    }

    /// Body bytes. Structured messages are varint-length-delimited.
    pub fn to_bytes(&self) -> Bytes {
        match &self.body {
            EncodedGet::Legacy(bytes) => bytes.clone(),
            EncodedGet::Structured(message) => Bytes::from(message.encode_length_delimited_to_vec()),
        }
    }
}

/// Encodes lookups and decodes their replies.
#[derive(Debug, Clone, Default)]
pub struct GetCodec {
    config: CodecConfig,
}

impl GetCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `request` for `region` on a server announcing `version`.
    pub fn encode(
        &self,
        request: &GetRequest,
        region: &RegionInfo,
        version: ServerVersion,
    ) -> Result<OutboundGet> {
        if request.has_partial_filter() {
            tracing::warn!(
                "Filter needs both a name and a payload, sending {} without it",
                request
            );
        }

        let method = method_name(request.kind(), version);
        let format = version.wire_format();
        tracing::debug!(
            "Encoding {} for server {} as {:?} ({})",
            request,
            version,
            format,
            String::from_utf8_lossy(method)
        );

        let body = match format {
            WireFormat::Legacy => EncodedGet::Legacy(serialize_legacy(request, region, version)?),
            WireFormat::Structured => EncodedGet::Structured(build_get_request(request, region)),
        };
        Ok(OutboundGet { method, body })
    }

    /// Decode the reply to `request` from `buf`, followed by a cell block of
    /// `cell_block_len` bytes.
    pub fn decode(
        &self,
        request: &GetRequest,
        buf: &mut Bytes,
        cell_block_len: usize,
    ) -> Result<GetResult> {
        decode_get_response(request.kind(), buf, cell_block_len, &self.config)
    }
}
