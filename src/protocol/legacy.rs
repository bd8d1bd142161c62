//! Legacy positional encoding
//!
//! Servers older than the structured-protocol cutover read a Get as a
//! positional parameter list. The buffer is sized once by
//! [`predict_serialized_size`] and written by [`serialize_legacy`]; the two
//! must agree byte for byte.
//!
//! ## Layout
//! ```text
//! i32   parameter count (2)
//! u8    type code of param 1 (11, byte array)
//! vlong region name length, region name
//! u8    type code of param 2 (32, Get), written twice
//! u8    Get version (1)
//! vlong row key length, row key
//! i64   lock id
//! i32   max versions
//! u8    filter present?  [vlong name length, name, payload]
//! u8    cache blocks (tag >= 26 only)
//! i64   min timestamp (always 0)
//! i64   max timestamp (always i64::MAX)
//! u8    "all time" (always 1)
//! i32   family count (0 or 1)
//!       [vlong family length, family,
//!        u8 qualifiers present? [i32 count, (vlong length, qualifier)*]]
//! i32   attributes map size, always 0 (0.92+ only)
//! ```
//!
//! The request's time range is not part of this layout: it is always sent as
//! "all time". Only the structured format honors it.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, WireError};
use crate::region::RegionInfo;
use crate::request::GetRequest;

use super::version::ServerVersion;

/// Longest byte string a length prefix may announce (15 bits)
pub const MAX_PREFIXED_LEN: usize = 0x7FFF;

/// Type code of a `byte[]` parameter
const TYPE_BYTE_ARRAY: u8 = 11;

/// Type code of a `Get` parameter
const TYPE_GET: u8 = 32;

/// Undocumented version byte of the legacy Get
const GET_VERSION: u8 = 1;

// =============================================================================
// Variable-length prefixes
// =============================================================================

/// Width of the length prefix for a byte string of `len` bytes.
///
/// Lengths up to 127 take one byte; longer ones take a marker byte plus one
/// or two big-endian bytes.
fn vlong_size(len: usize) -> usize {
    if len <= 127 {
        1
    } else if len <= 0xFF {
        2
    } else {
        3
    }
}

fn check_prefixed(field: &'static str, len: usize) -> Result<()> {
    if len > MAX_PREFIXED_LEN {
        return Err(WireError::EncodingOverflow {
            field,
            len,
            max: MAX_PREFIXED_LEN,
        });
    }
    Ok(())
}

/// Bytes taken by a length-prefixed byte string, or an overflow error.
fn prefixed_size(field: &'static str, bytes: &[u8]) -> Result<usize> {
    check_prefixed(field, bytes.len())?;
    Ok(vlong_size(bytes.len()) + bytes.len())
}

// =============================================================================
// Size Prediction
// =============================================================================

/// Exact number of bytes [`serialize_legacy`] writes for `request`.
///
/// Fails with `EncodingOverflow` if a length-prefixed field is too long.
pub fn predict_serialized_size(
    request: &GetRequest,
    region: &RegionInfo,
    version: ServerVersion,
) -> Result<usize> {
    let mut size = 0;
    size += 4; // i32: number of parameters
    size += 1; // u8: type of the 1st parameter
    size += prefixed_size("region name", region.name())?;

    size += 1; // u8: type of the 2nd parameter
    size += 1; // u8: type again
    size += 1; // u8: Get version
    size += prefixed_size("row key", request.key())?;
    size += 8; // i64: lock id
    size += 4; // i32: max versions
    size += 1; // u8: filter present?
    if let Some((name, payload)) = request.filter_spec() {
        size += prefixed_size("filter name", name)?;
        size += payload.len();
    }
    if version.has_cache_blocks_flag() {
        size += 1; // u8: cache blocks
    }
    size += 8; // i64: min timestamp
    size += 8; // i64: max timestamp
    size += 1; // u8: "all time"
    size += 4; // i32: number of families
    if let Some(family) = request.family() {
        size += prefixed_size("family", family)?;
        size += 1; // u8: specific qualifiers?
        if let Some(qualifiers) = request.qualifiers() {
            size += 4; // i32: number of qualifiers
            for qualifier in qualifiers {
                size += prefixed_size("qualifier", qualifier)?;
            }
        }
    }
    if version.has_attributes_map() {
        size += 4; // i32: attributes map size
    }
    Ok(size)
}

// =============================================================================
// Sized Buffer
// =============================================================================

/// A buffer that refuses to grow past the size it was created with.
///
/// Every write checks the remaining room first, so a predictor that
/// undercounts surfaces as `SizeMismatch` instead of a reallocation.
pub struct SizedBuffer {
    buf: BytesMut,
    limit: usize,
}

impl SizedBuffer {
    pub fn new(limit: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(limit),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn reserve(&self, n: usize) -> Result<()> {
        let written = self.buf.len() + n;
        if written > self.limit {
            tracing::error!(
                "Legacy encoder overran its predicted size: {} > {}",
                written,
                self.limit
            );
            return Err(WireError::SizeMismatch {
                predicted: self.limit,
                written,
            });
        }
        Ok(())
    }

    pub fn put_u8(&mut self, value: u8) -> Result<()> {
        self.reserve(1)?;
        self.buf.put_u8(value);
        Ok(())
    }

    pub fn put_i32(&mut self, value: i32) -> Result<()> {
        self.reserve(4)?;
        self.buf.put_i32(value);
        Ok(())
    }

    pub fn put_i64(&mut self, value: i64) -> Result<()> {
        self.reserve(8)?;
        self.buf.put_i64(value);
        Ok(())
    }

    pub fn put_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        self.buf.put_slice(bytes);
        Ok(())
    }

    /// Write a length prefix (Hadoop vlong form) followed by `bytes`.
    pub fn put_prefixed(&mut self, field: &'static str, bytes: &[u8]) -> Result<()> {
        let len = bytes.len();
        check_prefixed(field, len)?;
        self.reserve(vlong_size(len) + len)?;
        if len <= 127 {
            self.buf.put_u8(len as u8);
        } else if len <= 0xFF {
            self.buf.put_i8(-113); // one length byte follows
            self.buf.put_u8(len as u8);
        } else {
            self.buf.put_i8(-114); // two length bytes follow
            self.buf.put_u16(len as u16);
        }
        self.buf.put_slice(bytes);
        Ok(())
    }

    /// Hand over the bytes. Fails unless exactly `limit` bytes were written.
    pub fn finish(self) -> Result<Bytes> {
        if self.buf.len() != self.limit {
            tracing::error!(
                "Legacy encoder wrote {} bytes, predicted {}",
                self.buf.len(),
                self.limit
            );
            return Err(WireError::SizeMismatch {
                predicted: self.limit,
                written: self.buf.len(),
            });
        }
        Ok(self.buf.freeze())
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode `request` in the legacy positional format.
pub fn serialize_legacy(
    request: &GetRequest,
    region: &RegionInfo,
    version: ServerVersion,
) -> Result<Bytes> {
    let predicted = predict_serialized_size(request, region, version)?;
    tracing::trace!("Legacy Get for {}: predicted {} bytes", version, predicted);

    let mut buf = SizedBuffer::new(predicted);
    buf.put_i32(2)?; // number of parameters

    // 1st param: region name
    buf.put_u8(TYPE_BYTE_ARRAY)?;
    buf.put_prefixed("region name", region.name())?;

    // 2nd param: the Get itself
    buf.put_u8(TYPE_GET)?;
    buf.put_u8(TYPE_GET)?;
    buf.put_u8(GET_VERSION)?;
    buf.put_prefixed("row key", request.key())?;
    buf.put_i64(request.lock_id())?;
    buf.put_i32(request.max_versions())?;
    match request.filter_spec() {
        Some((name, payload)) => {
            buf.put_u8(0x01)?;
            buf.put_prefixed("filter name", name)?;
            buf.put_slice(payload)?;
        }
        None => buf.put_u8(0x00)?,
    }
    if version.has_cache_blocks_flag() {
        buf.put_u8(0x01)?; // cache the blocks read
    }

    // Time range: always "all time" in this format.
    buf.put_i64(0)?;
    buf.put_i64(i64::MAX)?;
    buf.put_u8(0x01)?;

    match request.family() {
        Some(family) => {
            buf.put_i32(1)?;
            buf.put_prefixed("family", family)?;
            match request.qualifiers() {
                Some(qualifiers) => {
                    buf.put_u8(0x01)?;
                    buf.put_i32(qualifiers.len() as i32)?;
                    for qualifier in qualifiers {
                        buf.put_prefixed("qualifier", qualifier)?;
                    }
                }
                None => buf.put_u8(0x00)?,
            }
        }
        None => buf.put_i32(0)?,
    }

    if version.has_attributes_map() {
        buf.put_i32(0)?;
    }

    buf.finish()
}
