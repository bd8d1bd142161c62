//! Cells and the trailing cell block
//!
//! A reply can carry cells in two places: inline in the structured message,
//! and in a cell block appended after it. The cell block is a run of
//! length-prefixed entries in the classic key-value layout:
//!
//! ```text
//! ┌─────────┬─────────┬─────────┬─────────┬─────┬─────────┬────────┬───────────┬────────┬──────────┬───────┐
//! │ Len (4) │ KLen(4) │ VLen(4) │ RLen(2) │ Row │ FLen(1) │ Family │ Qualifier │ TS (8) │ Type (1) │ Value │
//! └─────────┴─────────┴─────────┴─────────┴─────┴─────────┴────────┴───────────┴────────┴──────────┴───────┘
//! ```
//!
//! `Len` counts everything after itself; `KLen` covers `RLen` through `Type`.
//! The qualifier length is implied by `KLen`.
//!
//! Consecutive cells of a row usually repeat the row, family and qualifier.
//! Decoding threads the previous cell through as a base: equal fields share
//! its buffers. Nothing is inherited; an inline cell without a row or family
//! is a decode error, and a missing qualifier, timestamp or value reads as the
//! message default (empty, `0`, empty).

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Result, WireError};
use crate::protocol::pb;

/// Key type written for cells produced by `Cell::write_to`
const KEY_TYPE_PUT: u8 = pb::CellType::Put as u8;

/// Bytes of `KLen` not taken by row, family or qualifier:
/// row length (2) + family length (1) + timestamp (8) + key type (1)
const KEY_INFRASTRUCTURE_SIZE: usize = 2 + 1 + 8 + 1;

/// One (row, family, qualifier, timestamp, value) unit of stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub key: Bytes,
    pub family: Bytes,
    pub qualifier: Bytes,
    pub timestamp: u64,
    pub value: Bytes,
}

impl Cell {
    pub fn new(
        key: impl Into<Bytes>,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        timestamp: u64,
        value: impl Into<Bytes>,
    ) -> Self {
        Self {
            key: key.into(),
            family: family.into(),
            qualifier: qualifier.into(),
            timestamp,
            value: value.into(),
        }
    }

    /// Build a cell from an inline structured cell, on top of `base`.
    pub fn from_pb(cell: pb::Cell, base: Option<&Cell>) -> Result<Self> {
        let key = cell
            .row
            .ok_or_else(|| WireError::Decode("inline cell without a row key".to_string()))?;
        let family = cell
            .family
            .ok_or_else(|| WireError::Decode("inline cell without a family".to_string()))?;
        let qualifier = cell.qualifier.unwrap_or_default();

        Ok(Self {
            key: share(key, base.map(|b| &b.key)),
            family: share(family, base.map(|b| &b.family)),
            qualifier: share(qualifier, base.map(|b| &b.qualifier)),
            timestamp: cell.timestamp.unwrap_or_default(),
            value: cell.value.unwrap_or_default(),
        })
    }

    /// Structured form of this cell, with every field present.
    pub fn to_pb(&self) -> pb::Cell {
        pb::Cell {
            row: Some(self.key.clone()),
            family: Some(self.family.clone()),
            qualifier: Some(self.qualifier.clone()),
            timestamp: Some(self.timestamp),
            cell_type: Some(pb::CellType::Put as i32),
            value: Some(self.value.clone()),
        }
    }

    /// Size of this cell's key section (`KLen`)
    fn key_len(&self) -> usize {
        KEY_INFRASTRUCTURE_SIZE + self.key.len() + self.family.len() + self.qualifier.len()
    }

    /// Bytes this cell takes in a cell block, including its length prefix
    pub fn encoded_len(&self) -> usize {
        4 + 8 + self.key_len() + self.value.len()
    }

    /// Append this cell to a cell block.
    pub fn write_to(&self, buf: &mut BytesMut) -> Result<()> {
        if self.key.len() > i16::MAX as usize {
            return Err(WireError::EncodingOverflow {
                field: "cell row key",
                len: self.key.len(),
                max: i16::MAX as usize,
            });
        }
        if self.family.len() > u8::MAX as usize {
            return Err(WireError::EncodingOverflow {
                field: "cell family",
                len: self.family.len(),
                max: u8::MAX as usize,
            });
        }
        let key_len = self.key_len();
        let total = 8 + key_len + self.value.len();
        if total > i32::MAX as usize {
            return Err(WireError::EncodingOverflow {
                field: "cell",
                len: total,
                max: i32::MAX as usize,
            });
        }

        buf.reserve(4 + total);
        buf.put_i32(total as i32);
        buf.put_i32(key_len as i32);
        buf.put_i32(self.value.len() as i32);
        buf.put_i16(self.key.len() as i16);
        buf.put_slice(&self.key);
        buf.put_u8(self.family.len() as u8);
        buf.put_slice(&self.family);
        buf.put_slice(&self.qualifier);
        buf.put_u64(self.timestamp);
        buf.put_u8(KEY_TYPE_PUT);
        buf.put_slice(&self.value);
        Ok(())
    }
}

/// Share `base`'s buffer when `field` has the same bytes.
fn share(field: Bytes, base: Option<&Bytes>) -> Bytes {
    match base {
        Some(base) if *base == field => base.clone(),
        _ => field,
    }
}

fn ensure(buf: &Bytes, needed: usize, what: &str) -> Result<()> {
    if buf.remaining() < needed {
        return Err(WireError::Decode(format!(
            "truncated cell block reading {}: need {} bytes, have {}",
            what,
            needed,
            buf.remaining()
        )));
    }
    Ok(())
}

fn non_negative(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| WireError::Decode(format!("negative {} in cell block: {}", what, value)))
}

// =============================================================================
// Cell Block Reading
// =============================================================================

/// Count the cells in a cell block of exactly `block.len()` bytes.
///
/// Only the length prefixes are read. Fails if the entries do not tile the
/// block exactly.
pub fn count_cells(block: &[u8]) -> Result<usize> {
    let mut rest = block;
    let mut count = 0;
    while !rest.is_empty() {
        if rest.len() < 4 {
            return Err(WireError::Decode(format!(
                "cell block has {} trailing bytes after {} cells",
                rest.len(),
                count
            )));
        }
        let len = i32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]);
        let len = non_negative(len as i64, "cell length")?;
        rest = &rest[4..];
        if rest.len() < len {
            return Err(WireError::Decode(format!(
                "cell {} overruns the cell block: {} bytes declared, {} left",
                count,
                len,
                rest.len()
            )));
        }
        rest = &rest[len..];
        count += 1;
    }
    Ok(count)
}

/// Iterator over the cells of a cell block, carrying the previous cell as
/// the sharing base.
pub struct CellBlockReader {
    buf: Bytes,
    base: Option<Cell>,
}

impl CellBlockReader {
    /// Read cells from `block`, starting from `base` (usually the last inline
    /// cell of the same reply).
    pub fn new(block: Bytes, base: Option<Cell>) -> Self {
        Self { buf: block, base }
    }

    /// The last cell read, or the starting base if none was.
    pub fn base(&self) -> Option<&Cell> {
        self.base.as_ref()
    }

    fn read_cell(&mut self) -> Result<Cell> {
        ensure(&self.buf, 4, "cell length")?;
        let total = non_negative(self.buf.get_i32() as i64, "cell length")?;
        ensure(&self.buf, total, "cell")?;
        let mut entry = self.buf.split_to(total);

        ensure(&entry, 8, "key/value lengths")?;
        let key_len = non_negative(entry.get_i32() as i64, "key length")?;
        let value_len = non_negative(entry.get_i32() as i64, "value length")?;
        if key_len + value_len != entry.remaining() {
            return Err(WireError::Decode(format!(
                "cell lengths disagree: key {} + value {} != {}",
                key_len,
                value_len,
                entry.remaining()
            )));
        }
        if key_len < KEY_INFRASTRUCTURE_SIZE {
            return Err(WireError::Decode(format!("cell key too short: {} bytes", key_len)));
        }
        let mut key_part = entry.split_to(key_len);
        let value = entry;

        let row_len = non_negative(key_part.get_i16() as i64, "row length")?;
        ensure(&key_part, row_len, "row key")?;
        let row = key_part.split_to(row_len);

        ensure(&key_part, 1, "family length")?;
        let family_len = key_part.get_u8() as usize;
        ensure(&key_part, family_len, "family")?;
        let family = key_part.split_to(family_len);

        // Left: qualifier, then timestamp (8) and key type (1).
        if key_part.remaining() < 9 {
            return Err(WireError::Decode(
                "cell key too short for timestamp and type".to_string(),
            ));
        }
        let qualifier = key_part.split_to(key_part.remaining() - 9);
        let timestamp = key_part.get_u64();
        let _key_type = key_part.get_u8();

        let base = self.base.as_ref();
        Ok(Cell {
            key: share(row, base.map(|b| &b.key)),
            family: share(family, base.map(|b| &b.family)),
            qualifier: share(qualifier, base.map(|b| &b.qualifier)),
            timestamp,
            value,
        })
    }
}

impl Iterator for CellBlockReader {
    type Item = Result<Cell>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.buf.has_remaining() {
            return None;
        }
        match self.read_cell() {
            Ok(cell) => {
                self.base = Some(cell.clone());
                Some(Ok(cell))
            }
            Err(e) => {
                // Stop after the first error.
                self.buf.clear();
                Some(Err(e))
            }
        }
    }
}
