//! Response decoding
//!
//! A reply is a varint-length-delimited `GetResponse` message, followed by
//! a cell block whose byte length is declared out of band by the transport:
//!
//! ```text
//! ┌────────────┬─────────────────────┬──────────────────────────────┐
//! │ Len (vint) │ GetResponse message │ Cell block (cell_block_len)  │
//! └────────────┴─────────────────────┴──────────────────────────────┘
//! ```
//!
//! The row's cells are the inline cells followed by the cell block's cells.

use bytes::{Buf, Bytes};

use crate::cell::{count_cells, Cell, CellBlockReader};
use crate::config::CodecConfig;
use crate::error::{Result, WireError};
use crate::request::RequestKind;

use super::pb;

/// A decoded reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetResult {
    /// Cells of the row, inline cells first
    Row(Vec<Cell>),

    /// Answer to an existence check
    Exists(bool),
}

impl GetResult {
    /// The cells, if this is a lookup result
    pub fn cells(&self) -> Option<&[Cell]> {
        match self {
            GetResult::Row(cells) => Some(cells),
            GetResult::Exists(_) => None,
        }
    }

    /// The flag, if this is an existence result
    pub fn exists(&self) -> Option<bool> {
        match self {
            GetResult::Exists(exists) => Some(*exists),
            GetResult::Row(_) => None,
        }
    }
}

/// Read the length-delimited response message at the front of `buf`.
pub fn read_response_message(buf: &mut Bytes, config: &CodecConfig) -> Result<pb::GetResponse> {
    let len = prost::encoding::decode_varint(buf)?;
    let len = usize::try_from(len).map_err(|_| WireError::ResponseTooLarge {
        len: usize::MAX,
        max: config.max_response_size,
    })?;
    if len > config.max_response_size {
        return Err(WireError::ResponseTooLarge {
            len,
            max: config.max_response_size,
        });
    }
    if buf.remaining() < len {
        return Err(WireError::Decode(format!(
            "incomplete response message: expected {} bytes, got {}",
            len,
            buf.remaining()
        )));
    }
    let message = buf.split_to(len);
    Ok(<pb::GetResponse as prost::Message>::decode(message)?)
}

/// Decode the reply to a request of `kind`.
///
/// Consumes the response message and `cell_block_len` bytes of cell block
/// from `buf`.
pub fn decode_get_response(
    kind: RequestKind,
    buf: &mut Bytes,
    cell_block_len: usize,
    config: &CodecConfig,
) -> Result<GetResult> {
    if cell_block_len > config.max_cell_block_size {
        return Err(WireError::ResponseTooLarge {
            len: cell_block_len,
            max: config.max_cell_block_size,
        });
    }

    let response = read_response_message(buf, config)?;

    if buf.remaining() < cell_block_len {
        return Err(WireError::Decode(format!(
            "incomplete cell block: expected {} bytes, got {}",
            cell_block_len,
            buf.remaining()
        )));
    }
    let block = buf.split_to(cell_block_len);

    if kind.is_exists() {
        return match response.result {
            // No result means the row is not there.
            None => Ok(GetResult::Exists(false)),
            Some(result) => result.exists.map(GetResult::Exists).ok_or_else(|| {
                WireError::Decode("existence reply carries a result without a flag".to_string())
            }),
        };
    }

    let Some(result) = response.result else {
        if !block.is_empty() {
            tracing::debug!(
                "Reply without a result ignores a {}-byte cell block",
                block.len()
            );
        }
        return Ok(GetResult::Row(Vec::new()));
    };

    convert_result(result, block).map(GetResult::Row)
}

/// Stitch a result's inline cells and its cell block into one list.
pub fn convert_result(result: pb::RowResult, block: Bytes) -> Result<Vec<Cell>> {
    let block_cells = count_cells(&block)?;
    if let Some(declared) = result.associated_cell_count {
        if declared as i64 != block_cells as i64 {
            tracing::debug!(
                "Result declares {} associated cells, cell block holds {}",
                declared,
                block_cells
            );
        }
    }
    tracing::trace!(
        "Decoding {} inline cells and {} cell block cells",
        result.cell.len(),
        block_cells
    );

    let mut cells = Vec::with_capacity(result.cell.len() + block_cells);

    // The previous cell is the base of the next one, across both sources.
    let mut base: Option<Cell> = None;
    for pb_cell in result.cell {
        let cell = Cell::from_pb(pb_cell, base.as_ref())?;
        base = Some(cell.clone());
        cells.push(cell);
    }
    for cell in CellBlockReader::new(block, base) {
        cells.push(cell?);
    }

    tracing::debug!("Decoded {} cells", cells.len());
    Ok(cells)
}
