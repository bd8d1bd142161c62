//! Shared validators for column families and qualifiers.

use crate::error::{Result, WireError};

/// Longest family name the store accepts (fits a single-byte length prefix).
pub const MAX_FAMILY_LEN: usize = i8::MAX as usize;

/// Check that `family` is a valid column family name.
///
/// A family must be non-empty, at most [`MAX_FAMILY_LEN`] bytes, and free of
/// `:` and control bytes.
pub fn check_family(family: &[u8]) -> Result<()> {
    if family.is_empty() {
        return Err(WireError::InvalidFamily("empty family name".to_string()));
    }
    if family.len() > MAX_FAMILY_LEN {
        return Err(WireError::InvalidFamily(format!(
            "family too long: {} bytes (max {})",
            family.len(),
            MAX_FAMILY_LEN
        )));
    }
    if let Some(pos) = family.iter().position(|&b| b == b':' || b.is_ascii_control()) {
        return Err(WireError::InvalidFamily(format!(
            "forbidden byte 0x{:02x} at offset {}",
            family[pos], pos
        )));
    }
    Ok(())
}

/// Check that `qualifier` is a valid column qualifier.
///
/// The forbidden set is empty: unlike families, qualifiers are arbitrary
/// binary and may contain `:` or control bytes. Only the empty qualifier is
/// rejected. Length is not checked here; oversized qualifiers fail at
/// encoding time.
pub fn check_qualifier(qualifier: &[u8]) -> Result<()> {
    if qualifier.is_empty() {
        return Err(WireError::InvalidQualifier("empty qualifier".to_string()));
    }
    Ok(())
}
