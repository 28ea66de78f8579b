use log::debug;
use uuid::Uuid;

use crate::common::binary::{decode_hex_digits, fmt_bin_vec_to_hex};
use crate::error::{malformed_slice, Result};

pub const GUID_BYTES: usize = 16;

/// Offsets of the hyphens in the 36-character canonical form.
const GUID_HYPHEN_POS: [usize; 4] = [8, 13, 18, 23];

/// Encodes a textual UUID (e.g. `550e8400-e29b-41d4-a716-446655440000`) to its
/// 16 big-endian bytes.
///
/// Every `-` is stripped before decoding, wherever it appears; the remaining 32
/// characters must all be hex digits (either case).
pub fn guid_to_bytes(guid: &str) -> Result<[u8; GUID_BYTES]> {
    decode_hex_digits(guid, |c| c == '-')
        .map_err(|e| {
            debug!("rejected guid {:?}: {}", guid, e);
            e
        })
}

pub fn uuid_to_bytes(uuid: &Uuid) -> [u8; GUID_BYTES] {
    *uuid.as_bytes()
}

/// Mixed-endian layout: the first three fields are little-endian, the rest as-is.
pub fn guid_le_to_slice(guid: &str) -> Result<[u8; GUID_BYTES]> {
    let guid = guid_to_bytes(guid)?;

    Ok(Uuid::from_bytes(guid).to_bytes_le())
}

/// Canonical lowercase hyphenated form.
pub fn bytes_to_guid(bytes: &[u8; GUID_BYTES]) -> String {
    let hex = fmt_bin_vec_to_hex(bytes);

    let mut guid = String::with_capacity(hex.len() + GUID_HYPHEN_POS.len());
    for c in hex.chars() {
        if GUID_HYPHEN_POS.contains(&guid.len()) {
            guid.push('-');
        }
        guid.push(c);
    }

    guid
}

pub fn slice_to_guid(bytes: &[u8]) -> Result<String> {
    let bytes: &[u8; GUID_BYTES] = bytes.try_into()
        .map_err(|e| malformed_slice(bytes.len(), e))?;

    Ok(bytes_to_guid(bytes))
}
