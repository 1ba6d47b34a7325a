// mfrc522-ntag/src/tag/tlv.rs
//! The length-delimited record wrapper used inside user memory.
//!
//! Layout: `[0x03] [length] [payload…]`. What the payload contains (an
//! NDEF message in practice) is opaque here; encoding it is the job of an
//! external codec.

use crate::{Error, Result};

/// Type byte marking a message record
pub const RECORD_TYPE: u8 = 0x03;
/// Largest payload the 1-byte length field can carry
pub const MAX_PAYLOAD: usize = 255;

/// Extract the record payload from the start of `buffer`.
///
/// Fails when the type byte is not [`RECORD_TYPE`] or the declared length
/// overruns the buffer; the length is only trusted after the type check.
pub fn extract(buffer: &[u8]) -> Result<&[u8]> {
    let Some(&type_byte) = buffer.first() else {
        return Err(Error::InvalidLength {
            expected: 2,
            actual: buffer.len(),
        });
    };
    if type_byte != RECORD_TYPE {
        return Err(Error::MalformedPayload { found: type_byte });
    }
    let len = *buffer.get(1).ok_or(Error::InvalidLength {
        expected: 2,
        actual: buffer.len(),
    })? as usize;
    buffer.get(2..2 + len).ok_or(Error::InvalidLength {
        expected: 2 + len,
        actual: buffer.len(),
    })
}

/// Prepend the record header to `payload`.
pub fn wrap(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > MAX_PAYLOAD {
        return Err(Error::PayloadTooLarge {
            size: payload.len(),
            limit: MAX_PAYLOAD,
        });
    }
    let mut out = Vec::with_capacity(2 + payload.len());
    out.push(RECORD_TYPE);
    out.push(payload.len() as u8);
    out.extend_from_slice(payload);
    Ok(out)
}
