// mfrc522-ntag/src/types.rs

use crate::Error;
use crate::constants::{COMMAND_POLL_BUDGET, CRC_POLL_BUDGET};
use std::convert::TryFrom;

/// Outcome of a single command/response exchange with the chip.
///
/// "No tag in the field" is an expected outcome that drives the caller's
/// retry loop; hardware and protocol faults are reported through
/// [`crate::Error`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    /// The card answered. `bits` is the exact response length in bits and
    /// may not be a multiple of 8 when the final byte is partial.
    Answer {
        /// Response bytes drained from the FIFO (0..=16)
        data: Vec<u8>,
        /// Exact response length in bits
        bits: usize,
    },
    /// The chip timer expired before a card answered.
    NoTag,
}

/// ATQA - Answer To Request type A (2 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Atqa {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// SAK - Select Acknowledge status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sak(u8);

impl Sak {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Cascade bit: the UID is not complete yet.
    pub fn cascade(&self) -> bool {
        self.0 & 0x04 != 0
    }

    /// The tag is ISO 14443-4 compliant.
    pub fn compliant(&self) -> bool {
        self.0 & 0x20 != 0
    }
}

/// One anti-collision response: 4 UID bytes followed by their XOR checksum
/// (the BCC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UidFragment([u8; 5]);

impl UidFragment {
    pub fn from_bytes(bytes: [u8; 5]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 5] {
        &self.0
    }

    /// The four UID bytes of this cascade level.
    pub fn uid_bytes(&self) -> &[u8] {
        &self.0[..4]
    }

    /// The transmitted checksum byte.
    pub fn bcc(&self) -> u8 {
        self.0[4]
    }

    /// Verify the BCC: XOR of the four UID bytes must equal the fifth byte.
    pub fn verify(&self) -> crate::Result<()> {
        let expected = self.0[..4].iter().fold(0u8, |acc, &b| acc ^ b);
        if expected != self.bcc() {
            return Err(Error::ChecksumMismatch {
                expected,
                actual: self.bcc(),
            });
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for UidFragment {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 5 {
            return Err(Error::InvalidLength {
                expected: 5,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 5];
        arr.copy_from_slice(&bytes[..5]);
        Ok(Self(arr))
    }
}

/// Reconstructed tag identifier: 4, 7 or 10 bytes depending on how many
/// cascade levels the selection needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Combine verified fragments in cascade order. The cascade tag (first
    /// byte) of every non-final fragment is dropped; the final fragment
    /// keeps all four bytes.
    pub fn from_fragments(fragments: &[UidFragment]) -> crate::Result<Self> {
        let mut bytes = Vec::with_capacity(fragments.len() * 4);
        match fragments {
            [only] => bytes.extend_from_slice(only.uid_bytes()),
            [first, last] => {
                bytes.extend_from_slice(&first.uid_bytes()[1..]);
                bytes.extend_from_slice(last.uid_bytes());
            }
            [first, second, last] => {
                bytes.extend_from_slice(&first.uid_bytes()[1..]);
                bytes.extend_from_slice(&second.uid_bytes()[1..]);
                bytes.extend_from_slice(last.uid_bytes());
            }
            _ => {
                return Err(Error::InvalidLength {
                    expected: 1,
                    actual: fragments.len(),
                });
            }
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// One 16-byte block as returned by the READ command (4 pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block([u8; 16]);

impl Block {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}

/// Iteration budgets for the chip's bounded busy-poll loops.
///
/// Injectable so tests can run small synthetic budgets against a mock bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollBudget {
    /// Iterations to wait for the CRC-done flag
    pub crc: u32,
    /// Iterations to wait for command completion
    pub command: u32,
}

impl Default for PollBudget {
    fn default() -> Self {
        Self {
            crc: CRC_POLL_BUDGET,
            command: COMMAND_POLL_BUDGET,
        }
    }
}
