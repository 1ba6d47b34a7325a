// mfrc522-ntag/src/tag/image.rs

use crate::tag::layout::{Region, TAG_BYTES};
use crate::{Error, Result};

/// A fully assembled snapshot of the tag's 540 bytes.
///
/// An image is only ever constructed from a complete buffer; a partially
/// read tag is not observable through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagImage(Vec<u8>);

impl TagImage {
    /// Wrap a complete 540-byte buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != TAG_BYTES {
            return Err(Error::InvalidLength {
                expected: TAG_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    /// The whole image.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Slice one named region out of the image.
    pub fn region(&self, region: Region) -> &[u8] {
        &self.0[region.range()]
    }

    /// The raw factory UID bytes mirrored at the start of memory.
    pub fn uid_mirror(&self) -> &[u8] {
        self.region(Region::UidMirror)
    }

    /// The freely writable user memory.
    pub fn user_memory(&self) -> &[u8] {
        self.region(Region::UserMemory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_incomplete_buffers() {
        match TagImage::from_bytes(vec![0; 539]) {
            Err(Error::InvalidLength {
                expected: 540,
                actual: 539,
            }) => {}
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn region_slicing() {
        let mut bytes = vec![0u8; TAG_BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i % 251) as u8;
        }
        let image = TagImage::from_bytes(bytes.clone()).unwrap();

        assert_eq!(image.uid_mirror(), &bytes[0..9]);
        assert_eq!(image.user_memory().len(), 500);
        assert_eq!(image.user_memory(), &bytes[16..516]);
        assert_eq!(image.region(Region::Pack), &bytes[532..534]);
    }

    #[test]
    fn regions_cover_every_byte_once() {
        let image = TagImage::from_bytes(vec![1; TAG_BYTES]).unwrap();
        let total: usize = Region::ALL.iter().map(|r| image.region(*r).len()).sum();
        assert_eq!(total, TAG_BYTES);
    }
}
