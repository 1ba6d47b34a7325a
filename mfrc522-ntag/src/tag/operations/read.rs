// mfrc522-ntag/src/tag/operations/read.rs

use crate::constants::PICC_READ;
use crate::reader::{Initialized, Mfrc522};
use crate::tag::image::TagImage;
use crate::tag::layout::{BLOCK_SIZE, FULL_BLOCKS, PAGE_SIZE, TAG_BYTES, TRAILING_BYTES};
use crate::types::{Block, Exchange, Uid};
use crate::Result;

/// Request, select and read the whole tag, assembling the image block by
/// block in ascending address order.
///
/// Returns `None` whenever the tag leaves the field; a failed block aborts
/// the whole read (callers restart from block 0, never resume).
pub fn read_image(reader: &mut Mfrc522<Initialized>) -> Result<Option<(Uid, TagImage)>> {
    let Some(_atqa) = reader.request_tag()? else {
        return Ok(None);
    };
    let Some(uid) = reader.select_tag()? else {
        return Ok(None);
    };

    let mut memory = Vec::with_capacity(TAG_BYTES);
    for block in 0..FULL_BLOCKS {
        let page = (block * BLOCK_SIZE / PAGE_SIZE) as u8;
        let Some(data) = read_block(reader, page)? else {
            return Ok(None);
        };
        memory.extend_from_slice(data.as_bytes());
        log::trace!("block {:3}: {}", block, data.to_hex());
    }

    // The tag size is not block-aligned: one more read for the final
    // partial block, keeping only the bytes that exist.
    if TRAILING_BYTES > 0 {
        let page = (FULL_BLOCKS * BLOCK_SIZE / PAGE_SIZE) as u8;
        let Some(data) = read_block(reader, page)? else {
            return Ok(None);
        };
        memory.extend_from_slice(&data.as_bytes()[..TRAILING_BYTES]);
    }

    let image = TagImage::from_bytes(memory)?;
    Ok(Some((uid, image)))
}

/// Read one 16-byte block (4 pages) starting at `page_addr`.
///
/// Anything other than exactly 16 response bytes fails the block.
pub fn read_block(reader: &mut Mfrc522<Initialized>, page_addr: u8) -> Result<Option<Block>> {
    let mut frame = vec![PICC_READ, page_addr];
    let crc = reader.calculate_crc(&frame)?;
    frame.extend_from_slice(&crc);

    match reader.transceive(&frame)? {
        Exchange::NoTag => Ok(None),
        Exchange::Answer { data, .. } => Block::try_from(data.as_slice()).map(Some),
    }
}
