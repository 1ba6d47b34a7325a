// mfrc522-ntag/src/tag/operations/write.rs

use crate::constants::PICC_WRITE;
use crate::reader::{Initialized, Mfrc522};
use crate::tag::layout::{PAGE_SIZE, Region, USER_MEMORY_FIRST_PAGE};
use crate::tag::tlv;
use crate::types::{Exchange, Uid};
use crate::{Error, Result};

/// Wrap `payload` as a record and write it into user memory, one page at a
/// time starting at the first user page. The final chunk is zero-padded to
/// a full page.
///
/// Returns `None` when no tag answers or it leaves the field mid-write.
pub fn write_record(reader: &mut Mfrc522<Initialized>, payload: &[u8]) -> Result<Option<Uid>> {
    let record = tlv::wrap(payload)?;
    let limit = Region::UserMemory.len();
    if record.len() > limit {
        return Err(Error::PayloadTooLarge {
            size: record.len(),
            limit,
        });
    }

    let Some(_atqa) = reader.request_tag()? else {
        return Ok(None);
    };
    let Some(uid) = reader.select_tag()? else {
        return Ok(None);
    };

    for (i, chunk) in record.chunks(PAGE_SIZE).enumerate() {
        let mut page = [0u8; PAGE_SIZE];
        page[..chunk.len()].copy_from_slice(chunk);
        let page_addr = (USER_MEMORY_FIRST_PAGE + i) as u8;
        if write_page(reader, page_addr, &page)?.is_none() {
            return Ok(None);
        }
    }

    log::debug!("wrote {} record bytes to tag {}", record.len(), uid.to_hex());
    Ok(Some(uid))
}

/// Write one 4-byte page at `page_addr`.
///
/// The card's acknowledge is discarded; a failed exchange is fatal for the
/// block; there is no partial-success signaling.
pub fn write_page(
    reader: &mut Mfrc522<Initialized>,
    page_addr: u8,
    data: &[u8; PAGE_SIZE],
) -> Result<Option<()>> {
    let mut frame = vec![PICC_WRITE, page_addr];
    frame.extend_from_slice(data);
    let crc = reader.calculate_crc(&frame)?;
    frame.extend_from_slice(&crc);

    match reader.transceive(&frame)? {
        Exchange::NoTag => Ok(None),
        Exchange::Answer { .. } => Ok(Some(())),
    }
}
