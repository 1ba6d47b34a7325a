// fixtures.rs: commonly used payloads, images and seeded readers

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use mfrc522_ntag::tag::layout::TAG_BYTES;
use mfrc522_ntag::tag::tlv;
use mfrc522_ntag::test_support;
use mfrc522_ntag::transport::MockBus;
use mfrc522_ntag::{Initialized, Mfrc522, Result};

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x04, 0x12, 0x34, 0x56]
}

/// A short NDEF-shaped payload (well-known text record, "en", "hi") as the
/// external codec would hand it over. The driver treats it as opaque bytes.
pub fn sample_record_payload() -> Vec<u8> {
    hex::decode("d101055402656e6869").unwrap()
}

/// A full 540-byte image whose user memory carries the sample record.
pub fn tag_memory_with_record() -> [u8; TAG_BYTES] {
    let mut memory = [0u8; TAG_BYTES];
    for (i, b) in memory.iter_mut().enumerate() {
        *b = (i % 251) as u8;
    }
    let record = tlv::wrap(&sample_record_payload()).unwrap();
    memory[16..16 + record.len()].copy_from_slice(&record);
    memory
}

pub fn shared_reader() -> Result<(Rc<RefCell<MockBus>>, Mfrc522<Initialized>)> {
    test_support::initialized_shared_reader()
}

/// A reader whose mock already holds a complete single-tag read session:
/// handshake plus every block of `memory`.
pub fn reader_with_seeded_tag(
    memory: &[u8; TAG_BYTES],
) -> Result<(Rc<RefCell<MockBus>>, Mfrc522<Initialized>)> {
    let (bus, reader) = test_support::initialized_shared_reader()?;
    test_support::seed_single_tag(&mut bus.borrow_mut());
    test_support::seed_block_reads(&mut bus.borrow_mut(), memory);
    Ok((bus, reader))
}
