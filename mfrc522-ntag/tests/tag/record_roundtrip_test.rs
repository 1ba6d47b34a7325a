#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use mfrc522_ntag::constants::PICC_WRITE;
use mfrc522_ntag::tag::layout::{PAGE_SIZE, USER_MEMORY_FIRST_PAGE};
use mfrc522_ntag::tag::{NTag215, RetryPolicy, tlv};
use mfrc522_ntag::test_support;

fn one_shot() -> RetryPolicy {
    RetryPolicy {
        delay: Duration::ZERO,
        max_attempts: Some(1),
    }
}

/// Reassemble the user-memory bytes a write session produced from the
/// frames it sent.
fn written_user_memory(sent: &[Vec<u8>]) -> Vec<u8> {
    let mut pages: Vec<(u8, Vec<u8>)> = sent
        .iter()
        .filter(|frame| frame[0] == PICC_WRITE)
        .map(|frame| (frame[1], frame[2..2 + PAGE_SIZE].to_vec()))
        .collect();
    pages.sort_by_key(|(addr, _)| *addr);

    let mut out = Vec::new();
    for (i, (addr, data)) in pages.iter().enumerate() {
        assert_eq!(*addr as usize, USER_MEMORY_FIRST_PAGE + i, "page gap");
        out.extend_from_slice(data);
    }
    out
}

#[test]
fn written_frames_reconstruct_the_record() {
    let payload = common::fixtures::sample_record_payload();
    let (bus, reader) = common::fixtures::shared_reader().unwrap();
    test_support::seed_single_tag(&mut bus.borrow_mut());
    let record_len = tlv::wrap(&payload).unwrap().len();
    let page_count = record_len.div_ceil(PAGE_SIZE);
    for _ in 0..page_count {
        bus.borrow_mut().push_answer(vec![0x0A], 4);
    }

    let mut session = NTag215::with_retry(reader, one_shot());
    let uid = session.write_record(&payload).unwrap();
    assert_eq!(uid.as_bytes(), &common::fixtures::sample_uid_bytes());

    let memory = written_user_memory(&bus.borrow().sent);
    // Page-aligned length, zero-padded tail.
    assert_eq!(memory.len(), page_count * PAGE_SIZE);
    assert_eq!(tlv::extract(&memory).unwrap(), &payload[..]);
}

#[test]
fn every_write_frame_carries_a_valid_crc() {
    use mfrc522_ntag::transport::mock::crc_a;

    let (bus, reader) = common::fixtures::shared_reader().unwrap();
    test_support::seed_single_tag(&mut bus.borrow_mut());
    for _ in 0..2 {
        bus.borrow_mut().push_answer(vec![0x0A], 4);
    }

    let mut session = NTag215::with_retry(reader, one_shot());
    session.write_record(&[0x11, 0x22, 0x33]).unwrap();

    for frame in bus.borrow().sent.iter().filter(|f| f[0] == PICC_WRITE) {
        let (body, crc) = frame.split_at(frame.len() - 2);
        assert_eq!(crc, crc_a(body));
    }
}
