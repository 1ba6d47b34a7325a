#[path = "../common/mod.rs"]
mod common;

use mfrc522_ntag::test_support;
use mfrc522_ntag::transport::mock::crc_a;
use mfrc522_ntag::Error;

#[test]
fn request_then_select_single_level() {
    let (bus, mut reader) = common::fixtures::shared_reader().unwrap();
    test_support::seed_single_tag(&mut bus.borrow_mut());

    let atqa = reader.request_tag().unwrap().unwrap();
    assert_eq!(atqa.as_bytes(), &[0x44, 0x00]);

    let uid = reader.select_tag().unwrap().unwrap();
    assert_eq!(uid.as_bytes(), &common::fixtures::sample_uid_bytes());
    assert_eq!(uid.to_hex(), "04123456");
}

#[test]
fn request_rejects_each_wrong_bit_count() {
    // 0, 4, 8 and 24 bits are all rejected; only 16 is an ATQA.
    let cases: [(Vec<u8>, u8, usize); 3] = [
        (vec![0x44], 0, 8),
        (vec![0x04], 4, 4),
        (vec![0x44, 0x00, 0x11], 0, 24),
    ];
    for (data, last_bits, bits) in cases {
        let (bus, mut reader) = common::fixtures::shared_reader().unwrap();
        bus.borrow_mut().push_answer(data, last_bits);

        match reader.request_tag() {
            Err(Error::InvalidBitCount {
                expected: 16,
                actual,
            }) => assert_eq!(actual, bits),
            other => panic!("expected InvalidBitCount, got {:?}", other),
        }
    }
}

#[test]
fn select_sends_crc_computed_by_the_chip() {
    let (bus, mut reader) = common::fixtures::shared_reader().unwrap();
    test_support::seed_single_tag(&mut bus.borrow_mut());

    reader.request_tag().unwrap().unwrap();
    reader.select_tag().unwrap().unwrap();

    let sent = bus.borrow().sent.clone();
    // REQA, anticollision, select
    assert_eq!(sent.len(), 3);
    let select_frame = &sent[2];
    assert_eq!(select_frame.len(), 9);
    assert_eq!(&select_frame[7..], &crc_a(&select_frame[..7]));
}

#[test]
fn two_level_cascade_builds_seven_byte_uid() {
    let (bus, mut reader) = common::fixtures::shared_reader().unwrap();
    {
        let mut bus = bus.borrow_mut();
        bus.push_answer_bytes(vec![0x44, 0x00]);
        bus.push_answer_bytes(vec![0x88, 0x04, 0x12, 0x34, 0x88 ^ 0x04 ^ 0x12 ^ 0x34]);
        let crc = crc_a(&[0x04]);
        bus.push_answer_bytes(vec![0x04, crc[0], crc[1]]);
        bus.push_answer_bytes(vec![0xAA, 0xBB, 0xCC, 0xDD, 0xAA ^ 0xBB ^ 0xCC ^ 0xDD]);
        let crc = crc_a(&[0x20]);
        bus.push_answer_bytes(vec![0x20, crc[0], crc[1]]);
    }

    reader.request_tag().unwrap().unwrap();
    let uid = reader.select_tag().unwrap().unwrap();
    assert_eq!(uid.as_bytes(), &[0x04, 0x12, 0x34, 0xAA, 0xBB, 0xCC, 0xDD]);
    assert_eq!(uid.len(), 7);
}
