#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use mfrc522_ntag::tag::layout::TAG_BYTES;
use mfrc522_ntag::tag::{NTag215, Region, RetryPolicy};
use mfrc522_ntag::Error;

fn one_shot() -> RetryPolicy {
    RetryPolicy {
        delay: Duration::ZERO,
        max_attempts: Some(1),
    }
}

#[test]
fn full_read_captures_image_and_record() {
    let memory = common::fixtures::tag_memory_with_record();
    let (_bus, reader) = common::fixtures::reader_with_seeded_tag(&memory).unwrap();

    let mut session = NTag215::with_retry(reader, one_shot());
    let uid = session.read().unwrap();
    assert_eq!(uid.as_bytes(), &common::fixtures::sample_uid_bytes());

    let image = session.image().unwrap();
    assert_eq!(image.as_bytes().len(), TAG_BYTES);
    assert_eq!(image.as_bytes(), &memory[..]);
    assert_eq!(image.user_memory(), &memory[16..516]);
    assert_eq!(image.region(Region::Cfg0), &memory[520..524]);

    assert_eq!(
        session.record().unwrap(),
        common::fixtures::sample_record_payload()
    );
}

#[test]
fn record_fails_cleanly_on_blank_tag() {
    // A blank tag has no record header in user memory; the decode error is
    // distinct from returning empty data.
    let memory = [0u8; TAG_BYTES];
    let (_bus, reader) = common::fixtures::reader_with_seeded_tag(&memory).unwrap();

    let mut session = NTag215::with_retry(reader, one_shot());
    session.read().unwrap();
    assert!(matches!(
        session.record(),
        Err(Error::MalformedPayload { found: 0x00 })
    ));
}

#[test]
fn uid_accessor_tracks_last_read() {
    let memory = common::fixtures::tag_memory_with_record();
    let (_bus, reader) = common::fixtures::reader_with_seeded_tag(&memory).unwrap();

    let mut session = NTag215::with_retry(reader, one_shot());
    assert!(session.uid().is_none());
    session.read().unwrap();
    assert_eq!(
        session.uid().unwrap().as_bytes(),
        &common::fixtures::sample_uid_bytes()
    );
}
