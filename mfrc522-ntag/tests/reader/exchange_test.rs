#[path = "../common/mod.rs"]
mod common;

use mfrc522_ntag::constants::Register;
use mfrc522_ntag::test_support;
use mfrc522_ntag::transport::MockBus;
use mfrc522_ntag::{Error, Exchange, Mfrc522, PollBudget};

#[test]
fn transceive_via_public_api() {
    let (bus, mut reader) = common::fixtures::shared_reader().unwrap();
    bus.borrow_mut().push_answer_bytes(vec![0x44, 0x00]);

    let exchange = reader.transceive(&[0x26]).unwrap();
    assert_eq!(
        exchange,
        Exchange::Answer {
            data: vec![0x44, 0x00],
            bits: 16
        }
    );
}

#[test]
fn error_register_bits_always_fail_the_exchange() {
    // Every bit inside the 0x1B mask must abort, alone or combined.
    for flags in [0x01u8, 0x02, 0x08, 0x10, 0x1B] {
        let (bus, mut reader) = common::fixtures::shared_reader().unwrap();
        bus.borrow_mut().push_answer_bytes(vec![0x44, 0x00]);
        bus.borrow_mut().set_register(Register::Error, flags);

        match reader.transceive(&[0x26]) {
            Err(Error::ErrorFlags { flags: f }) => assert_eq!(f, flags),
            other => panic!("flags {:#04x}: expected ErrorFlags, got {:?}", flags, other),
        }
    }
}

#[test]
fn bits_outside_the_error_mask_are_ignored() {
    let (bus, mut reader) = common::fixtures::shared_reader().unwrap();
    bus.borrow_mut().push_answer_bytes(vec![0x44, 0x00]);
    // TempErr (0x40) and CrcErr (0x04) are outside the fatal mask.
    bus.borrow_mut().set_register(Register::Error, 0x44);

    assert!(reader.transceive(&[0x26]).is_ok());
}

#[test]
fn injected_budget_bounds_the_completion_poll() {
    let budget = PollBudget { crc: 4, command: 8 };
    let (bus, mut reader) =
        test_support::initialized_shared_reader_with_budget(budget).unwrap();
    bus.borrow_mut().push_stall();

    match reader.transceive(&[0x26]) {
        Err(Error::PollTimeout { budget: 8 }) => {}
        other => panic!("expected PollTimeout, got {:?}", other),
    }
}

#[test]
fn reset_line_driven_during_initialize() {
    let (bus, _reader) = common::fixtures::shared_reader().unwrap();
    assert!(bus.borrow().reset_asserted);
}

#[test]
fn owned_mock_reader_builder() {
    // The plain (non-shared) builder is enough when the test only looks at
    // returned values.
    let mut reader = test_support::initialized_reader(MockBus::new()).unwrap();
    assert_eq!(reader.transceive(&[0x26]).unwrap(), Exchange::NoTag);
    let _: Mfrc522<mfrc522_ntag::Initialized> = reader;
}
