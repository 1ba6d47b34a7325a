// mfrc522-ntag/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockBus setup so tests across the crate
//! and the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::reader::{Initialized, Mfrc522};
use crate::tag::layout::{BLOCK_SIZE, FULL_BLOCKS, TAG_BYTES, TRAILING_BYTES};
use crate::transport::mock::{MockBus, crc_a};
use crate::transport::traits::RegisterBus;
use crate::types::PollBudget;
use crate::Result;

/// RegisterBus wrapper that delegates into a shared MockBus so a test can
/// keep a handle for seeding replies and inspecting `sent` after the
/// reader has taken ownership.
pub struct SharedBus(pub Rc<RefCell<MockBus>>);

impl RegisterBus for SharedBus {
    fn write(&mut self, reg: u8, value: u8) -> Result<()> {
        self.0.borrow_mut().write(reg, value)
    }

    fn read(&mut self, reg: u8) -> Result<u8> {
        self.0.borrow_mut().read(reg)
    }

    fn reset(&mut self) -> Result<()> {
        self.0.borrow_mut().reset()
    }
}

/// Build an initialized reader over a private MockBus.
#[doc(hidden)]
pub fn initialized_reader(bus: MockBus) -> Result<Mfrc522<Initialized>> {
    Mfrc522::new(Box::new(bus)).initialize()
}

/// Build an initialized reader plus a shared handle onto its MockBus.
#[doc(hidden)]
pub fn initialized_shared_reader() -> Result<(Rc<RefCell<MockBus>>, Mfrc522<Initialized>)> {
    initialized_shared_reader_with_budget(PollBudget::default())
}

/// Same as [`initialized_shared_reader`] but with explicit poll budgets,
/// for tests that exercise budget exhaustion.
#[doc(hidden)]
pub fn initialized_shared_reader_with_budget(
    budget: PollBudget,
) -> Result<(Rc<RefCell<MockBus>>, Mfrc522<Initialized>)> {
    let shared = Rc::new(RefCell::new(MockBus::new()));
    let reader =
        Mfrc522::with_budget(Box::new(SharedBus(shared.clone())), budget).initialize()?;
    Ok((shared, reader))
}

/// Queue a full request/select handshake for a single-level tag with UID
/// `04 12 34 56`.
#[doc(hidden)]
pub fn seed_single_tag(bus: &mut MockBus) {
    // ATQA
    bus.push_answer_bytes(vec![0x44, 0x00]);
    // Anti-collision fragment + BCC
    bus.push_answer_bytes(vec![0x04, 0x12, 0x34, 0x56, 0x74]);
    // SAK "complete, plain tag" + its CRC
    let crc = crc_a(&[0x00]);
    bus.push_answer_bytes(vec![0x00, crc[0], crc[1]]);
}

/// Queue the block answers a full image read consumes: 33 full blocks and
/// the final partial block (the 12 trailing bytes plus 4 wrapped bytes, as
/// a real tag folds the address space).
#[doc(hidden)]
pub fn seed_block_reads(bus: &mut MockBus, memory: &[u8; TAG_BYTES]) {
    for block in 0..FULL_BLOCKS {
        let start = block * BLOCK_SIZE;
        bus.push_answer_bytes(memory[start..start + BLOCK_SIZE].to_vec());
    }
    let mut last = memory[TAG_BYTES - TRAILING_BYTES..].to_vec();
    last.extend_from_slice(&memory[..BLOCK_SIZE - TRAILING_BYTES]);
    bus.push_answer_bytes(last);
}

/// A deterministic 540-byte tag image with a small record in user memory.
#[doc(hidden)]
pub fn sample_tag_memory() -> [u8; TAG_BYTES] {
    let mut memory = [0u8; TAG_BYTES];
    for (i, b) in memory.iter_mut().enumerate() {
        *b = (i % 251) as u8;
    }
    // User memory starts at byte 16: record header + 3 payload bytes.
    memory[16..21].copy_from_slice(&[0x03, 0x03, 0xAA, 0xBB, 0xCC]);
    memory
}
