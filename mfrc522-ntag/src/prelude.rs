// mfrc522-ntag/src/prelude.rs

pub use crate::reader::Mfrc522;
pub use crate::reader::{Initialized, Uninitialized};
pub use crate::tag::{NTag215, Region, RetryPolicy, TagImage};
pub use crate::transport::RegisterBus;
pub use crate::{
    Atqa, Block, Error, Exchange, PollBudget, Result, Sak, Uid, UidFragment,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
