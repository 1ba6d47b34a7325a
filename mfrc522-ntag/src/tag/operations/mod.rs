// mfrc522-ntag/src/tag/operations/mod.rs

pub mod read;
pub mod write;

pub use read::{read_block, read_image};
pub use write::{write_page, write_record};
