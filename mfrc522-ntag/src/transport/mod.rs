// mfrc522-ntag/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "rpi")]
pub mod spi;
pub mod traits;

pub use mock::MockBus;
#[cfg(feature = "rpi")]
pub use spi::SpiBus;
pub use traits::{RegisterBus, read_address, write_address};
