// mfrc522-ntag/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    // SPI/GPIO access is an optional dependency so the protocol core can be
    // built and tested off-device.
    #[cfg(feature = "rpi")]
    #[error("spi bus error: {0}")]
    Spi(#[from] rppal::spi::Error),

    #[cfg(feature = "rpi")]
    #[error("gpio error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    /// Escape hatch for custom `RegisterBus` implementations.
    #[error("bus error: {0}")]
    Bus(String),

    #[error("poll budget exhausted after {budget} iterations")]
    PollTimeout { budget: u32 },

    #[error("chip signalled protocol error: flags {flags:#04x}")]
    ErrorFlags { flags: u8 },

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid response bit count: expected {expected}, got {actual}")]
    InvalidBitCount { expected: usize, actual: usize },

    #[error("uid checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("cascade level 3 uids are not supported")]
    UnsupportedCascade,

    #[error("malformed payload: type byte {found:#04x}, expected 0x03")]
    MalformedPayload { found: u8 },

    #[error("payload of {size} bytes does not fit {limit} bytes of user memory")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("tag memory has not been read yet")]
    ImageUnavailable,

    #[error("no tag answered after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
