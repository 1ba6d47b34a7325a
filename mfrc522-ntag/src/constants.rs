// mfrc522-ntag/src/constants.rs
//! Chip register map, command sets and protocol constants.
//!
//! Everything in here is fixed by the MFRC522 datasheet or the ISO 14443-3
//! type A framing rules; none of it is configurable.

/// MFRC522 register addresses (8-bit addressed, 0x00..=0x3F).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Starts and stops command execution
    Command = 0x01,
    /// Interrupt request enable bits
    ComIEn = 0x02,
    /// Interrupt request flags
    ComIrq = 0x04,
    /// CRC and other internal event flags
    DivIrq = 0x05,
    /// Error flags for the last executed command
    Error = 0x06,
    /// Receiver/transmitter status, MFCrypto1On
    Status2 = 0x08,
    /// FIFO buffer input and output
    FifoData = 0x09,
    /// Number of bytes stored in the FIFO
    FifoLevel = 0x0A,
    /// Miscellaneous control, RxLastBits
    Control = 0x0C,
    /// Bit-oriented frame adjustments, StartSend
    BitFraming = 0x0D,
    /// General transmit/receive mode, CRC preset
    Mode = 0x11,
    /// Antenna driver control
    TxControl = 0x14,
    /// Transmit modulation setting
    TxAsk = 0x15,
    /// CRC result, high byte
    CrcResultHi = 0x21,
    /// CRC result, low byte
    CrcResultLo = 0x22,
    /// Timer settings
    TMode = 0x2A,
    /// Timer prescaler
    TPrescaler = 0x2B,
    /// Timer reload value, high byte
    TReloadHi = 0x2C,
    /// Timer reload value, low byte
    TReloadLo = 0x2D,
}

impl Register {
    /// Numeric register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// MFRC522 command set (written to [`Register::Command`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChipCommand {
    /// No action, cancels the current command
    Idle = 0x00,
    /// Internal buffer store
    Mem = 0x01,
    /// Generate a 10-byte random ID
    GenerateRandomId = 0x02,
    /// Activate the CRC coprocessor
    CalcCrc = 0x03,
    /// Transmit FIFO contents
    Transmit = 0x04,
    /// No command change
    NoCmdChange = 0x07,
    /// Activate the receiver
    Receive = 0x08,
    /// Transmit FIFO contents and activate the receiver afterwards
    Transceive = 0x0C,
    /// MIFARE Crypto1 authentication
    MfAuthent = 0x0E,
    /// Soft reset
    SoftReset = 0x0F,
}

impl ChipCommand {
    /// Command code as written to the command register.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// REQA, type A request (short frame)
pub const PICC_REQA: u8 = 0x26;
/// SELECT command, cascade level 1
pub const PICC_SEL_CL1: u8 = 0x93;
/// SELECT command, cascade level 2
pub const PICC_SEL_CL2: u8 = 0x95;
/// NTAG/MIFARE Ultralight READ (returns 4 pages)
pub const PICC_READ: u8 = 0x30;
/// NTAG/MIFARE Ultralight WRITE (one page)
pub const PICC_WRITE: u8 = 0xA2;

/// NVB for the anti-collision step: command byte + NVB only
pub const NVB_ANTICOLLISION: u8 = 0x20;
/// NVB for the select step: full 7-byte frame
pub const NVB_SELECT: u8 = 0x70;

/// BitFraming value for a 7-bit short frame (REQA/WUPA)
pub const SHORT_FRAME_BITS: u8 = 0x07;
/// BitFraming StartSend bit
pub const START_SEND: u8 = 0x80;
/// FifoLevel flush bit
pub const FIFO_FLUSH: u8 = 0x80;
/// ComIrq timer interrupt bit
pub const TIMER_IRQ: u8 = 0x01;
/// DivIrq CRC-done interrupt bit
pub const CRC_IRQ: u8 = 0x04;
/// Error register bits treated as a hard failure
/// (protocol, parity, collision, buffer overflow)
pub const ERROR_MASK: u8 = 0x1B;
/// Status2 MFCrypto1On bit
pub const CRYPTO1_ON: u8 = 0x08;
/// Most FIFO bytes drained per exchange
pub const MAX_FRAME_LEN: usize = 16;

/// Default iteration budget for the CRC-done busy poll
pub const CRC_POLL_BUDGET: u32 = 255;
/// Default iteration budget for the command-completion busy poll
pub const COMMAND_POLL_BUDGET: u32 = 2000;
