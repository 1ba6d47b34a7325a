// mfrc522-ntag/src/reader/crc.rs
//! Driver for the chip's CRC16 coprocessor.

use crate::Result;
use crate::constants::{CRC_IRQ, ChipCommand, FIFO_FLUSH, Register};
use crate::reader::{Initialized, Mfrc522};

impl Mfrc522<Initialized> {
    /// Feed `data` through the chip's CRC coprocessor and return the
    /// 2-byte result, low byte first.
    ///
    /// The done flag is polled for up to `budget.crc` iterations. Running
    /// out of budget is a soft timeout: the result registers are read and
    /// returned anyway, so a post-timeout result is best-effort only.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        self.clear_bits(Register::DivIrq, CRC_IRQ)?;
        self.set_bits(Register::FifoLevel, FIFO_FLUSH)?;

        for &byte in data {
            self.write_reg(Register::FifoData, byte)?;
        }
        self.write_reg(Register::Command, ChipCommand::CalcCrc.code())?;

        for _ in 0..self.budget.crc {
            let flags = self.read_reg(Register::DivIrq)?;
            if flags & CRC_IRQ != 0 {
                break;
            }
        }

        let lo = self.read_reg(Register::CrcResultLo)?;
        let hi = self.read_reg(Register::CrcResultHi)?;
        Ok([lo, hi])
    }
}
