// mfrc522-ntag/src/reader/executor.rs
//! The request/response engine: one chip command, one card exchange.

use crate::constants::{
    ChipCommand, ERROR_MASK, FIFO_FLUSH, MAX_FRAME_LEN, Register, START_SEND, TIMER_IRQ,
};
use crate::reader::{Initialized, Mfrc522};
use crate::types::Exchange;
use crate::{Error, Result};

impl Mfrc522<Initialized> {
    /// Transceive `send` and collect the card's answer.
    pub fn transceive(&mut self, send: &[u8]) -> Result<Exchange> {
        self.to_card(ChipCommand::Transceive, send)
    }

    /// Execute `command` with `send` staged in the FIFO and wait for
    /// completion by polling the interrupt status.
    ///
    /// Protocol-level error flags are never swallowed: any bit inside
    /// [`ERROR_MASK`] fails the exchange. A timer expiry within the
    /// enabled interrupt set is the expected no-card outcome and maps to
    /// [`Exchange::NoTag`].
    pub(crate) fn to_card(&mut self, command: ChipCommand, send: &[u8]) -> Result<Exchange> {
        let (irq_en, wait_irq) = match command {
            ChipCommand::MfAuthent => (0x12u8, 0x10u8),
            ChipCommand::Transceive => (0x77u8, 0x30u8),
            _ => (0x00u8, 0x00u8),
        };

        self.write_reg(Register::ComIEn, irq_en | 0x80)?;
        self.clear_bits(Register::ComIrq, 0x80)?;
        self.set_bits(Register::FifoLevel, FIFO_FLUSH)?;
        // Cancel anything still in flight before loading the FIFO.
        self.write_reg(Register::Command, ChipCommand::Idle.code())?;

        for &byte in send {
            self.write_reg(Register::FifoData, byte)?;
        }
        self.write_reg(Register::Command, command.code())?;
        if command == ChipCommand::Transceive {
            self.set_bits(Register::BitFraming, START_SEND)?;
        }

        let budget = self.budget.command;
        let mut irq = 0u8;
        let mut completed = false;
        for _ in 0..budget {
            irq = self.read_reg(Register::ComIrq)?;
            if irq & TIMER_IRQ != 0 || irq & wait_irq != 0 {
                completed = true;
                break;
            }
        }
        self.clear_bits(Register::BitFraming, START_SEND)?;

        if !completed {
            return Err(Error::PollTimeout { budget });
        }

        let flags = self.read_reg(Register::Error)? & ERROR_MASK;
        if flags != 0 {
            return Err(Error::ErrorFlags { flags });
        }

        if irq & irq_en & TIMER_IRQ != 0 {
            return Ok(Exchange::NoTag);
        }

        if command != ChipCommand::Transceive {
            return Ok(Exchange::Answer {
                data: Vec::new(),
                bits: 0,
            });
        }

        let count = self.read_reg(Register::FifoLevel)? as usize;
        let last_bits = (self.read_reg(Register::Control)? & 0x07) as usize;
        let bits = if last_bits != 0 {
            count.saturating_sub(1) * 8 + last_bits
        } else {
            count * 8
        };

        let drain = count.clamp(1, MAX_FRAME_LEN);
        let mut data = Vec::with_capacity(drain);
        for _ in 0..drain {
            data.push(self.read_reg(Register::FifoData)?);
        }

        log::trace!("exchange: {} bits in {} bytes", bits, data.len());
        Ok(Exchange::Answer { data, bits })
    }
}
