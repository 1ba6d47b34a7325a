// mfrc522-ntag/src/reader/mod.rs
//! Reader handle and chip bring-up.
//!
//! The handle owns the register bus and enforces initialization state at
//! compile time: protocol operations are only available on
//! `Mfrc522<Initialized>`.

use std::marker::PhantomData;

use crate::Result;
use crate::constants::{CRYPTO1_ON, ChipCommand, Register};
use crate::transport::RegisterBus;
use crate::types::PollBudget;

mod crc;
mod executor;
mod select;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// MFRC522 driver handle.
pub struct Mfrc522<State = Uninitialized> {
    bus: Box<dyn RegisterBus>,
    budget: PollBudget,
    _state: PhantomData<State>,
}

impl<State> Mfrc522<State> {
    pub(crate) fn write_reg(&mut self, reg: Register, value: u8) -> Result<()> {
        self.bus.write(reg.addr(), value)
    }

    pub(crate) fn read_reg(&mut self, reg: Register) -> Result<u8> {
        self.bus.read(reg.addr())
    }

    /// Read-modify-write OR of `mask` into `reg`. Not atomic; the bus is
    /// exclusively owned by this handle.
    pub(crate) fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read_reg(reg)?;
        self.write_reg(reg, current | mask)
    }

    /// Read-modify-write AND-NOT of `mask` into `reg`.
    pub(crate) fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read_reg(reg)?;
        self.write_reg(reg, current & !mask)
    }

    /// The poll budgets this handle was built with.
    pub fn budget(&self) -> PollBudget {
        self.budget
    }
}

impl Mfrc522<Uninitialized> {
    /// Create a handle over an existing bus with default poll budgets.
    pub fn new(bus: Box<dyn RegisterBus>) -> Self {
        Self::with_budget(bus, PollBudget::default())
    }

    /// Create a handle with explicit poll budgets, mainly for tests that
    /// run small synthetic budgets against a mock bus.
    pub fn with_budget(bus: Box<dyn RegisterBus>, budget: PollBudget) -> Self {
        Self {
            bus,
            budget,
            _state: PhantomData,
        }
    }

    /// Bring the chip up: drive the reset line, soft-reset, program the
    /// timeout timer, force 100% ASK modulation, select the CRC preset and
    /// switch the antenna on.
    pub fn initialize(self) -> Result<Mfrc522<Initialized>> {
        let mut this = Mfrc522 {
            bus: self.bus,
            budget: self.budget,
            _state: PhantomData::<Initialized>,
        };

        this.bus.reset()?;
        this.soft_reset()?;

        // Timer: TAuto on, prescaler and reload give ~25ms before TimerIrq.
        this.write_reg(Register::TMode, 0x8D)?;
        this.write_reg(Register::TPrescaler, 0x3E)?;
        this.write_reg(Register::TReloadLo, 30)?;
        this.write_reg(Register::TReloadHi, 0)?;

        this.write_reg(Register::TxAsk, 0x40)?;
        // CRC preset 0x6363, polarity of MFIN
        this.write_reg(Register::Mode, 0x3D)?;

        this.antenna_on()?;
        Ok(this)
    }
}

impl Mfrc522<Initialized> {
    /// Cancel any running command and reset the chip's internal state.
    pub fn soft_reset(&mut self) -> Result<()> {
        self.write_reg(Register::Command, ChipCommand::SoftReset.code())
    }

    /// Switch the antenna drivers on if they are not already.
    pub fn antenna_on(&mut self) -> Result<()> {
        let current = self.read_reg(Register::TxControl)?;
        if current & 0x03 != 0x03 {
            self.set_bits(Register::TxControl, 0x03)?;
        }
        Ok(())
    }

    /// Switch the antenna drivers off.
    pub fn antenna_off(&mut self) -> Result<()> {
        self.clear_bits(Register::TxControl, 0x03)
    }

    /// Leave the MIFARE Crypto1 authenticated state.
    pub fn stop_crypto1(&mut self) -> Result<()> {
        self.clear_bits(Register::Status2, CRYPTO1_ON)
    }
}
