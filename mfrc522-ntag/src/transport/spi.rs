// mfrc522-ntag/src/transport/spi.rs
//! Raspberry Pi SPI transport, feature-gated behind `rpi`.

use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

use crate::Result;
use crate::transport::traits::{RegisterBus, read_address, write_address};

/// Default SPI clock for the MFRC522 breakout boards.
pub const DEFAULT_CLOCK_HZ: u32 = 1_000_000;
/// Default BCM pin wired to the chip's reset line.
pub const DEFAULT_RESET_PIN: u8 = 25;

/// Register bus over the Pi's SPI peripheral plus a GPIO reset line.
pub struct SpiBus {
    spi: Spi,
    reset_pin: OutputPin,
}

impl SpiBus {
    /// Open `Spi0`/`Ss0` at the default clock with the default reset pin.
    pub fn open() -> Result<Self> {
        Self::open_with(Bus::Spi0, SlaveSelect::Ss0, DEFAULT_CLOCK_HZ, DEFAULT_RESET_PIN)
    }

    /// Open an explicit bus/slave-select/clock/reset-pin combination.
    pub fn open_with(bus: Bus, ss: SlaveSelect, clock_hz: u32, reset_pin: u8) -> Result<Self> {
        let spi = Spi::new(bus, ss, clock_hz, Mode::Mode0)?;
        let reset_pin = Gpio::new()?.get(reset_pin)?.into_output();
        Ok(Self { spi, reset_pin })
    }

    fn transfer(&mut self, tx: [u8; 2]) -> Result<[u8; 2]> {
        let mut rx = [0u8; 2];
        self.spi.transfer(&mut rx, &tx)?;
        Ok(rx)
    }
}

impl RegisterBus for SpiBus {
    fn write(&mut self, reg: u8, value: u8) -> Result<()> {
        self.transfer([write_address(reg), value])?;
        Ok(())
    }

    fn read(&mut self, reg: u8) -> Result<u8> {
        let rx = self.transfer([read_address(reg), 0])?;
        Ok(rx[1])
    }

    fn reset(&mut self) -> Result<()> {
        self.reset_pin.set_high();
        Ok(())
    }
}
