//! MAX31855 thermocouple adapter
//!
//! This adapter implements the ThermocouplePort trait over any
//! `embedded-hal` SPI device. The converter is read-only: one
//! chip-select-framed 32-bit read per transaction, decoded by the domain
//! frame logic. Clock mode 0, up to 5 MHz per the datasheet; bus setup
//! belongs to the HAL, not to this adapter.

use embedded_hal::spi::SpiDevice;

use crate::domain::{CompensatedReading, SensorFault, ThermocoupleFrame};
use crate::ports::thermocouple::ThermocouplePort;

/// MAX31855 cold-junction-compensated thermocouple converter
pub struct Max31855<S> {
    spi: S,
}

impl<S: SpiDevice> Max31855<S> {
    /// Create a new adapter over an exclusive SPI device
    pub fn new(spi: S) -> Self {
        Self { spi }
    }

    /// Release the underlying bus device
    pub fn release(self) -> S {
        self.spi
    }
}

impl<S: SpiDevice> ThermocouplePort for Max31855<S> {
    fn read(&mut self) -> Result<CompensatedReading, SensorFault> {
        let mut frame = [0u8; 4];
        self.spi.read(&mut frame).map_err(|_| SensorFault::Bus)?;
        ThermocoupleFrame::from_be_bytes(frame).decode()
    }
}
