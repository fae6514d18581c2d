//! Thermocouple port - abstraction for the compensated temperature read
//!
//! This trait allows the acquisition cycle to take one temperature reading
//! without knowing the bus wiring (SPI device, mock, etc.)

use crate::domain::{CompensatedReading, SensorFault};

/// Port for one-shot thermocouple reads
///
/// One call is one bus transaction. Implementations never retry: a failed
/// read yields exactly one fault for that cycle, and the caller decides
/// what to do with it.
///
/// # Example Implementation
///
/// ```ignore
/// struct Max31855<S: SpiDevice> {
///     spi: S,
/// }
///
/// impl<S: SpiDevice> ThermocouplePort for Max31855<S> {
///     fn read(&mut self) -> Result<CompensatedReading, SensorFault> {
///         let mut frame = [0u8; 4];
///         self.spi.read(&mut frame).map_err(|_| SensorFault::Bus)?;
///         ThermocoupleFrame::from_be_bytes(frame).decode()
///     }
/// }
/// ```
pub trait ThermocouplePort {
    /// Perform one bus transaction and classify the returned frame.
    ///
    /// A valid frame yields the compensated temperature; an invalid frame
    /// yields a typed fault whose cause survives into reporting.
    fn read(&mut self) -> Result<CompensatedReading, SensorFault>;
}
