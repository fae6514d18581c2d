//! Thermocouple frame classification and decoding
//!
//! A MAX31855-class converter shifts out one 32-bit frame per bus
//! transaction. Bits D31:18 carry the cold-junction-compensated
//! thermocouple temperature (14-bit two's complement, 0.25 °C/LSB),
//! D15:4 the reference junction temperature (12-bit two's complement,
//! 0.0625 °C/LSB). D16 flags a fault, D2:0 carry the fault cause, and
//! D17/D3 always read zero on a healthy device.

use core::fmt;

/// Any-fault flag (D16)
const FAULT: u32 = 1 << 16;
/// Open-circuit fault (D0)
const FAULT_OC: u32 = 1 << 0;
/// Short-to-ground fault (D1)
const FAULT_SCG: u32 = 1 << 1;
/// Short-to-supply fault (D2)
const FAULT_SCV: u32 = 1 << 2;
/// Reserved bits (D17, D3), must read zero
const RESERVED: u32 = (1 << 17) | (1 << 3);

/// Lowest thermocouple temperature the device can report (°C)
pub const MIN_THERMOCOUPLE_C: f32 = -270.0;
/// Highest thermocouple temperature the device can report (°C)
pub const MAX_THERMOCOUPLE_C: f32 = 1800.0;

/// Thermocouple fault classification
///
/// Mirrors the fault cause bits of the frame, plus the bus-level failure
/// mode. The cause is preserved all the way into the uploaded status
/// string so remote reporting stays diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorFault {
    /// Thermocouple input is open (broken wire)
    OpenCircuit,
    /// Thermocouple is shorted to ground
    ShortToGround,
    /// Thermocouple is shorted to the supply rail
    ShortToVcc,
    /// Frame failed validity checks (reserved bits set, or the fault flag
    /// raised without a cause)
    InvalidFrame,
    /// The bus transaction itself failed
    Bus,
}

impl SensorFault {
    /// Human-readable cause, used in record status messages
    pub const fn as_str(&self) -> &'static str {
        match self {
            SensorFault::OpenCircuit => "open circuit",
            SensorFault::ShortToGround => "short to ground",
            SensorFault::ShortToVcc => "short to VCC",
            SensorFault::InvalidFrame => "invalid frame",
            SensorFault::Bus => "bus transaction failed",
        }
    }
}

impl fmt::Display for SensorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperatures decoded from one valid frame
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompensatedReading {
    /// Cold-junction-compensated thermocouple temperature (°C)
    pub thermocouple_c: f32,
    /// Reference (cold) junction temperature (°C), for diagnostics
    pub cold_junction_c: f32,
}

/// Raw 32-bit frame as shifted out of the device, MSB first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThermocoupleFrame(u32);

impl ThermocoupleFrame {
    /// Wrap an already-assembled 32-bit frame
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Assemble a frame from the four bytes of one bus transaction
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Raw frame bits
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Classify the frame as valid or faulted and decode it.
    ///
    /// Fault cause bits take precedence so the most specific diagnosis
    /// wins. A fault flag without a cause, or reserved bits reading high,
    /// means the frame cannot be trusted at all.
    pub fn decode(&self) -> Result<CompensatedReading, SensorFault> {
        if self.0 & FAULT_OC != 0 {
            return Err(SensorFault::OpenCircuit);
        }
        if self.0 & FAULT_SCG != 0 {
            return Err(SensorFault::ShortToGround);
        }
        if self.0 & FAULT_SCV != 0 {
            return Err(SensorFault::ShortToVcc);
        }
        if self.0 & (FAULT | RESERVED) != 0 {
            return Err(SensorFault::InvalidFrame);
        }

        Ok(CompensatedReading {
            thermocouple_c: self.thermocouple_celsius(),
            cold_junction_c: self.cold_junction_celsius(),
        })
    }

    /// Thermocouple temperature, D31:18, 0.25 °C/LSB
    fn thermocouple_celsius(&self) -> f32 {
        let raw14 = (self.0 >> 18) as i32;
        // Sign-extend the 14-bit field
        let signed = (raw14 << 18) >> 18;
        signed as f32 * 0.25
    }

    /// Cold junction temperature, D15:4, 0.0625 °C/LSB
    fn cold_junction_celsius(&self) -> f32 {
        let raw12 = ((self.0 >> 4) & 0x0fff) as i32;
        let signed = (raw12 << 20) >> 20;
        signed as f32 * 0.0625
    }
}
