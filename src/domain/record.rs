//! Acquisition record domain entities
//!
//! One record is produced per loop iteration, handed to the uploader, and
//! dropped. It is never retained, queued, or merged with a later record.

use core::fmt::Write;

use serde::{Serialize, Serializer};

use crate::domain::frame::SensorFault;
use crate::domain::pulse::PulseDuration;

/// Maximum length of a record status message
pub const MAX_STATUS_LEN: usize = 64;

/// Status text carried in every record ("OK" or a fault description)
pub type StatusMessage = heapless::String<MAX_STATUS_LEN>;

/// The temperature field of a record: a value or a classified fault,
/// never both and never neither.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureReading {
    /// Compensated temperature in °C
    Value(f32),
    /// The read failed; the cause is preserved for reporting
    Fault(SensorFault),
}

impl TemperatureReading {
    /// Whether this reading is a fault marker
    pub const fn is_fault(&self) -> bool {
        matches!(self, TemperatureReading::Fault(_))
    }

    /// Temperature value, if the read succeeded
    pub fn value(&self) -> Option<f32> {
        match self {
            TemperatureReading::Value(t) => Some(*t),
            TemperatureReading::Fault(_) => None,
        }
    }

    /// Fault cause, if the read failed
    pub fn fault(&self) -> Option<SensorFault> {
        match self {
            TemperatureReading::Value(_) => None,
            TemperatureReading::Fault(f) => Some(*f),
        }
    }
}

/// Wire-format quirk: a fault uploads as the string `"NaN"` in the
/// otherwise-numeric field, matching the endpoint's existing channel
/// schema. The cause itself travels in the status field.
impl Serialize for TemperatureReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TemperatureReading::Value(t) => serializer.serialize_f32(*t),
            TemperatureReading::Fault(_) => serializer.serialize_str("NaN"),
        }
    }
}

/// One acquisition cycle's output: exactly one temperature field, two
/// phase durations, and a status message. Immutable once assembled.
#[derive(Clone, Debug)]
pub struct AcquisitionRecord {
    /// Thermocouple result for this cycle
    pub temperature: TemperatureReading,
    /// Period measured with the oscillator forced low
    pub low_phase: PulseDuration,
    /// Period measured with the oscillator forced high
    pub high_phase: PulseDuration,
    /// Operator-facing status text
    pub status: StatusMessage,
}

impl AcquisitionRecord {
    /// Assemble a record for a successful temperature read
    pub fn ok(temperature_c: f32, low_phase: PulseDuration, high_phase: PulseDuration) -> Self {
        let mut status = StatusMessage::new();
        let _ = status.push_str("OK");
        Self {
            temperature: TemperatureReading::Value(temperature_c),
            low_phase,
            high_phase,
            status,
        }
    }

    /// Assemble a record for a faulted temperature read; the fault cause
    /// lands in the status message so the upload stays diagnostic.
    pub fn faulted(fault: SensorFault, low_phase: PulseDuration, high_phase: PulseDuration) -> Self {
        let mut status = StatusMessage::new();
        // Truncation on overflow is acceptable for a status string.
        let _ = write!(status, "failed to read thermocouple: {fault}");
        Self {
            temperature: TemperatureReading::Fault(fault),
            low_phase,
            high_phase,
            status,
        }
    }
}
