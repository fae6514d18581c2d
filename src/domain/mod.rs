//! Domain layer - pure measurement logic independent of hardware
//!
//! This module contains the entities and conversions at the heart of the
//! node: frame classification, edge-count timing, and the per-cycle
//! acquisition record. Nothing here performs I/O.

pub mod frame;
pub mod pulse;
pub mod record;

pub use frame::{CompensatedReading, SensorFault, ThermocoupleFrame};
pub use pulse::{period_from_edge_count, PulseDuration};
pub use record::{AcquisitionRecord, StatusMessage, TemperatureReading};
