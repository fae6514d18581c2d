//! Ports (interfaces) defining the boundaries of the application
//!
//! Ports are traits that define how the acquisition core interacts with
//! the outside world. They allow the core to remain independent of
//! specific hardware and network stacks.
//!
//! # Hexagonal Architecture
//!
//! In hexagonal architecture, ports define the "holes" in the hexagon
//! where adapters plug in:
//!
//! - **ThermocouplePort**: how we take one temperature reading (SPI, mock)
//! - **PulseProbePort**: how we time the observed square wave (polled pin,
//!   counter peripheral, mock)
//! - **OscillatorPort**: how we force the external circuit into a state
//! - **TelemetryTransport**: how a serialized record reaches the endpoint
//! - **NetworkPort**: how the wireless link gets associated

pub mod network;
pub mod oscillator;
pub mod pulse;
pub mod thermocouple;
pub mod transport;

pub use network::NetworkPort;
pub use oscillator::OscillatorPort;
pub use pulse::PulseProbePort;
pub use thermocouple::ThermocouplePort;
pub use transport::{TelemetryTransport, TransportError};
