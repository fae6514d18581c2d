//! Adapters - concrete implementations of ports
//!
//! Adapters connect the acquisition core to the outside world by
//! implementing the port traits. Each one is generic over the matching
//! `embedded-hal` trait, so it runs against any HAL and against mocks.
//!
//! # Available Adapters
//!
//! - **max31855**: MAX31855 thermocouple converter over SPI
//! - **edge_probe**: polled edge-counting pulse probe on an input pin
//! - **pin_oscillator**: oscillator fixture drive on an output pin
//!
//! Network-facing adapters (WiFi association, the HTTP client) are
//! platform-specific and live with the target firmware; the core only
//! needs their ports.

pub mod edge_probe;
pub mod max31855;
pub mod pin_oscillator;

pub use edge_probe::PollingEdgeProbe;
pub use max31855::Max31855;
pub use pin_oscillator::PinOscillator;
