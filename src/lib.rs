//! Thermocouple + Pulse-Width Telemetry Node
//!
//! This library provides a hexagonal architecture for an embedded sensor
//! node that reads a cold-junction-compensated thermocouple over SPI,
//! times an externally observed square wave by edge counting, and posts
//! the combined record to a remote time-series endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - ThermocoupleFrame classification                              │
//! │  - PulseDuration + edge-count conversion                         │
//! │  - AcquisitionRecord entity                                      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - ThermocouplePort: one-shot temperature read                   │
//! │  - PulseProbePort: windowed pulse-width measurement              │
//! │  - OscillatorPort: force the fixture into a state                │
//! │  - TelemetryTransport / NetworkPort: the wireless side           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - Max31855: SPI thermocouple converter                          │
//! │  - PollingEdgeProbe: edge counting on an input pin               │
//! │  - PinOscillator: fixture drive on an output pin                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design points
//!
//! - **Fully sequential** - one thread, blocking port calls, fixed sleeps;
//!   every suspension point is an explicit trait boundary.
//! - **Failure-tolerant loop** - sensor faults downgrade the record,
//!   upload faults drop it; nothing is fatal to the process.
//! - **Testable** - ports allow mocking the bus, the pins, and the network.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

/// Domain layer - pure measurement logic
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

/// Acquisition cycle orchestration
pub mod acquisition;

/// Immutable node configuration
pub mod config;

/// Main loop
pub mod node;

/// Record serialization and upload
pub mod uploader;

// Re-export key domain types
pub use domain::{
    AcquisitionRecord, CompensatedReading, PulseDuration, SensorFault, StatusMessage,
    TemperatureReading, ThermocoupleFrame,
};

// Re-export key port traits
pub use ports::{
    NetworkPort, OscillatorPort, PulseProbePort, TelemetryTransport, ThermocouplePort,
    TransportError,
};

// Re-export adapters and application pieces
pub use acquisition::AcquisitionCycle;
pub use adapters::{Max31855, PinOscillator, PollingEdgeProbe};
pub use config::NodeConfig;
pub use node::Node;
pub use uploader::TelemetryUploader;
