//! Oscillator driver port - the test-fixture actuator
//!
//! The external circuit changes its measurable period depending on this
//! output (a relay shorts out a resistor on the board). The software side
//! only guarantees the forced state; the electrical coupling between this
//! pin and the measured signal is a physical assumption, not something
//! this crate interprets.

/// Port for forcing the external circuit into one of its two measurable
/// states.
///
/// Digital output writes are treated as infallible at this abstraction
/// layer; there is no failure mode to report. The state is owned by the
/// acquisition cycle and re-forced every iteration.
pub trait OscillatorPort {
    /// Drive the oscillator output low
    fn set_low(&mut self);

    /// Drive the oscillator output high
    fn set_high(&mut self);
}
