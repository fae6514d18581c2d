//! Oscillator drive pin adapter
//!
//! This adapter implements the OscillatorPort trait over any
//! `embedded-hal` output pin.

use embedded_hal::digital::OutputPin;

use crate::ports::oscillator::OscillatorPort;

/// Drives the oscillator fixture through a digital output pin
pub struct PinOscillator<P> {
    pin: P,
}

impl<P: OutputPin> PinOscillator<P> {
    /// Create a new driver; the pin keeps whatever state it was in
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the underlying pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OscillatorPort for PinOscillator<P> {
    fn set_low(&mut self) {
        // Output writes are infallible at this abstraction layer.
        let _ = self.pin.set_low();
    }

    fn set_high(&mut self) {
        let _ = self.pin.set_high();
    }
}
