//! Pulse probe port - abstraction for the edge-counting measurement
//!
//! This trait allows the acquisition cycle to time the observed square
//! wave without knowing how edges are captured (polled input pin, counter
//! peripheral, mock, etc.)

use crate::domain::PulseDuration;

/// Port for windowed pulse-width measurements
///
/// The window length is a cycle-wide constant chosen by the caller; it is
/// never reconfigured mid-run.
pub trait PulseProbePort {
    /// Count edges on the probe input for `window_ms` of wall-clock time
    /// and return the estimated full-cycle duration.
    ///
    /// Must not block meaningfully past the window. A silent input yields
    /// [`PulseDuration::NO_SIGNAL`], never a divide-by-zero.
    fn measure(&mut self, window_ms: u32) -> PulseDuration;
}
