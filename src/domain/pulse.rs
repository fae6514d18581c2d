//! Pulse duration representation and edge-count conversion
//!
//! Signal timing is derived by counting rising edges over a fixed window
//! rather than timestamping a single edge pair: many edges average out
//! jitter, and counting keeps working when the signal period approaches
//! the sampling granularity. The cost is that a slow signal inside a short
//! window yields few edges and a higher-variance estimate; that trade-off
//! is accepted.

use serde::{Serialize, Serializer};

/// Estimated full-cycle duration of the observed signal, in nanoseconds.
///
/// One rising edge is observed per signal cycle, so the estimate is the
/// measurement window divided by the edge count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseDuration(u64);

impl PulseDuration {
    /// Sentinel for a window in which no edges were observed. Far larger
    /// than any real measurement, so a silent input can never be mistaken
    /// for a fast one.
    pub const NO_SIGNAL: PulseDuration = PulseDuration(u64::MAX);

    /// Wrap a measured duration
    pub const fn from_nanos(ns: u64) -> Self {
        Self(ns)
    }

    /// Duration in nanoseconds (`u64::MAX` for the no-signal sentinel)
    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Whether this is the no-signal sentinel
    pub const fn is_no_signal(&self) -> bool {
        self.0 == u64::MAX
    }

    /// Estimated signal frequency in Hz, `None` when no signal was seen
    pub fn frequency_hz(&self) -> Option<f32> {
        if self.is_no_signal() || self.0 == 0 {
            return None;
        }
        Some(1e9 / self.0 as f32)
    }
}

impl Serialize for PulseDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

/// Convert a rising-edge count observed over `elapsed_ns` into a period
/// estimate. Zero edges never divides; it reports the sentinel instead.
pub fn period_from_edge_count(elapsed_ns: u64, rising_edges: u32) -> PulseDuration {
    if rising_edges == 0 {
        return PulseDuration::NO_SIGNAL;
    }
    PulseDuration::from_nanos(elapsed_ns / u64::from(rising_edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_edges() {
        // 1 kHz over a 10 ms window: 10 rising edges
        let period = period_from_edge_count(10_000_000, 10);
        assert_eq!(period.as_nanos(), 1_000_000);
    }

    #[test]
    fn test_zero_edges_is_no_signal() {
        let period = period_from_edge_count(10_000_000, 0);
        assert!(period.is_no_signal());
        assert_eq!(period, PulseDuration::NO_SIGNAL);
    }

    #[test]
    fn test_sentinel_distinguishable_from_fast_signal() {
        let fast = period_from_edge_count(10_000_000, 10_000_000);
        assert!(!fast.is_no_signal());
        assert!(fast < PulseDuration::NO_SIGNAL);
    }

    #[test]
    fn test_frequency() {
        let period = PulseDuration::from_nanos(1_000_000);
        let hz = period.frequency_hz().unwrap();
        assert!((hz - 1000.0).abs() < 0.01);

        assert!(PulseDuration::NO_SIGNAL.frequency_hz().is_none());
    }
}
