//! Polling edge-count pulse probe
//!
//! This adapter implements the PulseProbePort trait by sampling a digital
//! input at a fixed interval for the whole measurement window and counting
//! rising edges. Sampling at 10 µs resolves signals up to a few tens of
//! kHz, which covers the oscillator fixture's range in both relay states.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::domain::pulse::{period_from_edge_count, PulseDuration};
use crate::ports::pulse::PulseProbePort;

/// Interval between input samples during a measurement window
const POLL_INTERVAL_US: u32 = 10;

/// Edge-counting probe over any `embedded-hal` input pin
pub struct PollingEdgeProbe<P, D> {
    pin: P,
    delay: D,
}

impl<P: InputPin, D: DelayNs> PollingEdgeProbe<P, D> {
    /// Create a new probe on the given input pin
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Release the underlying pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin, D: DelayNs> PulseProbePort for PollingEdgeProbe<P, D> {
    fn measure(&mut self, window_ms: u32) -> PulseDuration {
        let polls = window_ms.saturating_mul(1_000) / POLL_INTERVAL_US;

        // A pin read error keeps the previous level: a glitched sample
        // must not invent an edge.
        let mut level = self.pin.is_high().unwrap_or(false);
        let mut rising_edges: u32 = 0;

        for _ in 0..polls {
            self.delay.delay_us(POLL_INTERVAL_US);
            let sample = self.pin.is_high().unwrap_or(level);
            if sample && !level {
                rising_edges += 1;
            }
            level = sample;
        }

        let elapsed_ns = u64::from(polls) * u64::from(POLL_INTERVAL_US) * 1_000;
        period_from_edge_count(elapsed_ns, rising_edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    /// Synthetic square wave: toggles level every `polls_per_half_period`
    /// samples, starting low.
    struct SquareWavePin {
        polls_per_half_period: u32,
        samples: u32,
    }

    impl SquareWavePin {
        fn new(polls_per_half_period: u32) -> Self {
            Self {
                polls_per_half_period,
                samples: 0,
            }
        }
    }

    impl ErrorType for SquareWavePin {
        type Error = Infallible;
    }

    impl InputPin for SquareWavePin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            let phase = (self.samples / self.polls_per_half_period) % 2;
            self.samples += 1;
            Ok(phase == 1)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            self.is_high().map(|level| !level)
        }
    }

    /// Input stuck at one level
    struct SilentPin;

    /// Records the total delay requested of it, in nanoseconds
    struct CountingDelay(std::rc::Rc<std::cell::RefCell<u64>>);

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            *self.0.borrow_mut() += u64::from(ns);
        }
    }

    impl ErrorType for SilentPin {
        type Error = Infallible;
    }

    impl InputPin for SilentPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(false)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(true)
        }
    }

    #[test]
    fn test_1khz_over_10ms_window() {
        // 1 kHz at a 10 µs sample interval: 50 samples per half period.
        // A 10 ms window sees 10 rising edges, so the estimate is 1 ms.
        let mut probe = PollingEdgeProbe::new(SquareWavePin::new(50), NoopDelay::new());
        let period = probe.measure(10);
        assert!(!period.is_no_signal());
        let err = period.as_nanos().abs_diff(1_000_000);
        assert!(err <= 10_000, "period off by {err} ns");
    }

    #[test]
    fn test_longer_window_same_estimate() {
        let mut probe = PollingEdgeProbe::new(SquareWavePin::new(50), NoopDelay::new());
        let period = probe.measure(50);
        let err = period.as_nanos().abs_diff(1_000_000);
        assert!(err <= 10_000, "period off by {err} ns");
    }

    #[test]
    fn test_silent_input_reports_no_signal() {
        let mut probe = PollingEdgeProbe::new(SilentPin, NoopDelay::new());
        let period = probe.measure(10);
        assert!(period.is_no_signal());
    }

    #[test]
    fn test_window_bounds_the_measurement_time() {
        // The probe sleeps once per sample and nowhere else, so the total
        // requested delay is exactly the window length.
        let total = std::rc::Rc::new(std::cell::RefCell::new(0u64));
        let mut probe =
            PollingEdgeProbe::new(SquareWavePin::new(50), CountingDelay(total.clone()));
        probe.measure(10);
        assert_eq!(*total.borrow(), 10_000_000);

        // A silent input must not extend the window waiting for an edge.
        let total = std::rc::Rc::new(std::cell::RefCell::new(0u64));
        let mut probe = PollingEdgeProbe::new(SilentPin, CountingDelay(total.clone()));
        let period = probe.measure(10);
        assert!(period.is_no_signal());
        assert_eq!(*total.borrow(), 10_000_000);
    }

    #[test]
    fn test_slow_signal_in_short_window() {
        // 3 full periods inside the window still produce an estimate;
        // fewer edges just means more variance, which is accepted.
        let mut probe = PollingEdgeProbe::new(SquareWavePin::new(150), NoopDelay::new());
        let period = probe.measure(10);
        assert!(!period.is_no_signal());
        let err = period.as_nanos().abs_diff(3_000_000);
        assert!(err <= 400_000, "period off by {err} ns");
    }
}
