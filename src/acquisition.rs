//! Acquisition cycle - the fixed measurement sequence
//!
//! One cycle: force the oscillator low, settle, sample the pulse input;
//! force it high, settle, sample again; read the thermocouple; assemble a
//! record. The sequence is strictly sequential and restarts from the
//! forced-low state every iteration.
//!
//! A thermocouple fault in the final step is contained: the durations
//! gathered before it still go into the record. Partial data beats no
//! data for a monitoring node.
//!
//! Both pulse samples read the same physical input. Whether the signal
//! source changes behaviour with the oscillator state is external wiring
//! (a relay shorting out a resistor on the fixture); the software only
//! guarantees the forced state and the settle time before sampling.

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::config::NodeConfig;
use crate::domain::record::AcquisitionRecord;
use crate::ports::oscillator::OscillatorPort;
use crate::ports::pulse::PulseProbePort;
use crate::ports::thermocouple::ThermocouplePort;

/// The repeatable measurement sequence
///
/// Owns the oscillator output exclusively: no other component writes it,
/// so the cycle's program order is the only sequencing needed.
pub struct AcquisitionCycle<O, P, T, D> {
    oscillator: O,
    probe: P,
    thermocouple: T,
    delay: D,
    settle_ms: u32,
    window_ms: u32,
}

impl<O, P, T, D> AcquisitionCycle<O, P, T, D>
where
    O: OscillatorPort,
    P: PulseProbePort,
    T: ThermocouplePort,
    D: DelayNs,
{
    /// Create a cycle with the configured settle delay and window
    pub fn new(oscillator: O, probe: P, thermocouple: T, delay: D, config: &NodeConfig<'_>) -> Self {
        Self {
            oscillator,
            probe,
            thermocouple,
            delay,
            settle_ms: config.settle_ms,
            window_ms: config.window_ms,
        }
    }

    /// Run one full acquisition sequence and assemble the record
    pub fn run_once(&mut self) -> AcquisitionRecord {
        debug!("measuring low-phase pulse width");
        self.oscillator.set_low();
        self.delay.delay_ms(self.settle_ms);
        let low_phase = self.probe.measure(self.window_ms);

        debug!("measuring high-phase pulse width");
        self.oscillator.set_high();
        self.delay.delay_ms(self.settle_ms);
        let high_phase = self.probe.measure(self.window_ms);
        if let Some(hz) = high_phase.frequency_hz() {
            debug!("high-phase signal at {hz} Hz");
        }

        match self.thermocouple.read() {
            Ok(reading) => {
                info!(
                    "temperature {} C (cold junction {} C)",
                    reading.thermocouple_c, reading.cold_junction_c
                );
                AcquisitionRecord::ok(reading.thermocouple_c, low_phase, high_phase)
            }
            Err(fault) => {
                warn!("failed to read thermocouple: {fault}");
                AcquisitionRecord::faulted(fault, low_phase, high_phase)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    use crate::domain::{CompensatedReading, PulseDuration, SensorFault};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Step {
        ForcedLow,
        ForcedHigh,
        Sampled,
        ReadTemperature,
    }

    /// Shared log of cycle steps across all three ports
    type Trace = std::rc::Rc<std::cell::RefCell<Vec<Step>>>;

    struct TracingOscillator(Trace);

    impl OscillatorPort for TracingOscillator {
        fn set_low(&mut self) {
            self.0.borrow_mut().push(Step::ForcedLow);
        }
        fn set_high(&mut self) {
            self.0.borrow_mut().push(Step::ForcedHigh);
        }
    }

    struct TracingProbe {
        trace: Trace,
        durations: Vec<PulseDuration>,
    }

    impl PulseProbePort for TracingProbe {
        fn measure(&mut self, window_ms: u32) -> PulseDuration {
            assert_eq!(window_ms, 10);
            self.trace.borrow_mut().push(Step::Sampled);
            self.durations.remove(0)
        }
    }

    struct ScriptedThermocouple {
        trace: Trace,
        result: Result<f32, SensorFault>,
    }

    impl ThermocouplePort for ScriptedThermocouple {
        fn read(&mut self) -> Result<CompensatedReading, SensorFault> {
            self.trace.borrow_mut().push(Step::ReadTemperature);
            self.result.map(|t| CompensatedReading {
                thermocouple_c: t,
                cold_junction_c: 23.0,
            })
        }
    }

    fn build_cycle(
        result: Result<f32, SensorFault>,
    ) -> (
        AcquisitionCycle<TracingOscillator, TracingProbe, ScriptedThermocouple, NoopDelay>,
        Trace,
    ) {
        let steps: Trace = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let config = NodeConfig::new("lab", None, "https://example.org/update", "KEY");
        let cycle = AcquisitionCycle::new(
            TracingOscillator(steps.clone()),
            TracingProbe {
                trace: steps.clone(),
                durations: vec![
                    PulseDuration::from_nanos(1_000_000),
                    PulseDuration::from_nanos(2_000_000),
                ],
            },
            ScriptedThermocouple {
                trace: steps.clone(),
                result,
            },
            NoopDelay::new(),
            &config,
        );
        (cycle, steps)
    }

    #[test]
    fn test_cycle_sequence_and_record() {
        let (mut cycle, trace) = build_cycle(Ok(25.0));
        let record = cycle.run_once();

        assert_eq!(
            *trace.borrow(),
            [
                Step::ForcedLow,
                Step::Sampled,
                Step::ForcedHigh,
                Step::Sampled,
                Step::ReadTemperature,
            ]
        );
        assert_eq!(record.temperature.value(), Some(25.0));
        assert_eq!(record.low_phase.as_nanos(), 1_000_000);
        assert_eq!(record.high_phase.as_nanos(), 2_000_000);
        assert_eq!(record.status.as_str(), "OK");
    }

    #[test]
    fn test_temperature_fault_keeps_pulse_measurements() {
        let (mut cycle, _trace) = build_cycle(Err(SensorFault::OpenCircuit));
        let record = cycle.run_once();

        assert!(record.temperature.is_fault());
        assert!(record.status.contains("open circuit"));
        // Steps 1-4 survive the step-5 fault.
        assert_eq!(record.low_phase.as_nanos(), 1_000_000);
        assert_eq!(record.high_phase.as_nanos(), 2_000_000);
    }

    #[test]
    fn test_every_record_is_well_formed() {
        for result in [Ok(101.25), Err(SensorFault::ShortToVcc)] {
            let (mut cycle, _trace) = build_cycle(result);
            let record = cycle.run_once();
            // Exactly one of value/fault, two non-negative durations.
            assert!(record.temperature.value().is_some() != record.temperature.fault().is_some());
            assert!(!record.status.is_empty());
        }
    }
}
