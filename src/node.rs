//! Node main loop
//!
//! Ties the acquisition cycle and the uploader together: associate once,
//! then run cycles forever with a fixed inter-cycle delay. No state
//! survives an iteration except the immutable configuration; a record is
//! dropped the moment its upload attempt returns.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::acquisition::AcquisitionCycle;
use crate::config::NodeConfig;
use crate::ports::network::NetworkPort;
use crate::ports::oscillator::OscillatorPort;
use crate::ports::pulse::PulseProbePort;
use crate::ports::thermocouple::ThermocouplePort;
use crate::ports::transport::TelemetryTransport;
use crate::uploader::TelemetryUploader;

/// The assembled sensor node
pub struct Node<'a, O, P, T, U, N, D> {
    cycle: AcquisitionCycle<O, P, T, D>,
    uploader: TelemetryUploader<'a, U>,
    network: N,
    delay: D,
    config: &'a NodeConfig<'a>,
}

impl<'a, O, P, T, U, N, D> Node<'a, O, P, T, U, N, D>
where
    O: OscillatorPort,
    P: PulseProbePort,
    T: ThermocouplePort,
    U: TelemetryTransport,
    N: NetworkPort,
    D: DelayNs,
{
    /// Assemble a node from its parts
    pub fn new(
        cycle: AcquisitionCycle<O, P, T, D>,
        uploader: TelemetryUploader<'a, U>,
        network: N,
        delay: D,
        config: &'a NodeConfig<'a>,
    ) -> Self {
        Self {
            cycle,
            uploader,
            network,
            delay,
            config,
        }
    }

    /// Block inside the connectivity collaborator until the link is up.
    ///
    /// Deliberately unbounded: the node is useless without connectivity,
    /// so it waits rather than degrading.
    pub fn connect(&mut self) {
        if !self.network.is_connected() {
            info!("connecting to {}", self.config.wifi_ssid);
            self.network
                .connect(self.config.wifi_ssid, self.config.wifi_password);
        }
        info!("network connected");
    }

    /// One loop iteration: acquire, upload, drop the record
    pub fn run_once(&mut self) {
        let record = self.cycle.run_once();
        // At-most-once delivery: a failure was already logged by the
        // uploader and the next record is an independent attempt.
        let _ = self.uploader.upload(&record);
    }

    /// Run forever. The only termination is external process kill.
    pub fn run(&mut self) -> ! {
        self.connect();
        loop {
            self.run_once();
            self.delay.delay_ms(self.config.loop_delay_ms);
        }
    }
}
