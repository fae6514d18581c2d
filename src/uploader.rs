//! Telemetry uploader
//!
//! Serializes one record into the endpoint's fixed channel schema and
//! issues a single POST through the transport port. Delivery is
//! at-most-once: a failed upload is logged and the record dropped, never
//! queued or retried, so a network problem cannot stall acquisition.

use log::{debug, warn};
use serde::Serialize;

use crate::config::NodeConfig;
use crate::domain::pulse::PulseDuration;
use crate::domain::record::{AcquisitionRecord, TemperatureReading};
use crate::ports::transport::{TelemetryTransport, TransportError};

/// Upper bound for one serialized payload
const PAYLOAD_BUF_LEN: usize = 256;

/// Payload in the endpoint's channel schema: four data fields plus the
/// injected write credential. Field names are fixed by the remote side.
#[derive(Serialize)]
struct TelemetryPayload<'a> {
    field1: TemperatureReading,
    field2: PulseDuration,
    field3: PulseDuration,
    field4: &'a str,
    api_key: &'a str,
}

/// Posts acquisition records to the remote time-series endpoint
pub struct TelemetryUploader<'a, T> {
    transport: T,
    url: &'a str,
    api_key: &'a str,
}

impl<'a, T: TelemetryTransport> TelemetryUploader<'a, T> {
    /// Create an uploader bound to the configured endpoint and credential
    pub fn new(transport: T, config: &NodeConfig<'a>) -> Self {
        Self {
            transport,
            url: config.endpoint_url,
            api_key: config.api_key,
        }
    }

    /// Serialize and post one record.
    ///
    /// Failure is non-fatal to the caller: it is logged here, the record
    /// is gone, and the next cycle's upload is an independent attempt.
    pub fn upload(&mut self, record: &AcquisitionRecord) -> Result<(), TransportError> {
        let payload = TelemetryPayload {
            field1: record.temperature,
            field2: record.low_phase,
            field3: record.high_phase,
            field4: record.status.as_str(),
            api_key: self.api_key,
        };

        let mut buf = [0u8; PAYLOAD_BUF_LEN];
        let len = serde_json_core::to_slice(&payload, &mut buf)
            .map_err(|_| TransportError::PayloadTooLarge)?;

        match self.transport.post_json(self.url, &buf[..len]) {
            Ok(()) => {
                debug!("telemetry update sent");
                Ok(())
            }
            Err(e) => {
                warn!("failed to send telemetry update: {e}");
                Err(e)
            }
        }
    }
}
