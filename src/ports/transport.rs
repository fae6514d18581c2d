//! Telemetry transport port - abstraction for the upload request
//!
//! This trait allows the uploader to post a serialized record without
//! knowing the network stack (WiFi HTTP client, mock, etc.)

use core::fmt;

/// Error type for upload operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The link is not associated
    NotConnected,
    /// The request never completed at the transport level
    SendFailed,
    /// The serialized record did not fit the payload buffer
    PayloadTooLarge,
}

impl TransportError {
    /// Human-readable description, used when logging failed uploads
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransportError::NotConnected => "not connected",
            TransportError::SendFailed => "send failed",
            TransportError::PayloadTooLarge => "payload too large",
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for posting telemetry payloads
pub trait TelemetryTransport {
    /// Issue a single `Content-Type: application/json` POST of `body` to
    /// `url`.
    ///
    /// The response body is ignored; anything other than a transport-level
    /// failure counts as success. Implementations do not retry - delivery
    /// is at-most-once by design.
    fn post_json(&mut self, url: &str, body: &[u8]) -> Result<(), TransportError>;
}
