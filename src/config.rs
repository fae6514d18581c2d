//! Node configuration
//!
//! All runtime constants live in one immutable struct built at startup and
//! passed by reference into the loop and the uploader. There is no ambient
//! global configuration.

/// Default settle delay after an oscillator state change (ms). Sampling
/// right after a transition would capture the transient, not the
/// steady-state period.
pub const DEFAULT_SETTLE_MS: u32 = 500;

/// Default pulse measurement window (ms)
pub const DEFAULT_WINDOW_MS: u32 = 10;

/// Default delay between acquisition cycles (ms). The free ingestion tier
/// rejects updates faster than one per 15 s.
pub const DEFAULT_LOOP_DELAY_MS: u32 = 15_000;

/// Immutable node configuration
#[derive(Clone, Copy, Debug)]
pub struct NodeConfig<'a> {
    /// Access point to associate with before entering the loop
    pub wifi_ssid: &'a str,
    /// Pre-shared key; open networks pass `None`
    pub wifi_password: Option<&'a str>,
    /// Telemetry ingestion endpoint URL
    pub endpoint_url: &'a str,
    /// Write credential injected into every payload
    pub api_key: &'a str,
    /// Delay between acquisition cycles (ms)
    pub loop_delay_ms: u32,
    /// Settle delay after each oscillator state change (ms)
    pub settle_ms: u32,
    /// Pulse measurement window (ms)
    pub window_ms: u32,
}

impl<'a> NodeConfig<'a> {
    /// Build a configuration with the default timing constants
    pub const fn new(
        wifi_ssid: &'a str,
        wifi_password: Option<&'a str>,
        endpoint_url: &'a str,
        api_key: &'a str,
    ) -> Self {
        Self {
            wifi_ssid,
            wifi_password,
            endpoint_url,
            api_key,
            loop_delay_ms: DEFAULT_LOOP_DELAY_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            window_ms: DEFAULT_WINDOW_MS,
        }
    }
}
