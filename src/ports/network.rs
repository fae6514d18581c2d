//! Network port - abstraction for the wireless connectivity collaborator
//!
//! Association is the collaborator's job, not the core's. The node calls
//! `connect` once before entering the loop and trusts the collaborator to
//! re-establish the link if it drops.

/// Port for wireless link management
///
/// `connect` blocks until the link is up, retrying indefinitely if it has
/// to. That is deliberate: the node is useless without connectivity, so it
/// waits rather than degrading.
pub trait NetworkPort {
    /// Whether the link is currently associated
    fn is_connected(&self) -> bool;

    /// Associate with the given access point. Open networks pass `None`
    /// for the password. Blocks until connected.
    fn connect(&mut self, ssid: &str, password: Option<&str>);
}
