use std::time::Duration;

/// Runtime knobs for discovery and scanning, built by the CLI.
#[derive(Clone, Debug)]
pub struct Config {
    /// UDP port master servers listen on.
    pub master_port: u16,
    /// Per-read timeout while draining master reply packets.
    pub master_timeout: Duration,
    /// Timeout for the single status reply of one game server.
    pub status_timeout: Duration,
    /// Maximum number of status queries in flight at once.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_port: 27950,
            master_timeout: Duration::from_millis(250),
            status_timeout: Duration::from_millis(100),
            concurrency: 64,
        }
    }
}
