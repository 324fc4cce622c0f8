use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 9101;
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(30);
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

pub const ACTIVE_USERS_METRIC: &str = "node_active_users_count";
pub const ACTIVE_USERS_HELP: &str = "Number of active user sessions";
pub const SAMPLE_FAILURES_METRIC: &str = "node_active_users_sample_failures_total";
pub const SAMPLE_FAILURES_HELP: &str = "Number of samples that fell back to zero after a failure";

/// Runtime settings of the exporter. The binary always runs with `Default`.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub listen_addr: SocketAddr,
    pub sample_interval: Duration,
    pub command_timeout: Duration,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            sample_interval: SAMPLE_INTERVAL,
            command_timeout: COMMAND_TIMEOUT,
        }
    }
}
