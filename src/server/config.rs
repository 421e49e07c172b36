use super::RequestsLoggingLevel;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub host: IpAddr,
    pub port: u16,
    /// Port of the Prometheus scrape endpoint, 0 disables it.
    pub metrics_port: u16,
    /// Allowed CORS origins. Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            metrics_port: 9091,
            cors_origins: Vec::new(),
        }
    }
}
