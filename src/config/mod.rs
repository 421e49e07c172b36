mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use std::net::IpAddr;

/// Output format of the process-wide log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub host: IpAddr,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub log_format: LogFormat,
    pub cors_origins: Vec<String>,
    pub seed: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        let server = ServerConfig::default();
        CliConfig {
            host: server.host,
            port: server.port,
            metrics_port: server.metrics_port,
            logging_level: server.requests_logging_level,
            log_format: LogFormat::default(),
            cors_origins: server.cors_origins,
            seed: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub log_format: LogFormat,
    pub cors_origins: Vec<String>,
    pub seed: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let host = match file.host {
            Some(host) => host
                .parse::<IpAddr>()
                .map_err(|_| anyhow!("Invalid host in config file: {}", host))?,
            None => cli.host,
        };

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = match file.logging_level {
            Some(level) => parse_logging_level(&level)
                .ok_or_else(|| anyhow!("Invalid logging_level in config file: {}", level))?,
            None => cli.logging_level.clone(),
        };

        let log_format = match file.log_format {
            Some(format) => parse_log_format(&format)
                .ok_or_else(|| anyhow!("Invalid log_format in config file: {}", format))?,
            None => cli.log_format,
        };

        let cors_origins = file
            .cors_origins
            .unwrap_or_else(|| cli.cors_origins.clone());
        let seed = file.seed.unwrap_or(cli.seed);

        Ok(Self {
            host,
            port,
            metrics_port,
            logging_level,
            log_format,
            cors_origins,
            seed,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            host: self.host,
            port: self.port,
            metrics_port: self.metrics_port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn parse_log_format(s: &str) -> Option<LogFormat> {
    LogFormat::from_str(s, true).ok()
}
