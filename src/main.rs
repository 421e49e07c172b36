use anyhow::{Context, Result};
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use album_api::album_store::{AlbumStore, InMemoryAlbumStore};
use album_api::config::{self, LogFormat};
use album_api::server::{run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(version, about = "In-memory album catalog HTTP API")]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP server to.
    #[clap(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8000)]
    pub port: u16,

    /// The port to serve Prometheus metrics on. 0 disables the metrics server.
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// How much of each request the logging layer reports.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Log output format.
    #[clap(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Allowed CORS origin, repeatable. When omitted any origin is allowed.
    #[clap(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    /// Start with an empty catalog instead of the sample albums.
    #[clap(long)]
    pub no_seed: bool,
}

impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            host: args.host,
            port: args.port,
            metrics_port: args.metrics_port,
            logging_level: args.logging_level.clone(),
            log_format: args.log_format,
            cors_origins: args.cors_origins.clone(),
            seed: !args.no_seed,
        }
    }
}

fn init_tracing(format: LogFormat) -> Result<()> {
    let fmt_layer = match format {
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let file_config = match &cli_args.config {
        Some(path) => Some(config::FileConfig::load(path)?),
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    init_tracing(app_config.log_format)?;

    info!("Album API starting up...");
    if let Some(path) = &cli_args.config {
        info!("Configuration loaded from {:?}", path);
    }
    info!("  bind: {}:{}", app_config.host, app_config.port);
    info!("  requests logging level: {}", app_config.logging_level);

    let album_store = if app_config.seed {
        InMemoryAlbumStore::seeded()
    } else {
        InMemoryAlbumStore::empty()
    };
    info!("Loaded {} initial albums", album_store.len());

    run_server(Arc::new(album_store), app_config.server_config()).await
}
