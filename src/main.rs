//! HBnB catalog server entry point.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (0.0.0.0:5000, text logs)
//! cargo run
//!
//! # Override the bind address and emit JSON logs
//! cargo run -- --listen 127.0.0.1:8080 --log-format json
//!
//! # Validate configuration and exit
//! cargo run -- --check-config
//! ```

use anyhow::Result;
use clap::Parser;
use hbnb::config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// In-memory property-rental catalog served over REST.
#[derive(Parser)]
#[command(name = "hbnb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN
    #[arg(long)]
    listen: Option<String>,

    /// Log format (`text` or `json`), overrides LOG_FORMAT
    #[arg(long)]
    log_format: Option<String>,

    /// Validate configuration, print a summary and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    if cli.check_config {
        tracing::info!("Configuration is valid");
        return Ok(());
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting HBnB server");
    hbnb::server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
