use anyhow::Result;
use clap::Parser;
use request_catcher::{config, server};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Catch and inspect HTTP requests sent to any subdomain.
#[derive(Parser)]
#[command(name = "request-catcher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file (overrides environment defaults; falls back to CONFIG_FILE)
    config_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (config, source) = config::load(cli.config_file.as_deref())?;
    init_tracing(&config.log_level, &config.log_format);
    config.print_summary(&source);

    server::run(config).await
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
