//! Code Documentation Agent - Entry Point
//!
//! Binary entry point: loads configuration, initializes logging, and runs
//! the HTTP server until shutdown.

use clap::Parser;
use cda_infrastructure::config::ConfigLoader;
use cda_infrastructure::logging::init_logging;
use cda_server::run;

/// Command line interface for the Code Documentation Agent
#[derive(Parser, Debug)]
#[command(name = "cda")]
#[command(about = "Code Documentation Agent - automated source documentation service")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;
    run(config).await?;
    Ok(())
}
