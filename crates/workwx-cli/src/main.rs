// ABOUTME: Entry point for the workwx binary.
// ABOUTME: Loads config, then decodes callback payloads or reports refresh schedules.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workwx_cli::config::Config;

#[derive(Parser)]
#[command(name = "workwx")]
#[command(about = "Inspect WeCom callback payloads and token refresh schedules")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, env = "WORKWX_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve decrypted callback payloads and print one line per message
    Decode {
        /// Payload files; reads stdin when empty or `-`
        paths: Vec<PathBuf>,
    },

    /// Show when a freshly fetched token would be refreshed
    Schedule {
        /// Token lifetime in seconds, as returned by the server
        #[arg(long)]
        ttl: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workwx=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Decode { paths } => {
            workwx_cli::decode(&paths, &mut stdout).await?;
        }
        Commands::Schedule { ttl } => {
            let config = Config::load(cli.config).context("Failed to load config")?;
            workwx_cli::schedule(&config, ttl, &mut stdout)?;
        }
    }
    Ok(())
}
