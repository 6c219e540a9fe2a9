mod cli;
mod commands;

use clap::Parser;
use pixcmp::config::{CliOverrides, ResolvedRunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pixcmp=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Init { force } => {
            commands::init(force)?;
        }
        cli::Command::Compare {
            left,
            right,
            threshold,
            strategy,
            format,
        } => {
            let overrides = CliOverrides {
                threshold,
                strategy,
                format,
            };
            let config = ResolvedRunConfig::new(overrides)?;
            let code = commands::compare(config, &left, &right)?;
            std::process::exit(code);
        }
    }

    Ok(())
}
