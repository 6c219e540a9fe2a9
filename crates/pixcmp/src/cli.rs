use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pixcmp::Strategy;
use pixcmp::config::{self, OutputFormat};

fn parse_threshold(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    config::validate_threshold(v)
}

#[derive(Parser)]
#[command(
    name = "pixcmp",
    about = "Compare two images pixel by pixel"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two images and report similarity (exit 0 = pass, 1 = fail)
    Compare {
        /// Left / reference image
        left: PathBuf,
        /// Right / current image
        right: PathBuf,
        /// Min similarity percentage (0–100) to pass (overrides config)
        #[arg(long, short = 't', value_parser = parse_threshold)]
        threshold: Option<f64>,
        /// Comparison strategy (overrides config)
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,
        /// Report format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Create pixcmp.toml with commented default settings
    Init {
        /// Overwrite an existing config
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compare_flags() {
        let cli = Cli::try_parse_from([
            "pixcmp",
            "compare",
            "a.png",
            "b.png",
            "--threshold",
            "95",
            "--strategy",
            "channel-sum",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Command::Compare {
                left,
                threshold,
                strategy,
                format,
                ..
            } => {
                assert_eq!(left, PathBuf::from("a.png"));
                assert_eq!(threshold, Some(95.0));
                assert_eq!(strategy, Some(Strategy::ChannelSum));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            Command::Init { .. } => panic!("expected compare"),
        }
    }

    #[test]
    fn rejects_threshold_above_100() {
        assert!(Cli::try_parse_from(["pixcmp", "compare", "a", "b", "-t", "150"]).is_err());
    }

    #[test]
    fn pixel_is_the_strategy_name() {
        let cli =
            Cli::try_parse_from(["pixcmp", "compare", "a", "b", "--strategy", "pixel"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Compare {
                strategy: Some(Strategy::PixelByPixel),
                ..
            }
        ));
    }
}
