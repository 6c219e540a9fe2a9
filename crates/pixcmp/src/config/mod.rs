pub mod resolve;
pub mod template;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::compare::Strategy;

pub use self::resolve::{CliOverrides, EnvOverrides, ResolvedRunConfig};
pub use self::template::{config_file_exists, write_template};

pub(crate) const CONFIG_FILE: &str = "pixcmp.toml";

/// Default pass threshold: only identical images pass.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Minimum similarity percentage (0-100) for a comparison to pass.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub strategy: Strategy,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            strategy: Strategy::default(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

pub fn validate_threshold(v: f64) -> Result<f64, String> {
    if !(0.0..=100.0).contains(&v) {
        return Err(format!("threshold must be between 0 and 100, got {v}"));
    }
    Ok(v)
}

pub fn parse(content: &str, origin: &Path) -> Result<Config> {
    let config: Config =
        toml::from_str(content).with_context(|| format!("Failed to parse {}", origin.display()))?;
    validate_threshold(config.compare.threshold)
        .map_err(|e| anyhow::anyhow!("compare.{e}"))?;
    Ok(config)
}

/// Load `pixcmp.toml` from the working directory. A missing file yields the
/// defaults.
pub fn load() -> Result<Config> {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(s: &str) -> Result<Config> {
        parse(s, Path::new(CONFIG_FILE))
    }

    #[test]
    fn empty_file_is_defaults() {
        let c = parse_str("").unwrap();
        assert_eq!(c.compare.threshold, DEFAULT_THRESHOLD);
        assert_eq!(c.compare.strategy, Strategy::PixelByPixel);
        assert_eq!(c.report.format, OutputFormat::Text);
    }

    #[test]
    fn reads_all_sections() {
        let c = parse_str(
            "[compare]\nthreshold = 95.5\nstrategy = \"channel-sum\"\n\n[report]\nformat = \"json\"\n",
        )
        .unwrap();
        assert_eq!(c.compare.threshold, 95.5);
        assert_eq!(c.compare.strategy, Strategy::ChannelSum);
        assert_eq!(c.report.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = parse_str("[compare]\nthreshold = 101.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("compare.threshold must be between 0 and 100"));
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(parse_str("[compare]\nstrategy = \"ssim\"\n").is_err());
    }

    #[test]
    fn validate_threshold_bounds() {
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(100.0).is_ok());
        assert!(validate_threshold(-0.1).is_err());
    }
}
