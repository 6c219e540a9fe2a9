use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;

use super::{Config, OutputFormat, load, validate_threshold};
use crate::compare::Strategy;

/// Values extracted from the CLI that participate in the merge.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub threshold: Option<f64>,
    pub strategy: Option<Strategy>,
    pub format: Option<OutputFormat>,
}

/// `PIXCMP_*` environment variables.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub threshold: Option<f64>,
    pub strategy: Option<Strategy>,
    pub format: Option<OutputFormat>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let threshold = get("PIXCMP_THRESHOLD")
            .map(|v| v.parse::<f64>())
            .transpose()
            .context("PIXCMP_THRESHOLD must be a valid float")?;
        let strategy = get("PIXCMP_STRATEGY")
            .map(|v| Strategy::from_str(&v, true))
            .transpose()
            .map_err(|e| anyhow!("PIXCMP_STRATEGY: {e}"))?;
        let format = get("PIXCMP_FORMAT")
            .map(|v| OutputFormat::from_str(&v, true))
            .transpose()
            .map_err(|e| anyhow!("PIXCMP_FORMAT: {e}"))?;
        Ok(Self {
            threshold,
            strategy,
            format,
        })
    }
}

/// Fully resolved config after CLI > env > file > defaults merge.
#[derive(Debug)]
pub struct ResolvedRunConfig {
    pub threshold: f64,
    pub strategy: Strategy,
    pub format: OutputFormat,
}

impl ResolvedRunConfig {
    pub fn new(cli: CliOverrides) -> Result<Self> {
        let file = load()?;
        let env = EnvOverrides::from_env()?;
        Self::merge(file, env, cli)
    }

    pub fn merge(file: Config, env: EnvOverrides, cli: CliOverrides) -> Result<Self> {
        let threshold = cli
            .threshold
            .or(env.threshold)
            .unwrap_or(file.compare.threshold);
        validate_threshold(threshold).map_err(|e| anyhow!("{e}"))?;

        Ok(Self {
            threshold,
            strategy: cli
                .strategy
                .or(env.strategy)
                .unwrap_or(file.compare.strategy),
            format: cli.format.or(env.format).unwrap_or(file.report.format),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Result<EnvOverrides> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvOverrides::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let r = ResolvedRunConfig::merge(
            Config::default(),
            EnvOverrides::default(),
            CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(r.threshold, 100.0);
        assert_eq!(r.strategy, Strategy::PixelByPixel);
        assert_eq!(r.format, OutputFormat::Text);
    }

    #[test]
    fn env_beats_file_and_cli_beats_env() {
        let mut file = Config::default();
        file.compare.threshold = 50.0;
        file.report.format = OutputFormat::Json;

        let e = env(&[("PIXCMP_THRESHOLD", "80"), ("PIXCMP_STRATEGY", "channel-sum")]).unwrap();
        let r = ResolvedRunConfig::merge(file.clone(), e, CliOverrides::default()).unwrap();
        assert_eq!(r.threshold, 80.0);
        assert_eq!(r.strategy, Strategy::ChannelSum);
        assert_eq!(r.format, OutputFormat::Json);

        let e = env(&[("PIXCMP_THRESHOLD", "80")]).unwrap();
        let cli = CliOverrides {
            threshold: Some(99.0),
            strategy: None,
            format: Some(OutputFormat::Text),
        };
        let r = ResolvedRunConfig::merge(file, e, cli).unwrap();
        assert_eq!(r.threshold, 99.0);
        assert_eq!(r.format, OutputFormat::Text);
    }

    #[test]
    fn bad_env_values_are_errors() {
        assert!(env(&[("PIXCMP_THRESHOLD", "lots")]).is_err());
        assert!(env(&[("PIXCMP_STRATEGY", "ssim")]).is_err());
        assert!(env(&[("PIXCMP_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn env_threshold_is_validated() {
        let e = env(&[("PIXCMP_THRESHOLD", "250")]).unwrap();
        assert!(
            ResolvedRunConfig::merge(Config::default(), e, CliOverrides::default()).is_err()
        );
    }
}
