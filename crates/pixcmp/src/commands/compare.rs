use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use pixcmp::config::{OutputFormat, ResolvedRunConfig};
use pixcmp::decode;
use pixcmp::report::{json, terminal};

/// `pixcmp compare` — decode, compare, report.
/// Returns exit code: 0 = similarity meets the threshold, 1 = it does not.
pub fn compare(config: ResolvedRunConfig, left: &Path, right: &Path) -> Result<i32> {
    let start = Instant::now();

    let left_grid = decode(left).with_context(|| format!("Failed to load {}", left.display()))?;
    let right_grid =
        decode(right).with_context(|| format!("Failed to load {}", right.display()))?;
    debug!(strategy = ?config.strategy, threshold = config.threshold, "comparing");

    let result = config.strategy.run(&left_grid, &right_grid);
    let pass = result.is_similar(config.threshold);
    debug!(
        method = %result.comparison_method(),
        similarity = result.similarity_percentage(),
        pass,
        "comparison finished"
    );

    match config.format {
        OutputFormat::Text => {
            terminal::print_report(left, right, &result, config.threshold, start.elapsed())
        }
        OutputFormat::Json => println!("{}", json::to_json(left, right, &result, config.threshold)?),
    }

    Ok(if pass { 0 } else { 1 })
}
