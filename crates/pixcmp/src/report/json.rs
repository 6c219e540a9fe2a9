use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::compare::ComparisonResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    left: &'a Path,
    right: &'a Path,
    threshold: f64,
    pass: bool,
    result: &'a ComparisonResult,
}

pub fn to_json(
    left: &Path,
    right: &Path,
    result: &ComparisonResult,
    threshold: f64,
) -> Result<String> {
    let report = JsonReport {
        left,
        right,
        threshold,
        pass: result.is_similar(threshold),
        result,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::grid::{Pixel, PixelGrid};

    #[test]
    fn report_carries_result_and_verdict() {
        let a = PixelGrid::filled(2, 2, Pixel::rgb(0, 0, 0));
        let b = PixelGrid::filled(2, 2, Pixel::rgb(255, 255, 255));
        let json = to_json(Path::new("a.png"), Path::new("b.png"), &compare(&a, &b), 90.0).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["left"], "a.png");
        assert_eq!(v["pass"], false);
        assert_eq!(v["result"]["mean_squared_error"], 65025.0);
        assert_eq!(v["result"]["matching_pixels"], 0);
        assert_eq!(v["result"]["comparison_method"], "Pixel-by-Pixel Analysis");
    }
}
