use std::fmt::Write;
use std::path::Path;
use std::time::Duration;

use super::Verdict;
use crate::compare::ComparisonResult;

pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

/// Plain-text result block (no colour).
pub fn format_result(result: &ComparisonResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Image Comparison Results ===");
    let _ = writeln!(out, "Comparison Method: {}", result.comparison_method());
    let _ = writeln!(out, "Exact Match: {}", yes_no(result.exact_match()));
    let _ = writeln!(out, "Similarity: {:.2}%", result.similarity_percentage());
    let _ = writeln!(
        out,
        "Matching Pixels: {} / {}",
        result.matching_pixels(),
        result.total_pixels()
    );
    let _ = writeln!(out, "Same Dimensions: {}", yes_no(result.same_dimensions()));
    if result.mean_squared_error().is_finite() {
        let _ = writeln!(out, "Mean Squared Error: {:.2}", result.mean_squared_error());
    } else {
        let _ = writeln!(out, "Mean Squared Error: undefined");
    }
    if !result.details().is_empty() {
        let _ = writeln!(out, "Details: {}", result.details());
    }
    out.push_str("===============================");
    out
}

/// Print the result block, the similarity verdict and the pass/fail line.
pub fn print_report(
    left: &Path,
    right: &Path,
    result: &ComparisonResult,
    threshold: f64,
    elapsed: Duration,
) {
    println!("Left:  {}", left.display());
    println!("Right: {}", right.display());
    println!();
    println!("{}", format_result(result));
    println!();

    let verdict = Verdict::of(result);
    let colour = match verdict {
        Verdict::Identical | Verdict::VerySimilar => "32",
        Verdict::SomewhatSimilar | Verdict::SlightlySimilar => "33",
        Verdict::VeryDifferent => "31",
    };
    println!("\x1b[{colour}m{}\x1b[0m", verdict.describe());

    let time_suffix = format!("  \x1b[2m{}\x1b[0m", format_duration(elapsed));
    if result.is_similar(threshold) {
        println!("  \x1b[32mPASS\x1b[0m  similarity >= {threshold}%{time_suffix}");
    } else {
        println!("  \x1b[31mFAIL\x1b[0m  similarity < {threshold}%{time_suffix}");
    }
}
