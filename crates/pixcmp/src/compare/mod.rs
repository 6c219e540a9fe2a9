pub mod legacy;
pub mod scan;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::Raster;

pub use self::legacy::{legacy_channel_sum, legacy_channel_sum_equal};

/// Which code path produced a [`ComparisonResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonMethod {
    #[serde(rename = "Dimension Mismatch")]
    DimensionMismatch,
    #[serde(rename = "Pixel-by-Pixel Analysis")]
    PixelByPixel,
    #[serde(rename = "Channel Sum (legacy)")]
    ChannelSum,
}

impl ComparisonMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::DimensionMismatch => "Dimension Mismatch",
            Self::PixelByPixel => "Pixel-by-Pixel Analysis",
            Self::ChannelSum => "Channel Sum (legacy)",
        }
    }
}

impl fmt::Display for ComparisonMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison strategy selectable from config and CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Exhaustive per-pixel RGB comparison
    #[default]
    #[value(name = "pixel")]
    #[serde(rename = "pixel")]
    PixelByPixel,
    /// Legacy whole-image channel-sum equality
    ChannelSum,
}

impl Strategy {
    pub fn run<A: Raster + ?Sized, B: Raster + ?Sized>(self, a: &A, b: &B) -> ComparisonResult {
        match self {
            Self::PixelByPixel => compare(a, b),
            Self::ChannelSum => legacy_channel_sum(a, b),
        }
    }
}

/// Outcome of comparing two images. Built once, read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    exact_match: bool,
    similarity_percentage: f64,
    /// `+inf` on dimension mismatch; serialized as `null` in JSON.
    mean_squared_error: f64,
    matching_pixels: u64,
    total_pixels: u64,
    same_dimensions: bool,
    comparison_method: ComparisonMethod,
    details: String,
}

impl ComparisonResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        exact_match: bool,
        similarity_percentage: f64,
        mean_squared_error: f64,
        matching_pixels: u64,
        total_pixels: u64,
        same_dimensions: bool,
        comparison_method: ComparisonMethod,
        details: String,
    ) -> Self {
        Self {
            exact_match,
            similarity_percentage,
            mean_squared_error,
            matching_pixels,
            total_pixels,
            same_dimensions,
            comparison_method,
            details,
        }
    }

    pub fn exact_match(&self) -> bool {
        self.exact_match
    }

    /// Share of RGB-identical pixels, 0.0–100.0.
    pub fn similarity_percentage(&self) -> f64 {
        self.similarity_percentage
    }

    pub fn mean_squared_error(&self) -> f64 {
        self.mean_squared_error
    }

    pub fn matching_pixels(&self) -> u64 {
        self.matching_pixels
    }

    pub fn total_pixels(&self) -> u64 {
        self.total_pixels
    }

    pub fn same_dimensions(&self) -> bool {
        self.same_dimensions
    }

    pub fn comparison_method(&self) -> ComparisonMethod {
        self.comparison_method
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// True when at least `threshold` percent of pixels match.
    pub fn is_similar(&self, threshold: f64) -> bool {
        self.similarity_percentage >= threshold
    }
}

fn dimension_mismatch<A: Raster + ?Sized, B: Raster + ?Sized>(a: &A, b: &B) -> ComparisonResult {
    let (w1, h1) = a.dimensions();
    let (w2, h2) = b.dimensions();
    ComparisonResult::new(
        false,
        0.0,
        f64::INFINITY,
        0,
        a.pixel_count(),
        false,
        ComparisonMethod::DimensionMismatch,
        format!("Image 1: {w1}x{h1}, Image 2: {w2}x{h2}"),
    )
}

fn from_scan(width: u32, height: u32, totals: scan::ScanTotals) -> ComparisonResult {
    let total_pixels = width as u64 * height as u64;

    // Empty images are vacuously identical.
    let (similarity, mse) = if total_pixels == 0 {
        (100.0, 0.0)
    } else {
        (
            totals.matching as f64 / total_pixels as f64 * 100.0,
            totals.squared_error as f64 / (total_pixels * 3) as f64,
        )
    };

    ComparisonResult::new(
        totals.matching == total_pixels,
        similarity,
        mse,
        totals.matching,
        total_pixels,
        true,
        ComparisonMethod::PixelByPixel,
        format!("Analyzed {width}x{height} images with {total_pixels} total pixels"),
    )
}

/// Pixel-by-pixel comparison.
///
/// 1. Different dimensions short-circuit to a `DimensionMismatch` result
///    without reading any pixel data.
/// 2. Otherwise every pixel pair is compared on R, G and B (alpha ignored):
///    exact matches are counted and squared channel errors summed.
///
/// Large grids are scanned in parallel; the result is identical to
/// [`compare_sequential`].
pub fn compare<A: Raster + ?Sized, B: Raster + ?Sized>(a: &A, b: &B) -> ComparisonResult {
    if a.dimensions() != b.dimensions() {
        debug!(left = ?a.dimensions(), right = ?b.dimensions(), "dimension mismatch");
        return dimension_mismatch(a, b);
    }
    let (totals, parallel) = scan::auto(a.pixels(), b.pixels());
    let (width, height) = a.dimensions();
    debug!(width, height, matching = totals.matching, parallel, "pixel scan done");
    from_scan(width, height, totals)
}

/// Same as [`compare`], always on the calling thread.
pub fn compare_sequential<A: Raster + ?Sized, B: Raster + ?Sized>(
    a: &A,
    b: &B,
) -> ComparisonResult {
    if a.dimensions() != b.dimensions() {
        return dimension_mismatch(a, b);
    }
    let (width, height) = a.dimensions();
    from_scan(width, height, scan::sequential(a.pixels(), b.pixels()))
}

pub fn are_identical<A: Raster + ?Sized, B: Raster + ?Sized>(a: &A, b: &B) -> bool {
    compare(a, b).exact_match()
}

pub fn are_similar<A: Raster + ?Sized, B: Raster + ?Sized>(a: &A, b: &B, threshold: f64) -> bool {
    compare(a, b).is_similar(threshold)
}
