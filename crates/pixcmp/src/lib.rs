//! Pixel-by-pixel image comparison.
//!
//! Decode two images into [`PixelGrid`]s, then [`compare`] them into a
//! [`ComparisonResult`]: exact-match flag, percentage of RGB-identical pixels
//! and mean squared error. [`legacy_channel_sum_equal`] keeps the old, weaker
//! whole-image channel-sum check available under its own name.

pub mod compare;
pub mod config;
pub mod decode;
pub mod grid;
pub mod report;

pub use compare::{
    ComparisonMethod, ComparisonResult, Strategy, are_identical, are_similar, compare,
    compare_sequential, legacy_channel_sum, legacy_channel_sum_equal,
};
pub use decode::{DecodeError, decode, decode_bytes};
pub use grid::{Channel, GridError, Pixel, PixelGrid, Raster};
