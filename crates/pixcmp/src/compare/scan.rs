use std::ops::Add;

use rayon::prelude::*;

use crate::grid::Pixel;

/// Grids with at least this many pixels are scanned on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 65_536;

/// Pixels handed to one rayon task.
const CHUNK_PIXELS: usize = 16_384;

/// Running totals of a pixel scan. Integer sums, so any partitioning of the
/// scan reduces to the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub matching: u64,
    pub squared_error: u64,
}

impl Add for ScanTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            matching: self.matching + rhs.matching,
            squared_error: self.squared_error + rhs.squared_error,
        }
    }
}

fn scan_chunk(left: &[Pixel], right: &[Pixel]) -> ScanTotals {
    left.iter()
        .zip(right)
        .fold(ScanTotals::default(), |acc, (l, r)| ScanTotals {
            matching: acc.matching + l.rgb_eq(r) as u64,
            squared_error: acc.squared_error + l.squared_error(r),
        })
}

pub fn sequential(left: &[Pixel], right: &[Pixel]) -> ScanTotals {
    scan_chunk(left, right)
}

pub fn parallel(left: &[Pixel], right: &[Pixel]) -> ScanTotals {
    left.par_chunks(CHUNK_PIXELS)
        .zip(right.par_chunks(CHUNK_PIXELS))
        .fold(ScanTotals::default, |acc, (l, r)| acc + scan_chunk(l, r))
        .reduce(ScanTotals::default, |a, b| a + b)
}

/// Pick the parallel path for large inputs, sequential otherwise.
/// Returns the totals and whether the parallel path ran.
pub fn auto(left: &[Pixel], right: &[Pixel]) -> (ScanTotals, bool) {
    if left.len() >= PARALLEL_THRESHOLD {
        (parallel(left, right), true)
    } else {
        (sequential(left, right), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic pseudo-random pixels (LCG) so tests need no rand crate.
    fn noise(len: usize, seed: u32) -> Vec<Pixel> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                let [r, g, b, a] = state.to_le_bytes();
                Pixel::rgba(r % 4, g % 4, b % 4, a)
            })
            .collect()
    }

    #[test]
    fn parallel_matches_sequential() {
        let len = PARALLEL_THRESHOLD * 2 + 123;
        let left = noise(len, 7);
        let right = noise(len, 11);
        assert_eq!(parallel(&left, &right), sequential(&left, &right));
    }

    #[test]
    fn auto_uses_parallel_only_above_threshold() {
        let small = vec![Pixel::default(); 10];
        assert!(!auto(&small, &small).1);
        let big = vec![Pixel::default(); PARALLEL_THRESHOLD];
        let (totals, parallel) = auto(&big, &big);
        assert!(parallel);
        assert_eq!(totals.matching, PARALLEL_THRESHOLD as u64);
        assert_eq!(totals.squared_error, 0);
    }

    #[test]
    fn empty_scan_is_zero() {
        assert_eq!(sequential(&[], &[]), ScanTotals::default());
        assert_eq!(parallel(&[], &[]), ScanTotals::default());
    }
}
