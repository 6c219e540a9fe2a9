use crate::compare::{ComparisonMethod, ComparisonResult};
use crate::grid::{Channel, Raster};

/// Whole-image check kept for compatibility with the old behaviour: two
/// images are "equal" when their red, green and blue channel totals match.
///
/// This is weaker than [`crate::compare::compare`]. Different images with
/// the same channel sums (e.g. two pixels swapped) compare equal, and the
/// dimensions are not checked at all.
pub fn legacy_channel_sum_equal<A: Raster + ?Sized, B: Raster + ?Sized>(a: &A, b: &B) -> bool {
    [Channel::Red, Channel::Green, Channel::Blue]
        .into_iter()
        .all(|c| a.channel_total(c) == b.channel_total(c))
}

/// [`legacy_channel_sum_equal`] wrapped in a [`ComparisonResult`] so it can be
/// reported like a pixel comparison. No pixels are scanned: the counts are
/// all-or-nothing.
pub fn legacy_channel_sum<A: Raster + ?Sized, B: Raster + ?Sized>(
    a: &A,
    b: &B,
) -> ComparisonResult {
    let equal = legacy_channel_sum_equal(a, b);
    let total_pixels = a.pixel_count();
    let details = format!(
        "Channel totals R/G/B: {}/{}/{} vs {}/{}/{}",
        a.channel_total(Channel::Red),
        a.channel_total(Channel::Green),
        a.channel_total(Channel::Blue),
        b.channel_total(Channel::Red),
        b.channel_total(Channel::Green),
        b.channel_total(Channel::Blue),
    );

    ComparisonResult::new(
        equal,
        if equal { 100.0 } else { 0.0 },
        if equal { 0.0 } else { f64::INFINITY },
        if equal { total_pixels } else { 0 },
        total_pixels,
        a.dimensions() == b.dimensions(),
        ComparisonMethod::ChannelSum,
        details,
    )
}
