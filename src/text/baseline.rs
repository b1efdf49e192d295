//! Vertical centering of single-line text in a band.

use super::metrics::{Font, TextMetrics};
use super::symbols::REFERENCE_GLYPH;

/// Baseline that vertically centers a line of text in the band starting
/// at `top` with `height` pixels.
///
/// The extent measured is the one of a fixed reference glyph, not of the
/// text itself, so every string drawn with the same font in the same
/// band sits on the same baseline whatever its ascenders and descenders.
pub fn centered_baseline<M: TextMetrics + ?Sized>(
    metrics: &M,
    font: Font,
    top: i32,
    height: i32,
) -> i32 {
    let mut reference = [0u8; 4];
    let extent = metrics.vertical_extent(REFERENCE_GLYPH.encode_utf8(&mut reference), font);
    top + (height - extent.height()).div_euclid(2) - extent.top
}
