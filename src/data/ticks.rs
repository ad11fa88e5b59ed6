//! Gridline tick generation.
//!
//! Ticks are the multiples of the axis tick spacing that bracket the visible
//! range: the walk starts at the largest multiple at or below `low` and ends
//! at the smallest multiple at or above `high`, so the grid never has an
//! unrendered gap at either edge. Values are produced by index
//! (`start + i * spacing`) rather than repeated addition, which keeps exact
//! multiples exact and avoids accumulation drift.
//!
//! Sequences are ephemeral: recomputed fresh on every call, never cached.

use crate::data::axis::AxisRange;
use crate::data::formatter::TickFormatter;
use crate::data::mapper::PixelMap;

/// Hard cap on generated ticks. `span / spacing` is a small integer for any
/// sane axis; the cap keeps a spacing underflow from turning tick generation
/// into unbounded work.
pub const MAX_TICKS: usize = 4_096;

/// Direction of the tick walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickWalk {
    /// Low to high (frequency axis: left to right).
    Ascending,
    /// High to low (power axis: higher dBm values render first/top).
    Descending,
}

/// One gridline: domain value, pixel offset along the axis, label text.
/// Recomputed per render, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub pixel: f64,
    pub label: String,
}

/// Generate the ordered tick values for `axis`.
///
/// The count is `floor(span/spacing) + 1` when both bounds sit exactly on
/// multiples, `+2` otherwise, and never exceeds [`MAX_TICKS`] + 1. Exact
/// boundary multiples are included once (inclusive stopping test).
pub fn tick_values(axis: &AxisRange, walk: TickWalk) -> Vec<f64> {
    let spacing = axis.tick_spacing();
    let span = axis.span();
    // AxisRange construction guarantees both; guard anyway so a logic error
    // upstream degrades to an empty grid instead of a runaway loop.
    if !(spacing > 0.0) || !(span > 0.0) || !spacing.is_finite() {
        log::warn!("tick generation skipped: span={span}, spacing={spacing}");
        return Vec::new();
    }

    // The walk starts at the axis's own phase alignment so the grid origin
    // has exactly one definition.
    let start = axis.low() + axis.tick_offset();
    let stop = (axis.high() / spacing).ceil() * spacing;
    let steps = ((stop - start) / spacing).round();
    if !steps.is_finite() || steps < 0.0 {
        log::warn!("tick generation skipped: non-finite step count");
        return Vec::new();
    }
    let n = (steps as usize).min(MAX_TICKS);

    let mut out = Vec::with_capacity(n + 1);
    match walk {
        TickWalk::Ascending => {
            for i in 0..=n {
                out.push(start + spacing * i as f64);
            }
        }
        TickWalk::Descending => {
            for i in (0..=n).rev() {
                out.push(start + spacing * i as f64);
            }
        }
    }
    out
}

/// Generate full [`Tick`]s: values mapped to pixel offsets through `map` and
/// labelled through the caller-supplied `formatter`.
pub fn ticks(
    axis: &AxisRange,
    walk: TickWalk,
    map: &PixelMap,
    formatter: &TickFormatter,
) -> Vec<Tick> {
    tick_values(axis, walk)
        .into_iter()
        .map(|value| Tick {
            value,
            pixel: map.to_pixel(value),
            label: formatter.format(value),
        })
        .collect()
}
