use specgrid::{AxisError, AxisRange};

use approx::assert_relative_eq;

#[test]
fn builds_from_explicit_bounds() {
    let axis = AxisRange::new(14_000_000.0, 14_200_000.0, 20_000.0).unwrap();
    assert_eq!(axis.low(), 14_000_000.0);
    assert_eq!(axis.high(), 14_200_000.0);
    assert_eq!(axis.tick_spacing(), 20_000.0);
    assert_eq!(axis.span(), 200_000.0);
}

#[test]
fn builds_from_center_and_span() {
    let axis = AxisRange::from_center_span(14_100_000.0, 200_000.0, 20_000.0).unwrap();
    assert_eq!(axis.low(), 14_000_000.0);
    assert_eq!(axis.high(), 14_200_000.0);
}

#[test]
fn rejects_empty_or_inverted_range() {
    assert_eq!(
        AxisRange::new(10.0, 10.0, 1.0).unwrap_err(),
        AxisError::InvalidAxisRange
    );
    assert_eq!(
        AxisRange::new(10.0, -100.0, 1.0).unwrap_err(),
        AxisError::InvalidAxisRange
    );
    assert_eq!(
        AxisRange::new(f64::NAN, 10.0, 1.0).unwrap_err(),
        AxisError::InvalidAxisRange
    );
    assert_eq!(
        AxisRange::new(0.0, f64::INFINITY, 1.0).unwrap_err(),
        AxisError::InvalidAxisRange
    );
}

#[test]
fn rejects_non_positive_tick_spacing() {
    assert_eq!(
        AxisRange::new(0.0, 10.0, 0.0).unwrap_err(),
        AxisError::InvalidTickSpacing
    );
    assert_eq!(
        AxisRange::new(0.0, 10.0, -5.0).unwrap_err(),
        AxisError::InvalidTickSpacing
    );
    assert_eq!(
        AxisRange::new(0.0, 10.0, f64::NAN).unwrap_err(),
        AxisError::InvalidTickSpacing
    );
}

#[test]
fn pixels_per_unit_scales_with_extent() {
    let axis = AxisRange::new(-100.0, 10.0, 10.0).unwrap();
    assert_relative_eq!(axis.pixels_per_unit(660.0).unwrap(), 6.0);
    assert_relative_eq!(axis.pixels_per_unit(110.0).unwrap(), 1.0);
}

#[test]
fn pixels_per_unit_rejects_degenerate_viewport() {
    let axis = AxisRange::new(0.0, 10.0, 1.0).unwrap();
    assert_eq!(
        axis.pixels_per_unit(0.0).unwrap_err(),
        AxisError::DegenerateViewport
    );
    assert_eq!(
        axis.pixels_per_unit(-50.0).unwrap_err(),
        AxisError::DegenerateViewport
    );
}

#[test]
fn tick_offset_reaches_back_to_spacing_multiple() {
    // low sits 10 kHz past a 20 kHz gridline
    let axis = AxisRange::new(14_010_000.0, 14_190_000.0, 20_000.0).unwrap();
    assert_relative_eq!(axis.tick_offset(), -10_000.0);
    assert_relative_eq!((axis.low() + axis.tick_offset()) % 20_000.0, 0.0);
}

#[test]
fn tick_offset_handles_negative_bounds() {
    let axis = AxisRange::new(-95.0, 10.0, 10.0).unwrap();
    assert_relative_eq!(axis.tick_offset(), -5.0);
    assert_relative_eq!(axis.low() + axis.tick_offset(), -100.0);
}

#[test]
fn tick_offset_is_zero_on_aligned_low() {
    let axis = AxisRange::new(14_000_000.0, 14_200_000.0, 20_000.0).unwrap();
    assert_eq!(axis.tick_offset(), 0.0);
}

#[test]
fn contains_is_inclusive_at_both_bounds() {
    let axis = AxisRange::new(-100.0, 10.0, 10.0).unwrap();
    assert!(axis.contains(-100.0));
    assert!(axis.contains(10.0));
    assert!(axis.contains(0.0));
    assert!(!axis.contains(-100.1));
    assert!(!axis.contains(10.1));
}
