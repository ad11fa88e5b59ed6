use specgrid::{AxisError, AxisRange, PixelMap};

use approx::assert_relative_eq;

fn freq_axis() -> AxisRange {
    AxisRange::new(14_000_000.0, 14_200_000.0, 20_000.0).unwrap()
}

#[test]
fn bounds_map_to_viewport_edges() {
    let map = PixelMap::new(&freq_axis(), 1_000.0).unwrap();
    assert_relative_eq!(map.to_pixel(14_000_000.0), 0.0);
    assert_relative_eq!(map.to_pixel(14_200_000.0), 1_000.0);
    assert_relative_eq!(map.to_pixel(14_100_000.0), 500.0);
}

#[test]
fn maps_beyond_the_visible_range() {
    // bracketing ticks land slightly outside the viewport
    let axis = AxisRange::new(14_010_000.0, 14_190_000.0, 20_000.0).unwrap();
    let map = PixelMap::new(&axis, 900.0).unwrap();
    assert_relative_eq!(map.to_pixel(14_000_000.0), -50.0);
    assert_relative_eq!(map.to_pixel(14_200_000.0), 950.0);
}

#[test]
fn round_trips_pixel_and_domain() {
    let map = PixelMap::new(&freq_axis(), 1_000.0).unwrap();
    for value in [14_000_000.0, 14_037_500.0, 14_120_000.0, 14_200_000.0] {
        assert_relative_eq!(map.to_domain(map.to_pixel(value)), value, epsilon = 1e-9);
    }
    for pixel in [0.0, 123.456, 500.0, 1_000.0] {
        assert_relative_eq!(map.to_pixel(map.to_domain(pixel)), pixel, epsilon = 1e-9);
    }
}

#[test]
fn power_axis_measures_from_low() {
    let axis = AxisRange::new(-100.0, 10.0, 10.0).unwrap();
    let map = PixelMap::new(&axis, 660.0).unwrap();
    assert_relative_eq!(map.pixels_per_unit(), 6.0);
    assert_relative_eq!(map.to_pixel(-100.0), 0.0);
    assert_relative_eq!(map.to_pixel(10.0), 660.0);
    assert_relative_eq!(map.to_pixel(-40.0), 360.0);
}

#[test]
fn rejects_degenerate_extent() {
    assert_eq!(
        PixelMap::new(&freq_axis(), 0.0).unwrap_err(),
        AxisError::DegenerateViewport
    );
    assert_eq!(
        PixelMap::new(&freq_axis(), -1.0).unwrap_err(),
        AxisError::DegenerateViewport
    );
}
