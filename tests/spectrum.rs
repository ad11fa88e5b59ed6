use specgrid::SpectrumModel;

use approx::assert_relative_eq;

#[test]
fn defaults_describe_the_initial_display() {
    let m = SpectrumModel::default();
    assert_eq!(m.center(), 14_100_000.0);
    assert_eq!(m.bandwidth(), 200_000.0);
    assert_eq!(m.freq_spacing(), 20_000.0);
    assert_eq!(m.dbm_high(), 10.0);
    assert_eq!(m.dbm_low(), -100.0);
    assert_eq!(m.dbm_spacing(), 10.0);
    assert_eq!(m.freq_start(), 14_000_000.0);
    assert_eq!(m.freq_end(), 14_200_000.0);
}

#[test]
fn axis_snapshots_reflect_the_fields() {
    let m = SpectrumModel::default();
    let freq = m.freq_axis().unwrap();
    assert_eq!(freq.low(), 14_000_000.0);
    assert_eq!(freq.high(), 14_200_000.0);
    assert_eq!(freq.tick_spacing(), 20_000.0);
    let power = m.power_axis().unwrap();
    assert_eq!(power.low(), -100.0);
    assert_eq!(power.high(), 10.0);
    assert_eq!(power.tick_spacing(), 10.0);
}

#[test]
fn control_edits_clamp_to_the_slider_ranges() {
    let mut m = SpectrumModel::default();
    m.set_center(13_000_000.0);
    assert_eq!(m.center(), 14_000_000.0);
    m.set_center(15_000_000.0);
    assert_eq!(m.center(), 14_200_000.0);
    m.set_bandwidth(50_000.0);
    assert_eq!(m.bandwidth(), 100_000.0);
    m.set_bandwidth(500_000.0);
    assert_eq!(m.bandwidth(), 300_000.0);
    m.set_freq_spacing(1_000.0);
    assert_eq!(m.freq_spacing(), 5_000.0);
    m.set_freq_spacing(100_000.0);
    assert_eq!(m.freq_spacing(), 40_000.0);
}

#[test]
fn nudges_move_by_the_given_step() {
    let mut m = SpectrumModel::default();
    m.nudge_center(100.0);
    assert_eq!(m.center(), 14_100_100.0);
    m.nudge_center(-200.0);
    assert_eq!(m.center(), 14_099_900.0);
    m.nudge_bandwidth(100.0);
    assert_eq!(m.bandwidth(), 200_100.0);
    m.nudge_dbm_low(-1.0);
    assert_eq!(m.dbm_low(), -101.0);
}

#[test]
fn nudges_stop_at_the_slider_bounds() {
    let mut m = SpectrumModel::default();
    m.set_center(14_200_000.0);
    m.nudge_center(100.0);
    assert_eq!(m.center(), 14_200_000.0);
    m.set_bandwidth(100_000.0);
    m.nudge_bandwidth(-100.0);
    assert_eq!(m.bandwidth(), 100_000.0);
}

#[test]
fn invalid_spacing_keeps_the_previous_value() {
    let mut m = SpectrumModel::default();
    m.set_freq_spacing(0.0);
    assert_eq!(m.freq_spacing(), 20_000.0);
    m.set_freq_spacing(-5_000.0);
    assert_eq!(m.freq_spacing(), 20_000.0);
    m.set_freq_spacing(f64::NAN);
    assert_eq!(m.freq_spacing(), 20_000.0);
    m.set_dbm_spacing(0.0);
    assert_eq!(m.dbm_spacing(), 10.0);
}

#[test]
fn dbm_spacing_snaps_to_the_menu_choices() {
    let mut m = SpectrumModel::default();
    m.set_dbm_spacing(7.0);
    assert_eq!(m.dbm_spacing(), 5.0);
    m.set_dbm_spacing(12.0);
    assert_eq!(m.dbm_spacing(), 10.0);
    m.set_dbm_spacing(18.0);
    assert_eq!(m.dbm_spacing(), 20.0);
    m.set_dbm_spacing(100.0);
    assert_eq!(m.dbm_spacing(), 20.0);
    m.set_dbm_spacing(15.0);
    assert_eq!(m.dbm_spacing(), 15.0);
}

#[test]
fn power_bounds_keep_their_minimum_separation() {
    let mut m = SpectrumModel::default();
    m.set_dbm_low(0.0);
    assert_eq!(m.dbm_low(), 0.0);
    // push high down through low: stops one span-unit above it
    m.set_dbm_high(-50.0);
    assert_eq!(m.dbm_high(), 1.0);
    // and low cannot climb past high either
    m.set_dbm_low(5.0);
    assert_eq!(m.dbm_low(), 0.0);
}

#[test]
fn non_finite_edits_are_ignored() {
    let mut m = SpectrumModel::default();
    m.set_center(f64::NAN);
    assert_eq!(m.center(), 14_100_000.0);
    m.set_bandwidth(f64::INFINITY);
    assert_eq!(m.bandwidth(), 200_000.0);
    m.drag_set_center(f64::NAN);
    assert_eq!(m.center(), 14_100_000.0);
    m.drag_set_dbm_high(f64::INFINITY);
    assert_eq!(m.dbm_high(), 10.0);
}

#[test]
fn drag_pan_is_not_confined_to_the_slider_range() {
    let mut m = SpectrumModel::default();
    m.drag_set_center(13_000_000.0);
    assert_eq!(m.center(), 13_000_000.0);
    m.drag_set_center(20_000_000.0);
    assert_eq!(m.center(), 20_000_000.0);
}

#[test]
fn drag_bandwidth_is_clamped_to_its_range() {
    let mut m = SpectrumModel::default();
    m.drag_set_bandwidth(10_000.0);
    assert_eq!(m.bandwidth(), 100_000.0);
    m.drag_set_bandwidth(1_000_000.0);
    assert_eq!(m.bandwidth(), 300_000.0);
    m.drag_set_bandwidth(250_000.0);
    assert_eq!(m.bandwidth(), 250_000.0);
}

#[test]
fn drag_rescale_respects_the_minimum_span() {
    let mut m = SpectrumModel::default();
    m.drag_set_dbm_high(-500.0);
    assert_relative_eq!(m.dbm_high(), -99.0);
    assert_eq!(m.dbm_low(), -100.0);

    let mut m = SpectrumModel::default();
    m.drag_set_dbm_low(500.0);
    assert_relative_eq!(m.dbm_low(), 9.0);
    assert_eq!(m.dbm_high(), 10.0);
}

#[test]
fn drag_window_moves_both_bounds_together() {
    let mut m = SpectrumModel::default();
    m.drag_set_dbm_window(13.0, -97.0);
    assert_eq!(m.dbm_high(), 13.0);
    assert_eq!(m.dbm_low(), -97.0);
    assert_relative_eq!(m.dbm_high() - m.dbm_low(), 110.0);
}

#[test]
fn drag_window_rejects_an_empty_span() {
    let mut m = SpectrumModel::default();
    m.drag_set_dbm_window(-50.0, -50.0);
    assert_eq!(m.dbm_high(), 10.0);
    assert_eq!(m.dbm_low(), -100.0);
    m.drag_set_dbm_window(-80.0, -20.0);
    assert_eq!(m.dbm_high(), 10.0);
    assert_eq!(m.dbm_low(), -100.0);
}
