use super::*;

#[test]
fn defaults_match_the_stock_knob() {
    let config = KnobConfig::default();
    assert_eq!(config.knob_width, 320.0);
    assert_eq!(config.step_degrees, 10.0);
    assert_eq!(config.snap_mode, SnapMode::Floor);
    assert_eq!(config.fitted_width(config.window_width, config.window_height), 320.0);
}

#[test]
fn builder_overrides_defaults() {
    let config = KnobConfig::builder()
        .step_degrees(30.0)
        .snap_mode(SnapMode::Nearest)
        .knob_width(200.0)
        .build();
    assert_eq!(config.step_degrees, 30.0);
    assert_eq!(config.snap_mode, SnapMode::Nearest);
    assert_eq!(config.knob_width, 200.0);
    assert_eq!(config.title, "Knob");
}

#[test]
fn nudge_step_stays_in_range() {
    let config = KnobConfig::default();
    assert_eq!(config.nudge_step(10.0, 1), 10.0);
    assert_eq!(config.nudge_step(10.0, -1), 9.0);
    assert_eq!(config.nudge_step(1.0, -3), 1.0);
}

#[test]
fn fitted_width_never_collapses() {
    let config = KnobConfig::default();
    assert_eq!(config.fitted_width(100, 600), 1.0);
    assert_eq!(config.fitted_width(600, 400), 240.0);
}

#[test]
fn blend_mixes_channels() {
    let white = Color::new(255, 255, 255);
    let black = Color::new(0, 0, 0);
    assert_eq!(white.blend(black, 1.0), white);
    assert_eq!(white.blend(black, 0.0), black);
    assert_eq!(white.blend(black, 0.5), Color::new(128, 128, 128));
}
