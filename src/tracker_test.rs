use super::*;

const CENTER: Point = Point::new(160.0, 160.0);

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Point at `degrees` (screen convention, clockwise from 3 o'clock) on a
/// circle of radius 100 around `CENTER`.
fn at(degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        CENTER.x + 100.0 * radians.cos(),
        CENTER.y + 100.0 * radians.sin(),
    )
}

#[test]
fn first_sample_starts_a_drag_at_zero_delta() {
    let mut tracker = RotationTracker::new(CENTER);
    assert!(!tracker.is_dragging());
    assert!(close(tracker.update(at(42.0)), 0.0));
    assert!(tracker.is_dragging());
    let session = tracker.session().copied().unwrap();
    assert!(close(session.start_touch_angle, 42.0));
    assert!(close(session.baseline_angle, 0.0));
}

#[test]
fn delta_follows_the_pointer() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(0.0));
    assert!(close(tracker.update(at(90.0)), 90.0));
    assert!(close(tracker.update(at(135.0)), 135.0));
    assert!(close(tracker.session_delta().unwrap(), 135.0));
}

#[test]
fn continuous_sweep_never_steps_backwards() {
    let mut tracker = RotationTracker::new(CENTER);
    let mut previous = tracker.update(at(-170.0));
    for i in 1..35 {
        let angle = tracker.update(at(-170.0 + f64::from(i) * 10.0));
        assert!(angle >= previous, "sample {i}: {angle} < {previous}");
        assert!(close(angle - previous, 10.0));
        previous = angle;
    }
}

#[test]
fn crossing_the_atan2_seam_reads_as_small_forward_step() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(179.0));
    assert!(close(tracker.update(at(181.0)), 2.0));
}

#[test]
fn crossing_359_to_1_reads_as_two_degrees() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(359.0));
    assert!(close(tracker.update(at(1.0)), 2.0));
}

#[test]
fn backwards_motion_wraps_forward() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(90.0));
    assert!(close(tracker.update(at(80.0)), 350.0));
    assert!(close(tracker.angle(), 350.0));
}

#[test]
fn commit_then_same_point_keeps_angle() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(10.0));
    let before = tracker.update(at(100.0));
    tracker.commit();
    assert!(!tracker.is_dragging());
    assert!(close(tracker.accumulated(), before));

    let after = tracker.update(at(100.0));
    assert!(close(after, before));
    assert!(close(tracker.angle(), 90.0));
}

#[test]
fn sessions_compose_and_commit_normalizes() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(0.0));
    tracker.update(at(300.0));
    tracker.commit();
    assert!(close(tracker.accumulated(), 300.0));

    tracker.update(at(0.0));
    assert!(close(tracker.update(at(90.0)), 390.0));
    assert!(close(tracker.angle(), 30.0));
    tracker.commit();
    assert!(close(tracker.accumulated(), 30.0));
    assert!(close(tracker.raw_angle(), 30.0));
}

#[test]
fn commit_while_idle_is_a_no_op() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(0.0));
    tracker.update(at(45.0));
    tracker.commit();
    tracker.commit();
    assert!(close(tracker.accumulated(), 45.0));
}

#[test]
fn reset_clears_baseline_and_session() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(0.0));
    tracker.update(at(45.0));
    tracker.commit();
    tracker.update(at(0.0));
    tracker.reset();
    assert!(!tracker.is_dragging());
    assert!(close(tracker.accumulated(), 0.0));
    assert!(close(tracker.update(at(200.0)), 0.0));
}

#[test]
fn quantized_update_snaps_the_drag_delta() {
    let quantizer = StepQuantizer::new(10.0);
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update_quantized(at(3.0), &quantizer);
    assert!(close(tracker.update_quantized(at(30.0), &quantizer), 20.0));
    assert!(close(tracker.update_quantized(at(12.99), &quantizer), 0.0));
    tracker.update_quantized(at(48.0), &quantizer);
    tracker.commit();
    assert!(close(tracker.accumulated(), 40.0));
}

#[test]
fn snapping_is_relative_to_the_baseline() {
    let quantizer = StepQuantizer::new(10.0);
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(at(0.0));
    tracker.update(at(5.0));
    tracker.commit();

    tracker.update_quantized(at(0.0), &quantizer);
    assert!(close(tracker.update_quantized(at(27.0), &quantizer), 25.0));
}

#[test]
fn end_to_end_quarter_turn_from_twelve_o_clock() {
    let quantizer = StepQuantizer::new(10.0);
    let mut tracker = RotationTracker::for_width(320.0);
    assert_eq!(tracker.center(), CENTER);
    tracker.update_quantized(Point::new(160.0, 60.0), &quantizer);
    let angle = tracker.update_quantized(Point::new(260.0, 160.0), &quantizer);
    assert!(close(angle, 90.0));
    assert!(close(angle % 10.0, 0.0));
}

#[test]
fn center_change_applies_mid_drag() {
    let mut tracker = RotationTracker::new(CENTER);
    tracker.update(Point::new(260.0, 160.0));
    tracker.set_knob_width(200.0);
    // (200, 100) sits at 0° around the new center (100, 100)
    assert!(close(tracker.update(Point::new(200.0, 100.0)), 0.0));
    assert!(close(tracker.update(Point::new(100.0, 200.0)), 90.0));
}

#[test]
fn nan_center_propagates() {
    let mut tracker = RotationTracker::new(Point::new(f64::NAN, 0.0));
    tracker.update(Point::new(1.0, 1.0));
    assert!(tracker.update(Point::new(2.0, 2.0)).is_nan());
}
