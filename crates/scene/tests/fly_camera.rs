use glam::Vec3;
use orb::FlyCamera;

const EPSILON: f32 = 1e-4;

#[test]
fn test_pitch_never_leaves_limits() {
    let mut camera = FlyCamera::new(Vec3::new(0.0, 2.0, 5.0));

    for step in 0..200 {
        let delta = if step % 3 == 0 { -1e4 } else { 733.0 };
        camera.rotate(17.0, delta);
        assert!(camera.pitch() >= -89.0 && camera.pitch() <= 89.0);
        assert!((camera.front().length() - 1.0).abs() < EPSILON);
    }

    camera.rotate(0.0, f32::MAX);
    assert_eq!(camera.pitch(), 89.0);
    camera.rotate(0.0, f32::MIN);
    assert_eq!(camera.pitch(), -89.0);
}

#[test]
fn test_fov_stays_in_range_under_cumulative_zoom() {
    let mut camera = FlyCamera::default();
    let deltas = [3.0, 7.5, 12.0, -0.5, 40.0, -90.0, 0.25, 44.0, -2.0];

    for delta in deltas.iter().cycle().take(500) {
        camera.zoom(*delta);
        let fov = camera.field_of_view();
        assert!((1.0..=45.0).contains(&fov), "fov {fov} out of range");
    }
}

#[test]
fn test_forward_then_backward_returns_to_start() {
    let mut camera = FlyCamera::new(Vec3::new(0.0, 2.0, 5.0));
    camera.rotate(71.0, -33.0);
    let start = camera.position();

    for offset in [0.016, 0.1, 1.0, 2.5] {
        camera.move_forward(offset);
        assert!(!camera.position().abs_diff_eq(start, EPSILON));
        camera.move_backward(offset);
        assert!(camera.position().abs_diff_eq(start, EPSILON));
    }
}

#[test]
fn test_disabled_camera_keeps_position() {
    let mut camera = FlyCamera::new(Vec3::new(0.0, 2.0, 5.0));
    camera.set_enabled(false);

    camera.move_forward(1.0);
    assert_eq!(camera.position(), Vec3::new(0.0, 2.0, 5.0));
    camera.move_backward(1.0);
    assert_eq!(camera.position(), Vec3::new(0.0, 2.0, 5.0));
}

#[test]
fn test_reenabling_resumes_from_last_orientation() {
    let mut camera = FlyCamera::new(Vec3::ZERO);
    camera.rotate(90.0, 0.0);
    let front = camera.front();

    camera.set_enabled(false);
    camera.rotate(-45.0, 30.0);
    camera.set_enabled(true);

    assert_eq!(camera.front(), front);
    camera.move_forward(1.0);
    assert!(camera.position().abs_diff_eq(front * FlyCamera::SPEED, EPSILON));
}

#[test]
fn test_movement_scales_with_speed_and_offset() {
    let mut camera = FlyCamera::new(Vec3::new(0.0, 2.0, 5.0));
    camera.move_forward(0.5);
    let travelled = camera.position().distance(Vec3::new(0.0, 2.0, 5.0));
    assert!((travelled - camera.speed() * 0.5).abs() < EPSILON);
}

#[test]
fn test_view_matrix_tracks_latest_state() {
    let mut camera = FlyCamera::new(Vec3::new(0.0, 2.0, 5.0));
    let before = camera.view_matrix();

    camera.move_up(1.0);
    let after = camera.view_matrix();
    assert_ne!(before, after);

    // moving the eye up shifts the world down in view space
    let origin = after.transform_point3(Vec3::ZERO);
    let origin_before = before.transform_point3(Vec3::ZERO);
    assert!((origin.y - (origin_before.y - FlyCamera::SPEED)).abs() < EPSILON);
}
