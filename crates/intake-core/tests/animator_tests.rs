// Camera transition behaviour.

use glam::Vec3;
use intake_core::*;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

fn head_pose() -> CameraPose {
    RegionRegistry::builtin().get("Cabeça").unwrap().pose()
}

#[test]
fn starts_idle_at_home_pose() {
    let mut anim = CameraAnimator::default();
    assert_eq!(anim.phase(), AnimatorPhase::Idle);
    assert_eq!(anim.tick(0.5), CameraPose::DEFAULT);
    assert_eq!(anim.duration(), ANIMATION_DURATION_SEC);
}

#[test]
fn factor_zero_is_source_and_factor_one_is_destination() {
    let mut anim = CameraAnimator::default();
    anim.retarget(head_pose());
    assert_eq!(anim.phase(), AnimatorPhase::Animating);
    assert_eq!(anim.factor(), 0.0);

    let p0 = anim.tick(0.0);
    assert!(approx(p0.position, CameraPose::DEFAULT.position));
    assert!(approx(p0.target, CameraPose::DEFAULT.target));

    let p1 = anim.tick(ANIMATION_DURATION_SEC);
    assert_eq!(p1, head_pose());
    assert_eq!(anim.factor(), 1.0);
    assert_eq!(anim.phase(), AnimatorPhase::Idle);
}

#[test]
fn reaches_destination_after_exactly_the_fixed_duration() {
    let mut anim = CameraAnimator::default();
    anim.retarget(head_pose());
    let steps = 12;
    for _ in 0..steps - 1 {
        anim.tick(ANIMATION_DURATION_SEC / steps as f32);
        assert!(anim.is_active());
    }
    anim.tick(ANIMATION_DURATION_SEC / steps as f32 + 1e-4);
    assert!(!anim.is_active());
    assert_eq!(anim.current(), head_pose());
}

#[test]
fn interpolation_is_linear() {
    let mut anim = CameraAnimator::default();
    let dest = head_pose();
    anim.retarget(dest);
    let mid = anim.tick(ANIMATION_DURATION_SEC / 2.0);
    let expect = CameraPose::DEFAULT.lerp(dest, 0.5);
    assert!(approx(mid.position, expect.position));
    assert!(approx(mid.target, expect.target));
}

#[test]
fn factor_is_monotonic_and_clamped() {
    let mut anim = CameraAnimator::default();
    anim.retarget(head_pose());
    let mut last = anim.factor();
    for dt in [0.1, 0.0, -3.0, f32::NAN, 0.4, 0.05, 5.0, 1.0] {
        anim.tick(dt);
        let f = anim.factor();
        assert!((0.0..=1.0).contains(&f));
        assert!(f >= last);
        last = f;
    }
    assert_eq!(last, 1.0);
    assert!(anim.elapsed() <= anim.duration());
}

#[test]
fn retarget_mid_flight_adopts_current_pose_as_source() {
    let mut anim = CameraAnimator::default();
    anim.retarget(head_pose());
    let mid = anim.tick(0.3);
    assert!(anim.is_active());

    let legs = RegionRegistry::builtin().get("Pernas").unwrap().pose();
    anim.retarget(legs);
    assert_eq!(anim.source(), mid);
    assert_eq!(anim.destination(), legs);
    assert_eq!(anim.elapsed(), 0.0);
    assert!(approx(anim.tick(0.0).position, mid.position));
    assert_eq!(anim.tick(10.0), legs);
}

#[test]
fn idle_tick_is_a_no_op() {
    let mut anim = CameraAnimator::default();
    anim.retarget(head_pose());
    anim.tick(5.0);
    let settled = anim.current();
    for _ in 0..5 {
        assert_eq!(anim.tick(0.016), settled);
    }
}

#[test]
fn zero_duration_jumps_immediately() {
    let mut anim = CameraAnimator::new(CameraPose::DEFAULT, 0.0);
    anim.retarget(head_pose());
    assert_eq!(anim.tick(0.0), head_pose());
    assert!(!anim.is_active());
}

#[test]
fn view_matrix_looks_at_target() {
    let pose = head_pose();
    let view = pose.view_matrix();
    let t = view.transform_point3(pose.target);
    // Target sits straight ahead on the -Z axis in view space.
    assert!(t.x.abs() < 1e-4 && t.y.abs() < 1e-4 && t.z < 0.0);
}

#[test]
fn projection_tolerates_bad_aspect() {
    let proj = Projection::default();
    assert!(proj.matrix(0.0).is_finite());
    assert!(proj.matrix(f32::NAN).is_finite());
    assert!(proj.view_proj(&CameraPose::DEFAULT, 16.0 / 9.0).is_finite());
}
