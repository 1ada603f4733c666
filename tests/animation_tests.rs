use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use orchid_garden::animation::{flower_sway, AnimationState, GroundSway, NodeTransform};

#[cfg(test)]
mod animation_tests {
    use super::*;

    #[test]
    fn test_flower_sway_swings_along_x() {
        let base = Vec3::new(2.0, -2.0, -3.0);
        let peak = flower_sway(base, FRAC_PI_2, 0.1);
        assert!((peak.position.x - 2.1).abs() < 1e-6);
        assert_eq!(peak.position.y, base.y);
        assert_eq!(peak.position.z, base.z);

        let trough = flower_sway(base, 3.0 * FRAC_PI_2, 0.1);
        assert!((trough.position.x - 1.9).abs() < 1e-6);
    }

    #[test]
    fn test_flower_sway_is_periodic() {
        let base = Vec3::new(1.0, -2.0, 1.0);
        let a = flower_sway(base, 0.7, 0.1);
        let b = flower_sway(base, 0.7 + 2.0 * PI, 0.1);
        assert!((a.position - b.position).length() < 1e-5);
    }

    #[test]
    fn test_flower_sway_same_time_same_transform() {
        let base = Vec3::new(-4.5, -2.0, 7.25);
        for t in [0.0, 0.016, 1.5, 37.25, 1234.5] {
            assert_eq!(flower_sway(base, t, 0.1), flower_sway(base, t, 0.1));

            let state = AnimationState::new(t, 0.1);
            assert_eq!(state.flower_transform(base), flower_sway(base, t, 0.1));
            assert_eq!(
                AnimationState::new(t, 0.1).flower_transform(base),
                state.flower_transform(base)
            );
        }
    }

    #[test]
    fn test_no_wind_no_sway() {
        let base = Vec3::new(1.0, -2.0, 1.0);
        let node = AnimationState::new(12.3, 0.0).flower_transform(base);
        assert_eq!(node.position, base);
        assert_eq!(node.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_ground_sway_depends_on_ticks_only() {
        let mut a = GroundSway::new(0.05);
        let mut b = GroundSway::new(0.05);
        for _ in 0..100 {
            a.tick();
        }
        for _ in 0..100 {
            b.tick();
        }
        assert_eq!(a.rotation_y(), b.rotation_y());
        assert!((a.accumulator() - 1.0).abs() < 1e-12);
        let expected = 1.0f64.sin() as f32 * 0.005;
        assert!((a.rotation_y() - expected).abs() < 1e-7);
    }

    #[test]
    fn test_ground_sway_keeps_tilt() {
        let mut sway = GroundSway::new(0.05);
        for _ in 0..50 {
            sway.tick();
        }
        let mut node = NodeTransform::at(Vec3::new(0.0, -1.9, 0.0))
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0));
        assert!(sway.apply_to(Some(&mut node)));
        assert_eq!(node.rotation.x, -FRAC_PI_2);
        assert_eq!(node.rotation.y, sway.rotation_y());
        assert!(!sway.apply_to(None));
    }
}
