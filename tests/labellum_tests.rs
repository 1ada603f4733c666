use glam::Vec2;
use orchid_garden::geometry::labellum::{LABELLUM_BEVEL_THICKNESS, LABELLUM_DEPTH};
use orchid_garden::geometry::{ExtrudeSettings, LabellumShape, Outline};

#[cfg(test)]
mod labellum_tests {
    use super::*;

    #[test]
    fn test_outline_has_twelve_points_per_curve() {
        let outline = LabellumShape.outline();
        // Two curves, closing point dropped
        assert_eq!(outline.points().len(), 24);
        assert_eq!(outline.points()[0], Vec2::new(-0.2, 0.0));
    }

    #[test]
    fn test_outline_stays_inside_control_hull() {
        for p in LabellumShape.outline().points() {
            assert!(p.x.abs() <= 0.2 + 1e-6);
            assert!(p.y <= 0.15 + 1e-6);
            assert!(p.y >= -0.075 - 1e-6);
        }
    }

    #[test]
    fn test_outline_winding_is_normalized() {
        let outline = LabellumShape.outline();
        assert!(outline.signed_area() < 0.0);
        assert!(outline.counter_clockwise().signed_area() > 0.0);
    }

    #[test]
    fn test_mesh_depth_includes_bevel() {
        let (min, max) = LabellumShape.mesh().bounds().unwrap();
        assert!((min.z + LABELLUM_BEVEL_THICKNESS).abs() < 1e-5);
        assert!((max.z - (LABELLUM_DEPTH + LABELLUM_BEVEL_THICKNESS)).abs() < 1e-5);
    }

    #[test]
    fn test_mesh_width_bounded_by_bevel() {
        let (min, max) = LabellumShape.mesh().bounds().unwrap();
        assert!(min.x >= -0.25);
        assert!(max.x <= 0.25);
        assert!(max.x > 0.2);
    }

    #[test]
    fn test_mesh_indices_in_bounds() {
        let mesh = LabellumShape.mesh();
        let count = mesh.vertex_count() as u32;
        assert!(mesh.triangle_count() > 0);
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_flat_extrusion_of_square() {
        let square = Outline::starting_at(Vec2::new(0.0, 0.0))
            .quadratic_to(Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.0))
            .quadratic_to(Vec2::new(1.0, 0.5), Vec2::new(1.0, 1.0))
            .quadratic_to(Vec2::new(0.5, 1.0), Vec2::new(0.0, 1.0))
            .quadratic_to(Vec2::new(0.0, 0.5), Vec2::new(0.0, 0.0))
            .close();
        let settings = ExtrudeSettings {
            depth: 1.0,
            bevel_size: 0.0,
            bevel_thickness: 0.0,
            bevel_segments: 1,
        };
        let (min, max) = settings.extrude(&square).bounds().unwrap();
        assert!(min.abs_diff_eq(glam::Vec3::ZERO, 1e-5));
        assert!(max.abs_diff_eq(glam::Vec3::ONE, 1e-5));
    }
}
