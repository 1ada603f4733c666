use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use orchid_garden::animation::{AnimationState, GroundSway, NodeTransform};
use orchid_garden::config::GardenConfig;
use orchid_garden::garden::Garden;
use orchid_garden::scene::{
    MeshKind, SceneGraph, SceneMeshes, GROUND_HEIGHT, ITEMS_PER_FLOWER, LABELLUM_OFFSET_Z,
    PETAL_COUNT,
};

fn planted(count: usize) -> (Garden, SceneGraph, GardenConfig) {
    let config = GardenConfig::default();
    let mut garden = Garden::with_seed(config.spawn_half_extent, 11);
    for _ in 0..count {
        garden.add_flower(config.flower_params());
    }
    let mut graph = SceneGraph::new();
    graph.sync(&garden);
    (garden, graph, config)
}

#[cfg(test)]
mod scene_tests {
    use super::*;

    #[test]
    fn test_item_count_per_flower() {
        for n in [0, 1, 4, 20] {
            let (garden, graph, config) = planted(n);
            let items = graph.compose(&config, &garden);
            assert_eq!(items.len(), 1 + ITEMS_PER_FLOWER * n);
        }
        assert_eq!(ITEMS_PER_FLOWER, 7);
    }

    #[test]
    fn test_items_follow_planting_order() {
        let (garden, graph, config) = planted(3);
        let items = graph.compose(&config, &garden);

        assert_eq!(items[0].mesh, MeshKind::Ground);
        assert_eq!(items[0].owner, None);

        for (k, flower) in garden.iter().enumerate() {
            let chunk = &items[1 + k * ITEMS_PER_FLOWER..1 + (k + 1) * ITEMS_PER_FLOWER];
            assert_eq!(chunk[0].mesh, MeshKind::Stem);
            assert!(chunk[1..=PETAL_COUNT].iter().all(|i| i.mesh == MeshKind::Petal));
            assert_eq!(chunk[PETAL_COUNT + 1].mesh, MeshKind::Labellum);
            assert!(chunk.iter().all(|i| i.owner == Some(flower.id)));
        }
    }

    #[test]
    fn test_flower_parts_are_placed_on_the_stem() {
        let (garden, graph, config) = planted(1);
        let items = graph.compose(&config, &garden);
        let base = garden.flowers()[0].position;
        let height = config.stem_height;

        let stem = items[1].world_position();
        assert!((stem - (base + Vec3::new(0.0, height / 2.0, 0.0))).length() < 1e-5);

        let labellum = items[ITEMS_PER_FLOWER].world_position();
        let expected = base + Vec3::new(0.0, height, LABELLUM_OFFSET_Z);
        assert!((labellum - expected).length() < 1e-5);

        for petal in &items[2..2 + PETAL_COUNT] {
            let offset = petal.world_position() - (base + Vec3::new(0.0, height, 0.0));
            assert!((offset.length() - 0.2).abs() < 1e-5);
            assert!(offset.z.abs() < 1e-6);
        }
    }

    #[test]
    fn test_animation_moves_whole_flower() {
        let (garden, mut graph, config) = planted(1);
        let still = graph.compose(&config, &garden);

        let state = AnimationState::new(FRAC_PI_2, 0.1);
        graph.animate(&garden, &state, &GroundSway::default());
        let swayed = graph.compose(&config, &garden);

        let shift = swayed[1].world_position() - still[1].world_position();
        assert!(shift.x.abs() > 0.0);
        let tilt = graph.node(garden.flowers()[0].id).unwrap().rotation.z;
        assert!((tilt - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_ground_transform_includes_sway() {
        let (garden, mut graph, config) = planted(0);
        let mut sway = GroundSway::new(0.05);
        for _ in 0..30 {
            sway.tick();
        }
        graph.animate(&garden, &AnimationState::default(), &sway);

        let expected = NodeTransform::at(Vec3::new(0.0, GROUND_HEIGHT, 0.0))
            .with_rotation(Vec3::new(-FRAC_PI_2, sway.rotation_y(), 0.0))
            .matrix();
        let items = graph.compose(&config, &garden);
        assert!(items[0].model.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_config_changes_reach_materials() {
        let (mut garden, graph, mut config) = planted(2);
        config.set_ground_opacity(0.4);
        config.set_glow_intensity(1.2);
        garden.apply_config(&config);

        let items = graph.compose(&config, &garden);
        assert_eq!(items[0].material.opacity, 0.4);
        let labellum = &items[ITEMS_PER_FLOWER];
        assert_eq!(labellum.material.emissive_intensity, 1.2);
    }

    #[test]
    fn test_sync_drops_cleared_flowers() {
        let (mut garden, mut graph, config) = planted(3);
        assert_eq!(graph.node_count(), 3);
        garden.clear_flowers();
        graph.sync(&garden);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.compose(&config, &garden).len(), 1);
    }

    #[test]
    fn test_sync_after_replanting_tracks_new_flowers() {
        let (mut garden, mut graph, _config) = planted(500);
        let old_ids: Vec<_> = garden.iter().map(|f| f.id).collect();

        garden.clear_flowers();
        let params = garden.template();
        for _ in 0..250 {
            garden.add_flower(params);
        }
        graph.sync(&garden);

        assert_eq!(graph.node_count(), 250);
        assert!(old_ids.iter().all(|id| graph.node(*id).is_none()));
        for flower in garden.iter() {
            assert_eq!(graph.node(flower.id).unwrap().position, flower.position);
        }
    }

    #[test]
    fn test_shared_meshes() {
        let meshes = SceneMeshes::build();
        for kind in MeshKind::ALL {
            assert!(meshes.get(kind).vertex_count() > 0);
        }
        assert!(MeshKind::Ground.is_wireframe());
        assert!(!MeshKind::Petal.is_wireframe());
    }
}
