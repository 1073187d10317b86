//! Block-quantized random heightfield ground.

use rand::rngs::StdRng;
use terra_engine::{BodyId, PhysicsEngine, Quat, Rgba, Vec3};

use crate::config::HeightfieldSceneConfig;
use crate::error::{Result, SceneError};
use crate::sampling::uniform_between;
use crate::scene::{seed_rng, Scene};

/// Immutable grid of height samples, row-major.
///
/// Heights are constant on disjoint 2x2 cell blocks (truncating to even
/// dimensions), which yields terrain steps at twice the base cell size and
/// avoids single-cell needle artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainGrid {
    rows: usize,
    columns: usize,
    cell_size: f64,
    heights: Vec<f64>,
}

impl TerrainGrid {
    /// Synthesize block noise: one uniform draw in `[0, height_range)` per
    /// 2x2 block, assigned to all four cells.
    ///
    /// Blocks are visited with the column-block index outermost and the
    /// row-block index innermost; that visit order is part of the seeded
    /// reproducibility contract. Cells past the last even row/column stay
    /// at height zero.
    pub fn synthesize(
        rows: usize,
        columns: usize,
        cell_size: f64,
        height_range: f64,
        rng: &mut StdRng,
    ) -> Self {
        let mut heights = vec![0.0; rows * columns];
        for j in 0..columns / 2 {
            for i in 0..rows / 2 {
                let height = uniform_between(rng, [0.0, height_range]);
                for (row, column) in [
                    (2 * i, 2 * j),
                    (2 * i + 1, 2 * j),
                    (2 * i, 2 * j + 1),
                    (2 * i + 1, 2 * j + 1),
                ] {
                    heights[row * columns + column] = height;
                }
            }
        }
        Self {
            rows,
            columns,
            cell_size,
            heights,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// All samples, row-major, length `rows * columns`.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn height_at(&self, row: usize, column: usize) -> f64 {
        self.heights[row * self.columns + column]
    }

    /// Cell size in x/y, unit scale in z.
    pub fn mesh_scale(&self) -> Vec3 {
        Vec3::new(self.cell_size, self.cell_size, 1.0)
    }

    /// Texture tiling factor the backend expects for heightfields.
    pub fn texture_scaling(&self) -> f64 {
        (self.rows as f64 - 1.0) / 2.0
    }
}

enum State {
    Unbuilt,
    Built { grid: TerrainGrid, terrain: BodyId },
}

/// Scene whose ground is a single randomized heightfield body at the world
/// origin.
pub struct HeightfieldScene {
    config: HeightfieldSceneConfig,
    state: State,
}

impl HeightfieldScene {
    /// Create an unbuilt scene, rejecting a malformed config up front.
    pub fn new(config: HeightfieldSceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: State::Unbuilt,
        })
    }

    pub fn config(&self) -> &HeightfieldSceneConfig {
        &self.config
    }

    /// The grid submitted by the last successful build.
    pub fn grid(&self) -> Result<&TerrainGrid> {
        match &self.state {
            State::Built { grid, .. } => Ok(grid),
            State::Unbuilt => Err(SceneError::NotBuilt("no terrain grid")),
        }
    }
}

impl Scene for HeightfieldScene {
    fn build(&mut self, engine: &mut dyn PhysicsEngine) -> Result<()> {
        // Drop back to unbuilt first so a failed submission never leaves a
        // half-built scene queryable.
        if let State::Built { terrain, .. } = std::mem::replace(&mut self.state, State::Unbuilt) {
            engine.remove_body(terrain)?;
        }

        let mut rng = seed_rng(self.config.random_seed);
        let grid = TerrainGrid::synthesize(
            self.config.rows,
            self.config.columns,
            self.config.cell_size,
            self.config.effective_height_range(),
            &mut rng,
        );

        if let Some(path) = &self.config.asset_search_path {
            engine.set_search_path(path);
        }
        engine.set_rendering(false);
        let shape = engine.create_heightfield_shape(
            grid.mesh_scale(),
            grid.heights(),
            grid.rows(),
            grid.columns(),
            grid.texture_scaling(),
        )?;
        let terrain = engine.create_body(0.0, shape, Vec3::zeros(), Quat::identity())?;
        engine.set_visual_tint(terrain, Rgba::WHITE)?;
        engine.set_rendering(true);

        self.state = State::Built { grid, terrain };
        Ok(())
    }

    fn reset(&mut self, engine: &mut dyn PhysicsEngine) -> Result<()> {
        let built = matches!(self.state, State::Built { .. });
        if !built || self.config.rebuild_on_reset {
            self.build(engine)
        } else {
            Ok(())
        }
    }

    fn ground_bodies(&self) -> Result<&[BodyId]> {
        match &self.state {
            State::Built { terrain, .. } => Ok(std::slice::from_ref(terrain)),
            State::Unbuilt => Err(SceneError::NotBuilt("no ground bodies")),
        }
    }

    fn ground_height(&self) -> Result<f64> {
        match &self.state {
            State::Built { .. } => Ok(0.0),
            State::Unbuilt => Err(SceneError::NotBuilt("no ground height")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use terra_engine::{RecordingEngine, ShapeRecord};

    fn small_config() -> HeightfieldSceneConfig {
        HeightfieldSceneConfig {
            rows: 4,
            columns: 4,
            height_range: 0.1,
            height_multiplier: 1.0,
            random_seed: Some(10),
            ..Default::default()
        }
    }

    #[test]
    fn test_block_invariant() {
        let mut rng = StdRng::seed_from_u64(10);
        let grid = TerrainGrid::synthesize(8, 6, 0.05, 0.1, &mut rng);
        for i in 0..4 {
            for j in 0..3 {
                let height = grid.height_at(2 * i, 2 * j);
                assert_eq!(grid.height_at(2 * i + 1, 2 * j), height);
                assert_eq!(grid.height_at(2 * i, 2 * j + 1), height);
                assert_eq!(grid.height_at(2 * i + 1, 2 * j + 1), height);
            }
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(77);
        let mut b = StdRng::seed_from_u64(77);
        let first = TerrainGrid::synthesize(4, 4, 0.05, 0.1, &mut a);
        let second = TerrainGrid::synthesize(4, 4, 0.05, 0.1, &mut b);
        assert_eq!(first.heights(), second.heights());

        let mut c = StdRng::seed_from_u64(78);
        let other = TerrainGrid::synthesize(4, 4, 0.05, 0.1, &mut c);
        assert_ne!(first.heights(), other.heights());
    }

    #[test]
    fn test_heights_within_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = TerrainGrid::synthesize(16, 16, 0.05, 0.2, &mut rng);
        assert_eq!(grid.heights().len(), 256);
        assert!(grid.heights().iter().all(|&h| (0.0..0.2).contains(&h)));
    }

    #[test]
    fn test_odd_dimensions_leave_trailing_cells_flat() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = TerrainGrid::synthesize(5, 5, 0.05, 0.2, &mut rng);
        for column in 0..5 {
            assert_eq!(grid.height_at(4, column), 0.0);
        }
        for row in 0..5 {
            assert_eq!(grid.height_at(row, 4), 0.0);
        }
    }

    #[test]
    fn test_build_submits_one_terrain_body() {
        let mut engine = RecordingEngine::new();
        let mut scene = HeightfieldScene::new(small_config()).unwrap();
        scene.build(&mut engine).unwrap();

        assert_eq!(scene.ground_bodies().unwrap().len(), 1);
        assert_eq!(scene.ground_height().unwrap(), 0.0);
        assert_eq!(engine.live_bodies().count(), 1);
        assert!(engine.rendering_enabled);

        let terrain = engine.body(scene.ground_bodies().unwrap()[0]).unwrap();
        assert_eq!(terrain.mass, 0.0);
        assert_eq!(terrain.position, Vec3::zeros());
        assert_eq!(terrain.tint, Some(Rgba::WHITE));

        match engine.shape(terrain.shape).unwrap() {
            ShapeRecord::Heightfield {
                rows,
                columns,
                heights,
                texture_scaling,
                ..
            } => {
                assert_eq!((*rows, *columns), (4, 4));
                assert_eq!(heights.len(), 16);
                assert_eq!(*texture_scaling, 1.5);
            }
            other => panic!("expected a heightfield shape, got {other:?}"),
        }
    }

    #[test]
    fn test_height_multiplier_scales_samples() {
        let mut engine = RecordingEngine::new();
        let config = HeightfieldSceneConfig {
            rows: 16,
            columns: 16,
            height_multiplier: 5.0,
            ..small_config()
        };
        let mut scene = HeightfieldScene::new(config).unwrap();
        scene.build(&mut engine).unwrap();
        let grid = scene.grid().unwrap();
        assert!(grid.heights().iter().all(|&h| h < 0.5));
        // 64 independent draws in [0, 0.5); staying under the unscaled 0.1
        // bound for all of them is vanishingly unlikely.
        assert!(grid.heights().iter().any(|&h| h > 0.1));
    }

    #[test]
    fn test_rebuild_removes_previous_terrain() {
        let mut engine = RecordingEngine::new();
        let mut scene = HeightfieldScene::new(small_config()).unwrap();
        scene.reset(&mut engine).unwrap();
        let first = scene.ground_bodies().unwrap()[0];
        scene.reset(&mut engine).unwrap();
        let second = scene.ground_bodies().unwrap()[0];

        assert_ne!(first, second);
        assert!(engine.body(first).unwrap().removed);
        assert_eq!(engine.live_bodies().count(), 1);
    }

    #[test]
    fn test_reset_without_rebuild_keeps_terrain() {
        let mut engine = RecordingEngine::new();
        let config = HeightfieldSceneConfig {
            rebuild_on_reset: false,
            ..small_config()
        };
        let mut scene = HeightfieldScene::new(config).unwrap();
        scene.reset(&mut engine).unwrap();
        let first = scene.ground_bodies().unwrap()[0];
        scene.reset(&mut engine).unwrap();
        assert_eq!(scene.ground_bodies().unwrap()[0], first);
        assert_eq!(engine.bodies.len(), 1);
    }

    #[test]
    fn test_accessors_fail_before_build() {
        let scene = HeightfieldScene::new(small_config()).unwrap();
        assert!(matches!(
            scene.ground_height(),
            Err(SceneError::NotBuilt(_))
        ));
        assert!(matches!(
            scene.ground_bodies(),
            Err(SceneError::NotBuilt(_))
        ));
        assert!(matches!(scene.grid(), Err(SceneError::NotBuilt(_))));
    }

    #[test]
    fn test_search_path_forwarded() {
        let mut engine = RecordingEngine::new();
        let config = HeightfieldSceneConfig {
            asset_search_path: Some("assets/heightmaps".into()),
            ..small_config()
        };
        let mut scene = HeightfieldScene::new(config).unwrap();
        scene.build(&mut engine).unwrap();
        assert_eq!(engine.search_paths, vec!["assets/heightmaps".to_string()]);
    }
}
