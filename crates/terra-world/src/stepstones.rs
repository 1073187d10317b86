//! Randomly spaced stepstone course.
//!
//! A course is a platform stone (deterministic size, gray, positioned so the
//! robot's start pose sits on it) followed by N randomized stones laid out
//! strictly along +x. Planning is pure and engine-free; submission turns the
//! planned course into static box bodies.

use rand::rngs::StdRng;
use terra_engine::{BodyId, PhysicsEngine, Quat, Rgba, Vec3};

use crate::config::StepstoneSceneConfig;
use crate::error::{Result, SceneError};
use crate::floor::FloorPlate;
use crate::sampling::uniform_between;
use crate::scene::{seed_rng, Scene};

/// Tint of the platform stone.
pub const GRAY: Rgba = Rgba::new(0.6, 0.6, 0.6, 1.0);

/// Default palette the randomized stones cycle through.
pub const MULTICOLOR: [Rgba; 6] = [
    Rgba::new(0.9, 0.1, 0.1, 1.0),
    Rgba::new(0.1, 0.9, 0.1, 1.0),
    Rgba::new(0.1, 0.1, 0.9, 1.0),
    Rgba::new(0.9, 0.9, 0.1, 1.0),
    Rgba::new(0.9, 0.1, 0.9, 1.0),
    Rgba::new(0.1, 0.9, 0.9, 1.0),
];

/// One planned stone: an axis-aligned static box.
#[derive(Debug, Clone, PartialEq)]
pub struct StepstoneSpec {
    /// Box center in the world frame.
    pub position: Vec3,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Gap between this stone's leading edge and the previous stone's
    /// trailing edge. Zero for the platform stone.
    pub gap_before: f64,
    /// Vertical jitter of the top surface relative to the previous stone's
    /// top.
    pub height_offset: f64,
    pub color: Rgba,
}

impl StepstoneSpec {
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.length / 2.0, self.width / 2.0, self.height / 2.0)
    }

    /// x of the leading (robot-facing) edge.
    pub fn leading_x(&self) -> f64 {
        self.position.x - self.length / 2.0
    }

    /// x of the trailing edge.
    pub fn trailing_x(&self) -> f64 {
        self.position.x + self.length / 2.0
    }

    /// z of the walkable top surface.
    pub fn top_z(&self) -> f64 {
        self.position.z + self.height / 2.0
    }
}

/// The placement cursor: trailing top edge of the last placed stone.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: f64,
    z: f64,
}

impl Cursor {
    /// Advance past a stone just placed after this cursor: skip its gap and
    /// length, carry its height offset.
    fn advance(self, stone: &StepstoneSpec) -> Cursor {
        Cursor {
            x: self.x + stone.gap_before + stone.length,
            z: self.z + stone.height_offset,
        }
    }
}

/// An ordered, planned course: platform first, then the randomized stones in
/// spatial order along +x.
#[derive(Debug, Clone, PartialEq)]
pub struct StepstoneCourse {
    stones: Vec<StepstoneSpec>,
}

impl StepstoneCourse {
    /// Plan a course of `config.num_stones + 1` stones.
    ///
    /// The draw order is fixed and is the seeded reproducibility contract:
    /// stone width (shared by the whole course), platform length, then per
    /// stone its length, gap, and height offset. Colors are assigned
    /// cyclically from the palette, never drawn from the random stream.
    pub fn plan(config: &StepstoneSceneConfig, rng: &mut StdRng) -> Self {
        let stone_width = uniform_between(rng, config.stone_width_range);
        let platform_length = uniform_between(rng, config.platform_length_range);

        let mut stones = Vec::with_capacity(config.num_stones + 1);

        // The platform starts half a length behind the origin, so the robot
        // start pose lands on its center.
        let mut cursor = Cursor {
            x: -platform_length / 2.0,
            z: 0.0,
        };
        let platform = StepstoneSpec {
            position: Vec3::new(
                cursor.x + platform_length / 2.0,
                0.0,
                -config.stone_height / 2.0,
            ),
            length: platform_length,
            width: stone_width,
            height: config.stone_height,
            gap_before: 0.0,
            height_offset: 0.0,
            color: GRAY,
        };
        cursor = cursor.advance(&platform);
        stones.push(platform);

        for i in 0..config.num_stones {
            let length = uniform_between(rng, config.stone_length_range);
            let gap = uniform_between(rng, config.gap_range);
            let height_offset = uniform_between(rng, config.height_offset_range);
            let color = config.color_sequence[i % config.color_sequence.len()];

            let stone = StepstoneSpec {
                position: Vec3::new(
                    cursor.x + gap + length / 2.0,
                    0.0,
                    cursor.z + height_offset - config.stone_height / 2.0,
                ),
                length,
                width: stone_width,
                height: config.stone_height,
                gap_before: gap,
                height_offset,
                color,
            };
            cursor = cursor.advance(&stone);
            stones.push(stone);
        }

        Self { stones }
    }

    /// All stones in placement (and spatial) order, platform first.
    pub fn stones(&self) -> &[StepstoneSpec] {
        &self.stones
    }

    pub fn platform(&self) -> &StepstoneSpec {
        &self.stones[0]
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Submit every stone as one static box body with its planned tint.
    /// Handles come back in placement order.
    pub fn submit(&self, engine: &mut dyn PhysicsEngine) -> Result<Vec<BodyId>> {
        let mut bodies = Vec::with_capacity(self.stones.len());
        for stone in &self.stones {
            let shape = engine.create_box_shape(stone.half_extents())?;
            let body = engine.create_body(0.0, shape, stone.position, Quat::identity())?;
            engine.set_visual_tint(body, stone.color)?;
            bodies.push(body);
        }
        Ok(bodies)
    }
}

enum State {
    Unbuilt,
    Built(Built),
}

struct Built {
    course: StepstoneCourse,
    floor: FloorPlate,
    /// Stone bodies in placement order, then the floor plate.
    ground: Vec<BodyId>,
}

/// Scene with a platform stone, `num_stones` randomized stones, and a
/// backstop floor plate.
pub struct StepstoneScene {
    config: StepstoneSceneConfig,
    state: State,
}

impl StepstoneScene {
    /// Create an unbuilt scene, rejecting a malformed config before any
    /// sampling occurs.
    pub fn new(config: StepstoneSceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: State::Unbuilt,
        })
    }

    pub fn config(&self) -> &StepstoneSceneConfig {
        &self.config
    }

    /// The course planned by the last successful build.
    pub fn course(&self) -> Result<&StepstoneCourse> {
        match &self.state {
            State::Built(built) => Ok(&built.course),
            State::Unbuilt => Err(SceneError::NotBuilt("no stepstone course")),
        }
    }

    /// The floor plate placed by the last successful build.
    pub fn floor(&self) -> Result<&FloorPlate> {
        match &self.state {
            State::Built(built) => Ok(&built.floor),
            State::Unbuilt => Err(SceneError::NotBuilt("no floor plate")),
        }
    }
}

impl Scene for StepstoneScene {
    fn build(&mut self, engine: &mut dyn PhysicsEngine) -> Result<()> {
        // Drop back to unbuilt first so a failed submission never leaves a
        // half-built scene queryable.
        if let State::Built(built) = std::mem::replace(&mut self.state, State::Unbuilt) {
            for body in built.ground {
                engine.remove_body(body)?;
            }
        }

        // Draw order: course (width, platform length, per-stone triples),
        // then the floor height.
        let mut rng = seed_rng(self.config.random_seed);
        let course = StepstoneCourse::plan(&self.config, &mut rng);
        let floor = FloorPlate::place(self.config.floor_height_range, &mut rng);

        let mut ground = course.submit(engine)?;
        ground.push(floor.submit(engine)?);

        self.state = State::Built(Built {
            course,
            floor,
            ground,
        });
        Ok(())
    }

    fn reset(&mut self, engine: &mut dyn PhysicsEngine) -> Result<()> {
        let built = matches!(self.state, State::Built(_));
        if !built || self.config.rebuild_on_reset {
            self.build(engine)
        } else {
            Ok(())
        }
    }

    fn ground_bodies(&self) -> Result<&[BodyId]> {
        match &self.state {
            State::Built(built) => Ok(&built.ground),
            State::Unbuilt => Err(SceneError::NotBuilt("no ground bodies")),
        }
    }

    fn ground_height(&self) -> Result<f64> {
        match &self.state {
            State::Built(_) => Ok(0.0),
            State::Unbuilt => Err(SceneError::NotBuilt("no ground height")),
        }
    }
}
