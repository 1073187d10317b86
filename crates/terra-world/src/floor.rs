//! Backstop floor plate beneath a stepstone course.

use rand::rngs::StdRng;
use terra_engine::{BodyId, PhysicsEngine, Quat, Rgba, Vec3};

use crate::error::Result;
use crate::sampling::uniform_between;

/// Half extent of the plate in x and y, large relative to any course.
const PLATE_HALF_EXTENT: f64 = 100.0;
/// Half thickness of the plate box in z.
const PLATE_HALF_THICKNESS: f64 = 1.0;

/// One oversized flat box that catches the robot when it falls off the
/// stones. Exactly one plate exists per build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorPlate {
    /// Height of the plate's top surface, sampled once per build.
    pub top_height: f64,
}

impl FloorPlate {
    /// Sample the plate height from `height_range`.
    pub fn place(height_range: [f64; 2], rng: &mut StdRng) -> Self {
        Self {
            top_height: uniform_between(rng, height_range),
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(PLATE_HALF_EXTENT, PLATE_HALF_EXTENT, PLATE_HALF_THICKNESS)
    }

    /// Box center, offset downward so the top surface sits at `top_height`.
    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.top_height - PLATE_HALF_THICKNESS)
    }

    /// Submit the plate as one static white box.
    pub fn submit(&self, engine: &mut dyn PhysicsEngine) -> Result<BodyId> {
        let shape = engine.create_box_shape(self.half_extents())?;
        let body = engine.create_body(0.0, shape, self.position(), Quat::identity())?;
        engine.set_visual_tint(body, Rgba::WHITE)?;
        Ok(body)
    }
}
