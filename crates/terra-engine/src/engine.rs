//! The capability set consumed from the physics backend.

use crate::{Quat, Rgba, Vec3};
use thiserror::Error;

/// Opaque handle to a collision shape owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u64);

/// Opaque handle to a rigid body owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

/// Failure reported by the physics backend.
///
/// Generators have no recovery strategy for a misbehaving backend, so these
/// propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid shape parameters: {0}")]
    InvalidShape(String),

    #[error("unknown body handle {0:?}")]
    UnknownBody(BodyId),

    #[error("backend failure: {0}")]
    Backend(String),
}

/// Synchronous body/shape-creation surface of a physics engine.
///
/// Mirrors the subset of a bullet-style client that ground generation needs.
/// Creation methods return opaque handles; all calls are synchronous and the
/// backend is assumed externally synchronized.
pub trait PhysicsEngine {
    /// Register an extra directory the backend may search for assets such as
    /// heightfield textures.
    fn set_search_path(&mut self, path: &str);

    /// Toggle the live-rendering refresh. Generators disable it around bulk
    /// geometry submission and re-enable it afterwards.
    fn set_rendering(&mut self, enabled: bool);

    /// Create a heightfield collision shape from `rows * columns` row-major
    /// samples. `mesh_scale` is the cell size in x/y and the height unit in
    /// z.
    fn create_heightfield_shape(
        &mut self,
        mesh_scale: Vec3,
        heights: &[f64],
        rows: usize,
        columns: usize,
        texture_scaling: f64,
    ) -> Result<ShapeId, EngineError>;

    /// Create a box collision shape from its half extents.
    fn create_box_shape(&mut self, half_extents: Vec3) -> Result<ShapeId, EngineError>;

    /// Create a rigid body for a previously created shape. Zero mass makes
    /// the body static.
    fn create_body(
        &mut self,
        mass: f64,
        shape: ShapeId,
        position: Vec3,
        orientation: Quat,
    ) -> Result<BodyId, EngineError>;

    /// Set the visual tint of a body.
    fn set_visual_tint(&mut self, body: BodyId, color: Rgba) -> Result<(), EngineError>;

    /// Remove a body from the scene.
    fn remove_body(&mut self, body: BodyId) -> Result<(), EngineError>;
}
