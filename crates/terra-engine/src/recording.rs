//! In-memory [`PhysicsEngine`] for headless planning and tests.

use crate::{BodyId, EngineError, PhysicsEngine, Quat, Rgba, ShapeId, Vec3};

/// What a shape-creation call asked for.
#[derive(Debug, Clone)]
pub enum ShapeRecord {
    Heightfield {
        mesh_scale: Vec3,
        heights: Vec<f64>,
        rows: usize,
        columns: usize,
        texture_scaling: f64,
    },
    Box {
        half_extents: Vec3,
    },
}

/// One created body.
#[derive(Debug, Clone)]
pub struct BodyRecord {
    pub id: BodyId,
    pub mass: f64,
    pub shape: ShapeId,
    pub position: Vec3,
    pub orientation: Quat,
    /// Last tint applied via `set_visual_tint`, if any.
    pub tint: Option<Rgba>,
    pub removed: bool,
}

/// A [`PhysicsEngine`] that records every call instead of simulating.
///
/// Handles are assigned sequentially, so `ShapeId(n)`/`BodyId(n)` index the
/// `shapes`/`bodies` vectors directly. Removed bodies stay in `bodies` with
/// `removed` set, keeping handles stable across a rebuild.
#[derive(Debug)]
pub struct RecordingEngine {
    pub shapes: Vec<ShapeRecord>,
    pub bodies: Vec<BodyRecord>,
    pub search_paths: Vec<String>,
    pub rendering_enabled: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            bodies: Vec::new(),
            search_paths: Vec::new(),
            rendering_enabled: true,
        }
    }

    /// Look up a created body, removed or not.
    pub fn body(&self, id: BodyId) -> Option<&BodyRecord> {
        self.bodies.get(id.0 as usize)
    }

    /// Look up a created shape.
    pub fn shape(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.shapes.get(id.0 as usize)
    }

    /// Bodies currently in the scene (created and not removed).
    pub fn live_bodies(&self) -> impl Iterator<Item = &BodyRecord> {
        self.bodies.iter().filter(|body| !body.removed)
    }

    fn live_body_mut(&mut self, id: BodyId) -> Result<&mut BodyRecord, EngineError> {
        match self.bodies.get_mut(id.0 as usize) {
            Some(body) if !body.removed => Ok(body),
            _ => Err(EngineError::UnknownBody(id)),
        }
    }
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsEngine for RecordingEngine {
    fn set_search_path(&mut self, path: &str) {
        self.search_paths.push(path.to_string());
    }

    fn set_rendering(&mut self, enabled: bool) {
        self.rendering_enabled = enabled;
    }

    fn create_heightfield_shape(
        &mut self,
        mesh_scale: Vec3,
        heights: &[f64],
        rows: usize,
        columns: usize,
        texture_scaling: f64,
    ) -> Result<ShapeId, EngineError> {
        if heights.len() != rows * columns {
            return Err(EngineError::InvalidShape(format!(
                "expected {} height samples, got {}",
                rows * columns,
                heights.len()
            )));
        }
        let id = ShapeId(self.shapes.len() as u64);
        self.shapes.push(ShapeRecord::Heightfield {
            mesh_scale,
            heights: heights.to_vec(),
            rows,
            columns,
            texture_scaling,
        });
        Ok(id)
    }

    fn create_box_shape(&mut self, half_extents: Vec3) -> Result<ShapeId, EngineError> {
        if half_extents.iter().any(|&extent| extent <= 0.0) {
            return Err(EngineError::InvalidShape(format!(
                "non-positive box half extents {half_extents:?}"
            )));
        }
        let id = ShapeId(self.shapes.len() as u64);
        self.shapes.push(ShapeRecord::Box { half_extents });
        Ok(id)
    }

    fn create_body(
        &mut self,
        mass: f64,
        shape: ShapeId,
        position: Vec3,
        orientation: Quat,
    ) -> Result<BodyId, EngineError> {
        if self.shape(shape).is_none() {
            return Err(EngineError::InvalidShape(format!(
                "body references unknown shape {shape:?}"
            )));
        }
        let id = BodyId(self.bodies.len() as u64);
        self.bodies.push(BodyRecord {
            id,
            mass,
            shape,
            position,
            orientation,
            tint: None,
            removed: false,
        });
        Ok(id)
    }

    fn set_visual_tint(&mut self, body: BodyId, color: Rgba) -> Result<(), EngineError> {
        self.live_body_mut(body)?.tint = Some(color);
        Ok(())
    }

    fn remove_body(&mut self, body: BodyId) -> Result<(), EngineError> {
        self.live_body_mut(body)?.removed = true;
        Ok(())
    }
}
