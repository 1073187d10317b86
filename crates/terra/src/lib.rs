//! terra — procedural ground geometry for legged-robot locomotion
//! simulation.
//!
//! This is the umbrella crate: it re-exports the physics-engine boundary
//! from `terra-engine` and the scene generators from `terra-world`.

pub use terra_engine::{
    self, BodyId, ColorError, EngineError, PhysicsEngine, Quat, RecordingEngine, Rgba, ShapeId,
    Vec3,
};
pub use terra_world::{
    self, FloorPlate, HeightfieldScene, HeightfieldSceneConfig, Result, Scene, SceneError,
    StepstoneCourse, StepstoneScene, StepstoneSceneConfig, StepstoneSpec, TerrainGrid, GRAY,
    MULTICOLOR,
};
