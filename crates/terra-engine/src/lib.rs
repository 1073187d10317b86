//! Physics-engine interface boundary for terra ground generation.
//!
//! Scene generators plan geometry; an implementation of [`PhysicsEngine`]
//! turns the plan into static collision/rendering bodies. The engine is an
//! injected collaborator: generators never own a backend, they only hold the
//! opaque handles it returns.

pub mod color;
pub mod engine;
pub mod recording;

pub use color::{ColorError, Rgba};
pub use engine::{BodyId, EngineError, PhysicsEngine, ShapeId};
pub use recording::{BodyRecord, RecordingEngine, ShapeRecord};

use nalgebra as na;

/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;
/// Unit quaternion alias, used for body orientations.
pub type Quat = na::UnitQuaternion<f64>;
