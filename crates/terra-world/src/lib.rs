//! Procedural ground geometry for legged-robot locomotion environments.
//!
//! Two generators share one design: a stochastic planner that decides
//! shapes, positions, and colors, and a submission step that converts the
//! plan into primitive creation calls against an injected
//! [`PhysicsEngine`](terra_engine::PhysicsEngine):
//!
//! - [`HeightfieldScene`] — block-quantized random heightfield ground.
//! - [`StepstoneScene`] — a platform stone, a chain of randomized stones,
//!   and a backstop floor plate.
//!
//! All randomness flows through one explicitly seeded generator per build,
//! consumed in a fixed documented order, so a fixed seed always reproduces
//! the same scene.

pub mod config;
pub mod error;
pub mod floor;
pub mod heightfield;
pub mod sampling;
pub mod scene;
pub mod stepstones;

pub use config::{HeightfieldSceneConfig, StepstoneSceneConfig};
pub use error::{Result, SceneError};
pub use floor::FloorPlate;
pub use heightfield::{HeightfieldScene, TerrainGrid};
pub use scene::Scene;
pub use stepstones::{StepstoneCourse, StepstoneScene, StepstoneSpec, GRAY, MULTICOLOR};
