//! Scene adapter contract shared by the ground generators.

use rand::rngs::StdRng;
use rand::SeedableRng;
use terra_engine::{BodyId, PhysicsEngine};

use crate::error::Result;

/// A buildable ground scene owned by a simulation environment.
///
/// The lifecycle is `Unbuilt → Built`. Accessors fail with
/// [`SceneError::NotBuilt`](crate::SceneError::NotBuilt) until the first
/// successful [`build`](Scene::build); a failed build leaves the scene
/// unbuilt again. A scene instance is single-threaded: the environment is
/// its sole mutator.
pub trait Scene {
    /// Generate geometry and submit it to `engine`, replacing any previous
    /// generation's bodies.
    fn build(&mut self, engine: &mut dyn PhysicsEngine) -> Result<()>;

    /// Prepare the scene for a new episode.
    ///
    /// Builds on first use. Once built, rebuilds only when the scene is
    /// configured to rebuild on reset, removing the previous bodies first;
    /// otherwise keeps the existing geometry and simply re-reports it.
    fn reset(&mut self, engine: &mut dyn PhysicsEngine) -> Result<()>;

    /// Bodies that constitute the walkable ground, in creation order.
    fn ground_bodies(&self) -> Result<&[BodyId]>;

    /// Nominal ground-plane height in meters.
    fn ground_height(&self) -> Result<f64>;
}

/// One fresh random stream per build: a fixed seed reproduces the scene
/// exactly, even across rebuilds of the same instance.
pub(crate) fn seed_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
