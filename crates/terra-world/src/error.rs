//! Error taxonomy for scene generation.

use terra_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    /// Malformed configuration, rejected before any randomness is consumed
    /// or any engine call is made.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A query that needs a built scene was made against an unbuilt one.
    #[error("scene not built: {0}")]
    NotBuilt(&'static str),

    /// Failure from the physics backend, propagated unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, SceneError>;
