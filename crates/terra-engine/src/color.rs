//! RGBA color with components in `[0, 1]`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed color data.
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("color must have exactly 4 components; got {0}")]
    ComponentCount(usize),

    #[error("color component {0} outside [0, 1]")]
    OutOfRange(f64),
}

/// An (r, g, b, a) tint where each component is in `[0, 1]` and `a` is
/// opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque white, the tint of heightfield terrain and floor plates.
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from a raw component slice.
    ///
    /// Fails unless the slice holds exactly four components, each in
    /// `[0, 1]`.
    pub fn from_components(components: &[f64]) -> Result<Self, ColorError> {
        match components {
            &[r, g, b, a] => {
                let color = Self::new(r, g, b, a);
                color.validate()?;
                Ok(color)
            }
            _ => Err(ColorError::ComponentCount(components.len())),
        }
    }

    /// Check every component is in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ColorError> {
        for component in self.as_array() {
            if !(0.0..=1.0).contains(&component) {
                return Err(ColorError::OutOfRange(component));
            }
        }
        Ok(())
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
