//! Constructor-time configuration for the scene generators.
//!
//! Configs are immutable parameter bundles validated fail-fast: a scene
//! constructor rejects a malformed config before any randomness is consumed
//! or any engine call is made. Every `[a, b]` range is sampled uniformly
//! between its two endpoints regardless of which is numerically smaller
//! (see [`crate::sampling::uniform_between`]).

use serde::{Deserialize, Serialize};
use terra_engine::Rgba;

use crate::error::{Result, SceneError};
use crate::stepstones::MULTICOLOR;

/// Parameters of a [`StepstoneScene`](crate::StepstoneScene).
///
/// Defaults match an easy course: wide stones, small gaps, negligible height
/// jitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepstoneSceneConfig {
    /// Number of randomized stones after the platform stone.
    pub num_stones: usize,
    /// Height in meters of every stone.
    pub stone_height: f64,
    /// Bounds of the stone width, sampled once per course.
    pub stone_width_range: [f64; 2],
    /// Bounds of each stone's length.
    pub stone_length_range: [f64; 2],
    /// Bounds of the gap before each stone.
    pub gap_range: [f64; 2],
    /// Bounds of each stone's vertical jitter.
    pub height_offset_range: [f64; 2],
    /// Bounds of the backstop floor's top-surface height.
    pub floor_height_range: [f64; 2],
    /// Bounds of the platform stone's length.
    pub platform_length_range: [f64; 2],
    /// Seed for the build's random stream; `None` draws from OS entropy.
    pub random_seed: Option<u64>,
    /// Colors the randomized stones cycle through.
    pub color_sequence: Vec<Rgba>,
    /// Whether `reset` discards the current course and builds a new one.
    pub rebuild_on_reset: bool,
}

impl Default for StepstoneSceneConfig {
    fn default() -> Self {
        Self {
            num_stones: 10,
            stone_height: 0.05,
            stone_width_range: [2.0, 3.0],
            stone_length_range: [0.1, 0.3],
            gap_range: [0.1, 0.3],
            height_offset_range: [0.0, 1e-6],
            floor_height_range: [-0.5, -0.55],
            platform_length_range: [0.75, 1.0],
            random_seed: None,
            color_sequence: MULTICOLOR.to_vec(),
            rebuild_on_reset: true,
        }
    }
}

impl StepstoneSceneConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.stone_height <= 0.0 {
            return Err(SceneError::Config(format!(
                "stone height must be positive; got {}",
                self.stone_height
            )));
        }
        for (name, range) in [
            ("stone width", self.stone_width_range),
            ("stone length", self.stone_length_range),
            ("platform length", self.platform_length_range),
        ] {
            if range[0] <= 0.0 || range[1] <= 0.0 {
                return Err(SceneError::Config(format!(
                    "{name} bounds must be positive; got {range:?}"
                )));
            }
        }
        if self.gap_range[0] < 0.0 || self.gap_range[1] < 0.0 {
            return Err(SceneError::Config(format!(
                "gap bounds must be non-negative; got {:?}",
                self.gap_range
            )));
        }
        validate_palette(&self.color_sequence)
    }
}

/// Parameters of a [`HeightfieldScene`](crate::HeightfieldScene).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightfieldSceneConfig {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub columns: usize,
    /// Base upper bound of each 2x2 block's sampled height.
    pub height_range: f64,
    /// Multiplier applied to `height_range` before sampling. The rough
    /// locomotion terrain scales its range by 5.
    pub height_multiplier: f64,
    /// Size of one grid cell in meters.
    pub cell_size: f64,
    /// Extra asset directory handed to the backend for terrain textures.
    pub asset_search_path: Option<String>,
    /// Seed for the build's random stream; `None` draws from OS entropy.
    pub random_seed: Option<u64>,
    /// Whether `reset` discards the current terrain and builds a new one.
    pub rebuild_on_reset: bool,
}

impl Default for HeightfieldSceneConfig {
    fn default() -> Self {
        Self {
            rows: 1024,
            columns: 128,
            height_range: 0.03,
            height_multiplier: 5.0,
            cell_size: 0.02,
            asset_search_path: None,
            random_seed: Some(10),
            rebuild_on_reset: true,
        }
    }
}

impl HeightfieldSceneConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(SceneError::Config(format!(
                "grid dimensions must be at least 1x1; got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.height_range < 0.0 {
            return Err(SceneError::Config(format!(
                "height range must be non-negative; got {}",
                self.height_range
            )));
        }
        if self.height_multiplier < 0.0 {
            return Err(SceneError::Config(format!(
                "height multiplier must be non-negative; got {}",
                self.height_multiplier
            )));
        }
        if self.cell_size <= 0.0 {
            return Err(SceneError::Config(format!(
                "cell size must be positive; got {}",
                self.cell_size
            )));
        }
        Ok(())
    }

    /// Effective sampling bound for one block height.
    pub(crate) fn effective_height_range(&self) -> f64 {
        self.height_range * self.height_multiplier
    }
}

fn validate_palette(colors: &[Rgba]) -> Result<()> {
    if colors.is_empty() {
        return Err(SceneError::Config("color sequence must not be empty".into()));
    }
    for color in colors {
        color
            .validate()
            .map_err(|err| SceneError::Config(err.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        StepstoneSceneConfig::default().validate().unwrap();
        HeightfieldSceneConfig::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_out_of_range_palette_entry() {
        let config = StepstoneSceneConfig {
            color_sequence: vec![Rgba::new(0.5, 0.5, 2.0, 1.0)],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SceneError::Config(_))));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let config = StepstoneSceneConfig {
            color_sequence: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SceneError::Config(_))));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let stepstones = StepstoneSceneConfig {
            stone_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(stepstones.validate(), Err(SceneError::Config(_))));

        let heightfield = HeightfieldSceneConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(heightfield.validate(), Err(SceneError::Config(_))));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = StepstoneSceneConfig {
            num_stones: 3,
            random_seed: Some(42),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: StepstoneSceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_stones, 3);
        assert_eq!(back.random_seed, Some(42));
        assert_eq!(back.color_sequence, config.color_sequence);
    }
}
