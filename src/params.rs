//! Renderer tunables.
//!
//! Two historical calibrations of this renderer exist; they differ only in a
//! handful of constants (trig phase, sky-noise bias, road grain, water
//! reflections). Rather than forking the shading logic, one renderer is
//! parameterized by this struct, with both calibrations kept as presets.
//! A params file can override any field.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::trig::{PHASE_CLASSIC, PHASE_REWORK};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Quarter-turn phase offset for the cosine table (64 or 65).
    pub phase: u8,
    /// Tuning offset added to the sky cloud term; negative results render
    /// as gray clouds.
    pub cloud_bias: i32,
    /// Dot-product threshold of the sun glare cone (unit vectors at the
    /// 256 fixed-point scale, so the maximum is 65536).
    pub glare_threshold: i32,
    /// Add hash grain to road tiles.
    pub texture_grain: bool,
    /// Resolve water cells against the mirrored committed pixel instead of
    /// the flat tint.
    pub reflections: bool,
    /// Water color: the flat fill in the plain variant, the blend target in
    /// the reflection variant.
    pub water_tint: (u8, u8, u8),
    /// Per-channel ceiling on resolved reflections.
    pub water_ceiling: u8,
}

impl Params {
    /// The surviving original calibration: phase 65, flat cyan water,
    /// no grain.
    pub fn classic() -> Self {
        Self {
            phase: PHASE_CLASSIC,
            cloud_bias: 30,
            glare_threshold: 64000,
            texture_grain: false,
            reflections: false,
            water_tint: (60, 60, 120),
            water_ceiling: 180,
        }
    }

    /// The reworked calibration: phase 64, road grain, reflective water.
    pub fn rework() -> Self {
        Self {
            phase: PHASE_REWORK,
            cloud_bias: 30,
            glare_threshold: 64000,
            texture_grain: true,
            reflections: true,
            water_tint: (60, 60, 120),
            water_ceiling: 180,
        }
    }

    /// Look up a preset by its CLI name.
    pub fn variant(name: &str) -> Result<Self, String> {
        match name {
            "classic" => Ok(Self::classic()),
            "rework" => Ok(Self::rework()),
            other => Err(format!(
                "unknown variant '{}' (expected 'classic' or 'rework')",
                other
            )),
        }
    }

    /// Save params to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load params from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::classic()
    }
}
