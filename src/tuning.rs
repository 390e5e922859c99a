//! Data-driven effect tuning
//!
//! Every threshold and random range used by the generator lives here so the
//! game can rebalance effects from a JSON file without a rebuild. Missing keys
//! fall back to the defaults in [`crate::consts`].

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{FxError, Result};

/// Half-open sampling band `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max)`. A degenerate band yields `min`.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }
}

impl From<(f32, f32)> for Band {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

/// Effect thresholds and ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Triggers ===
    pub explosion_min_bubble_size: f32,
    pub combo_effect_min: i32,
    pub screen_shake_min_impact: f32,

    // === Explosion ===
    pub explosion_particles: usize,
    pub explosion_speed: Band,
    /// Particle lifetime in seconds
    pub explosion_life: Band,
    pub explosion_size: Band,
    /// Whole-effect duration; deliberately not derived from particle lifetimes
    pub explosion_duration: f32,
    pub explosion_hue_jitter: f32,
    pub explosion_saturation: f32,
    pub explosion_value: f32,

    // === Combo popup ===
    pub combo_scale_step: f32,
    pub combo_max_scale: f32,
    pub combo_duration: f32,

    // === Special burst ===
    pub special_sparkles: usize,
    pub special_radius_scale: f32,
    pub special_duration: f32,
    pub special_sparkle_speed: Band,
    /// Sparkle lifetime in seconds
    pub special_sparkle_life: Band,
    pub special_sparkle_size: Band,

    // === Screen shake ===
    pub shake_full_impact: f32,
    pub shake_frequency: Band,

    // === Background themes ===
    pub intense_min_speed_level: f32,
    pub achievement_min_score: f64,
    pub combo_theme_min: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            explosion_min_bubble_size: EXPLOSION_MIN_BUBBLE_SIZE,
            combo_effect_min: COMBO_EFFECT_MIN,
            screen_shake_min_impact: SCREEN_SHAKE_MIN_IMPACT,

            explosion_particles: EXPLOSION_PARTICLES,
            explosion_speed: EXPLOSION_SPEED.into(),
            explosion_life: EXPLOSION_LIFE.into(),
            explosion_size: EXPLOSION_SIZE.into(),
            explosion_duration: EXPLOSION_DURATION,
            explosion_hue_jitter: EXPLOSION_HUE_JITTER,
            explosion_saturation: EXPLOSION_SATURATION,
            explosion_value: EXPLOSION_VALUE,

            combo_scale_step: COMBO_SCALE_STEP,
            combo_max_scale: COMBO_MAX_SCALE,
            combo_duration: COMBO_DURATION,

            special_sparkles: SPECIAL_SPARKLES,
            special_radius_scale: SPECIAL_RADIUS_SCALE,
            special_duration: SPECIAL_DURATION,
            special_sparkle_speed: SPECIAL_SPARKLE_SPEED.into(),
            special_sparkle_life: SPECIAL_SPARKLE_LIFE.into(),
            special_sparkle_size: SPECIAL_SPARKLE_SIZE.into(),

            shake_full_impact: SHAKE_FULL_IMPACT,
            shake_frequency: SHAKE_FREQUENCY.into(),

            intense_min_speed_level: INTENSE_MIN_SPEED_LEVEL,
            achievement_min_score: ACHIEVEMENT_MIN_SCORE,
            combo_theme_min: COMBO_THEME_MIN,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded effect tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would produce empty or inverted effects
    pub fn validate(&self) -> Result<()> {
        if self.explosion_particles == 0 {
            return Err(FxError::InvalidTuning(
                "explosion_particles must be at least 1".into(),
            ));
        }

        let bands = [
            ("explosion_speed", self.explosion_speed),
            ("explosion_life", self.explosion_life),
            ("explosion_size", self.explosion_size),
            ("special_sparkle_speed", self.special_sparkle_speed),
            ("special_sparkle_life", self.special_sparkle_life),
            ("special_sparkle_size", self.special_sparkle_size),
            ("shake_frequency", self.shake_frequency),
        ];
        for (name, band) in bands {
            if !(band.min.is_finite() && band.max.is_finite() && band.min < band.max) {
                return Err(FxError::InvalidTuning(format!(
                    "{name} must be a non-empty range, got [{}, {})",
                    band.min, band.max
                )));
            }
        }
        let lives = [
            ("explosion_life", self.explosion_life),
            ("special_sparkle_life", self.special_sparkle_life),
        ];
        for (name, band) in lives {
            if band.min <= 0.0 {
                return Err(FxError::InvalidTuning(format!("{name} must be positive")));
            }
        }

        let unit = [
            ("explosion_saturation", self.explosion_saturation),
            ("explosion_value", self.explosion_value),
            ("explosion_hue_jitter", self.explosion_hue_jitter),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(FxError::InvalidTuning(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        let durations = [
            ("explosion_duration", self.explosion_duration),
            ("combo_duration", self.combo_duration),
            ("special_duration", self.special_duration),
        ];
        for (name, value) in durations {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FxError::InvalidTuning(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.shake_full_impact.is_nan() || self.shake_full_impact <= 0.0 {
            return Err(FxError::InvalidTuning(
                "shake_full_impact must be positive".into(),
            ));
        }

        Ok(())
    }
}
