//! Player effect preferences
//!
//! Applied after generation so the generator stays a pure function of its
//! inputs and RNG.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fx::Effect;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum particles per effect for this preset
    pub fn particle_budget(&self) -> usize {
        match self {
            QualityPreset::Low => 8,
            QualityPreset::Medium => 32,
            QualityPreset::High => usize::MAX,
        }
    }
}

/// Effect settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Screen shake on big impacts
    pub screen_shake: bool,
    /// Particle effects (explosions, sparkles)
    pub particles: bool,
    /// Reduced motion (no shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            screen_shake: true,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.particle_budget()
        }
    }

    /// Filter generated effects through these preferences, keeping order
    pub fn apply(&self, effects: Vec<Effect>) -> Vec<Effect> {
        let shake = self.effective_screen_shake();
        let budget = self.max_particles();

        effects
            .into_iter()
            .filter(|effect| shake || !matches!(effect, Effect::ScreenShake { .. }))
            .map(|mut effect| {
                if let Some(particles) = effect.particles_mut() {
                    particles.truncate(budget);
                }
                effect
            })
            .collect()
    }
}
