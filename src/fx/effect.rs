//! Renderer-facing effect descriptors

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Rgb;
use crate::cartesian_to_polar;

/// A particle for visual effects
///
/// Serialized flat as `{x, y, vx, vy, life, color, size}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ParticleRecord", from = "ParticleRecord")]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Lifetime in seconds
    pub life: f32,
    pub color: Rgb,
    pub size: f32,
}

impl Particle {
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Heading in radians, [-π, π]
    pub fn heading(&self) -> f32 {
        cartesian_to_polar(self.vel).1
    }
}

/// Flat wire form of [`Particle`]
#[derive(Serialize, Deserialize)]
struct ParticleRecord {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    life: f32,
    color: Rgb,
    size: f32,
}

impl From<Particle> for ParticleRecord {
    fn from(p: Particle) -> Self {
        Self {
            x: p.pos.x,
            y: p.pos.y,
            vx: p.vel.x,
            vy: p.vel.y,
            life: p.life,
            color: p.color,
            size: p.size,
        }
    }
}

impl From<ParticleRecord> for Particle {
    fn from(r: ParticleRecord) -> Self {
        Self {
            pos: Vec2::new(r.x, r.y),
            vel: Vec2::new(r.vx, r.vy),
            life: r.life,
            color: r.color,
            size: r.size,
        }
    }
}

/// One transient visual effect, in the order the renderer should start them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Radial particle burst
    Explosion {
        particles: Vec<Particle>,
        /// Seconds the effect stays registered, independent of particle lives
        duration: f32,
    },
    /// Floating combo counter
    Combo {
        pos: Vec2,
        multiplier: i32,
        label: String,
        /// Text scale, grows with the combo
        scale: f32,
        color: Rgb,
        duration: f32,
    },
    /// Expanding ring with sparkles for special bubbles
    Special {
        pos: Vec2,
        radius: f32,
        sparkles: Vec<Particle>,
        color: Rgb,
        duration: f32,
    },
    /// Camera shake
    ScreenShake {
        /// 0-1
        intensity: f32,
        duration: f32,
        /// Oscillation frequency in Hz
        frequency: f32,
    },
}

impl Effect {
    /// Stable name, matching the serialized `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Effect::Explosion { .. } => "explosion",
            Effect::Combo { .. } => "combo",
            Effect::Special { .. } => "special",
            Effect::ScreenShake { .. } => "screen_shake",
        }
    }

    pub fn duration(&self) -> f32 {
        match self {
            Effect::Explosion { duration, .. }
            | Effect::Combo { duration, .. }
            | Effect::Special { duration, .. }
            | Effect::ScreenShake { duration, .. } => *duration,
        }
    }

    /// Particles carried by this effect (empty for non-particle effects)
    pub fn particles(&self) -> &[Particle] {
        match self {
            Effect::Explosion { particles, .. } => particles,
            Effect::Special { sparkles, .. } => sparkles,
            Effect::Combo { .. } | Effect::ScreenShake { .. } => &[],
        }
    }

    pub fn particles_mut(&mut self) -> Option<&mut Vec<Particle>> {
        match self {
            Effect::Explosion { particles, .. } => Some(particles),
            Effect::Special { sparkles, .. } => Some(sparkles),
            Effect::Combo { .. } | Effect::ScreenShake { .. } => None,
        }
    }
}
