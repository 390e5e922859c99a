//! Bubble FX - procedural visual effects for a bubble-popping arcade game
//!
//! Core modules:
//! - `fx`: Effect generation (particles, combo popups, screen shake, themes)
//! - `tuning`: Data-driven thresholds and ranges
//! - `settings`: Player preferences applied on top of generated effects
//! - `error`: Error taxonomy for input decoding and config loading

pub mod error;
pub mod fx;
pub mod settings;
pub mod tuning;

pub use error::{FxError, Result};
pub use fx::{
    CollisionData, Effect, EffectsGenerator, GameState, Particle, Rgb, Theme, ThemeKind,
};
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Default effect constants (overridable through [`Tuning`])
pub mod consts {
    /// Bubbles larger than this burst into an explosion
    pub const EXPLOSION_MIN_BUBBLE_SIZE: f32 = 20.0;
    /// Combo counts above this spawn a combo popup
    pub const COMBO_EFFECT_MIN: i32 = 3;
    /// Impacts above this shake the screen
    pub const SCREEN_SHAKE_MIN_IMPACT: f32 = 50.0;

    /// Explosion particle field
    pub const EXPLOSION_PARTICLES: usize = 15;
    pub const EXPLOSION_SPEED: (f32, f32) = (2.0, 5.0);
    pub const EXPLOSION_LIFE: (f32, f32) = (0.5, 1.0);
    pub const EXPLOSION_SIZE: (f32, f32) = (3.0, 7.0);
    /// Whole-effect duration, independent of particle lifetimes
    pub const EXPLOSION_DURATION: f32 = 1.0;

    /// Explosion gradient (HSV)
    pub const EXPLOSION_HUE_JITTER: f32 = 0.1;
    pub const EXPLOSION_SATURATION: f32 = 0.8;
    pub const EXPLOSION_VALUE: f32 = 1.0;

    /// Combo popup
    pub const COMBO_SCALE_STEP: f32 = 0.15;
    pub const COMBO_MAX_SCALE: f32 = 3.0;
    pub const COMBO_DURATION: f32 = 1.5;

    /// Special bubble burst
    pub const SPECIAL_SPARKLES: usize = 8;
    pub const SPECIAL_RADIUS_SCALE: f32 = 3.0;
    pub const SPECIAL_DURATION: f32 = 1.5;
    pub const SPECIAL_SPARKLE_SPEED: (f32, f32) = (1.0, 3.0);
    pub const SPECIAL_SPARKLE_LIFE: (f32, f32) = (0.8, 1.6);
    pub const SPECIAL_SPARKLE_SIZE: (f32, f32) = (2.0, 4.0);

    /// Screen shake: impact at which intensity saturates at 1.0
    pub const SHAKE_FULL_IMPACT: f32 = 100.0;
    pub const SHAKE_FREQUENCY: (f32, f32) = (20.0, 30.0);

    /// Background theme thresholds
    pub const INTENSE_MIN_SPEED_LEVEL: f32 = 15.0;
    pub const ACHIEVEMENT_MIN_SCORE: f64 = 10_000.0;
    pub const COMBO_THEME_MIN: i32 = 5;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
