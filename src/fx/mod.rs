//! Visual effect generation
//!
//! Everything here is a pure function of its inputs plus an injected RNG:
//! - No global random state
//! - No state carried between calls
//! - No rendering or platform dependencies

pub mod color;
pub mod effect;
pub mod generator;
pub mod input;
pub mod theme;

pub use color::{Rgb, explosion_color, hsv_to_rgb};
pub use effect::{Effect, Particle};
pub use generator::{EffectsGenerator, generate_particle_effects};
pub use input::{CollisionData, GameState};
pub use theme::{Theme, ThemeKind, generate_background_theme};
