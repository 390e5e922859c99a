//! Collision-driven effect generation
//!
//! Each trigger is checked independently, so a single collision can fire any
//! subset of explosion, combo, special and screen shake. Output order always
//! follows that check order.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::color::{Rgb, explosion_color};
use super::effect::{Effect, Particle};
use super::input::{CollisionData, GameState};
use super::theme::{Theme, generate_background_theme};
use crate::error::Result;
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Ring color for special bubbles
const SPECIAL_RING_COLOR: Rgb = Rgb::new(255, 215, 0);

/// Owns an RNG and tuning; the entry point for game-loop callers
#[derive(Debug, Clone)]
pub struct EffectsGenerator<R: Rng = Pcg32> {
    rng: R,
    tuning: Tuning,
}

impl EffectsGenerator<Pcg32> {
    /// Create a generator with a seeded PCG stream
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> EffectsGenerator<R> {
    /// Create a generator around any random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            tuning: Tuning::default(),
        }
    }

    /// Replace the tuning (validated first)
    pub fn with_tuning(mut self, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        self.tuning = tuning;
        Ok(self)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn generate_particle_effects(&mut self, collision: &CollisionData) -> Vec<Effect> {
        generate_particle_effects(collision, &self.tuning, &mut self.rng)
    }

    pub fn generate_background_theme(&self, state: &GameState) -> Theme {
        generate_background_theme(state, &self.tuning)
    }
}

/// Generate every effect a collision triggers
pub fn generate_particle_effects(
    collision: &CollisionData,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Vec<Effect> {
    let mut effects = Vec::new();

    if collision.bubble_size > tuning.explosion_min_bubble_size {
        effects.push(explosion_effect(collision, tuning, rng));
    }
    if collision.combo > tuning.combo_effect_min {
        effects.push(combo_effect(collision, tuning, rng));
    }
    if collision.special {
        effects.push(special_effect(collision, tuning, rng));
    }
    if collision.impact > tuning.screen_shake_min_impact {
        effects.push(screen_shake(collision, tuning, rng));
    }

    for effect in &effects {
        log::trace!(
            "{} at ({:.1}, {:.1}): {} particles, {:.2}s",
            effect.kind(),
            collision.x,
            collision.y,
            effect.particles().len(),
            effect.duration()
        );
    }

    effects
}

/// Evenly spaced radial burst; only speed, life, size and hue jitter vary
fn explosion_effect(collision: &CollisionData, tuning: &Tuning, rng: &mut impl Rng) -> Effect {
    let origin = glam::Vec2::new(collision.x, collision.y);
    let count = tuning.explosion_particles;

    let particles = (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let speed = tuning.explosion_speed.sample(rng);
            let life = tuning.explosion_life.sample(rng);
            let color = explosion_color(i, tuning, rng);
            let size = tuning.explosion_size.sample(rng);
            Particle {
                pos: origin,
                vel: polar_to_cartesian(speed, angle),
                life,
                color,
                size,
            }
        })
        .collect();

    Effect::Explosion {
        particles,
        duration: tuning.explosion_duration,
    }
}

fn combo_effect(collision: &CollisionData, tuning: &Tuning, rng: &mut impl Rng) -> Effect {
    let over = collision.combo.saturating_sub(tuning.combo_effect_min).max(0) as f32;
    let scale = (1.0 + over * tuning.combo_scale_step).min(tuning.combo_max_scale);

    Effect::Combo {
        pos: glam::Vec2::new(collision.x, collision.y),
        multiplier: collision.combo,
        label: format!("{}x COMBO!", collision.combo),
        scale,
        color: Rgb::from_hsv(rng.random::<f32>(), 0.6, 1.0),
        duration: tuning.combo_duration,
    }
}

/// Gold ring plus randomly scattered white-gold sparkles
fn special_effect(collision: &CollisionData, tuning: &Tuning, rng: &mut impl Rng) -> Effect {
    let origin = glam::Vec2::new(collision.x, collision.y);

    let sparkles = (0..tuning.special_sparkles)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let speed = tuning.special_sparkle_speed.sample(rng);
            // Warm hue, mostly desaturated
            let hue = 0.12 + rng.random::<f32>() * 0.05;
            let color = Rgb::from_hsv(hue, rng.random::<f32>() * 0.4, 1.0);
            Particle {
                pos: origin,
                vel: polar_to_cartesian(speed, angle),
                life: tuning.special_sparkle_life.sample(rng),
                color,
                size: tuning.special_sparkle_size.sample(rng),
            }
        })
        .collect();

    Effect::Special {
        pos: origin,
        radius: collision.bubble_size.max(0.0) * tuning.special_radius_scale,
        sparkles,
        color: SPECIAL_RING_COLOR,
        duration: tuning.special_duration,
    }
}

/// Shake intensity saturates at `shake_full_impact`
fn screen_shake(collision: &CollisionData, tuning: &Tuning, rng: &mut impl Rng) -> Effect {
    let intensity = (collision.impact / tuning.shake_full_impact).clamp(0.0, 1.0);
    Effect::ScreenShake {
        intensity,
        duration: 0.2 + 0.3 * intensity,
        frequency: tuning.shake_frequency.sample(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_angle;
    use crate::tuning::Band;
    use proptest::prelude::*;

    fn collision(bubble_size: f32, combo: i32, special: bool, impact: f32) -> CollisionData {
        CollisionData {
            x: 0.0,
            y: 0.0,
            bubble_size,
            combo,
            special,
            impact,
        }
    }

    fn kinds(effects: &[Effect]) -> Vec<&'static str> {
        effects.iter().map(Effect::kind).collect()
    }

    #[test]
    fn test_quiet_collision_has_no_effects() {
        let mut fx = EffectsGenerator::new(1);
        assert!(fx.generate_particle_effects(&collision(20.0, 3, false, 50.0)).is_empty());
        assert!(fx.generate_particle_effects(&collision(0.0, 0, false, 0.0)).is_empty());
    }

    #[test]
    fn test_large_bubble_only_explodes() {
        let mut fx = EffectsGenerator::new(42);
        let effects = fx.generate_particle_effects(&collision(25.0, 0, false, 10.0));
        assert_eq!(kinds(&effects), ["explosion"]);
    }

    #[test]
    fn test_all_triggers_fire_in_order() {
        let mut fx = EffectsGenerator::new(42);
        let effects = fx.generate_particle_effects(&collision(30.0, 4, true, 51.0));
        assert_eq!(kinds(&effects), ["explosion", "combo", "special", "screen_shake"]);
    }

    #[test]
    fn test_explosion_particle_field() {
        let mut fx = EffectsGenerator::new(7);
        let c = CollisionData {
            x: 120.0,
            y: -40.0,
            ..collision(25.0, 0, false, 0.0)
        };
        let effects = fx.generate_particle_effects(&c);
        let Effect::Explosion { particles, duration } = &effects[0] else {
            panic!("expected explosion, got {:?}", effects[0]);
        };

        assert_eq!(*duration, 1.0);
        assert_eq!(particles.len(), 15);
        for (i, p) in particles.iter().enumerate() {
            assert_eq!(p.pos, glam::Vec2::new(120.0, -40.0));

            let speed = p.speed();
            assert!(speed >= 2.0 - 1e-4 && speed < 5.0 + 1e-4, "speed {speed}");
            assert!(p.life >= 0.5 && p.life < 1.0, "life {}", p.life);
            assert!(p.size >= 3.0 && p.size < 7.0, "size {}", p.size);

            let expected = i as f32 / 15.0 * TAU;
            let delta = normalize_angle(p.heading() - expected);
            assert!(delta.abs() < 1e-4, "particle {i} off by {delta}");
        }
    }

    #[test]
    fn test_explosion_colors_are_rgb_strings() {
        let mut fx = EffectsGenerator::new(99);
        let effects = fx.generate_particle_effects(&collision(40.0, 0, false, 0.0));
        for p in effects[0].particles() {
            let s = p.color.to_string();
            let inner = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')).unwrap();
            let channels: Vec<u32> = inner.split(',').map(|c| c.parse().unwrap()).collect();
            assert_eq!(channels.len(), 3);
            assert!(channels.iter().all(|&c| c <= 255));
        }
    }

    #[test]
    fn test_explosion_hues_walk_the_wheel() {
        let tuning = Tuning {
            explosion_hue_jitter: 0.0,
            ..Tuning::default()
        };
        let mut fx = EffectsGenerator::new(5).with_tuning(tuning).unwrap();
        let effects = fx.generate_particle_effects(&collision(25.0, 0, false, 0.0));
        let colors: Vec<Rgb> = effects[0].particles().iter().map(|p| p.color).collect();
        assert_eq!(colors[0], Rgb::new(255, 50, 50));
        // Five of fifteen steps round the wheel is hue 1/3: green dominant
        assert_eq!(colors[5].g, 255);
        assert_eq!(colors[10].b, 255);
    }

    #[test]
    fn test_same_seed_same_effects() {
        let c = collision(30.0, 6, true, 80.0);
        let a = EffectsGenerator::new(1234).generate_particle_effects(&c);
        let b = EffectsGenerator::new(1234).generate_particle_effects(&c);
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_calls_share_shape() {
        let mut fx = EffectsGenerator::new(8);
        let c = collision(30.0, 6, true, 80.0);
        let first = fx.generate_particle_effects(&c);
        let second = fx.generate_particle_effects(&c);
        assert_ne!(first, second);
        assert_eq!(kinds(&first), kinds(&second));
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.particles().len(), b.particles().len());
            assert_eq!(a.duration(), b.duration());
        }
    }

    #[test]
    fn test_combo_scales_with_streak() {
        let mut fx = EffectsGenerator::new(3);
        let small = fx.generate_particle_effects(&collision(0.0, 4, false, 0.0));
        let big = fx.generate_particle_effects(&collision(0.0, 40, false, 0.0));
        match (&small[0], &big[0]) {
            (
                Effect::Combo { scale: s1, label, multiplier, .. },
                Effect::Combo { scale: s2, .. },
            ) => {
                assert_eq!(*multiplier, 4);
                assert_eq!(label, "4x COMBO!");
                assert!((s1 - 1.15).abs() < 1e-5);
                assert_eq!(*s2, 3.0);
            }
            other => panic!("expected combo effects, got {other:?}"),
        }
    }

    #[test]
    fn test_special_burst() {
        let mut fx = EffectsGenerator::new(11);
        let effects = fx.generate_particle_effects(&collision(10.0, 0, true, 0.0));
        let Effect::Special { radius, sparkles, color, .. } = &effects[0] else {
            panic!("expected special, got {:?}", effects[0]);
        };
        assert_eq!(*radius, 30.0);
        assert_eq!(*color, SPECIAL_RING_COLOR);
        assert_eq!(sparkles.len(), 8);
        for s in sparkles {
            assert!(s.speed() >= 1.0 - 1e-4 && s.speed() < 3.0 + 1e-4);
            assert!(s.life >= 0.8 && s.life < 1.6);
        }
    }

    #[test]
    fn test_screen_shake_grows_with_impact() {
        let mut fx = EffectsGenerator::new(2);
        let shake = |fx: &mut EffectsGenerator, impact| match fx
            .generate_particle_effects(&collision(0.0, 0, false, impact))
            .remove(0)
        {
            Effect::ScreenShake {
                intensity,
                duration,
                frequency,
            } => (intensity, duration, frequency),
            other => panic!("expected shake, got {other:?}"),
        };

        let (soft, soft_duration, freq) = shake(&mut fx, 55.0);
        let (hard, hard_duration, _) = shake(&mut fx, 500.0);
        assert!((soft - 0.55).abs() < 1e-5);
        assert_eq!(hard, 1.0);
        assert!(hard_duration > soft_duration);
        assert!((20.0..30.0).contains(&freq));
    }

    #[test]
    fn test_custom_thresholds() {
        let tuning = Tuning {
            explosion_min_bubble_size: 5.0,
            explosion_particles: 6,
            ..Tuning::default()
        };
        let mut fx = EffectsGenerator::new(0).with_tuning(tuning).unwrap();
        let effects = fx.generate_particle_effects(&collision(6.0, 0, false, 0.0));
        assert_eq!(effects[0].particles().len(), 6);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = Tuning {
            explosion_particles: 0,
            ..Tuning::default()
        };
        assert!(EffectsGenerator::new(0).with_tuning(tuning).is_err());
    }

    #[test]
    fn test_negative_combo_never_fires() {
        let mut fx = EffectsGenerator::new(4);
        let effects = fx.generate_particle_effects(&collision(25.0, -1, false, 10.0));
        assert_eq!(kinds(&effects), ["explosion"]);

        let tuning = Tuning {
            combo_effect_min: -3,
            ..Tuning::default()
        };
        let mut fx = EffectsGenerator::new(4).with_tuning(tuning).unwrap();
        let effects = fx.generate_particle_effects(&collision(0.0, -2, false, 0.0));
        let Effect::Combo { scale, multiplier, .. } = &effects[0] else {
            panic!("expected combo, got {:?}", effects[0]);
        };
        assert_eq!(*multiplier, -2);
        assert!((scale - 1.15).abs() < 1e-5);
    }

    #[test]
    fn test_sparkle_ranges_follow_tuning() {
        let tuning = Tuning {
            special_sparkle_speed: Band::new(10.0, 11.0),
            special_sparkle_size: Band::new(0.5, 0.6),
            ..Tuning::default()
        };
        let mut fx = EffectsGenerator::new(21).with_tuning(tuning).unwrap();
        let effects = fx.generate_particle_effects(&collision(10.0, 0, true, 0.0));
        for s in effects[0].particles() {
            assert!(s.speed() >= 10.0 - 1e-3 && s.speed() < 11.0 + 1e-3);
            assert!(s.size >= 0.5 && s.size < 0.6);
        }
    }

    proptest! {
        #[test]
        fn prop_effects_follow_thresholds(
            bubble_size in 0.0f32..60.0,
            combo in -5i32..20,
            special in any::<bool>(),
            impact in 0.0f32..120.0,
            seed in any::<u64>(),
        ) {
            let c = collision(bubble_size, combo, special, impact);
            let effects = EffectsGenerator::new(seed).generate_particle_effects(&c);

            let mut expected = Vec::new();
            if bubble_size > 20.0 { expected.push("explosion"); }
            if combo > 3 { expected.push("combo"); }
            if special { expected.push("special"); }
            if impact > 50.0 { expected.push("screen_shake"); }
            prop_assert_eq!(kinds(&effects), expected);

            for effect in &effects {
                if let Effect::Explosion { particles, duration } = effect {
                    prop_assert_eq!(particles.len(), 15);
                    prop_assert_eq!(*duration, 1.0);
                    for p in particles {
                        prop_assert!(p.life > 0.0);
                        prop_assert!(p.size >= 3.0 && p.size < 7.0);
                    }
                }
            }
        }
    }
}
