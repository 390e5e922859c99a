//! Color helpers: HSV conversion and the explosion gradient

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tuning::Tuning;

/// 8-bit RGB color, rendered as `rgb(R,G,B)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unit-range channels, truncating (not rounding) to 0-255
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self::from_unit(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("expected rgb(R,G,B), got {s:?}"))?;

        let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
        match (channels.next(), channels.next(), channels.next(), channels.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Rgb::new(r, g, b)),
            _ => Err(format!("expected three 0-255 channels in {s:?}")),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// HSV to RGB, all components in [0, 1]. Hue wraps.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Gradient color for explosion particle `index`.
///
/// Hue walks around the wheel with the particle index, plus a small random
/// jitter so back-to-back explosions never look identical.
pub fn explosion_color(index: usize, tuning: &Tuning, rng: &mut impl Rng) -> Rgb {
    let count = tuning.explosion_particles.max(1) as f32;
    let jitter = rng.random::<f32>() * tuning.explosion_hue_jitter;
    let hue = (index as f32 / count + jitter).rem_euclid(1.0);
    Rgb::from_hsv(hue, tuning.explosion_saturation, tuning.explosion_value)
}
