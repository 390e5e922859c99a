//! Background theme selection

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::input::GameState;
use crate::tuning::Tuning;

/// Background theme variants, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    /// Very high speed level
    Intense,
    /// Score milestone reached
    Achievement,
    /// Long combo streak
    Combo,
    Normal,
}

impl ThemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Intense => "intense",
            ThemeKind::Achievement => "achievement",
            ThemeKind::Combo => "combo",
            ThemeKind::Normal => "normal",
        }
    }
}

/// Renderer-facing background description
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub kind: ThemeKind,
    /// Vertical gradient, top then bottom
    pub background: [Rgb; 2],
    pub accent: Rgb,
    /// Background pulse in Hz (0 = static)
    pub pulse_rate: f32,
    /// Ambient particle density, 0-1
    pub particle_density: f32,
}

impl Theme {
    pub fn new(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Intense => Self {
                kind,
                background: [Rgb::new(60, 0, 20), Rgb::new(140, 10, 0)],
                accent: Rgb::new(255, 90, 0),
                pulse_rate: 2.0,
                particle_density: 1.0,
            },
            ThemeKind::Achievement => Self {
                kind,
                background: [Rgb::new(40, 20, 80), Rgb::new(120, 80, 0)],
                accent: Rgb::new(255, 215, 0),
                pulse_rate: 0.5,
                particle_density: 0.7,
            },
            ThemeKind::Combo => Self {
                kind,
                background: [Rgb::new(0, 30, 70), Rgb::new(70, 0, 110)],
                accent: Rgb::new(0, 255, 200),
                pulse_rate: 1.0,
                particle_density: 0.5,
            },
            ThemeKind::Normal => Self {
                kind,
                background: [Rgb::new(10, 20, 50), Rgb::new(30, 60, 120)],
                accent: Rgb::new(120, 200, 255),
                pulse_rate: 0.0,
                particle_density: 0.2,
            },
        }
    }
}

/// Pick the background theme; first matching rule wins
pub fn generate_background_theme(state: &GameState, tuning: &Tuning) -> Theme {
    let kind = if state.speed_level > tuning.intense_min_speed_level {
        ThemeKind::Intense
    } else if state.score > tuning.achievement_min_score {
        ThemeKind::Achievement
    } else if state.combo > tuning.combo_theme_min {
        ThemeKind::Combo
    } else {
        ThemeKind::Normal
    };
    log::debug!("Background theme: {}", kind.as_str());
    Theme::new(kind)
}
