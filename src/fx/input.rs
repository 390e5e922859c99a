//! Per-call input snapshots from the game loop
//!
//! Typed callers build these directly. Loosely-typed callers (the JS bridge,
//! the CLI) go through `from_json`, which reports an absent key as
//! [`FxError::MissingField`] instead of substituting a default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FxError, Result};

/// A bubble collision, as reported by the physics step
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionData {
    pub x: f32,
    pub y: f32,
    /// Bubble radius in pixels
    pub bubble_size: f32,
    /// Current combo count
    pub combo: i32,
    /// Special (power) bubble
    pub special: bool,
    /// Impact strength
    pub impact: f32,
}

impl CollisionData {
    const RECORD: &'static str = "collision";
    const FIELDS: &'static [&'static str] =
        &["x", "y", "bubble_size", "combo", "special", "impact"];

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        decode_record(value, Self::RECORD, Self::FIELDS)
    }
}

/// Game-wide state used to pick the background theme
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub speed_level: f32,
    pub score: f64,
    pub combo: i32,
}

impl GameState {
    const RECORD: &'static str = "game state";
    const FIELDS: &'static [&'static str] = &["speed_level", "score", "combo"];

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        decode_record(value, Self::RECORD, Self::FIELDS)
    }
}

/// Check required keys first so the caller learns which one is absent
fn decode_record<T: DeserializeOwned>(
    value: Value,
    record: &'static str,
    fields: &'static [&'static str],
) -> Result<T> {
    let object = value.as_object().ok_or(FxError::NotAnObject { record })?;
    if let Some(field) = fields.iter().copied().find(|f| !object.contains_key(*f)) {
        return Err(FxError::MissingField { record, field });
    }
    serde_json::from_value(value).map_err(|source| FxError::InvalidField { record, source })
}
