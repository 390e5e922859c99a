//! Error types for effect generation
//!
//! Generation itself cannot fail once inputs are typed. Errors come from
//! decoding loosely-typed input records and from loading tuning files.

use thiserror::Error;

/// Errors surfaced by the effects crate.
#[derive(Error, Debug)]
pub enum FxError {
    /// A required key was absent from an input record.
    #[error("missing field `{field}` in {record}")]
    MissingField {
        /// Record being decoded (`collision`, `game state`, ...).
        record: &'static str,
        /// The absent key.
        field: &'static str,
    },

    /// A key was present but its value had the wrong type.
    #[error("invalid {record}: {source}")]
    InvalidField {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A request named a kind nobody handles.
    #[error("unknown request kind {0}")]
    UnknownKind(String),

    /// The input was valid JSON but not an object.
    #[error("{record} must be a JSON object")]
    NotAnObject { record: &'static str },

    /// Malformed JSON text.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// Tuning values that would produce nonsense effects.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FxError>;
