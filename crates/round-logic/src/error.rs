//! Errors raised at the edges of the crate
//!
//! Round resolution itself is total. These only come from input that
//! crosses a boundary: button indices and symbols from the host, and
//! configuration JSON.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("move index {0} out of range (expected 0, 1 or 2)")]
    InvalidMoveIndex(usize),

    #[error("unknown move `{0}`")]
    UnknownMove(String),

    #[error("shake duration {requested}ms exceeds {max}ms")]
    ShakeTooLong { requested: u32, max: u32 },

    #[error("invalid config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RoundError {
    fn from(err: serde_json::Error) -> Self {
        RoundError::Config(err.to_string())
    }
}
