//! Generation error types.

use thiserror::Error;

/// Errors surfaced by the generation pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A configuration value was rejected before generation started.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },

    /// Region classification left no floor region of qualifying size.
    /// Usually means the fill percentage or the minimum region size is
    /// too high for the grid dimensions.
    #[error("no floor region of at least {min_region_size} tiles survived (map is all wall)")]
    EmptyMap { min_region_size: u32 },

    /// The connector terminated with a room still unreachable from the
    /// main room. This is an internal invariant violation, not a
    /// configuration problem.
    #[error("room {room} is not reachable from the main room after connection")]
    UnreachableRoom { room: usize },
}

impl GenerationError {
    pub(crate) fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        GenerationError::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}
