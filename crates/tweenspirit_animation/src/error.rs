//! Animation error types

use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised by keyframe tracks
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenError {
    /// A value of one kind was offered to a track (or conversion) of another
    #[error("Value type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },

    /// The track has no keyframes to interpolate between
    #[error("Track has no keyframes")]
    EmptyTrack,
}

/// Result type for track operations
pub type Result<T> = std::result::Result<T, TweenError>;
