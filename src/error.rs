//! Error types for the QuadMix library.

use std::fmt;

/// Errors produced by the QuadMix library.
///
/// All core arithmetic is total over wrapping 64-bit unsigned integers,
/// so every variant represents a caller contract violation detected at
/// the orchestration boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuadMixError {
    /// Requested transform count is zero.
    InvalidTransformCount,
    /// Number of keys does not match the number of transforms.
    KeyCountMismatch,
    /// Application order is not a valid permutation of the transform indices.
    InvalidOrder,
    /// Side-parameter sequence has the wrong length for a transform kind.
    SideParamArity,
}

impl fmt::Display for QuadMixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadMixError::InvalidTransformCount => {
                write!(f, "Transform count must be at least 1")
            }
            QuadMixError::KeyCountMismatch => {
                write!(f, "Number of keys does not match number of transforms")
            }
            QuadMixError::InvalidOrder => {
                write!(
                    f,
                    "Application order is not a valid permutation of transform indices"
                )
            }
            QuadMixError::SideParamArity => {
                write!(
                    f,
                    "Side-parameter sequence has the wrong length for the transform kind"
                )
            }
        }
    }
}

impl std::error::Error for QuadMixError {}
