//! Error types for the battle domain.

use thiserror::Error;

/// Result type alias using [`SkirmishError`].
pub type Result<T> = std::result::Result<T, SkirmishError>;

/// Top-level error type for battle domain errors.
///
/// Gameplay never fails: bad moves and attacks on wrecks are reported as
/// outcomes, not errors. These variants cover building values from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkirmishError {
    /// Text did not name one of the known unit kinds.
    #[error("Unknown unit kind: {0}")]
    UnknownUnitKind(String),

    /// Coordinates fall outside the battlefield.
    #[error("Position ({x}, {y}) is outside the {size}x{size} battlefield")]
    OutOfBounds {
        /// Requested X coordinate.
        x: i32,
        /// Requested Y coordinate.
        y: i32,
        /// Battlefield edge length.
        size: i32,
    },
}
