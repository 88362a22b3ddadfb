//! Error handling for the fill pipeline.
//!
//! The geometry layer never raises; all errors originate at the synthesis
//! boundary and are classified here:
//! - recoverable service failures are surfaced to the user and undone
//! - cancellation is a silent no-op
//! - everything else is fatal and re-raised
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Error reported by the external synthesis service.
///
/// The patch-match variants correspond to the service's documented error
/// codes (−26330 through −26336), `General` to the service's catch-all −1,
/// and `Cancelled` to code 8007.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// The fill region is too small for synthesis.
    #[error("Fill region is too small")]
    HoleTooSmall,

    /// The fill region is too large for synthesis.
    #[error("Fill region is too large")]
    HoleTooLarge,

    /// The image is too small for synthesis.
    #[error("Image is too small")]
    ImageTooSmall,

    /// Target sample points are collinear.
    #[error("Target points are collinear")]
    TargetPointsCollinear,

    /// Source sample points are collinear.
    #[error("Source points are collinear")]
    SourcePointsCollinear,

    /// Target sample points are too close together.
    #[error("Target points are too close together")]
    TargetPointsTooClose,

    /// Source sample points are too close together.
    #[error("Source points are too close together")]
    SourcePointsTooClose,

    /// The service's generic failure code.
    #[error("Synthesis failed")]
    General,

    /// The user cancelled the operation. Treated as a no-op, never shown.
    #[error("Operation cancelled")]
    Cancelled,

    /// Any other service error; fatal to the fill operation.
    #[error("Synthesis service error {code}: {message}")]
    Service {
        /// The raw service error code.
        code: i32,
        /// The service's error message.
        message: String,
    },
}

impl SynthesisError {
    /// Maps a raw service error code to its variant.
    pub fn from_code(code: i32, message: impl Into<String>) -> Self {
        match code {
            -26330 => SynthesisError::HoleTooSmall,
            -26331 => SynthesisError::HoleTooLarge,
            -26332 => SynthesisError::ImageTooSmall,
            -26333 => SynthesisError::TargetPointsCollinear,
            -26334 => SynthesisError::SourcePointsCollinear,
            -26335 => SynthesisError::TargetPointsTooClose,
            -26336 => SynthesisError::SourcePointsTooClose,
            -1 => SynthesisError::General,
            8007 => SynthesisError::Cancelled,
            _ => SynthesisError::Service {
                code,
                message: message.into(),
            },
        }
    }

    /// The raw service error code for this variant.
    pub fn code(&self) -> i32 {
        match self {
            SynthesisError::HoleTooSmall => -26330,
            SynthesisError::HoleTooLarge => -26331,
            SynthesisError::ImageTooSmall => -26332,
            SynthesisError::TargetPointsCollinear => -26333,
            SynthesisError::SourcePointsCollinear => -26334,
            SynthesisError::TargetPointsTooClose => -26335,
            SynthesisError::SourcePointsTooClose => -26336,
            SynthesisError::General => -1,
            SynthesisError::Cancelled => 8007,
            SynthesisError::Service { code, .. } => *code,
        }
    }

    /// True for errors the dispatcher recovers from by clearing the
    /// selection, deleting the history record and showing a short message.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SynthesisError::HoleTooSmall
                | SynthesisError::HoleTooLarge
                | SynthesisError::ImageTooSmall
                | SynthesisError::TargetPointsCollinear
                | SynthesisError::SourcePointsCollinear
                | SynthesisError::TargetPointsTooClose
                | SynthesisError::SourcePointsTooClose
                | SynthesisError::General
        )
    }
}

/// Main error type for the fill pipeline.
#[derive(Error, Debug)]
pub enum FillError {
    /// A fatal synthesis failure (not recoverable, not a cancellation).
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl FillError {
    /// Create an error from a string message.
    pub fn other(msg: impl Into<String>) -> Self {
        FillError::Other(msg.into())
    }
}

/// Result type using [`FillError`].
pub type Result<T> = std::result::Result<T, FillError>;
