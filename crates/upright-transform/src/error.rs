//! Error types for upright-transform

use thiserror::Error;

/// Errors that can occur during orientation transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] upright_core::Error),

    /// Video rotation angle outside {0, 90, 180, 270}
    #[error("invalid video rotation angle: {0} degrees")]
    InvalidAngle(i32),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
