//! Error types for upright-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Out-of-range pixel coordinates and internally inconsistent buffers are
//! programmer errors and panic at the call site; the variants here cover
//! conditions reachable from caller-supplied data (capture buffers of the
//! wrong length, zero-sized geometry).

use thiserror::Error;

/// upright-rs error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid plane dimensions
    #[error("invalid plane dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer length does not match the stated geometry
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Plane geometry mismatch
    #[error("geometry mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    GeometryMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for upright operations
pub type Result<T> = std::result::Result<T, Error>;
