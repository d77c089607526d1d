//! Upright Core - Basic data structures for camera-frame orientation
//!
//! This crate provides the fundamental data structures used throughout
//! the upright frame-normalization library:
//!
//! - [`Plane`] - Owned RGBA8 pixel plane, row-major, row 0 at the top
//! - [`Rgba`] - A 4-byte interleaved pixel
//! - [`FrameGeometry`] - Plane dimensions, always nonzero
//!
//! Capture facilities deliver interleaved RGBA8 buffers plus per-frame
//! orientation metadata; the geometric operations that turn those buffers
//! upright live in `upright-transform`.

pub mod error;
pub mod geometry;
pub mod plane;

pub use error::{Error, Result};
pub use geometry::FrameGeometry;
pub use plane::{Plane, Rgba};
