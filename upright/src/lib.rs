//! Upright - camera-frame orientation normalization
//!
//! A capture facility delivers raw interleaved RGBA8 frames together with
//! orientation metadata (front/back-facing flag, video rotation angle).
//! This library turns those frames upright for display:
//!
//! - Pixel-plane containers ([`Plane`], [`Rgba`], [`FrameGeometry`])
//! - Flips and orthogonal rotations (the [`transform`] module)
//! - Pure flip-code composition from orientation metadata
//! - A per-resolution normalization pipeline
//!   ([`transform::Uprighter`])
//!
//! # Example
//!
//! ```
//! use upright::{FrameGeometry, Rgba};
//! use upright::transform::{FrameOrientation, RotationAngle, Uprighter};
//!
//! // A portrait phone holding a landscape-mounted sensor: correct 90°.
//! let sensor = FrameGeometry::new(640, 480).unwrap();
//! let mut uprighter = Uprighter::new(sensor, true);
//! assert_eq!(uprighter.geometry(), FrameGeometry::new(480, 640).unwrap());
//!
//! let frame = vec![Rgba::default(); sensor.len()];
//! let orientation = FrameOrientation::new(true, RotationAngle::Deg90);
//! let upright = uprighter.normalize(&frame, orientation).unwrap();
//! assert_eq!(upright.geometry(), uprighter.geometry());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use upright_core::*;

// Re-export the transform crate as a module to avoid name conflicts
pub use upright_transform as transform;
