//! upright-transform - Geometric orientation transforms for upright
//!
//! This crate provides the operations that turn raw captured frames into
//! upright display orientation:
//!
//! - Horizontal and vertical flips (in-place and allocating)
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Flip-code composition from per-frame orientation metadata
//! - The [`Uprighter`] per-resolution normalization pipeline

pub mod error;
pub mod flip;
pub mod orient;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use flip::{flip_lr, flip_lr_in_place, flip_tb, flip_tb_in_place};
pub use orient::{
    FlipCode, FrameOrientation, RotationAngle, Uprighter, compose_flip_code,
};
pub use rotate::{rotate_90, rotate_90_into, rotate_180, rotate_180_in_place, rotate_orth};
