//! Orthogonal rotations (90, 180, 270 degrees)
//!
//! Rotations are exact pixel permutations. A 90 or 270 degree rotation
//! transposes the plane geometry and must write into a separate plane
//! (the destination row stride differs from the source's); a 180 degree
//! rotation keeps the geometry and is in-place safe.
//!
//! Row 0 is the top row, so rotating clockwise moves the leftmost source
//! column to the top destination row.

use crate::error::TransformResult;
use crate::flip::{flip_lr, flip_tb_in_place};
use upright_core::{Error, Plane};

/// Rotate a plane by 90-degree increments.
///
/// # Arguments
/// * `plane` - Input plane
/// * `quads` - Number of 90-degree clockwise rotations (taken mod 4)
pub fn rotate_orth(plane: &Plane, quads: u32) -> Plane {
    match quads % 4 {
        0 => plane.clone(),
        1 => rotate_90(plane, true),
        2 => rotate_180(plane),
        3 => rotate_90(plane, false),
        _ => unreachable!(),
    }
}

/// Rotate a plane 90 degrees into a new plane with transposed geometry.
///
/// # Arguments
/// * `plane` - Input plane
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(plane: &Plane, clockwise: bool) -> Plane {
    let mut out = Plane::new(plane.geometry().transposed());
    rotate_90_impl(plane, &mut out, clockwise);
    out
}

/// Rotate a plane 90 degrees into an existing plane.
///
/// Reuses `dst` instead of allocating; the per-frame normalization path
/// rotates every captured frame into the same output plane.
///
/// # Errors
///
/// Returns [`Error::GeometryMismatch`] if `dst` is not the transposed
/// geometry of `plane`.
pub fn rotate_90_into(plane: &Plane, dst: &mut Plane, clockwise: bool) -> TransformResult<()> {
    let expected = plane.geometry().transposed();
    if dst.geometry() != expected {
        return Err(Error::GeometryMismatch {
            expected: (expected.width(), expected.height()),
            actual: (dst.width(), dst.height()),
        }
        .into());
    }
    rotate_90_impl(plane, dst, clockwise);
    Ok(())
}

/// Internal implementation of 90 degree rotation
fn rotate_90_impl(src: &Plane, dst: &mut Plane, clockwise: bool) {
    let w = src.width();
    let h = src.height();
    for y in 0..h {
        for x in 0..w {
            let val = src.get_pixel_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            dst.set_pixel_unchecked(nx, ny, val);
        }
    }
}

/// Rotate a plane 180 degrees into a new plane.
pub fn rotate_180(plane: &Plane) -> Plane {
    // 180 rotation = horizontal flip + vertical flip
    let mut out = flip_lr(plane);
    flip_tb_in_place(&mut out);
    out
}

/// Rotate a plane in-place by 180 degrees.
///
/// Single pass swapping element `k` with `len - 1 - k` over the first
/// half of the buffer.
pub fn rotate_180_in_place(plane: &mut Plane) {
    let data = plane.pixels_mut();
    let n = data.len();
    for k in 0..n / 2 {
        data.swap(k, n - 1 - k);
    }
}
