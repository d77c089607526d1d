//! Horizontal and vertical flips
//!
//! Both flips come in an in-place variant (pairwise swap, no allocation,
//! used on the per-frame scratch plane) and an allocating variant that
//! leaves the source untouched.
//!
//! A flip never changes the plane geometry. Flipping a plane whose
//! flipped axis has length 1 is a no-op.

use upright_core::Plane;

/// Flip a plane top-bottom (vertical mirror) in place.
///
/// Swaps row `i` with row `height - 1 - i`; column order is unchanged.
pub fn flip_tb_in_place(plane: &mut Plane) {
    let w = plane.width() as usize;
    let h = plane.height() as usize;
    let data = plane.pixels_mut();
    for i in 0..h / 2 {
        let top = i * w;
        let bottom = (h - 1 - i) * w;
        for j in 0..w {
            data.swap(top + j, bottom + j);
        }
    }
}

/// Flip a plane left-right (horizontal mirror) in place.
///
/// Reverses each row; row order is unchanged.
pub fn flip_lr_in_place(plane: &mut Plane) {
    let w = plane.width() as usize;
    for row in plane.pixels_mut().chunks_exact_mut(w) {
        row.reverse();
    }
}

/// Flip a plane top-bottom (vertical mirror) into a new plane.
pub fn flip_tb(plane: &Plane) -> Plane {
    let mut out = plane.clone();
    flip_tb_in_place(&mut out);
    out
}

/// Flip a plane left-right (horizontal mirror) into a new plane.
pub fn flip_lr(plane: &Plane) -> Plane {
    let mut out = plane.clone();
    flip_lr_in_place(&mut out);
    out
}
