//! upright-test - Regression test harness for upright
//!
//! Provides [`RegParams`] (test name, running comparison index, failure
//! accumulation) plus builders for test planes with position-checkable
//! contents.
//!
//! # Usage
//!
//! ```ignore
//! use upright_test::{RegParams, indexed_plane};
//!
//! let mut rp = RegParams::new("rotateorth");
//! rp.compare_values(480.0, rotated.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use rand::RngExt;
use upright_core::{FrameGeometry, Plane, Rgba};

/// Build a plane where every pixel encodes its own row-major index.
///
/// Pixel `k` is `Rgba { r: k, g: k >> 8, b: k >> 16, a: 255 }`, so every
/// pixel of a plane up to 2^24 pixels is distinct and its origin is
/// recoverable when a transform misplaces it.
pub fn indexed_plane(geometry: FrameGeometry) -> Plane {
    let mut plane = Plane::new(geometry);
    for (k, px) in plane.pixels_mut().iter_mut().enumerate() {
        *px = Rgba::new(k as u8, (k >> 8) as u8, (k >> 16) as u8, 255);
    }
    plane
}

/// Build a plane with uniformly random pixel values.
pub fn random_plane(geometry: FrameGeometry) -> Plane {
    let mut rng = rand::rng();
    let mut plane = Plane::new(geometry);
    for px in plane.pixels_mut() {
        *px = Rgba::new(rng.random(), rng.random(), rng.random(), rng.random());
    }
    plane
}

/// Build a plane from one byte label per pixel, as an opaque gray level.
///
/// Mirrors the `[A, B, C, D, E, F, G, H]` style scenarios: each label
/// becomes one distinguishable pixel.
///
/// # Panics
///
/// Panics if `labels.len()` differs from `geometry.len()`.
pub fn labeled_plane(geometry: FrameGeometry, labels: &[u8]) -> Plane {
    assert_eq!(
        labels.len(),
        geometry.len(),
        "label count must match geometry"
    );
    let mut plane = Plane::new(geometry);
    for (px, &label) in plane.pixels_mut().iter_mut().zip(labels) {
        *px = Rgba::gray(label);
    }
    plane
}

/// Extract the gray labels of a plane built with [`labeled_plane`].
pub fn labels_of(plane: &Plane) -> Vec<u8> {
    plane.pixels().iter().map(|px| px.r).collect()
}
