//! Plane regression test
//!
//! Verifies the row-major layout contract, the copy-out surface size
//! checks, and the byte round trip.

use upright_core::{Error, FrameGeometry, Plane, Rgba};
use upright_test::{RegParams, indexed_plane};

#[test]
fn plane_reg() {
    let mut rp = RegParams::new("plane");

    let geom = FrameGeometry::new(6, 4).expect("geometry");
    let plane = indexed_plane(geom);

    // --- row-major addressing: pixel (x, y) is element y*w + x ---
    for y in 0..geom.height() {
        for x in 0..geom.width() {
            let expected = (y * geom.width() + x) as u8;
            rp.compare_values(
                expected as f64,
                plane.get_pixel_unchecked(x, y).r as f64,
                0.0,
            );
        }
    }

    // --- rows are contiguous width-sized slices ---
    let row = plane.row(2);
    rp.compare_values(geom.width() as f64, row.len() as f64, 0.0);
    rp.compare_values(12.0, row[0].r as f64, 0.0);

    // --- copy-out: matching sizes succeed, mismatches are rejected ---
    let mut pixels = vec![Rgba::default(); geom.len()];
    plane.copy_to(&mut pixels).expect("copy_to");
    rp.compare_planes(
        &Plane::from_pixels(geom, pixels).expect("from_pixels"),
        &plane,
    );

    let mut bytes = vec![0u8; geom.byte_len()];
    plane.copy_to_bytes(&mut bytes).expect("copy_to_bytes");
    rp.compare_bytes(&bytes, &plane.to_bytes());

    let mut wrong = vec![Rgba::default(); geom.len() - 1];
    let err = plane.copy_to(&mut wrong);
    rp.compare_values(
        1.0,
        if matches!(err, Err(Error::SizeMismatch { .. })) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- byte round trip ---
    let back = Plane::from_bytes(geom, &bytes).expect("from_bytes");
    rp.compare_planes(&back, &plane);

    assert!(rp.cleanup(), "plane regression test failed");
}
