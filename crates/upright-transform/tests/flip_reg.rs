//! Flip regression test
//!
//! Verifies the concrete row/column mirror scenarios, the involution
//! property on random planes, and the degenerate-axis no-ops.

use upright_core::FrameGeometry;
use upright_test::{RegParams, labeled_plane, labels_of, random_plane};
use upright_transform::{flip_lr, flip_lr_in_place, flip_tb, flip_tb_in_place};

fn geom(w: u32, h: u32) -> FrameGeometry {
    FrameGeometry::new(w, h).expect("nonzero geometry")
}

#[test]
fn flip_reg() {
    let mut rp = RegParams::new("flip");

    // --- concrete 4x2 scenarios ---
    // rows: A B C D / E F G H
    let plane = labeled_plane(geom(4, 2), b"ABCDEFGH");

    let tb = flip_tb(&plane);
    rp.compare_bytes(&labels_of(&tb), b"EFGHABCD");

    let lr = flip_lr(&plane);
    rp.compare_bytes(&labels_of(&lr), b"DCBAHGFE");

    // in-place variants agree with the allocating ones
    let mut ip = plane.clone();
    flip_tb_in_place(&mut ip);
    rp.compare_planes(&ip, &tb);

    let mut ip = plane.clone();
    flip_lr_in_place(&mut ip);
    rp.compare_planes(&ip, &lr);

    // --- involution on assorted geometries ---
    for (w, h) in [(5, 3), (16, 9), (1, 7), (7, 1), (1, 1), (2, 2)] {
        let plane = random_plane(geom(w, h));

        let twice = flip_tb(&flip_tb(&plane));
        rp.compare_planes(&twice, &plane);

        let twice = flip_lr(&flip_lr(&plane));
        rp.compare_planes(&twice, &plane);
    }

    // --- height 1: vertical flip is a no-op ---
    let row = random_plane(geom(9, 1));
    rp.compare_planes(&flip_tb(&row), &row);

    // --- width 1: horizontal flip is a no-op ---
    let column = random_plane(geom(1, 9));
    rp.compare_planes(&flip_lr(&column), &column);

    assert!(rp.cleanup(), "flip regression test failed");
}
