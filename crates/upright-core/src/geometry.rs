//! Frame geometry - dimensions of a pixel plane
//!
//! A [`FrameGeometry`] describes the row-major layout of a pixel plane:
//! `width` pixels per row, `height` rows, row 0 at the top. A 90 or 270
//! degree rotation transposes the geometry; flips and 180 degree rotation
//! leave it unchanged.

use crate::error::{Error, Result};
use std::fmt;

/// Dimensions of a pixel plane.
///
/// Both dimensions are guaranteed nonzero; a `FrameGeometry` can only be
/// obtained through [`FrameGeometry::new`], which rejects empty planes.
/// This lets downstream operations treat the layout as always valid.
///
/// # Examples
///
/// ```
/// use upright_core::FrameGeometry;
///
/// let geom = FrameGeometry::new(640, 480).unwrap();
/// assert_eq!(geom.len(), 640 * 480);
/// assert_eq!(geom.transposed(), FrameGeometry::new(480, 640).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameGeometry {
    width: u32,
    height: u32,
}

impl FrameGeometry {
    /// Create a geometry with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Number of pixels in a plane of this geometry.
    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of bytes in an interleaved RGBA8 plane of this geometry.
    #[inline]
    pub fn byte_len(self) -> usize {
        self.len() * 4
    }

    /// The geometry after a 90 or 270 degree rotation.
    #[inline]
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether the plane is wider than it is tall (or square).
    #[inline]
    pub fn is_landscape(self) -> bool {
        self.width >= self.height
    }

    /// Row-major index of the pixel at `(x, y)`.
    ///
    /// Does not bounds-check; callers index into a buffer sized by
    /// [`len`](Self::len), which panics on overflow.
    #[inline]
    pub fn index(self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check whether `(x, y)` lies inside the plane.
    #[inline]
    pub fn contains(self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

impl fmt::Display for FrameGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
