//! Plane - the owned RGBA8 pixel container
//!
//! A [`Plane`] is a flat, row-major sequence of [`Rgba`] pixels with a
//! [`FrameGeometry`] describing its layout. Row 0 is the top row.
//!
//! # Invariant
//!
//! `pixels().len() == geometry().len()` holds for every `Plane`; all
//! constructors enforce it, so transform code may index freely within the
//! stated dimensions.
//!
//! # Lifecycle
//!
//! Planes are allocated once per capture resolution and reused frame to
//! frame; the copy-out methods ([`copy_to`](Plane::copy_to),
//! [`copy_to_bytes`](Plane::copy_to_bytes)) hand the contents to a caller
//! buffer with an explicit size check.

use crate::error::{Error, Result};
use crate::geometry::FrameGeometry;

/// A 4-byte interleaved RGBA pixel.
///
/// Stored in memory as `r, g, b, a` in increasing byte order, matching the
/// interleaved RGBA8 buffers delivered by camera-capture facilities.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a pixel from its four channels.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel (alpha = 255).
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create an opaque gray pixel.
    #[inline]
    pub fn gray(v: u8) -> Self {
        Self::opaque(v, v, v)
    }

    /// The pixel as a `[r, g, b, a]` byte array.
    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a pixel from a `[r, g, b, a]` byte array.
    #[inline]
    pub fn from_array(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// Owned RGBA8 pixel plane.
///
/// # Examples
///
/// ```
/// use upright_core::{FrameGeometry, Plane, Rgba};
///
/// let geom = FrameGeometry::new(640, 480).unwrap();
/// let mut plane = Plane::new(geom);
/// plane.set_pixel_unchecked(10, 20, Rgba::opaque(255, 0, 0));
/// assert_eq!(plane.get_pixel_unchecked(10, 20), Rgba::opaque(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    geometry: FrameGeometry,
    data: Vec<Rgba>,
}

impl Plane {
    /// Create a zero-filled plane (transparent black).
    pub fn new(geometry: FrameGeometry) -> Self {
        Self {
            geometry,
            data: vec![Rgba::default(); geometry.len()],
        }
    }

    /// Create a plane taking ownership of an existing pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `pixels.len()` differs from
    /// `geometry.len()`.
    pub fn from_pixels(geometry: FrameGeometry, pixels: Vec<Rgba>) -> Result<Self> {
        if pixels.len() != geometry.len() {
            return Err(Error::SizeMismatch {
                expected: geometry.len(),
                actual: pixels.len(),
            });
        }
        Ok(Self {
            geometry,
            data: pixels,
        })
    }

    /// Create a plane from an interleaved RGBA byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `bytes.len()` differs from
    /// `geometry.byte_len()`.
    pub fn from_bytes(geometry: FrameGeometry, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != geometry.byte_len() {
            return Err(Error::SizeMismatch {
                expected: geometry.byte_len(),
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self { geometry, data })
    }

    /// Get the plane geometry.
    #[inline]
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.geometry.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.geometry.height()
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Planes are never empty; present for slice-like API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// Mutable access to the pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.data
    }

    /// Get the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if self.geometry.contains(x, y) {
            Some(self.data[self.geometry.index(x, y)])
        } else {
            None
        }
    }

    /// Get the pixel at `(x, y)` without a bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the plane.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        debug_assert!(self.geometry.contains(x, y));
        self.data[self.geometry.index(x, y)]
    }

    /// Set the pixel at `(x, y)` without a bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the plane.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: Rgba) {
        debug_assert!(self.geometry.contains(x, y));
        let idx = self.geometry.index(x, y);
        self.data[idx] = value;
    }

    /// Get row `y` as a pixel slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba] {
        let w = self.geometry.width() as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Fill the whole plane with one pixel value.
    pub fn fill(&mut self, value: Rgba) {
        self.data.fill(value);
    }

    /// Copy the pixels into a caller-owned pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `dst.len()` differs from
    /// [`len`](Self::len).
    pub fn copy_to(&self, dst: &mut [Rgba]) -> Result<()> {
        if dst.len() != self.data.len() {
            return Err(Error::SizeMismatch {
                expected: self.data.len(),
                actual: dst.len(),
            });
        }
        dst.copy_from_slice(&self.data);
        Ok(())
    }

    /// Copy the pixels into a caller-owned interleaved RGBA byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `dst.len()` differs from
    /// `geometry().byte_len()`.
    pub fn copy_to_bytes(&self, dst: &mut [u8]) -> Result<()> {
        if dst.len() != self.geometry.byte_len() {
            return Err(Error::SizeMismatch {
                expected: self.geometry.byte_len(),
                actual: dst.len(),
            });
        }
        for (chunk, px) in dst.chunks_exact_mut(4).zip(&self.data) {
            chunk.copy_from_slice(&px.to_array());
        }
        Ok(())
    }

    /// The pixels as a freshly allocated interleaved RGBA byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.geometry.byte_len());
        for px in &self.data {
            out.extend_from_slice(&px.to_array());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom(w: u32, h: u32) -> FrameGeometry {
        FrameGeometry::new(w, h).unwrap()
    }

    #[test]
    fn test_new_zero_filled() {
        let plane = Plane::new(geom(3, 2));
        assert_eq!(plane.len(), 6);
        assert!(plane.pixels().iter().all(|&p| p == Rgba::default()));
    }

    #[test]
    fn test_from_pixels_size_check() {
        let pixels = vec![Rgba::gray(7); 5];
        assert!(Plane::from_pixels(geom(3, 2), pixels.clone()).is_err());
        let pixels = vec![Rgba::gray(7); 6];
        let plane = Plane::from_pixels(geom(3, 2), pixels).unwrap();
        assert_eq!(plane.get_pixel_unchecked(2, 1), Rgba::gray(7));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let plane = Plane::new(geom(3, 2));
        assert!(plane.get(2, 1).is_some());
        assert!(plane.get(3, 0).is_none());
        assert!(plane.get(0, 2).is_none());
    }

    #[test]
    fn test_row() {
        let mut plane = Plane::new(geom(3, 2));
        plane.set_pixel_unchecked(0, 1, Rgba::gray(9));
        let row = plane.row(1);
        assert_eq!(row.len(), 3);
        assert_eq!(row[0], Rgba::gray(9));
    }

    #[test]
    fn test_byte_round_trip() {
        let mut plane = Plane::new(geom(2, 2));
        plane.set_pixel_unchecked(0, 0, Rgba::new(1, 2, 3, 4));
        plane.set_pixel_unchecked(1, 1, Rgba::new(5, 6, 7, 8));
        let bytes = plane.to_bytes();
        assert_eq!(&bytes[0..4], &[1, 2, 3, 4]);
        let back = Plane::from_bytes(plane.geometry(), &bytes).unwrap();
        assert_eq!(back, plane);
    }

    #[test]
    fn test_copy_to_size_mismatch() {
        let plane = Plane::new(geom(2, 2));
        let mut small = vec![Rgba::default(); 3];
        assert!(matches!(
            plane.copy_to(&mut small),
            Err(Error::SizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
        let mut bytes = vec![0u8; 15];
        assert!(plane.copy_to_bytes(&mut bytes).is_err());
    }

    #[test]
    fn test_rgba_array_round_trip() {
        let px = Rgba::from_array([1, 2, 3, 4]);
        assert_eq!(px, Rgba::new(1, 2, 3, 4));
        assert_eq!(px.to_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_fill() {
        let mut plane = Plane::new(geom(4, 4));
        plane.fill(Rgba::opaque(10, 20, 30));
        assert!(plane.pixels().iter().all(|&p| p == Rgba::opaque(10, 20, 30)));
    }
}
