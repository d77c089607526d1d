//! Flip-code algebra and per-frame orientation normalization
//!
//! A captured frame arrives with three pieces of orientation metadata:
//! whether the active camera is front-facing, the video rotation angle the
//! capture facility reports (0/90/180/270), and whether a 90-degree
//! upright correction is in effect for the device's screen orientation.
//! Together these select a single [`FlipCode`] applied before the optional
//! upright rotation.
//!
//! [`FlipCode`] forms the Klein four-group: every element is its own
//! inverse, and composing the vertical and horizontal flips yields the
//! 180 degree rotation. [`compose_flip_code`] is a pure function over its
//! three inputs, so the whole 16-row outcome table is directly testable:
//! there is no mutable flip state carried between frames.

use crate::error::{TransformError, TransformResult};
use crate::flip::{flip_lr_in_place, flip_tb_in_place};
use crate::rotate::{rotate_90_into, rotate_180_in_place};
use upright_core::{Error, FrameGeometry, Plane, Rgba};

/// Symbolic directive selecting which flip, if any, to apply to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlipCode {
    /// Leave the frame unchanged
    #[default]
    Identity,
    /// Mirror top-bottom
    Vertical,
    /// Mirror left-right
    Horizontal,
    /// Rotate 180 degrees (both mirrors at once)
    Rotate180,
}

impl FlipCode {
    /// Decompose into (vertical mirror, horizontal mirror) components.
    #[inline]
    fn mirrors(self) -> (bool, bool) {
        match self {
            FlipCode::Identity => (false, false),
            FlipCode::Vertical => (true, false),
            FlipCode::Horizontal => (false, true),
            FlipCode::Rotate180 => (true, true),
        }
    }

    #[inline]
    fn from_mirrors(vertical: bool, horizontal: bool) -> Self {
        match (vertical, horizontal) {
            (false, false) => FlipCode::Identity,
            (true, false) => FlipCode::Vertical,
            (false, true) => FlipCode::Horizontal,
            (true, true) => FlipCode::Rotate180,
        }
    }

    /// Compose two flip directives into one.
    ///
    /// Each mirror axis cancels with itself, so opposite requests cancel
    /// to [`Identity`](FlipCode::Identity) and orthogonal requests combine
    /// to [`Rotate180`](FlipCode::Rotate180).
    #[must_use]
    pub fn compose(self, other: FlipCode) -> FlipCode {
        let (v1, h1) = self.mirrors();
        let (v2, h2) = other.mirrors();
        FlipCode::from_mirrors(v1 ^ v2, h1 ^ h2)
    }

    /// Whether this directive leaves the frame unchanged.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == FlipCode::Identity
    }

    /// Apply the directive to a plane in place.
    pub fn apply_in_place(self, plane: &mut Plane) {
        match self {
            FlipCode::Identity => {}
            FlipCode::Vertical => flip_tb_in_place(plane),
            FlipCode::Horizontal => flip_lr_in_place(plane),
            FlipCode::Rotate180 => rotate_180_in_place(plane),
        }
    }
}

/// Video rotation angle reported by the capture facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationAngle {
    /// 0 degrees
    #[default]
    Deg0,
    /// 90 degrees
    Deg90,
    /// 180 degrees
    Deg180,
    /// 270 degrees
    Deg270,
}

impl RotationAngle {
    /// Parse a rotation angle in degrees.
    ///
    /// Negative angles and multiples of 360 are normalized first, so -90
    /// parses as [`Deg270`](RotationAngle::Deg270).
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidAngle`] if the normalized angle is
    /// not one of 0, 90, 180 or 270.
    pub fn from_degrees(degrees: i32) -> TransformResult<Self> {
        match degrees.rem_euclid(360) {
            0 => Ok(RotationAngle::Deg0),
            90 => Ok(RotationAngle::Deg90),
            180 => Ok(RotationAngle::Deg180),
            270 => Ok(RotationAngle::Deg270),
            _ => Err(TransformError::InvalidAngle(degrees)),
        }
    }

    /// The angle in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            RotationAngle::Deg0 => 0,
            RotationAngle::Deg90 => 90,
            RotationAngle::Deg180 => 180,
            RotationAngle::Deg270 => 270,
        }
    }

    /// All four angles, in increasing order.
    pub const ALL: [RotationAngle; 4] = [
        RotationAngle::Deg0,
        RotationAngle::Deg90,
        RotationAngle::Deg180,
        RotationAngle::Deg270,
    ];
}

/// Per-frame orientation metadata from the capture facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameOrientation {
    /// Whether the active camera physically faces the user. A front
    /// camera mirrors the image relative to a rear camera at the same
    /// rotation angle.
    pub front_facing: bool,
    /// The video rotation angle reported for this frame.
    pub rotation: RotationAngle,
}

impl FrameOrientation {
    /// Create orientation metadata.
    pub fn new(front_facing: bool, rotation: RotationAngle) -> Self {
        Self {
            front_facing,
            rotation,
        }
    }
}

/// Compute the flip directive for a frame from its orientation metadata.
///
/// Base directive per camera facing and rotation angle:
///
/// | facing | 0 / 90 degrees | 180 / 270 degrees |
/// |--------|----------------|-------------------|
/// | front  | `Vertical`     | `Horizontal`      |
/// | rear   | `Identity`     | `Rotate180`       |
///
/// When the 90-degree upright correction is active and the camera is
/// front-facing, the base directive is composed with
/// [`FlipCode::Rotate180`]; a rear camera ignores the correction flag.
pub fn compose_flip_code(
    front_facing: bool,
    rotation: RotationAngle,
    upright_correction: bool,
) -> FlipCode {
    use RotationAngle::*;

    let base = if front_facing {
        match rotation {
            Deg0 | Deg90 => FlipCode::Vertical,
            Deg180 | Deg270 => FlipCode::Horizontal,
        }
    } else {
        match rotation {
            Deg0 | Deg90 => FlipCode::Identity,
            Deg180 | Deg270 => FlipCode::Rotate180,
        }
    };

    if upright_correction && front_facing {
        base.compose(FlipCode::Rotate180)
    } else {
        base
    }
}

/// Per-resolution normalization pipeline.
///
/// An `Uprighter` is constructed once per capture resolution and reused
/// for every frame at that resolution. Construction decides the output
/// geometry up front (transposed from the sensor geometry when the
/// 90-degree upright correction is active), so callers can size their
/// display textures before the first frame arrives.
///
/// [`normalize`](Uprighter::normalize) copies the captured pixels into an
/// internal scratch plane, applies the composed [`FlipCode`] in place,
/// then rotates 90 degrees clockwise into the output plane (or copies
/// straight through when no correction is active). No allocation happens
/// after construction.
///
/// # Examples
///
/// ```
/// use upright_core::{FrameGeometry, Rgba};
/// use upright_transform::{FrameOrientation, Uprighter};
///
/// let sensor = FrameGeometry::new(640, 480).unwrap();
/// let mut uprighter = Uprighter::new(sensor, true);
/// assert_eq!(uprighter.geometry(), sensor.transposed());
///
/// let frame = vec![Rgba::default(); sensor.len()];
/// let upright = uprighter
///     .normalize(&frame, FrameOrientation::default())
///     .unwrap();
/// assert_eq!(upright.width(), 480);
/// ```
#[derive(Debug)]
pub struct Uprighter {
    upright_correction: bool,
    scratch: Plane,
    output: Plane,
}

impl Uprighter {
    /// Create a pipeline for one sensor resolution.
    ///
    /// # Arguments
    /// * `sensor` - Geometry of the raw frames the capture facility delivers
    /// * `upright_correction` - Whether a 90-degree clockwise rotation is
    ///   needed to compensate for a sensor mounted perpendicular to the
    ///   screen's natural orientation
    pub fn new(sensor: FrameGeometry, upright_correction: bool) -> Self {
        let output_geometry = if upright_correction {
            sensor.transposed()
        } else {
            sensor
        };
        Self {
            upright_correction,
            scratch: Plane::new(sensor),
            output: Plane::new(output_geometry),
        }
    }

    /// Geometry of the upright output frames.
    pub fn geometry(&self) -> FrameGeometry {
        self.output.geometry()
    }

    /// Geometry of the raw sensor frames this pipeline accepts.
    pub fn sensor_geometry(&self) -> FrameGeometry {
        self.scratch.geometry()
    }

    /// Whether the pipeline applies the 90-degree upright correction.
    pub fn upright_correction(&self) -> bool {
        self.upright_correction
    }

    /// The most recent upright frame (zero-filled before the first
    /// [`normalize`](Uprighter::normalize) call).
    pub fn plane(&self) -> &Plane {
        &self.output
    }

    /// Normalize one captured frame to upright display orientation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `pixels` does not match the
    /// sensor geometry.
    pub fn normalize(
        &mut self,
        pixels: &[Rgba],
        orientation: FrameOrientation,
    ) -> TransformResult<&Plane> {
        if pixels.len() != self.scratch.len() {
            return Err(Error::SizeMismatch {
                expected: self.scratch.len(),
                actual: pixels.len(),
            }
            .into());
        }
        self.scratch.pixels_mut().copy_from_slice(pixels);
        self.finish(orientation)
    }

    /// Normalize one captured frame from an interleaved RGBA byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `bytes` does not hold exactly
    /// 4 bytes per sensor pixel.
    pub fn normalize_bytes(
        &mut self,
        bytes: &[u8],
        orientation: FrameOrientation,
    ) -> TransformResult<&Plane> {
        if bytes.len() != self.scratch.geometry().byte_len() {
            return Err(Error::SizeMismatch {
                expected: self.scratch.geometry().byte_len(),
                actual: bytes.len(),
            }
            .into());
        }
        for (px, chunk) in self.scratch.pixels_mut().iter_mut().zip(bytes.chunks_exact(4)) {
            *px = Rgba::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        }
        self.finish(orientation)
    }

    fn finish(&mut self, orientation: FrameOrientation) -> TransformResult<&Plane> {
        let code = compose_flip_code(
            orientation.front_facing,
            orientation.rotation,
            self.upright_correction,
        );
        code.apply_in_place(&mut self.scratch);

        if self.upright_correction {
            rotate_90_into(&self.scratch, &mut self.output, true)?;
        } else {
            self.output.pixels_mut().copy_from_slice(self.scratch.pixels());
        }
        Ok(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_identity_neutral() {
        for code in [
            FlipCode::Identity,
            FlipCode::Vertical,
            FlipCode::Horizontal,
            FlipCode::Rotate180,
        ] {
            assert_eq!(code.compose(FlipCode::Identity), code);
            assert_eq!(FlipCode::Identity.compose(code), code);
        }
    }

    #[test]
    fn test_compose_self_inverse() {
        for code in [
            FlipCode::Identity,
            FlipCode::Vertical,
            FlipCode::Horizontal,
            FlipCode::Rotate180,
        ] {
            assert_eq!(code.compose(code), FlipCode::Identity);
        }
    }

    #[test]
    fn test_compose_orthogonal_mirrors() {
        assert_eq!(
            FlipCode::Vertical.compose(FlipCode::Horizontal),
            FlipCode::Rotate180
        );
        assert_eq!(
            FlipCode::Vertical.compose(FlipCode::Rotate180),
            FlipCode::Horizontal
        );
        assert_eq!(
            FlipCode::Horizontal.compose(FlipCode::Rotate180),
            FlipCode::Vertical
        );
    }

    #[test]
    fn test_from_degrees() {
        assert_eq!(
            RotationAngle::from_degrees(0).unwrap(),
            RotationAngle::Deg0
        );
        assert_eq!(
            RotationAngle::from_degrees(270).unwrap(),
            RotationAngle::Deg270
        );
        assert_eq!(
            RotationAngle::from_degrees(-90).unwrap(),
            RotationAngle::Deg270
        );
        assert_eq!(
            RotationAngle::from_degrees(450).unwrap(),
            RotationAngle::Deg90
        );
        assert!(RotationAngle::from_degrees(45).is_err());
    }
}
