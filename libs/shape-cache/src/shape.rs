//! # Shape Configuration
//!
//! The value type describing one requested shape. Configurations are cache
//! keys, so equality and hashing are structural and compare floats by bit
//! pattern.

use std::hash::{Hash, Hasher};

use config::constants::{REFERENCE_ANGLE_DEGREES, REFERENCE_RADIUS};
use glam::{DVec2, DVec3};
use mesh_builder::{size::quantize_quality, Pose};
use serde::{Deserialize, Serialize};

use crate::error::{ShapeError, ShapeResult};

// =============================================================================
// SHAPE KINDS
// =============================================================================

/// Flat rectangle subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectKind {
    /// Sharp corners.
    Hard,
    /// Rounded corners.
    Round,
}

/// Cuboid subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CubeKind {
    /// Sharp edges.
    Hard,
    /// The four edges parallel to z are rounded.
    RoundSides,
    /// Every edge and corner is rounded with the same radius.
    RoundEdges,
    /// Rounded sides plus a smaller fillet on the front and back edges.
    RoundSidesFillet,
}

/// Cylinder subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CylinderKind {
    /// Sharp cap edges.
    Hard,
    /// Rounded cap edges.
    RoundEdges,
}

/// Shape family and subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A flat rectangle in the xy plane.
    Rect(RectKind),
    /// A cuboid.
    Cube(CubeKind),
    /// A cylinder around the z axis.
    Cylinder(CylinderKind),
}

impl ShapeKind {
    /// True for the flat family; the z axis plays no part in portions.
    #[inline]
    pub fn is_2d(&self) -> bool {
        matches!(self, Self::Rect(_))
    }
}

/// Which side of the surface is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceMode {
    /// Faces point away from the shape.
    #[default]
    Outside,
    /// Faces point into the shape.
    Inside,
    /// Both, as two coincident surfaces.
    DoubleSided,
}

// =============================================================================
// PORTIONS
// =============================================================================

/// The part of one axis that is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortionAxis {
    /// Only the positive half.
    Positive,
    /// Only the negative half.
    Negative,
    /// The whole axis.
    #[default]
    Both,
}

/// How many axes are cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortionType {
    /// No axis is cut.
    Full,
    /// One axis is cut.
    Half,
    /// Two axes are cut.
    Quadrant,
    /// Three axes are cut.
    Octant,
}

/// Per-axis selection of the shape to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Portion {
    /// Selection along x.
    pub x: PortionAxis,
    /// Selection along y.
    pub y: PortionAxis,
    /// Selection along z (ignored for rects).
    pub z: PortionAxis,
}

impl Portion {
    /// The whole shape.
    pub const FULL: Self = Self::new(PortionAxis::Both, PortionAxis::Both, PortionAxis::Both);

    /// Creates a portion.
    pub const fn new(x: PortionAxis, y: PortionAxis, z: PortionAxis) -> Self {
        Self { x, y, z }
    }

    /// Classifies the portion by its number of cut axes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_cache::{Portion, PortionAxis, PortionType};
    ///
    /// let half = Portion::new(PortionAxis::Positive, PortionAxis::Both, PortionAxis::Negative);
    /// assert_eq!(half.portion_type(false), PortionType::Quadrant);
    /// assert_eq!(half.portion_type(true), PortionType::Half);
    /// ```
    pub fn portion_type(&self, is_2d: bool) -> PortionType {
        let cut = |axis: PortionAxis| usize::from(axis != PortionAxis::Both);
        let z = if is_2d { 0 } else { cut(self.z) };
        match cut(self.x) + cut(self.y) + z {
            0 => PortionType::Full,
            1 => PortionType::Half,
            2 => PortionType::Quadrant,
            _ => PortionType::Octant,
        }
    }

    /// Number of copies of the generated octant (or quadrant) the portion
    /// needs.
    pub fn symmetry_factor(&self, is_2d: bool) -> usize {
        let factor = |axis: PortionAxis| if axis == PortionAxis::Both { 2 } else { 1 };
        let z = if is_2d { 1 } else { factor(self.z) };
        factor(self.x) * factor(self.y) * z
    }
}

// =============================================================================
// SHAPE CONFIGURATION
// =============================================================================

/// Everything needed to build one shape.
///
/// `radii.x` is the primary (corner, side or cylinder) radius and
/// `radii.y` the secondary (fillet or edge) radius. `quality.x` drives the
/// primary sweeps and `quality.y` the secondary ones.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shape_cache::{CubeKind, ShapeConfig, ShapeKind};
///
/// let config = ShapeConfig {
///     kind: ShapeKind::Cube(CubeKind::RoundSides),
///     size: DVec3::new(2.0, 1.0, 0.5),
///     ..ShapeConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_ne!(config, ShapeConfig::default());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Family and subtype.
    pub kind: ShapeKind,
    /// Emitted side of the surface.
    pub face_mode: FaceMode,
    /// Kept part of the shape.
    pub portion: Portion,
    /// Whether cut faces of a partial shape are capped.
    pub portion_closed: bool,
    /// Full extents.
    pub size: DVec3,
    /// Placement applied after resizing.
    pub pose: Pose,
    /// Primary and secondary radius.
    pub radii: DVec2,
    /// Primary and secondary tessellation quality.
    pub quality: DVec2,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Cube(CubeKind::RoundEdges),
            face_mode: FaceMode::Outside,
            portion: Portion::FULL,
            portion_closed: false,
            size: DVec3::ONE,
            pose: Pose::IDENTITY,
            radii: DVec2::splat(REFERENCE_RADIUS),
            quality: DVec2::ONE,
        }
    }
}

impl ShapeConfig {
    /// Number of cut axes, honoring the family's dimensionality.
    pub fn portion_type(&self) -> PortionType {
        self.portion.portion_type(self.kind.is_2d())
    }

    /// A copy whose quality components are snapped to the smallest value
    /// producing the same segment count.
    pub fn quantized(&self) -> Self {
        let snap = |quality| quantize_quality(REFERENCE_ANGLE_DEGREES, quality);
        Self {
            quality: DVec2::new(snap(self.quality.x), snap(self.quality.y)),
            ..*self
        }
    }

    /// Checks that every numeric field is finite and non-negative.
    pub fn validate(&self) -> ShapeResult<()> {
        if !self.size.is_finite() {
            return Err(ShapeError::NonFinite { field: "size" });
        }
        if !self.radii.is_finite() {
            return Err(ShapeError::NonFinite { field: "radii" });
        }
        if !self.quality.is_finite() {
            return Err(ShapeError::NonFinite { field: "quality" });
        }
        if !self.pose.position.is_finite() || !self.pose.rotation.is_finite() {
            return Err(ShapeError::NonFinite { field: "pose" });
        }

        for (axis, value) in ['x', 'y', 'z'].into_iter().zip(self.size.to_array()) {
            if value < 0.0 {
                return Err(ShapeError::NegativeSize { axis, value });
            }
        }
        if let Some(value) = self.radii.to_array().into_iter().find(|r| *r < 0.0) {
            return Err(ShapeError::NegativeRadius { value });
        }
        if let Some(value) = self.quality.to_array().into_iter().find(|q| *q < 0.0) {
            return Err(ShapeError::NegativeQuality { value });
        }
        Ok(())
    }

    /// A copy with negative size, radii and quality clamped to zero.
    pub fn clamped(&self) -> Self {
        Self {
            size: self.size.max(DVec3::ZERO),
            radii: self.radii.max(DVec2::ZERO),
            quality: self.quality.max(DVec2::ZERO),
            ..*self
        }
    }

    /// Bit patterns of every float field, in a fixed order.
    fn float_bits(&self) -> [u64; 14] {
        let [sx, sy, sz] = self.size.to_array();
        let [px, py, pz] = self.pose.position.to_array();
        let [rx, ry, rz, rw] = self.pose.rotation.to_array();
        let [r1, r2] = self.radii.to_array();
        let [q1, q2] = self.quality.to_array();
        [sx, sy, sz, px, py, pz, rx, ry, rz, rw, r1, r2, q1, q2].map(f64::to_bits)
    }
}

impl PartialEq for ShapeConfig {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.face_mode == other.face_mode
            && self.portion == other.portion
            && self.portion_closed == other.portion_closed
            && self.float_bits() == other.float_bits()
    }
}

impl Eq for ShapeConfig {}

impl Hash for ShapeConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.face_mode.hash(state);
        self.portion.hash(state);
        self.portion_closed.hash(state);
        self.float_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(config: &ShapeConfig) -> u64 {
        let mut hasher = DefaultHasher::new();
        config.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_is_bitwise() {
        let a = ShapeConfig::default();
        let mut b = a;
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.radii.y = -0.0;
        let mut c = b;
        c.radii.y = 0.0;
        // -0.0 == 0.0 numerically, but not as keys
        assert_ne!(b, c);
    }

    #[test]
    fn test_nan_is_equal_to_itself() {
        let mut a = ShapeConfig::default();
        a.size.z = f64::NAN;
        assert_eq!(a, a);
    }

    #[test]
    fn test_portion_type() {
        use PortionAxis::*;
        assert_eq!(Portion::FULL.portion_type(false), PortionType::Full);
        assert_eq!(Portion::new(Positive, Both, Both).portion_type(false), PortionType::Half);
        assert_eq!(Portion::new(Positive, Negative, Positive).portion_type(false), PortionType::Octant);
        // z is ignored in 2D
        assert_eq!(Portion::new(Both, Both, Negative).portion_type(true), PortionType::Full);
    }

    #[test]
    fn test_symmetry_factor() {
        use PortionAxis::*;
        assert_eq!(Portion::FULL.symmetry_factor(false), 8);
        assert_eq!(Portion::FULL.symmetry_factor(true), 4);
        assert_eq!(Portion::new(Negative, Both, Positive).symmetry_factor(false), 2);
    }

    #[test]
    fn test_quantized_is_idempotent() {
        let config = ShapeConfig {
            quality: DVec2::new(0.37, 2.2),
            ..ShapeConfig::default()
        };
        let once = config.quantized();
        assert_eq!(once, once.quantized());
        assert_eq!(once, ShapeConfig { quality: DVec2::new(0.4, 2.2), ..config }.quantized());
    }

    #[test]
    fn test_validate() {
        assert!(ShapeConfig::default().validate().is_ok());

        let config = ShapeConfig { size: DVec3::new(1.0, -2.0, 1.0), ..ShapeConfig::default() };
        assert_eq!(config.validate(), Err(ShapeError::NegativeSize { axis: 'y', value: -2.0 }));

        let config = ShapeConfig { radii: DVec2::new(0.1, -0.5), ..ShapeConfig::default() };
        assert_eq!(config.validate(), Err(ShapeError::NegativeRadius { value: -0.5 }));

        let config = ShapeConfig { quality: DVec2::new(-1.0, 1.0), ..ShapeConfig::default() };
        assert_eq!(config.validate(), Err(ShapeError::NegativeQuality { value: -1.0 }));

        let config = ShapeConfig { size: DVec3::new(1.0, f64::INFINITY, 1.0), ..ShapeConfig::default() };
        assert_eq!(config.validate(), Err(ShapeError::NonFinite { field: "size" }));
    }

    #[test]
    fn test_clamped() {
        let config = ShapeConfig {
            size: DVec3::new(-1.0, 2.0, -3.0),
            radii: DVec2::new(-0.5, 0.5),
            quality: DVec2::new(1.0, -1.0),
            ..ShapeConfig::default()
        }
        .clamped();
        assert_eq!(config.size, DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(config.radii, DVec2::new(0.0, 0.5));
        assert_eq!(config.quality, DVec2::new(1.0, 0.0));
        assert!(config.validate().is_ok());
    }
}
