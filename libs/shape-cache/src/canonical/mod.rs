//! # Canonical Shape Generator
//!
//! Builds every shape at unit scale: half extent 0.5, reference radius
//! 0.25 (0.5 for cylinders). A canonical mesh is later stretched to its
//! real size by slicing, so one canonical buffer serves every size.
//!
//! ## Algorithm
//!
//! ```text
//! capacity = (octant + caps on cut faces) * symmetry factor
//! begin(capacity)
//!   → emit one octant (X+, Y+, Z−), or one quadrant for rects
//!   → cap the cut faces when the portion is closed
//!   → reflect / mirror per axis
//! ```

mod caps;
mod cube;
mod cylinder;
mod outline;
mod rect;

pub(crate) use outline::rect_outline;

use std::f64::consts::FRAC_1_SQRT_2;

use config::constants::{CANONICAL_CYLINDER_RADIUS, CANONICAL_HALF_EXTENT, REFERENCE_RADIUS};
use glam::{DVec2, DVec3};
use mesh_builder::{Cursor, GeometryBuffer, Pose, ReflectPlane};

use crate::shape::{
    CubeKind, CylinderKind, FaceMode, Portion, PortionAxis, RectKind, ShapeConfig, ShapeKind,
};

// =============================================================================
// SYMMETRY PLANES
// =============================================================================

const S: f64 = FRAC_1_SQRT_2;

/// Swaps the back face onto the top face.
pub(crate) const FORWARD_TO_UP: ReflectPlane = ReflectPlane::from_unit_normal(DVec3::new(0.0, S, S));
/// Swaps the back face onto the right face.
pub(crate) const FORWARD_TO_RIGHT: ReflectPlane =
    ReflectPlane::from_unit_normal(DVec3::new(S, 0.0, S));
/// Swaps x and y.
pub(crate) const DIAG_XY: ReflectPlane = ReflectPlane::from_unit_normal(DVec3::new(-S, S, 0.0));
/// Swaps x and z with a sign flip.
pub(crate) const DIAG_XZ: ReflectPlane = ReflectPlane::from_unit_normal(DVec3::new(S, 0.0, S));
/// Swaps y and z with a sign flip.
pub(crate) const DIAG_YZ: ReflectPlane = ReflectPlane::from_unit_normal(DVec3::new(0.0, S, S));

// =============================================================================
// SYMMETRY
// =============================================================================

/// Which faces of the generated octant are cut and need a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CutFaces {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl CutFaces {
    pub fn new(portion: Portion, closed: bool) -> Self {
        let cut = |axis: PortionAxis| closed && axis != PortionAxis::Both;
        Self {
            x: cut(portion.x),
            y: cut(portion.y),
            z: cut(portion.z),
        }
    }

    /// Sum of the cap sizes for the faces that are cut.
    pub fn size(&self, x: Cursor, y: Cursor, z: Cursor) -> Cursor {
        [(self.x, x), (self.y, y), (self.z, z)]
            .into_iter()
            .filter(|(cut, _)| *cut)
            .map(|(_, size)| size)
            .sum()
    }
}

/// Expands the generated octant (or quadrant) to the requested portion.
pub(crate) fn apply_symmetry(buffer: &mut GeometryBuffer, portion: Portion, is_2d: bool) {
    match portion.x {
        PortionAxis::Positive => {}
        PortionAxis::Negative => buffer.reflect_x(),
        PortionAxis::Both => buffer.mirror_x(),
    }
    match portion.y {
        PortionAxis::Positive => {}
        PortionAxis::Negative => buffer.reflect_y(),
        PortionAxis::Both => buffer.mirror_y(),
    }
    if !is_2d {
        // the octant is generated on the negative side of z
        match portion.z {
            PortionAxis::Negative => {}
            PortionAxis::Positive => buffer.reflect_z(),
            PortionAxis::Both => buffer.mirror_z(),
        }
    }
}

/// Allocates room for `octant` times the symmetry factor, lets `emit` fill
/// one octant and expands it.
pub(crate) fn assemble(
    portion: Portion,
    is_2d: bool,
    octant: Cursor,
    emit: impl FnOnce(&mut GeometryBuffer),
) -> GeometryBuffer {
    let mut buffer = GeometryBuffer::begin(octant * portion.symmetry_factor(is_2d));
    emit(&mut buffer);
    apply_symmetry(&mut buffer, portion, is_2d);
    buffer
}

// =============================================================================
// CANONICAL FORM
// =============================================================================

/// Fillet radius of the canonical fillet cube, for a real `fillet` on a
/// side of radius `primary`.
///
/// The fillet is clamped to the primary radius, then rescaled so that the
/// primary radius maps onto the reference radius.
///
/// # Example
///
/// ```rust
/// use shape_cache::canonical::canonical_fillet;
///
/// assert_eq!(canonical_fillet(0.1, 0.2), 0.125);
/// assert_eq!(canonical_fillet(0.5, 0.2), 0.25);
/// assert_eq!(canonical_fillet(0.3, 0.0), 0.0);
/// ```
pub fn canonical_fillet(fillet: f64, primary: f64) -> f64 {
    if primary == 0.0 {
        return 0.0;
    }
    fillet.min(primary) * REFERENCE_RADIUS / primary
}

/// The normalized configuration a (quantized) request shares its
/// canonical geometry with.
///
/// Face mode, size, pose and radii collapse to unit values; quality
/// components the family does not use collapse to zero.
pub fn canonical_form(config: &ShapeConfig) -> ShapeConfig {
    let q = config.quality;
    let (radii, quality) = match config.kind {
        ShapeKind::Rect(RectKind::Hard) | ShapeKind::Cube(CubeKind::Hard) => {
            (DVec2::ZERO, DVec2::ZERO)
        }
        ShapeKind::Rect(RectKind::Round)
        | ShapeKind::Cube(CubeKind::RoundSides)
        | ShapeKind::Cube(CubeKind::RoundEdges) => {
            (DVec2::splat(REFERENCE_RADIUS), DVec2::new(q.x, 0.0))
        }
        ShapeKind::Cube(CubeKind::RoundSidesFillet) => (
            DVec2::new(
                REFERENCE_RADIUS,
                canonical_fillet(config.radii.y, config.radii.x),
            ),
            q,
        ),
        ShapeKind::Cylinder(CylinderKind::Hard) => (
            DVec2::new(CANONICAL_CYLINDER_RADIUS, 0.0),
            DVec2::new(q.x, 0.0),
        ),
        ShapeKind::Cylinder(CylinderKind::RoundEdges) => {
            (DVec2::new(CANONICAL_CYLINDER_RADIUS, REFERENCE_RADIUS), q)
        }
    };

    let mut portion = config.portion;
    if config.kind.is_2d() {
        portion.z = PortionAxis::Both;
    }
    // rects have no cut faces to close
    let portion_closed = config.portion_closed
        && !config.kind.is_2d()
        && portion != Portion::FULL;

    ShapeConfig {
        kind: config.kind,
        face_mode: FaceMode::Outside,
        portion,
        portion_closed,
        size: DVec3::splat(2.0 * CANONICAL_HALF_EXTENT),
        pose: Pose::IDENTITY,
        radii,
        quality,
    }
}

/// Builds the canonical geometry for a configuration already in
/// [`canonical_form`].
pub fn generate(config: &ShapeConfig) -> GeometryBuffer {
    let portion = config.portion;
    let cuts = CutFaces::new(portion, config.portion_closed);
    let q = config.quality;

    match config.kind {
        ShapeKind::Rect(RectKind::Hard) => rect::hard(portion),
        ShapeKind::Rect(RectKind::Round) => rect::round(portion, q.x),
        ShapeKind::Cube(CubeKind::Hard) => cube::hard(portion, cuts),
        ShapeKind::Cube(CubeKind::RoundSides) => cube::round_sides(portion, cuts, q.x),
        ShapeKind::Cube(CubeKind::RoundEdges) => cube::round_edges(portion, cuts, q.x),
        ShapeKind::Cube(CubeKind::RoundSidesFillet) => {
            cube::round_sides_fillet(portion, cuts, config.radii.y, q.x, q.y)
        }
        ShapeKind::Cylinder(CylinderKind::Hard) => cylinder::hard(portion, cuts, q.x),
        ShapeKind::Cylinder(CylinderKind::RoundEdges) => {
            cylinder::round_edges(portion, cuts, q.x, q.y)
        }
    }
}
