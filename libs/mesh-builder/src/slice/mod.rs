//! # Slicing
//!
//! Non-uniform per-axis remapping that stretches a canonical shape to an
//! arbitrary size while keeping its rounded regions at their true radius.
//!
//! ## Zones
//!
//! Each axis value is remapped by magnitude and keeps its sign:
//!
//! ```text
//! |p| <  si        → |p| / si * ti            (inner zone, scaled)
//! si <= |p| < so   → lerp(ti, to) over si..so  (rounded zone)
//! |p| >= so        → to + (|p| - so)           (outside, translated)
//! ```
//!
//! The 3-zone map is the 5-zone map with `si == so` and `ti == to`. Empty
//! zones never match their comparison, so they never divide by zero.

use glam::DVec3;

use crate::buffer::GeometryBuffer;
use crate::cursor::Cursor;
use crate::pose::Pose;

/// 3-zone remap of one axis value.
///
/// # Example
///
/// ```rust
/// use mesh_builder::slice::slice3;
///
/// assert_eq!(slice3(0.25, 0.5, 2.0), 1.0);
/// assert_eq!(slice3(-0.75, 0.5, 2.0), -2.25);
/// ```
#[inline]
#[must_use]
pub fn slice3(p: f64, source_inner: f64, target_inner: f64) -> f64 {
    let magnitude = p.abs();
    let mapped = if magnitude < source_inner {
        magnitude / source_inner * target_inner
    } else {
        target_inner + (magnitude - source_inner)
    };
    mapped.copysign(p)
}

/// 5-zone remap of one axis value.
#[inline]
#[must_use]
pub fn slice5(
    p: f64,
    source_inner: f64,
    source_outer: f64,
    target_inner: f64,
    target_outer: f64,
) -> f64 {
    let magnitude = p.abs();
    let mapped = if magnitude < source_inner {
        magnitude / source_inner * target_inner
    } else if magnitude < source_outer {
        let t = (magnitude - source_inner) / (source_outer - source_inner);
        target_inner + (target_outer - target_inner) * t
    } else {
        target_outer + (magnitude - source_outer)
    };
    mapped.copysign(p)
}

/// Zone boundaries for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// End of the scaled zone in source space.
    pub source_inner: f64,
    /// End of the rounded zone in source space.
    pub source_outer: f64,
    /// End of the scaled zone in target space.
    pub target_inner: f64,
    /// End of the rounded zone in target space.
    pub target_outer: f64,
}

impl AxisBounds {
    /// Bounds leaving values unchanged.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// 5-zone bounds.
    pub const fn new(
        source_inner: f64,
        source_outer: f64,
        target_inner: f64,
        target_outer: f64,
    ) -> Self {
        Self {
            source_inner,
            source_outer,
            target_inner,
            target_outer,
        }
    }

    /// 3-zone bounds: no rounded zone.
    pub const fn three_zone(source_inner: f64, target_inner: f64) -> Self {
        Self::new(source_inner, source_inner, target_inner, target_inner)
    }

    /// Remaps a single value.
    #[inline]
    pub fn apply(&self, p: f64) -> f64 {
        if self.source_inner == self.source_outer && self.target_inner == self.target_outer {
            slice3(p, self.source_inner, self.target_inner)
        } else {
            slice5(
                p,
                self.source_inner,
                self.source_outer,
                self.target_inner,
                self.target_outer,
            )
        }
    }
}

/// How a whole point is remapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliceTransform {
    /// Independent bounds per x, y and z.
    Box([AxisBounds; 3]),
    /// Cylindrical remap: `radial` applies to the distance from the z axis,
    /// `depth` to z. Points keep their angle around z, so circles stay
    /// circles.
    Radial {
        /// Bounds on the planar distance from the z axis.
        radial: AxisBounds,
        /// Bounds on z.
        depth: AxisBounds,
    },
}

impl SliceTransform {
    /// The same bounds on every axis.
    pub const fn uniform(bounds: AxisBounds) -> Self {
        Self::Box([bounds; 3])
    }

    /// Remaps one point.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        match self {
            Self::Box([x, y, z]) => DVec3::new(x.apply(point.x), y.apply(point.y), z.apply(point.z)),
            Self::Radial { radial, depth } => {
                let distance = point.x.hypot(point.y);
                let z = depth.apply(point.z);
                if distance == 0.0 {
                    return DVec3::new(point.x, point.y, z);
                }
                let scale = radial.apply(distance) / distance;
                DVec3::new(point.x * scale, point.y * scale, z)
            }
        }
    }
}

impl GeometryBuffer {
    /// Remaps the points of `[start, end)` and places the result with
    /// `pose`; normals are only rotated.
    pub fn slice(&mut self, start: Cursor, end: Cursor, transform: &SliceTransform, pose: &Pose) {
        let range = start.vertex..end.vertex;
        let translate = pose.position != DVec3::ZERO;
        let rotate = !pose.is_identity_rotation();

        match (rotate, translate) {
            (false, false) => {
                for point in &mut self.points[range] {
                    *point = transform.apply(*point);
                }
            }
            (false, true) => {
                for point in &mut self.points[range] {
                    *point = transform.apply(*point) + pose.position;
                }
            }
            (true, false) => {
                for point in &mut self.points[range.clone()] {
                    *point = pose.rotation * transform.apply(*point);
                }
                for normal in &mut self.normals[range] {
                    *normal = pose.rotation * *normal;
                }
            }
            (true, true) => {
                for point in &mut self.points[range.clone()] {
                    *point = pose.transform_point(transform.apply(*point));
                }
                for normal in &mut self.normals[range] {
                    *normal = pose.transform_vector(*normal);
                }
            }
        }
    }

    /// [`slice`](Self::slice) over everything written so far.
    pub fn slice_all(&mut self, transform: &SliceTransform, pose: &Pose) {
        self.slice(Cursor::ZERO, self.cursor(), transform, pose);
    }
}
