//! # Reflection Planes
//!
//! Planes used by the symmetry operators. A plane is stored as a unit
//! normal `n` and offset `d` so that `n · p + d` is the signed distance of
//! `p` from it.

use glam::DVec3;

/// A mirror plane.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_builder::ReflectPlane;
///
/// let mirrored = ReflectPlane::X.reflect_point(DVec3::new(2.0, 1.0, 0.0));
/// assert_eq!(mirrored, DVec3::new(-2.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectPlane {
    normal: DVec3,
    offset: f64,
}

impl ReflectPlane {
    /// The `x = 0` plane.
    pub const X: Self = Self::from_unit_normal(DVec3::X);
    /// The `y = 0` plane.
    pub const Y: Self = Self::from_unit_normal(DVec3::Y);
    /// The `z = 0` plane.
    pub const Z: Self = Self::from_unit_normal(DVec3::Z);

    /// A plane through the origin with an already normalized normal.
    pub const fn from_unit_normal(normal: DVec3) -> Self {
        Self { normal, offset: 0.0 }
    }

    /// A plane through the origin; `normal` need not be unit length.
    pub fn through_origin(normal: DVec3) -> Self {
        Self::from_unit_normal(normal.normalize())
    }

    /// A plane with the given normal containing `point`.
    pub fn through_point(normal: DVec3, point: DVec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            offset: -normal.dot(point),
        }
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Signed distance of `point` along the normal.
    #[inline]
    pub fn distance_to(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.offset
    }

    /// Mirrors a position across the plane.
    #[inline]
    pub fn reflect_point(&self, point: DVec3) -> DVec3 {
        point - 2.0 * self.distance_to(point) * self.normal
    }

    /// Mirrors a direction; the offset does not apply to directions.
    #[inline]
    pub fn reflect_vector(&self, vector: DVec3) -> DVec3 {
        vector - 2.0 * self.normal.dot(vector) * self.normal
    }
}
