//! # Pose
//!
//! Rigid placement (position + orientation) used both to place primitives
//! while building and to place a finished shape.

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Orientation from Euler angles in degrees.
///
/// The rotation applies `z` first, then `x`, then `y`, which is the
/// convention the canonical generators are authored in.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_builder::euler_degrees;
///
/// let rotated = euler_degrees(0.0, 90.0, 0.0) * DVec3::X;
/// assert!((rotated - DVec3::NEG_Z).length() < 1e-12);
/// ```
#[must_use]
pub fn euler_degrees(x: f64, y: f64, z: f64) -> DQuat {
    DQuat::from_euler(
        EulerRot::YXZ,
        y.to_radians(),
        x.to_radians(),
        z.to_radians(),
    )
}

/// Position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Translation applied after rotation.
    pub position: DVec3,
    /// Orientation.
    pub rotation: DQuat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// No translation, no rotation.
    pub const IDENTITY: Self = Self {
        position: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
    };

    /// Creates a pose from its parts.
    #[inline]
    pub const fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    /// A pure translation.
    #[inline]
    pub const fn from_position(position: DVec3) -> Self {
        Self::new(position, DQuat::IDENTITY)
    }

    /// A translation plus an Euler rotation given in degrees.
    pub fn from_euler_degrees(position: DVec3, x: f64, y: f64, z: f64) -> Self {
        Self::new(position, euler_degrees(x, y, z))
    }

    /// True when both parts are exactly the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.position == DVec3::ZERO && self.is_identity_rotation()
    }

    /// True when the rotation is exactly the identity.
    #[inline]
    pub fn is_identity_rotation(&self) -> bool {
        self.rotation == DQuat::IDENTITY
    }

    /// Maps a local point into the pose's frame.
    #[inline]
    pub fn transform_point(&self, local: DVec3) -> DVec3 {
        self.position + self.rotation * local
    }

    /// Rotates a local direction into the pose's frame.
    #[inline]
    pub fn transform_vector(&self, local: DVec3) -> DVec3 {
        self.rotation * local
    }
}
