//! # Anchors
//!
//! Where a shape sits relative to its local origin. Hosts use the
//! resulting center as the shape's `pose.position`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use config::constants::CANONICAL_HALF_EXTENT;

/// Placement along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorAxis {
    /// The origin is on the shape's minimum face (left, bottom, front).
    Min,
    /// The origin is at the shape's center.
    #[default]
    Center,
    /// The origin is on the shape's maximum face (right, top, back).
    Max,
}

impl AnchorAxis {
    fn unit_offset(self) -> f64 {
        match self {
            Self::Min => -CANONICAL_HALF_EXTENT,
            Self::Center => 0.0,
            Self::Max => CANONICAL_HALF_EXTENT,
        }
    }
}

/// One of the 27 anchor points of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    /// Placement along x.
    pub x: AnchorAxis,
    /// Placement along y.
    pub y: AnchorAxis,
    /// Placement along z.
    pub z: AnchorAxis,
}

impl Anchor {
    /// The origin is the shape's center.
    pub const CENTER: Self = Self::new(AnchorAxis::Center, AnchorAxis::Center, AnchorAxis::Center);

    /// Creates an anchor.
    pub const fn new(x: AnchorAxis, y: AnchorAxis, z: AnchorAxis) -> Self {
        Self { x, y, z }
    }

    /// Anchor offset for a unit box.
    pub fn unit_offset(&self) -> DVec3 {
        DVec3::new(
            self.x.unit_offset(),
            self.y.unit_offset(),
            self.z.unit_offset(),
        )
    }

    /// Shape center that puts this anchor point at the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use shape_cache::{Anchor, AnchorAxis};
    ///
    /// let bottom_left = Anchor::new(AnchorAxis::Min, AnchorAxis::Min, AnchorAxis::Center);
    /// assert_eq!(bottom_left.center_for(DVec3::new(4.0, 2.0, 1.0)), DVec3::new(2.0, 1.0, 0.0));
    /// ```
    pub fn center_for(&self, size: DVec3) -> DVec3 {
        -(self.unit_offset() * size)
    }

    /// Every anchor, x varying slowest.
    pub fn all() -> impl Iterator<Item = Self> {
        const AXES: [AnchorAxis; 3] = [AnchorAxis::Min, AnchorAxis::Center, AnchorAxis::Max];
        AXES.into_iter().flat_map(|x| {
            AXES.into_iter()
                .flat_map(move |y| AXES.into_iter().map(move |z| Self::new(x, y, z)))
        })
    }
}

/// How a host derives a shape's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Origin {
    /// From an anchor point and the shape's size.
    Anchor(Anchor),
    /// A fixed center, independent of size.
    Explicit(DVec3),
}

impl Default for Origin {
    fn default() -> Self {
        Self::Anchor(Anchor::CENTER)
    }
}

impl Origin {
    /// Center of a shape of `size`.
    pub fn center_for(&self, size: DVec3) -> DVec3 {
        match self {
            Self::Anchor(anchor) => anchor.center_for(size),
            Self::Explicit(center) => *center,
        }
    }
}
