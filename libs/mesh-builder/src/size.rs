//! # Size Calculation
//!
//! Exact buffer capacities for every primitive the builder can emit.
//!
//! ## Algorithm
//!
//! Angular resolution is driven by a continuous `quality` scalar:
//!
//! ```text
//! segments(angle, quality) = max(1, 1 + floor(quality * |angle| / 10°))
//! ```
//!
//! The integer segment count, never the raw quality, decides the emitted
//! geometry. [`quality_for_segments`] inverts it to the smallest quality
//! producing a given count, which is what cache keys are quantized to.

use config::constants::{DEGREES_PER_SEGMENT, EPSILON_TOLERANCE};

use crate::cursor::Cursor;

// =============================================================================
// SEGMENTS
// =============================================================================

/// Number of segments used to tessellate a sweep of `angle_degrees`.
///
/// A small tolerance absorbs rounding so that
/// `segments_for_angle(a, quality_for_segments(a, n)) == n` for every `n`.
///
/// # Example
///
/// ```rust
/// use mesh_builder::size::segments_for_angle;
///
/// assert_eq!(segments_for_angle(90.0, 0.0), 1);
/// assert_eq!(segments_for_angle(90.0, 1.0), 10);
/// assert_eq!(segments_for_angle(-90.0, 1.0), 10);
/// ```
#[must_use]
pub fn segments_for_angle(angle_degrees: f64, quality: f64) -> usize {
    let extra = (quality * angle_degrees.abs() / DEGREES_PER_SEGMENT + EPSILON_TOLERANCE).floor();
    if extra >= 1.0 {
        (extra as usize).saturating_add(1)
    } else {
        1
    }
}

/// Smallest quality that yields `segments` over `angle_degrees`.
///
/// # Example
///
/// ```rust
/// use mesh_builder::size::{quality_for_segments, segments_for_angle};
///
/// let quality = quality_for_segments(90.0, segments_for_angle(90.0, 0.37));
/// assert_eq!(segments_for_angle(90.0, quality), segments_for_angle(90.0, 0.37));
/// ```
#[must_use]
pub fn quality_for_segments(angle_degrees: f64, segments: usize) -> f64 {
    segments.saturating_sub(1) as f64 * DEGREES_PER_SEGMENT / angle_degrees.abs()
}

/// Snaps `quality` to the representative value of its segment count.
#[must_use]
pub fn quantize_quality(angle_degrees: f64, quality: f64) -> f64 {
    quality_for_segments(angle_degrees, segments_for_angle(angle_degrees, quality))
}

// =============================================================================
// PRIMITIVE SIZES
// =============================================================================

/// A single triangle with its own three vertices.
pub const SIZE_FOR_TRI: Cursor = Cursor::new(3, 3);

/// A planar quad: four vertices, two triangles.
pub const SIZE_FOR_QUAD: Cursor = Cursor::new(4, 6);

/// A triangle strip with `vertices` vertices.
#[must_use]
pub const fn size_for_strip(vertices: usize) -> Cursor {
    Cursor::new(vertices, vertices.saturating_sub(2) * 3)
}

/// A ladder of `segments` quads sharing their rungs.
#[must_use]
pub const fn size_for_quad_strip(segments: usize) -> Cursor {
    Cursor::new(2 * segments + 2, 6 * segments)
}

/// A fan of independent triangles around a center.
#[must_use]
pub fn size_for_fan(angle_degrees: f64, quality: f64) -> Cursor {
    SIZE_FOR_TRI * segments_for_angle(angle_degrees, quality)
}

/// A cylinder band: two rings joined by a quad strip.
#[must_use]
pub fn size_for_cylinder(angle_degrees: f64, quality: f64) -> Cursor {
    size_for_quad_strip(segments_for_angle(angle_degrees, quality))
}

/// A 3-axis rounded corner built from nested strips of shrinking width.
///
/// # Example
///
/// ```rust
/// use mesh_builder::{size::size_for_corner3, Cursor};
///
/// // quality 0: a single row, one strip of 3 vertices
/// assert_eq!(size_for_corner3(90.0, 0.0), Cursor::new(3, 3));
/// ```
#[must_use]
pub fn size_for_corner3(angle_degrees: f64, quality: f64) -> Cursor {
    let rows = segments_for_angle(angle_degrees, quality);
    (1..=rows).map(|segments| size_for_strip(2 * segments + 1)).sum()
}

/// A revolved quarter-round: a grid swept around one axis and rounded over
/// another.
#[must_use]
pub fn size_for_revolved_arc(
    around_degrees: f64,
    fillet_degrees: f64,
    around_quality: f64,
    fillet_quality: f64,
) -> Cursor {
    let around = segments_for_angle(around_degrees, around_quality);
    let fillet = segments_for_angle(fillet_degrees, fillet_quality);
    Cursor::new((around + 1) * (fillet + 1), 6 * around * fillet)
}

/// A flat band between two concentric arcs.
#[must_use]
pub fn size_for_arc_outline(angle_degrees: f64, quality: f64) -> Cursor {
    size_for_quad_strip(segments_for_angle(angle_degrees, quality))
}
