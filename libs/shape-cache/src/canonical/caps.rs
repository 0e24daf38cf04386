//! Cap geometry for the cut faces of a closed portion.
//!
//! Caps lie in the cut planes `x = 0`, `y = 0` and `z = 0` of the octant
//! and face away from it.

use config::constants::{CANONICAL_HALF_EXTENT, REFERENCE_RADIUS};
use glam::DVec3;
use mesh_builder::size::{size_for_fan, size_for_strip};
use mesh_builder::{euler_degrees, Cursor, GeometryBuffer, Pose};

use super::{DIAG_XY, DIAG_XZ, DIAG_YZ};

const H: f64 = CANONICAL_HALF_EXTENT;

/// Size of a rounded-rect cap: two mirrored strips plus the corner fan.
pub(crate) fn rounded_size(quality: f64) -> Cursor {
    size_for_strip(5) * 2 + size_for_fan(90.0, quality)
}

/// Flat quarter face on `x = 0`.
pub(crate) fn quad_left(buffer: &mut GeometryBuffer) {
    buffer.add_quad(
        DVec3::ZERO,
        DVec3::new(0.0, H, 0.0),
        DVec3::new(0.0, H, -H),
        DVec3::new(0.0, 0.0, -H),
        DVec3::NEG_X,
    );
}

/// Flat quarter face on `y = 0`.
pub(crate) fn quad_bottom(buffer: &mut GeometryBuffer) {
    buffer.add_quad(
        DVec3::ZERO,
        DVec3::new(0.0, 0.0, -H),
        DVec3::new(H, 0.0, -H),
        DVec3::new(H, 0.0, 0.0),
        DVec3::NEG_Y,
    );
}

/// Flat quarter face on `z = 0`.
pub(crate) fn quad_forward(buffer: &mut GeometryBuffer) {
    buffer.add_quad(
        DVec3::ZERO,
        DVec3::new(H, 0.0, 0.0),
        DVec3::new(H, H, 0.0),
        DVec3::new(0.0, H, 0.0),
        DVec3::Z,
    );
}

/// Rounded quarter rect on `z = 0`, corner radius 0.25.
pub(crate) fn rounded_forward(buffer: &mut GeometryBuffer, quality: f64) {
    let q = REFERENCE_RADIUS;
    let start = buffer.cursor();
    buffer.strip_start(DVec3::new(q, H, 0.0), DVec3::new(0.0, H, 0.0), DVec3::Z);
    buffer.strip_to(DVec3::new(q, q, 0.0), DVec3::new(0.0, q, 0.0), DVec3::Z, true);
    buffer.strip_to_point(DVec3::ZERO, DVec3::Z, false);
    let end = buffer.cursor();
    buffer.copy_reflected(start, end, &DIAG_XY);

    let corner = Pose::new(DVec3::new(q, q, 0.0), euler_degrees(0.0, 180.0, 90.0));
    buffer.add_fan(&corner, q, 90.0, quality);
}

/// Rounded quarter rect on `x = 0`. `flat` is where the rounded corner
/// starts along y and z.
pub(crate) fn rounded_left(buffer: &mut GeometryBuffer, radius: f64, quality: f64, flat: f64) {
    let start = buffer.cursor();
    buffer.strip_start(
        DVec3::new(0.0, H, 0.0),
        DVec3::new(0.0, H, -flat),
        DVec3::NEG_X,
    );
    buffer.strip_to(
        DVec3::new(0.0, flat, 0.0),
        DVec3::new(0.0, flat, -flat),
        DVec3::NEG_X,
        true,
    );
    buffer.strip_to_point(DVec3::ZERO, DVec3::NEG_X, false);
    let end = buffer.cursor();
    buffer.copy_reflected(start, end, &DIAG_YZ);

    let corner = Pose::new(DVec3::new(0.0, flat, -flat), euler_degrees(0.0, 90.0, 0.0));
    buffer.add_fan(&corner, radius, 90.0, quality);
}

/// Rounded quarter rect on `y = 0`.
pub(crate) fn rounded_bottom(buffer: &mut GeometryBuffer, radius: f64, quality: f64, flat: f64) {
    let start = buffer.cursor();
    buffer.strip_start(
        DVec3::new(0.0, 0.0, -H),
        DVec3::new(flat, 0.0, -H),
        DVec3::NEG_Y,
    );
    buffer.strip_to(
        DVec3::new(0.0, 0.0, -flat),
        DVec3::new(flat, 0.0, -flat),
        DVec3::NEG_Y,
        true,
    );
    buffer.strip_to_point(DVec3::ZERO, DVec3::NEG_Y, false);
    let end = buffer.cursor();
    buffer.copy_reflected(start, end, &DIAG_XZ);

    let corner = Pose::new(DVec3::new(flat, 0.0, -flat), euler_degrees(-90.0, 0.0, 0.0));
    buffer.add_fan(&corner, radius, 90.0, quality);
}

/// Quarter disc of `radius` on `z = 0`.
pub(crate) fn disc_forward(buffer: &mut GeometryBuffer, radius: f64, quality: f64) {
    let pose = Pose::new(DVec3::ZERO, euler_degrees(0.0, 180.0, 90.0));
    buffer.add_fan(&pose, radius, 90.0, quality);
}
