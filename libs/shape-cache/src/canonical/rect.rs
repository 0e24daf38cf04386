//! Flat rectangles in the `z = 0` plane, facing −Z.

use config::constants::{CANONICAL_HALF_EXTENT, REFERENCE_RADIUS};
use glam::DVec3;
use mesh_builder::size::{size_for_fan, size_for_strip, SIZE_FOR_QUAD};
use mesh_builder::{GeometryBuffer, Pose};

use super::{assemble, DIAG_XY};
use crate::shape::Portion;

const H: f64 = CANONICAL_HALF_EXTENT;

/// Sharp corners: one quad per quadrant.
pub(super) fn hard(portion: Portion) -> GeometryBuffer {
    assemble(portion, true, SIZE_FOR_QUAD, |buffer| {
        buffer.add_quad(
            DVec3::new(0.0, H, 0.0),
            DVec3::new(H, H, 0.0),
            DVec3::new(H, 0.0, 0.0),
            DVec3::ZERO,
            DVec3::NEG_Z,
        );
    })
}

/// Rounded corners: an L of two mirrored strips around a corner fan.
pub(super) fn round(portion: Portion, quality: f64) -> GeometryBuffer {
    let quadrant = size_for_strip(5) * 2 + size_for_fan(90.0, quality);
    assemble(portion, true, quadrant, |buffer| {
        let q = REFERENCE_RADIUS;
        //   __
        //  |__|
        //  | /
        let start = buffer.cursor();
        buffer.strip_start(DVec3::new(0.0, H, 0.0), DVec3::new(q, H, 0.0), DVec3::NEG_Z);
        buffer.strip_to(DVec3::new(0.0, q, 0.0), DVec3::new(q, q, 0.0), DVec3::NEG_Z, true);
        buffer.strip_to_point(DVec3::ZERO, DVec3::NEG_Z, false);
        let end = buffer.cursor();
        buffer.copy_reflected(start, end, &DIAG_XY);

        buffer.add_fan(&Pose::from_position(DVec3::new(q, q, 0.0)), q, 90.0, quality);
    })
}
