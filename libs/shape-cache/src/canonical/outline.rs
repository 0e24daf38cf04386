//! Rounded rectangle outlines.
//!
//! Unlike the other shapes an outline is generated at its real radius and
//! thickness, inside a canonical square of side `size`.

use glam::DVec3;
use mesh_builder::size::{size_for_arc_outline, size_for_fan, SIZE_FOR_QUAD};
use mesh_builder::{Cursor, GeometryBuffer, Pose};

use super::{assemble, DIAG_XY};
use crate::shape::Portion;

fn quadrant_size(radius: f64, thickness: f64, quality: f64) -> Cursor {
    let corner = if radius - thickness > 0.0 {
        size_for_arc_outline(90.0, quality)
    } else {
        size_for_fan(90.0, quality)
    };
    SIZE_FOR_QUAD * 2 + corner
}

/// Builds a full outline of outer side `size`, corner `radius` and band
/// `thickness`, facing −Z.
pub(crate) fn rect_outline(size: f64, radius: f64, thickness: f64, quality: f64) -> GeometryBuffer {
    let capacity = quadrant_size(radius, thickness, quality);
    assemble(Portion::FULL, true, capacity, |buffer| {
        let h = size * 0.5;
        let straight = h - radius;
        let band = h - thickness;

        let start = buffer.cursor();
        buffer.add_quad(
            DVec3::new(h, 0.0, 0.0),
            DVec3::new(band, 0.0, 0.0),
            DVec3::new(band, straight, 0.0),
            DVec3::new(h, straight, 0.0),
            DVec3::NEG_Z,
        );
        let end = buffer.cursor();
        buffer.copy_reflected(start, end, &DIAG_XY);

        let corner = Pose::from_position(DVec3::new(straight, straight, 0.0));
        let inner_radius = radius - thickness;
        if inner_radius > 0.0 {
            buffer.add_arc_outline(&corner, radius, inner_radius, 90.0, quality);
        } else {
            buffer.add_fan(&corner, radius, 90.0, quality);
        }
    })
}
