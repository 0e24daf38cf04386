//! Cylinders around the z axis, radius 0.5, depth 1.

use config::constants::{CANONICAL_CYLINDER_RADIUS, CANONICAL_HALF_EXTENT, REFERENCE_RADIUS};
use glam::DVec3;
use mesh_builder::size::{size_for_cylinder, size_for_fan, size_for_revolved_arc, SIZE_FOR_QUAD};
use mesh_builder::{GeometryBuffer, Pose, Sweep};

use super::caps;
use super::{assemble, CutFaces};
use crate::shape::Portion;

const R: f64 = CANONICAL_CYLINDER_RADIUS;
const DEPTH: f64 = CANONICAL_HALF_EXTENT;

pub(super) fn hard(portion: Portion, cuts: CutFaces, quality_radial: f64) -> GeometryBuffer {
    let disc = size_for_fan(90.0, quality_radial);
    let open = size_for_cylinder(90.0, quality_radial) + disc;
    let closed = cuts.size(SIZE_FOR_QUAD, SIZE_FOR_QUAD, disc);

    assemble(portion, false, open + closed, |buffer| {
        let back = Pose::from_position(DVec3::new(0.0, 0.0, -DEPTH));
        buffer.add_cylinder(&back, R, 90.0, quality_radial, DEPTH);
        buffer.add_fan(&back, R, 90.0, quality_radial);

        if cuts.x {
            caps::quad_left(buffer);
        }
        if cuts.y {
            caps::quad_bottom(buffer);
        }
        if cuts.z {
            caps::disc_forward(buffer, R, quality_radial);
        }
    })
}

/// The back rim is rounded with radius 0.25.
pub(super) fn round_edges(
    portion: Portion,
    cuts: CutFaces,
    quality_radial: f64,
    quality_edge: f64,
) -> GeometryBuffer {
    let disc = size_for_fan(90.0, quality_radial);
    let open = size_for_cylinder(90.0, quality_radial)
        + disc
        + size_for_revolved_arc(90.0, 90.0, quality_radial, quality_edge);
    let edge_cap = caps::rounded_size(quality_edge);
    let closed = cuts.size(edge_cap, edge_cap, disc);

    assemble(portion, false, open + closed, |buffer| {
        let edge = REFERENCE_RADIUS;
        let band_depth = DEPTH - edge;
        let back = Pose::from_position(DVec3::new(0.0, 0.0, -DEPTH));

        buffer.add_cylinder(
            &Pose::from_position(DVec3::new(0.0, 0.0, -band_depth)),
            R,
            90.0,
            quality_radial,
            band_depth,
        );
        buffer.add_revolved_arc(
            &back,
            Sweep::new(R, 90.0, quality_radial),
            Sweep::new(edge, 90.0, quality_edge),
        );
        buffer.add_fan(&back, R - edge, 90.0, quality_radial);

        let flat = R - edge;
        if cuts.x {
            caps::rounded_left(buffer, edge, quality_edge, flat);
        }
        if cuts.y {
            caps::rounded_bottom(buffer, edge, quality_edge, flat);
        }
        if cuts.z {
            caps::disc_forward(buffer, R, quality_radial);
        }
    })
}
