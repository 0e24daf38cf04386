//! Cuboids.
//!
//! Each routine emits the octant `x >= 0, y >= 0, z <= 0` with the back
//! face at `z = -0.5`, the top at `y = 0.5` and the right at `x = 0.5`.

use config::constants::{CANONICAL_HALF_EXTENT, REFERENCE_RADIUS};
use glam::DVec3;
use mesh_builder::size::{
    size_for_corner3, size_for_cylinder, size_for_fan, size_for_revolved_arc, size_for_strip,
    SIZE_FOR_QUAD,
};
use mesh_builder::{euler_degrees, GeometryBuffer, Pose, ReflectPlane, Sweep};

use super::caps;
use super::{assemble, CutFaces, DIAG_XY, FORWARD_TO_RIGHT, FORWARD_TO_UP};
use crate::shape::Portion;

const H: f64 = CANONICAL_HALF_EXTENT;
const Q: f64 = REFERENCE_RADIUS;

pub(super) fn hard(portion: Portion, cuts: CutFaces) -> GeometryBuffer {
    let octant = SIZE_FOR_QUAD * 3 + cuts.size(SIZE_FOR_QUAD, SIZE_FOR_QUAD, SIZE_FOR_QUAD);
    assemble(portion, false, octant, |buffer| {
        let start = buffer.cursor();
        buffer.add_quad(
            DVec3::new(0.0, H, -H),
            DVec3::new(H, H, -H),
            DVec3::new(H, 0.0, -H),
            DVec3::new(0.0, 0.0, -H),
            DVec3::NEG_Z,
        );
        let end = buffer.cursor();
        buffer.copy_reflected(start, end, &FORWARD_TO_UP);
        buffer.copy_reflected(start, end, &FORWARD_TO_RIGHT);

        if cuts.x {
            caps::quad_left(buffer);
        }
        if cuts.y {
            caps::quad_bottom(buffer);
        }
        if cuts.z {
            caps::quad_forward(buffer);
        }
    })
}

/// Rounded along the four edges parallel to z.
pub(super) fn round_sides(portion: Portion, cuts: CutFaces, quality: f64) -> GeometryBuffer {
    let open = (size_for_strip(6) + size_for_strip(5)) * 2
        + size_for_fan(90.0, quality)
        + size_for_cylinder(90.0, quality) * 2;
    let closed = cuts.size(SIZE_FOR_QUAD, SIZE_FOR_QUAD, caps::rounded_size(quality));

    assemble(portion, false, open + closed, |buffer| {
        //     __
        //    /__/
        //   /__/
        //  |__|
        //  | /
        let start = buffer.cursor();
        buffer.strip_start(DVec3::new(0.0, H, 0.0), DVec3::new(Q, H, 0.0), DVec3::Y);
        buffer.strip_to(DVec3::new(0.0, H, -Q), DVec3::new(Q, H, -Q), DVec3::Y, true);
        buffer.strip_to(DVec3::new(0.0, H, -H), DVec3::new(Q, H, -H), DVec3::Y, false);
        // shared edge, new normal
        buffer.strip_start(DVec3::new(0.0, H, -H), DVec3::new(Q, H, -H), DVec3::NEG_Z);
        buffer.strip_to(DVec3::new(0.0, Q, -H), DVec3::new(Q, Q, -H), DVec3::NEG_Z, true);
        buffer.strip_to_point(DVec3::new(0.0, 0.0, -H), DVec3::NEG_Z, false);
        let end = buffer.cursor();
        buffer.copy_reflected(start, end, &DIAG_XY);

        buffer.add_fan(&Pose::from_position(DVec3::new(Q, Q, -H)), Q, 90.0, quality);

        let band_start = buffer.cursor();
        buffer.add_cylinder(&Pose::from_position(DVec3::new(Q, Q, -Q)), Q, 90.0, quality, Q);
        let band_end = buffer.cursor();
        let thickness = ReflectPlane::through_point(DVec3::NEG_Z, DVec3::new(0.0, 0.0, -Q));
        buffer.copy_reflected(band_start, band_end, &thickness);

        if cuts.x {
            caps::quad_left(buffer);
        }
        if cuts.y {
            caps::quad_bottom(buffer);
        }
        if cuts.z {
            caps::rounded_forward(buffer, quality);
        }
    })
}

/// Every edge and corner rounded with the reference radius.
pub(super) fn round_edges(portion: Portion, cuts: CutFaces, quality: f64) -> GeometryBuffer {
    let open = (SIZE_FOR_QUAD + size_for_cylinder(90.0, quality)) * 3
        + size_for_corner3(90.0, quality);
    let cap = caps::rounded_size(quality);
    let closed = cuts.size(cap, cap, cap);

    assemble(portion, false, open + closed, |buffer| {
        let start = buffer.cursor();
        buffer.add_quad(
            DVec3::new(0.0, 0.0, -H),
            DVec3::new(0.0, Q, -H),
            DVec3::new(Q, Q, -H),
            DVec3::new(Q, 0.0, -H),
            DVec3::NEG_Z,
        );
        let edge = Pose::new(DVec3::new(0.0, Q, -Q), euler_degrees(0.0, 90.0, 0.0));
        buffer.add_cylinder(&edge, Q, 90.0, quality, Q);
        let end = buffer.cursor();
        buffer.copy_rotated(start, end, euler_degrees(90.0, 90.0, 0.0));
        buffer.copy_rotated(start, end, euler_degrees(0.0, -90.0, 90.0));

        buffer.add_corner3(&Pose::from_position(DVec3::new(Q, Q, -Q)), Q, 90.0, quality);

        if cuts.x {
            caps::rounded_left(buffer, Q, quality, Q);
        }
        if cuts.y {
            caps::rounded_bottom(buffer, Q, quality, Q);
        }
        if cuts.z {
            caps::rounded_forward(buffer, quality);
        }
    })
}

/// Rounded sides of radius 0.25 plus a `fillet` on the back edges.
pub(super) fn round_sides_fillet(
    portion: Portion,
    cuts: CutFaces,
    fillet: f64,
    quality_sides: f64,
    quality_fillet: f64,
) -> GeometryBuffer {
    let open = size_for_strip(5) * 2
        + SIZE_FOR_QUAD * 2
        + size_for_fan(90.0, quality_sides)
        + size_for_cylinder(90.0, quality_sides)
        + size_for_cylinder(90.0, quality_fillet) * 2
        + size_for_revolved_arc(90.0, 90.0, quality_sides, quality_fillet);
    let fillet_cap = caps::rounded_size(quality_fillet);
    let closed = cuts.size(fillet_cap, fillet_cap, caps::rounded_size(quality_sides));

    assemble(portion, false, open + closed, |buffer| {
        let side = Q;
        let inner = H - side;
        let side_depth = H - fillet;

        let start = buffer.cursor();
        buffer.strip_start(
            DVec3::new(0.0, side_depth, -H),
            DVec3::new(inner, side_depth, -H),
            DVec3::NEG_Z,
        );
        buffer.strip_to(
            DVec3::new(0.0, inner, -H),
            DVec3::new(inner, inner, -H),
            DVec3::NEG_Z,
            true,
        );
        buffer.strip_to_point(DVec3::new(0.0, 0.0, -H), DVec3::NEG_Z, false);
        buffer.add_quad(
            DVec3::new(0.0, H, 0.0),
            DVec3::new(inner, H, 0.0),
            DVec3::new(inner, H, -side_depth),
            DVec3::new(0.0, H, -side_depth),
            DVec3::Y,
        );
        let fillet_edge = Pose::new(
            DVec3::new(0.0, side_depth, -side_depth),
            euler_degrees(0.0, 90.0, 0.0),
        );
        buffer.add_cylinder(&fillet_edge, fillet, 90.0, quality_fillet, inner);
        let end = buffer.cursor();
        buffer.copy_reflected(start, end, &DIAG_XY);

        let corner = DVec3::new(inner, inner, -H);
        buffer.add_cylinder(
            &Pose::from_position(DVec3::new(inner, inner, -side_depth)),
            side,
            90.0,
            quality_sides,
            side_depth,
        );
        buffer.add_fan(&Pose::from_position(corner), side - fillet, 90.0, quality_sides);
        buffer.add_revolved_arc(
            &Pose::from_position(corner),
            Sweep::new(side, 90.0, quality_sides),
            Sweep::new(fillet, 90.0, quality_fillet),
        );

        if cuts.x {
            caps::rounded_left(buffer, fillet, quality_fillet, side_depth);
        }
        if cuts.y {
            caps::rounded_bottom(buffer, fillet, quality_fillet, side_depth);
        }
        if cuts.z {
            caps::rounded_forward(buffer, quality_sides);
        }
    })
}
