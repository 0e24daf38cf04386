use super::*;
use crate::plane::ReflectPlane;
use crate::pose::{euler_degrees, Pose};
use crate::size::{
    size_for_arc_outline, size_for_corner3, size_for_cylinder, size_for_fan,
    size_for_revolved_arc, size_for_strip, SIZE_FOR_QUAD, SIZE_FOR_TRI,
};
use approx::assert_abs_diff_eq;

const QUALITIES: [f64; 4] = [0.0, 0.25, 1.0, 3.0];

/// Every non-degenerate triangle faces along its vertex normals.
fn assert_oriented(buffer: &GeometryBuffer) {
    let points = buffer.points();
    let normals = buffer.normals();
    for (n, tri) in buffer.indices().chunks_exact(3).enumerate() {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| i as usize);
        let face = (points[b] - points[a]).cross(points[c] - points[a]);
        if face.length_squared() < 1e-20 {
            continue;
        }
        let shared = normals[a] + normals[b] + normals[c];
        assert!(
            face.dot(shared) > 0.0,
            "triangle {n} {tri:?} faces {face:?} against {shared:?}"
        );
    }
}

fn assert_vec_eq(a: DVec3, b: DVec3) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-12);
}

fn back_quad(buffer: &mut GeometryBuffer) {
    buffer.add_quad(
        DVec3::new(0.0, 0.5, -0.5),
        DVec3::new(0.5, 0.5, -0.5),
        DVec3::new(0.5, 0.0, -0.5),
        DVec3::new(0.0, 0.0, -0.5),
        DVec3::NEG_Z,
    );
}

// =============================================================================
// EMITTERS
// =============================================================================

#[test]
fn test_begin_is_empty() {
    let buffer = GeometryBuffer::begin(Cursor::new(10, 12));
    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), Cursor::new(10, 12));
    assert!(buffer.points().is_empty());
    assert!(buffer.indices().is_empty());
}

#[test]
fn test_tri_and_quad_sizes() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_TRI + SIZE_FOR_QUAD);
    buffer.add_tri(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z);
    assert_eq!(buffer.cursor(), SIZE_FOR_TRI);
    buffer.add_quad(DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y, DVec3::Z);
    assert_eq!(buffer.cursor(), buffer.capacity());
    assert_eq!(&buffer.indices()[3..], &[3, 4, 5, 3, 5, 6]);
    assert_oriented(&buffer);
}

#[test]
fn test_strip_size_and_winding() {
    let (h, q) = (0.5, 0.25);
    let mut buffer = GeometryBuffer::begin(size_for_strip(5));
    buffer.strip_start(DVec3::new(0.0, h, 0.0), DVec3::new(q, h, 0.0), DVec3::NEG_Z);
    buffer.strip_to(DVec3::new(0.0, q, 0.0), DVec3::new(q, q, 0.0), DVec3::NEG_Z, true);
    buffer.strip_to_point(DVec3::ZERO, DVec3::NEG_Z, false);
    assert_eq!(buffer.cursor(), size_for_strip(5));
    assert_oriented(&buffer);
}

#[test]
fn test_strip_even_and_odd_winding() {
    let mut buffer = GeometryBuffer::begin(size_for_strip(7));
    buffer.strip_start(DVec3::new(0.0, 0.5, 0.0), DVec3::new(0.25, 0.5, 0.0), DVec3::Y);
    buffer.strip_to(DVec3::new(0.0, 0.5, -0.25), DVec3::new(0.25, 0.5, -0.25), DVec3::Y, true);
    buffer.strip_to(DVec3::new(0.0, 0.5, -0.5), DVec3::new(0.25, 0.5, -0.5), DVec3::Y, false);
    buffer.strip_to_point(DVec3::new(0.0, 0.5, -0.75), DVec3::Y, false);
    assert_eq!(buffer.cursor(), size_for_strip(7));
    assert_oriented(&buffer);
}

#[test]
fn test_odd_strip_point_reverses_triangle() {
    let mut buffer = GeometryBuffer::begin(size_for_strip(3) * 2);
    for odd in [false, true] {
        buffer.strip_start(DVec3::ZERO, DVec3::X, DVec3::Z);
        buffer.strip_to_point(DVec3::Y, DVec3::Z, odd);
    }
    assert_eq!(buffer.indices(), &[0, 1, 2, 4, 3, 5]);
}

#[test]
fn test_fan_size_and_winding() {
    for quality in QUALITIES {
        for spread in [90.0, -90.0, 360.0] {
            let size = size_for_fan(spread, quality);
            let mut buffer = GeometryBuffer::begin(size);
            buffer.add_fan(&Pose::IDENTITY, 0.5, spread, quality);
            assert_eq!(buffer.cursor(), size, "quality {quality} spread {spread}");
            assert_oriented(&buffer);
        }
    }
}

#[test]
fn test_fan_follows_pose() {
    let pose = Pose::from_euler_degrees(DVec3::new(0.25, 0.25, 0.0), 0.0, 180.0, 90.0);
    let mut buffer = GeometryBuffer::begin(size_for_fan(90.0, 0.25));
    buffer.add_fan(&pose, 0.25, 90.0, 0.25);
    for normal in buffer.normals() {
        assert_vec_eq(*normal, DVec3::Z);
    }
    for point in buffer.points() {
        assert_abs_diff_eq!(point.z, 0.0, epsilon = 1e-12);
        assert!(point.x >= 0.25 - 1e-12 && point.y >= 0.25 - 1e-12);
    }
    assert_oriented(&buffer);
}

#[test]
fn test_cylinder_size_and_winding() {
    for quality in QUALITIES {
        for spread in [90.0, -90.0] {
            let size = size_for_cylinder(spread, quality);
            let mut buffer = GeometryBuffer::begin(size);
            let pose = Pose::from_position(DVec3::new(0.25, 0.25, -0.25));
            buffer.add_cylinder(&pose, 0.25, spread, quality, 0.25);
            assert_eq!(buffer.cursor(), size);
            assert_oriented(&buffer);
        }
    }
}

#[test]
fn test_cylinder_points_on_radius() {
    let mut buffer = GeometryBuffer::begin(size_for_cylinder(90.0, 1.0));
    buffer.add_cylinder(&Pose::IDENTITY, 0.5, 90.0, 1.0, 0.5);
    for (point, normal) in buffer.points().iter().zip(buffer.normals()) {
        assert_abs_diff_eq!(point.x.hypot(point.y), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-12);
        assert!(point.z >= 0.0 && point.z <= 0.5);
    }
}

#[test]
fn test_corner3_size_and_winding() {
    for quality in QUALITIES {
        let size = size_for_corner3(90.0, quality);
        let mut buffer = GeometryBuffer::begin(size);
        let pose = Pose::from_position(DVec3::new(0.25, 0.25, -0.25));
        buffer.add_corner3(&pose, 0.25, 90.0, quality);
        assert_eq!(buffer.cursor(), size, "quality {quality}");
        assert_oriented(&buffer);
        for point in buffer.points() {
            assert_abs_diff_eq!((*point - pose.position).length(), 0.25, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_revolved_arc_size_and_winding() {
    for around_quality in QUALITIES {
        for fillet_quality in QUALITIES {
            let size = size_for_revolved_arc(90.0, 90.0, around_quality, fillet_quality);
            let mut buffer = GeometryBuffer::begin(size);
            buffer.add_revolved_arc(
                &Pose::from_position(DVec3::new(0.25, 0.25, -0.5)),
                Sweep::new(0.25, 90.0, around_quality),
                Sweep::new(0.1, 90.0, fillet_quality),
            );
            assert_eq!(buffer.cursor(), size);
            assert_oriented(&buffer);
        }
    }
}

#[test]
fn test_revolved_arc_meets_fan_and_cylinder() {
    let mut buffer = GeometryBuffer::begin(size_for_revolved_arc(90.0, 90.0, 0.0, 0.0));
    buffer.add_revolved_arc(
        &Pose::IDENTITY,
        Sweep::new(0.5, 90.0, 0.0),
        Sweep::new(0.25, 90.0, 0.0),
    );
    // first row lies on the fan edge, last row on the cylinder
    assert_vec_eq(buffer.points()[0], DVec3::new(0.25, 0.0, 0.0));
    assert_vec_eq(buffer.normals()[0], DVec3::NEG_Z);
    assert_vec_eq(buffer.points()[2], DVec3::new(0.5, 0.0, 0.25));
    assert_vec_eq(buffer.normals()[2], DVec3::X);
}

#[test]
fn test_arc_outline_size_and_winding() {
    for quality in QUALITIES {
        let size = size_for_arc_outline(90.0, quality);
        let mut buffer = GeometryBuffer::begin(size);
        buffer.add_arc_outline(&Pose::IDENTITY, 0.5, 0.25, 90.0, quality);
        assert_eq!(buffer.cursor(), size);
        assert_oriented(&buffer);
    }
}

#[test]
fn test_zero_radius_normals_are_finite() {
    let size = size_for_fan(90.0, 1.0) + size_for_cylinder(90.0, 1.0) + size_for_corner3(90.0, 1.0);
    let mut buffer = GeometryBuffer::begin(size);
    buffer.add_fan(&Pose::IDENTITY, 0.0, 90.0, 1.0);
    buffer.add_cylinder(&Pose::IDENTITY, 0.0, 90.0, 1.0, 0.0);
    buffer.add_corner3(&Pose::IDENTITY, 0.0, 90.0, 1.0);
    assert_eq!(buffer.cursor(), size);
    assert!(buffer.normals().iter().all(|n| n.is_finite()));
    assert!(buffer.points().iter().all(|p| p.is_finite()));
}

#[test]
#[should_panic]
fn test_writing_past_capacity_panics() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_TRI);
    back_quad(&mut buffer);
}

// =============================================================================
// REGION OPERATORS
// =============================================================================

#[test]
fn test_copy_shifts_indices() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD * 3);
    back_quad(&mut buffer);
    let end = buffer.cursor();
    buffer.copy(Cursor::ZERO, end);
    // copy the second quad again: the shift is relative to the source range
    buffer.copy(end, end * 2);
    assert_eq!(buffer.cursor(), buffer.capacity());
    assert_eq!(&buffer.indices()[6..12], &[4, 5, 6, 4, 6, 7]);
    assert_eq!(&buffer.indices()[12..], &[8, 9, 10, 8, 10, 11]);
    assert_eq!(&buffer.points()[8..], &buffer.points()[..4]);
}

#[test]
fn test_copy_reflected_flips_winding() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD * 2);
    back_quad(&mut buffer);
    let plane = ReflectPlane::through_origin(DVec3::new(0.0, 1.0, 1.0));
    buffer.copy_reflected(Cursor::ZERO, buffer.cursor(), &plane);
    assert_eq!(&buffer.indices()[6..], &[4, 6, 5, 4, 7, 6]);
    // the back face reflects onto the top face
    assert_vec_eq(buffer.normals()[4], DVec3::Y);
    assert_oriented(&buffer);
}

#[test]
fn test_copy_rotated_keeps_winding() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD * 3);
    back_quad(&mut buffer);
    let end = buffer.cursor();
    buffer.copy_rotated(Cursor::ZERO, end, euler_degrees(0.0, 90.0, 0.0));
    buffer.copy_rotated(end, end * 2, euler_degrees(0.0, 90.0, 0.0));
    assert_eq!(&buffer.indices()[6..12], &[4, 5, 6, 4, 6, 7]);
    assert_eq!(&buffer.indices()[12..], &[8, 9, 10, 8, 10, 11]);
    // -Z turns to -X, then to +Z
    assert_vec_eq(buffer.normals()[4], DVec3::NEG_X);
    assert_vec_eq(buffer.normals()[8], DVec3::Z);
    assert_oriented(&buffer);
}

#[test]
fn test_double_reflection_round_trips() {
    let size = size_for_corner3(90.0, 0.25) + size_for_fan(90.0, 0.25);
    let mut buffer = GeometryBuffer::begin(size);
    buffer.add_corner3(&Pose::from_position(DVec3::new(0.25, 0.25, -0.25)), 0.25, 90.0, 0.25);
    buffer.add_fan(&Pose::from_position(DVec3::new(0.25, 0.25, -0.5)), 0.25, 90.0, 0.25);
    let points = buffer.points().to_vec();
    let normals = buffer.normals().to_vec();
    let indices = buffer.indices().to_vec();

    let plane = ReflectPlane::through_point(DVec3::NEG_Z, DVec3::new(0.0, 0.0, -0.25));
    for _ in 0..2 {
        buffer.reflect_in_place(Cursor::ZERO, buffer.cursor(), &plane);
    }
    assert_eq!(buffer.indices(), indices.as_slice());
    for (a, b) in buffer.points().iter().zip(&points) {
        assert_vec_eq(*a, *b);
    }
    for (a, b) in buffer.normals().iter().zip(&normals) {
        assert_vec_eq(*a, *b);
    }
}

#[test]
fn test_reflect_axes_keep_orientation() {
    let mut buffer = GeometryBuffer::begin(size_for_corner3(90.0, 1.0));
    buffer.add_corner3(&Pose::IDENTITY, 0.5, 90.0, 1.0);
    buffer.reflect_x();
    buffer.reflect_y();
    buffer.reflect_z();
    assert!(buffer.points().iter().all(|p| p.x <= 1e-12 && p.y <= 1e-12 && p.z >= -1e-12));
    assert_oriented(&buffer);
}

#[test]
fn test_mirror_axes_double_content() {
    let mut buffer = GeometryBuffer::begin(size_for_corner3(90.0, 0.25) * 8);
    buffer.add_corner3(&Pose::IDENTITY, 0.5, 90.0, 0.25);
    buffer.mirror_x();
    buffer.mirror_y();
    buffer.mirror_z();
    assert_eq!(buffer.cursor(), buffer.capacity());
    assert_oriented(&buffer);
}

#[test]
fn test_reverse_faces() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD);
    back_quad(&mut buffer);
    buffer.reverse_faces(Cursor::ZERO, buffer.cursor());
    assert_eq!(buffer.indices(), &[0, 2, 1, 0, 3, 2]);
    assert!(buffer.normals().iter().all(|n| *n == DVec3::Z));
    assert_oriented(&buffer);
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn test_clone_scaled() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD);
    back_quad(&mut buffer);
    let mut clone = buffer.clone_scaled(2);
    assert_eq!(clone.capacity(), SIZE_FOR_QUAD * 2);
    assert_eq!(clone.cursor(), buffer.cursor());
    assert_eq!(clone.points(), buffer.points());

    let end = clone.cursor();
    clone.copy(Cursor::ZERO, end);
    clone.reverse_faces(end, end * 2);
    assert_eq!(clone.cursor(), clone.capacity());
    // the source is untouched
    assert_eq!(buffer.normals()[0], DVec3::NEG_Z);
    assert_oriented(&clone);
}

#[test]
fn test_clone_matches_clone_scaled_one() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD * 2);
    back_quad(&mut buffer);
    let clone = buffer.clone();
    assert_eq!(clone.capacity(), buffer.capacity());
    assert_eq!(clone.indices(), buffer.indices());
}

#[test]
fn test_finalize() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD);
    back_quad(&mut buffer);
    let mesh = buffer.finalize();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangles(), &[[0, 1, 2], [0, 2, 3]]);
    assert!(mesh.validate());
}

#[test]
fn test_finalize_drops_collapsed_triangles() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD);
    // the last corner sits on the third, flattening the second triangle
    buffer.add_quad(
        DVec3::new(0.0, 0.5, -0.5),
        DVec3::new(0.5, 0.5, -0.5),
        DVec3::new(0.5, 0.0, -0.5),
        DVec3::new(0.5, 0.0, -0.5),
        DVec3::NEG_Z,
    );
    let mesh = buffer.finalize();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
    assert!(mesh.validate());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn test_finalize_rejects_capacity_drift() {
    let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD + SIZE_FOR_TRI);
    back_quad(&mut buffer);
    let _ = buffer.finalize();
}
