//! Primitive emitters.
//!
//! Each emitter advances the cursor by exactly the matching `size_for_*`
//! value. Curved primitives are parameterized by a [`Pose`]: local +X is
//! where the sweep starts, rotation is about local +Z, and flat primitives
//! face local −Z.

use glam::DVec3;

use super::GeometryBuffer;
use crate::cursor::Cursor;
use crate::pose::Pose;
use crate::size::segments_for_angle;

/// One swept dimension of a revolved primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Radius of the swept arc.
    pub radius: f64,
    /// Sweep angle in degrees.
    pub degrees: f64,
    /// Tessellation quality for this sweep.
    pub quality: f64,
}

impl Sweep {
    /// Creates a sweep.
    pub const fn new(radius: f64, degrees: f64, quality: f64) -> Self {
        Self {
            radius,
            degrees,
            quality,
        }
    }

    fn segments(&self) -> usize {
        segments_for_angle(self.degrees, self.quality)
    }
}

/// Unit direction at `degrees` around local +Z, starting from local +X.
#[inline]
fn planar_direction(degrees: f64) -> DVec3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    DVec3::new(cos, sin, 0.0)
}

impl GeometryBuffer {
    /// Emits one triangle with a shared normal.
    pub fn add_tri(&mut self, a: DVec3, b: DVec3, c: DVec3, normal: DVec3) {
        let Cursor { vertex, index } = self.cursor;
        self.write_vertex(vertex, a, normal);
        self.write_vertex(vertex + 1, b, normal);
        self.write_vertex(vertex + 2, c, normal);
        self.write_triangle(index, vertex, vertex + 1, vertex + 2);
        self.cursor = Cursor::new(vertex + 3, index + 3);
    }

    /// Emits a planar quad as triangles `(v1, v2, v3)` and `(v1, v3, v4)`.
    pub fn add_quad(&mut self, v1: DVec3, v2: DVec3, v3: DVec3, v4: DVec3, normal: DVec3) {
        let Cursor { vertex, index } = self.cursor;
        self.write_vertex(vertex, v1, normal);
        self.write_vertex(vertex + 1, v2, normal);
        self.write_vertex(vertex + 2, v3, normal);
        self.write_vertex(vertex + 3, v4, normal);
        self.write_triangle(index, vertex, vertex + 1, vertex + 2);
        self.write_triangle(index + 3, vertex, vertex + 2, vertex + 3);
        self.cursor = Cursor::new(vertex + 4, index + 6);
    }

    /// Starts a strip with its first rung. Writes no triangles.
    pub fn strip_start(&mut self, a: DVec3, b: DVec3, normal: DVec3) {
        self.strip_start_with_normals(a, b, normal, normal);
    }

    /// Starts a strip with per-vertex normals.
    pub fn strip_start_with_normals(&mut self, a: DVec3, b: DVec3, normal_a: DVec3, normal_b: DVec3) {
        let vertex = self.cursor.vertex;
        self.write_vertex(vertex, a, normal_a);
        self.write_vertex(vertex + 1, b, normal_b);
        self.cursor.vertex = vertex + 2;
    }

    /// Extends a strip by one rung, closing a quad with the previous rung.
    ///
    /// `odd` picks the other diagonal so that strips bending around a
    /// corner keep a consistent orientation.
    pub fn strip_to(&mut self, a: DVec3, b: DVec3, normal: DVec3, odd: bool) {
        self.strip_to_with_normals(a, b, normal, normal, odd);
    }

    /// Extends a strip by one rung with per-vertex normals.
    pub fn strip_to_with_normals(
        &mut self,
        a: DVec3,
        b: DVec3,
        normal_a: DVec3,
        normal_b: DVec3,
        odd: bool,
    ) {
        let Cursor { vertex, index } = self.cursor;
        self.write_vertex(vertex, a, normal_a);
        self.write_vertex(vertex + 1, b, normal_b);
        if odd {
            self.write_triangle(index, vertex - 2, vertex - 1, vertex + 1);
            self.write_triangle(index + 3, vertex - 2, vertex + 1, vertex);
        } else {
            self.write_triangle(index, vertex - 2, vertex - 1, vertex);
            self.write_triangle(index + 3, vertex - 1, vertex + 1, vertex);
        }
        self.cursor = Cursor::new(vertex + 2, index + 6);
    }

    /// Extends a strip by a single point, closing one triangle.
    ///
    /// `odd` reverses that triangle.
    pub fn strip_to_point(&mut self, point: DVec3, normal: DVec3, odd: bool) {
        let Cursor { vertex, index } = self.cursor;
        self.write_vertex(vertex, point, normal);
        if odd {
            self.write_triangle(index, vertex - 1, vertex - 2, vertex);
        } else {
            self.write_triangle(index, vertex - 2, vertex - 1, vertex);
        }
        self.cursor = Cursor::new(vertex + 1, index + 3);
    }

    /// Emits a flat fan of `radius` sweeping `spread_degrees` about the
    /// pose's local +Z, facing local −Z.
    pub fn add_fan(&mut self, pose: &Pose, radius: f64, spread_degrees: f64, quality: f64) {
        let segments = segments_for_angle(spread_degrees, quality);
        let step = spread_degrees / segments as f64;
        let center = pose.position;
        let normal = pose.transform_vector(DVec3::NEG_Z);

        let mut previous = center + pose.transform_vector(DVec3::X * radius);
        for i in 1..=segments {
            let current = pose.transform_point(planar_direction(step * i as f64) * radius);
            if spread_degrees >= 0.0 {
                self.add_tri(center, current, previous, normal);
            } else {
                self.add_tri(center, previous, current, normal);
            }
            previous = current;
        }
    }

    /// Emits an outward-facing cylinder band: two rings `depth` apart along
    /// local +Z, starting at the pose position and extending towards +Z.
    pub fn add_cylinder(
        &mut self,
        pose: &Pose,
        radius: f64,
        spread_degrees: f64,
        quality: f64,
        depth: f64,
    ) {
        let segments = segments_for_angle(spread_degrees, quality);
        let step = spread_degrees / segments as f64;
        let depth_offset = pose.transform_vector(DVec3::Z * depth);

        for i in 0..=segments {
            let normal = pose.transform_vector(planar_direction(step * i as f64));
            let near = pose.position + normal * radius;
            let far = near + depth_offset;
            let (a, b) = if spread_degrees >= 0.0 {
                (far, near)
            } else {
                (near, far)
            };
            if i == 0 {
                self.strip_start(a, b, normal);
            } else {
                self.strip_to(a, b, normal, false);
            }
        }
    }

    /// Emits a sphere-octant corner patch.
    ///
    /// Rows run from the local XY equator towards local −Z; each row is a
    /// strip between a ring of `n` segments and the next ring of `n - 1`,
    /// ending in a single point at the pole.
    pub fn add_corner3(&mut self, pose: &Pose, radius: f64, spread_degrees: f64, quality: f64) {
        let rows = segments_for_angle(spread_degrees, quality);
        let latitude_step = spread_degrees / rows as f64;

        // Unit direction at a latitude (towards −Z) and longitude (about +Z).
        let direction = |latitude: f64, longitude: f64| {
            let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
            let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
            pose.transform_vector(DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, -sin_lat))
        };

        for (row, segments) in (1..=rows).rev().enumerate() {
            let latitude = latitude_step * row as f64;
            let next_latitude = latitude_step * (row + 1) as f64;
            let step = spread_degrees / segments as f64;
            let next_step = if segments > 1 {
                spread_degrees / (segments - 1) as f64
            } else {
                0.0
            };

            let outer = direction(latitude, 0.0);
            let inner = direction(next_latitude, 0.0);
            self.strip_start_with_normals(
                pose.position + outer * radius,
                pose.position + inner * radius,
                outer,
                inner,
            );
            for i in 1..segments {
                let outer = direction(latitude, step * i as f64);
                let inner = direction(next_latitude, next_step * i as f64);
                self.strip_to_with_normals(
                    pose.position + outer * radius,
                    pose.position + inner * radius,
                    outer,
                    inner,
                    false,
                );
            }
            let last = direction(latitude, spread_degrees);
            self.strip_to_point(pose.position + last * radius, last, false);
        }
    }

    /// Emits a revolved quarter-round joining a flat fan of radius
    /// `around.radius - fillet.radius` (in the pose's local XY plane, facing
    /// −Z) to a cylinder of radius `around.radius` that starts
    /// `fillet.radius` further along +Z.
    ///
    /// Vertices form a `(around + 1) × (fillet + 1)` grid.
    pub fn add_revolved_arc(&mut self, pose: &Pose, around: Sweep, fillet: Sweep) {
        let around_segments = around.segments();
        let fillet_segments = fillet.segments();
        let around_step = around.degrees / around_segments as f64;
        let fillet_step = fillet.degrees / fillet_segments as f64;
        let inner_radius = around.radius - fillet.radius;

        let Cursor { vertex: base, index } = self.cursor;
        let columns = around_segments + 1;
        for j in 0..=fillet_segments {
            let (sin_phi, cos_phi) = (fillet_step * j as f64).to_radians().sin_cos();
            let ring_radius = inner_radius + fillet.radius * sin_phi;
            let lift = fillet.radius * (1.0 - cos_phi);
            for i in 0..=around_segments {
                let radial = planar_direction(around_step * i as f64);
                let local = radial * ring_radius + DVec3::Z * lift;
                let normal = radial * sin_phi - DVec3::Z * cos_phi;
                self.write_vertex(
                    base + j * columns + i,
                    pose.transform_point(local),
                    pose.transform_vector(normal),
                );
            }
        }

        let flip = around.degrees < 0.0;
        let mut slot = index;
        for j in 0..fillet_segments {
            for i in 0..around_segments {
                let v00 = base + j * columns + i;
                let v10 = v00 + 1;
                let v01 = v00 + columns;
                let v11 = v01 + 1;
                if flip {
                    self.write_triangle(slot, v00, v01, v10);
                    self.write_triangle(slot + 3, v10, v01, v11);
                } else {
                    self.write_triangle(slot, v00, v10, v01);
                    self.write_triangle(slot + 3, v10, v11, v01);
                }
                slot += 6;
            }
        }
        self.cursor = Cursor::new(base + columns * (fillet_segments + 1), slot);
    }

    /// Emits a flat band between arcs of `outer_radius` and `inner_radius`,
    /// facing local −Z.
    pub fn add_arc_outline(
        &mut self,
        pose: &Pose,
        outer_radius: f64,
        inner_radius: f64,
        spread_degrees: f64,
        quality: f64,
    ) {
        let segments = segments_for_angle(spread_degrees, quality);
        let step = spread_degrees / segments as f64;
        let normal = pose.transform_vector(DVec3::NEG_Z);

        for i in 0..=segments {
            let direction = planar_direction(step * i as f64);
            let outer = pose.transform_point(direction * outer_radius);
            let inner = pose.transform_point(direction * inner_radius);
            let (a, b) = if spread_degrees >= 0.0 {
                (outer, inner)
            } else {
                (inner, outer)
            };
            if i == 0 {
                self.strip_start(a, b, normal);
            } else {
                self.strip_to(a, b, normal, false);
            }
        }
    }
}
