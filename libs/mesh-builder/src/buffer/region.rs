//! Region operators over `[start, end)` cursor ranges.

use glam::{DQuat, DVec3};

use super::GeometryBuffer;
use crate::cursor::Cursor;
use crate::plane::ReflectPlane;

impl GeometryBuffer {
    /// Appends a verbatim duplicate of `[start, end)`.
    pub fn copy(&mut self, start: Cursor, end: Cursor) {
        self.copy_mapped(start, end, |p| p, |n| n, false);
    }

    /// Appends a mirror image of `[start, end)`; winding is reversed
    /// because the reflection flips handedness.
    pub fn copy_reflected(&mut self, start: Cursor, end: Cursor, plane: &ReflectPlane) {
        self.copy_mapped(
            start,
            end,
            |p| plane.reflect_point(p),
            |n| plane.reflect_vector(n),
            true,
        );
    }

    /// Appends a rotated duplicate of `[start, end)`; winding is kept.
    pub fn copy_rotated(&mut self, start: Cursor, end: Cursor, rotation: DQuat) {
        self.copy_mapped(start, end, |p| rotation * p, |n| rotation * n, false);
    }

    /// Mirrors `[start, end)` in place and reverses its winding.
    pub fn reflect_in_place(&mut self, start: Cursor, end: Cursor, plane: &ReflectPlane) {
        for slot in start.vertex..end.vertex {
            self.points[slot] = plane.reflect_point(self.points[slot]);
            self.normals[slot] = plane.reflect_vector(self.normals[slot]);
        }
        self.reverse_winding(start, end);
    }

    /// Turns `[start, end)` inside out: negates normals and reverses
    /// winding without duplicating vertices.
    pub fn reverse_faces(&mut self, start: Cursor, end: Cursor) {
        for normal in &mut self.normals[start.vertex..end.vertex] {
            *normal = -*normal;
        }
        self.reverse_winding(start, end);
    }

    /// Mirrors everything written so far across `x = 0`, in place.
    pub fn reflect_x(&mut self) {
        self.reflect_in_place(Cursor::ZERO, self.cursor, &ReflectPlane::X);
    }

    /// Mirrors everything written so far across `y = 0`, in place.
    pub fn reflect_y(&mut self) {
        self.reflect_in_place(Cursor::ZERO, self.cursor, &ReflectPlane::Y);
    }

    /// Mirrors everything written so far across `z = 0`, in place.
    pub fn reflect_z(&mut self) {
        self.reflect_in_place(Cursor::ZERO, self.cursor, &ReflectPlane::Z);
    }

    /// Doubles the content with its mirror image across `x = 0`.
    pub fn mirror_x(&mut self) {
        self.copy_reflected(Cursor::ZERO, self.cursor, &ReflectPlane::X);
    }

    /// Doubles the content with its mirror image across `y = 0`.
    pub fn mirror_y(&mut self) {
        self.copy_reflected(Cursor::ZERO, self.cursor, &ReflectPlane::Y);
    }

    /// Doubles the content with its mirror image across `z = 0`.
    pub fn mirror_z(&mut self) {
        self.copy_reflected(Cursor::ZERO, self.cursor, &ReflectPlane::Z);
    }

    fn copy_mapped(
        &mut self,
        start: Cursor,
        end: Cursor,
        map_point: impl Fn(DVec3) -> DVec3,
        map_normal: impl Fn(DVec3) -> DVec3,
        flip_winding: bool,
    ) {
        let Cursor { vertex, index } = self.cursor;
        // Source indices reference [start.vertex, end.vertex); the copy is
        // shifted by the distance to the destination.
        let shift = (vertex - start.vertex) as u32;

        for (offset, source) in (start.vertex..end.vertex).enumerate() {
            let point = map_point(self.points[source]);
            let normal = map_normal(self.normals[source]);
            self.write_vertex(vertex + offset, point, normal);
        }

        let mut slot = index;
        for source in (start.index..end.index).step_by(3) {
            let a = self.indices[source] + shift;
            let b = self.indices[source + 1] + shift;
            let c = self.indices[source + 2] + shift;
            let (b, c) = if flip_winding { (c, b) } else { (b, c) };
            self.indices[slot] = a;
            self.indices[slot + 1] = b;
            self.indices[slot + 2] = c;
            slot += 3;
        }

        self.cursor = Cursor::new(vertex + (end.vertex - start.vertex), slot);
    }

    fn reverse_winding(&mut self, start: Cursor, end: Cursor) {
        for tri in self.indices[start.index..end.index].chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }
}
