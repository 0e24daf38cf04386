//! # Geometry Buffer
//!
//! An append-only collection of points, normals and triangle indices,
//! allocated once at an exact capacity and filled through a monotonically
//! advancing [`Cursor`].
//!
//! ## Lifecycle
//!
//! ```text
//! begin(capacity) → emit / copy / reflect … → [slice] → finalize() → Mesh
//! ```
//!
//! Writing past the capacity is a contract violation: the capacity was
//! computed by the `size` functions and must match what the emitters write,
//! so the slice index panics instead of growing the storage.
//!
//! ## Winding
//!
//! For every triangle `(a, b, c)` written by this module,
//! `(b - a) × (c - a)` points along the normals stored for its vertices.
//! Mirroring operators reverse the index order to keep that true.

mod emit;
mod region;

pub use emit::Sweep;

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

use crate::cursor::Cursor;
use crate::mesh::Mesh;

/// Pre-sized, append-only mesh storage.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_builder::{size::SIZE_FOR_QUAD, GeometryBuffer};
///
/// let mut buffer = GeometryBuffer::begin(SIZE_FOR_QUAD * 2);
/// buffer.add_quad(
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::ZERO,
///     DVec3::NEG_Z,
/// );
/// buffer.mirror_x();
/// assert_eq!(buffer.cursor(), buffer.capacity());
/// ```
#[derive(Debug)]
pub struct GeometryBuffer {
    pub(crate) points: Vec<DVec3>,
    pub(crate) normals: Vec<DVec3>,
    indices: Vec<u32>,
    cursor: Cursor,
}

impl GeometryBuffer {
    /// Allocates exactly `capacity.vertex` vertex slots and
    /// `capacity.index` index slots.
    pub fn begin(capacity: Cursor) -> Self {
        Self {
            points: vec![DVec3::ZERO; capacity.vertex],
            normals: vec![DVec3::ZERO; capacity.vertex],
            indices: vec![0; capacity.index],
            cursor: Cursor::ZERO,
        }
    }

    /// Next free position.
    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Total slots allocated at `begin`.
    #[inline]
    pub fn capacity(&self) -> Cursor {
        Cursor::new(self.points.len(), self.indices.len())
    }

    /// True when nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == Cursor::ZERO
    }

    /// Written points.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points[..self.cursor.vertex]
    }

    /// Written normals, one per point.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals[..self.cursor.vertex]
    }

    /// Written triangle indices, three per triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices[..self.cursor.index]
    }

    /// Produces an independent buffer with `size_factor` times this
    /// buffer's capacity, holding a copy of the written region only.
    ///
    /// A factor of 2 leaves room to duplicate everything once, which is how
    /// double-sided geometry is built from a single-sided source.
    pub fn clone_scaled(&self, size_factor: usize) -> Self {
        let mut clone = Self::begin(self.capacity() * size_factor);
        let Cursor { vertex, index } = self.cursor;
        clone.points[..vertex].copy_from_slice(&self.points[..vertex]);
        clone.normals[..vertex].copy_from_slice(&self.normals[..vertex]);
        clone.indices[..index].copy_from_slice(&self.indices[..index]);
        clone.cursor = self.cursor;
        clone
    }

    /// Hands the storage to an immutable [`Mesh`]. The buffer is consumed.
    ///
    /// Triangles whose area collapsed to zero, as happens where slicing
    /// squeezes a flat zone to nothing, are left out. Vertices are kept as
    /// written.
    ///
    /// Debug builds assert that the cursor reached the capacity exactly.
    pub fn finalize(self) -> Mesh {
        debug_assert_eq!(self.cursor, self.capacity(), "capacity drift");
        let Self {
            mut points,
            mut normals,
            indices,
            cursor,
        } = self;
        points.truncate(cursor.vertex);
        normals.truncate(cursor.vertex);
        let triangles = indices[..cursor.index]
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .filter(|tri| !is_degenerate(&points, tri))
            .collect();
        Mesh::from_parts(points, normals, triangles)
    }

    #[inline]
    fn write_vertex(&mut self, slot: usize, point: DVec3, normal: DVec3) {
        self.points[slot] = point;
        self.normals[slot] = normal;
    }

    #[inline]
    fn write_triangle(&mut self, slot: usize, a: usize, b: usize, c: usize) {
        self.indices[slot] = a as u32;
        self.indices[slot + 1] = b as u32;
        self.indices[slot + 2] = c as u32;
    }
}

fn is_degenerate(points: &[DVec3], tri: &[u32; 3]) -> bool {
    let [a, b, c] = tri.map(|i| points[i as usize]);
    (b - a).cross(c - a).length() < EPSILON_TOLERANCE
}

impl Clone for GeometryBuffer {
    fn clone(&self) -> Self {
        self.clone_scaled(1)
    }
}

#[cfg(test)]
mod tests;
