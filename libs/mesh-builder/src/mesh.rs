//! # Mesh Data Structure
//!
//! Immutable output of a finalized [`GeometryBuffer`](crate::GeometryBuffer):
//! points, per-vertex normals and triangles.

use glam::DVec3;

/// A finished triangle mesh.
///
/// All geometry calculations use f64 internally. Export to f32 only happens
/// at the render boundary through [`Mesh::vertices_f32`] and friends.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_builder::{size::SIZE_FOR_TRI, GeometryBuffer};
///
/// let mut buffer = GeometryBuffer::begin(SIZE_FOR_TRI);
/// buffer.add_tri(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z);
/// let mesh = buffer.finalize();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    points: Vec<DVec3>,
    /// One normal per vertex
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a mesh from already consistent parts.
    ///
    /// `normals` must have one entry per point.
    pub fn from_parts(points: Vec<DVec3>, normals: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        debug_assert_eq!(points.len(), normals.len());
        Self {
            points,
            normals,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns a reference to the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Unnormalized geometric normal `(b - a) × (c - a)` of a triangle.
    pub fn face_normal(&self, triangle: usize) -> DVec3 {
        let [a, b, c] = self.triangles[triangle].map(|i| self.points[i as usize]);
        (b - a).cross(c - a)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.points.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Validates the mesh for consumption.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - All positions and normals are finite
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.points.len() as u32;
        let indices_valid = self
            .triangles
            .iter()
            .all(|tri| tri.iter().all(|&i| i < vertex_count));
        let values_finite = self
            .points
            .iter()
            .chain(&self.normals)
            .all(|v| v.is_finite());
        indices_valid && values_finite && self.normals.len() == self.points.len()
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.points)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
