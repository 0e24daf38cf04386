//! # Mesh Builder
//!
//! Exact-size geometry construction for rounded primitives.
//!
//! ## Architecture
//!
//! ```text
//! size (Cursor arithmetic) → GeometryBuffer::begin
//!        ↓
//! emitters (tri, quad, fan, strip, cylinder, corner3, revolved arc, arc outline)
//!        ↓
//! region operators (copy, copy_reflected, copy_rotated, reflect, reverse_faces)
//!        ↓
//! slice (per-axis remap + pose) → finalize → Mesh
//! ```
//!
//! Every emitter advances the buffer cursor by exactly the amount the
//! matching `size_for_*` function predicts, so a buffer is allocated once
//! and never grows.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_builder::{size, GeometryBuffer, Pose};
//!
//! let capacity = size::size_for_fan(90.0, 1.0);
//! let mut buffer = GeometryBuffer::begin(capacity);
//! buffer.add_fan(&Pose::IDENTITY, 0.5, 90.0, 1.0);
//! assert_eq!(buffer.cursor(), capacity);
//!
//! let mesh = buffer.finalize();
//! assert_eq!(mesh.triangle_count(), 10);
//! ```

pub mod buffer;
pub mod cursor;
pub mod mesh;
pub mod plane;
pub mod pose;
pub mod size;
pub mod slice;

pub use buffer::{GeometryBuffer, Sweep};
pub use cursor::Cursor;
pub use mesh::Mesh;
pub use plane::ReflectPlane;
pub use pose::{euler_degrees, Pose};
pub use slice::{AxisBounds, SliceTransform};
