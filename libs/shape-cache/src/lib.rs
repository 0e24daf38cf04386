//! # Shape Cache
//!
//! Rounded rects, cuboids and cylinders of any size, radius and quality,
//! built from a small set of cached unit-scale shapes.
//!
//! ## Architecture
//!
//! ```text
//! ShapeConfig ─quantize─▶ ShapeCache::get
//!                             │
//!        complete hit ◀───────┤
//!                             ▼
//!              canonical_form → generate (mesh-builder)
//!                             │
//!              face mode → slice_transform → finalize → Arc<Mesh>
//! ```
//!
//! - [`canonical`]: unit-scale generators, one octant at a time
//! - [`targets`]: slice bounds that resize canonical geometry
//! - [`cache`]: the two-stage, frame-stamped cache
//! - [`outline`]: the same scheme for rounded-rect outlines
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DVec2, DVec3};
//! use shape_cache::{CapabilityFlags, CubeKind, ShapeCache, ShapeConfig, ShapeKind};
//!
//! let mut cache = ShapeCache::new();
//! let config = ShapeConfig {
//!     kind: ShapeKind::Cube(CubeKind::RoundSides),
//!     size: DVec3::new(2.0, 1.0, 0.5),
//!     radii: DVec2::splat(0.1),
//!     ..ShapeConfig::default()
//! };
//!
//! for frame in 0..3 {
//!     let (mesh, _) = cache.get(&config, CapabilityFlags::NONE, frame);
//!     assert!(mesh.validate());
//!     cache.collect(frame);
//! }
//! assert_eq!(cache.stats().generates, 1);
//! ```

pub mod anchor;
pub mod cache;
pub mod canonical;
pub mod error;
pub mod outline;
pub mod shape;
pub mod targets;

pub use anchor::{Anchor, AnchorAxis, Origin};
pub use cache::{
    CacheKey, CacheStage, CacheStats, CachedGeometry, CapabilityFlags, EntryInfo, ShaderKind,
    ShaderParameters, ShapeCache,
};
pub use error::{ShapeError, ShapeResult};
pub use outline::{OutlineCache, OutlineConfig};
pub use shape::{
    CubeKind, CylinderKind, FaceMode, Portion, PortionAxis, PortionType, RectKind, ShapeConfig,
    ShapeKind,
};
