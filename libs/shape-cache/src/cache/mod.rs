//! # Shape Cache
//!
//! Two-stage content cache for rounded shapes.
//!
//! ## Stages
//!
//! ```text
//! request ─quantize─▶ complete key ──hit──▶ Arc<Mesh>
//!                          │ miss
//!                          ▼
//!                  canonical key ──hit──▶ clone buffer
//!                          │ miss             │
//!                          ▼                  │
//!                      generate ─────────────▶┤
//!                                             ▼
//!                              face mode → slice → finalize → store
//! ```
//!
//! Every size, pose and face mode of a shape shares one canonical buffer;
//! only the finished meshes are per request. Entries are stamped with the
//! frame they were last used in and dropped by [`ShapeCache::collect`]
//! once they fall behind the eviction horizon.

mod shader;
mod stats;
mod store;

pub use shader::{CapabilityFlags, ShaderKind, ShaderParameters};
pub use stats::CacheStats;
pub use store::{CachedGeometry, EntryInfo};

pub(crate) use store::FrameStore;

use std::sync::Arc;

use config::constants::CacheSettings;
use mesh_builder::{Cursor, GeometryBuffer, Mesh};

use crate::canonical::{canonical_form, generate};
use crate::shape::{FaceMode, ShapeConfig};
use crate::targets::{needs_slice, slice_transform};

/// Which level of the cache an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheStage {
    /// Unit-sized geometry shared by every request of a shape.
    Canonical,
    /// A finished mesh for one exact request.
    Complete,
}

/// Key of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey<C = ShapeConfig> {
    /// Cache level.
    pub stage: CacheStage,
    /// Quantized (and, for canonical entries, normalized) configuration.
    pub config: C,
}

impl<C> CacheKey<C> {
    /// Key of a canonical entry.
    pub fn canonical(config: C) -> Self {
        Self {
            stage: CacheStage::Canonical,
            config,
        }
    }

    /// Key of a complete entry.
    pub fn complete(config: C) -> Self {
        Self {
            stage: CacheStage::Complete,
            config,
        }
    }
}

/// Two-stage shape cache.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shape_cache::{CapabilityFlags, ShapeCache, ShapeConfig};
///
/// let mut cache = ShapeCache::new();
/// let config = ShapeConfig {
///     size: DVec3::new(2.0, 1.0, 1.0),
///     ..ShapeConfig::default()
/// };
///
/// let (first, _) = cache.get(&config, CapabilityFlags::NONE, 0);
/// let (second, _) = cache.get(&config, CapabilityFlags::NONE, 0);
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct ShapeCache {
    store: FrameStore<CacheKey>,
    stats: CacheStats,
}

impl Default for ShapeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeCache {
    /// Creates an empty cache with default settings.
    pub fn new() -> Self {
        Self::with_settings(CacheSettings::default())
    }

    /// Creates an empty cache.
    pub fn with_settings(settings: CacheSettings) -> Self {
        Self {
            store: FrameStore::new(settings),
            stats: CacheStats::default(),
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &CacheSettings {
        self.store.settings()
    }

    /// Returns the mesh for `config`, building and caching whatever is
    /// missing.
    ///
    /// The returned [`ShaderParameters`] tell a renderer with `flags` what
    /// it still has to apply; today that is always nothing.
    pub fn get(
        &mut self,
        config: &ShapeConfig,
        flags: CapabilityFlags,
        frame: u64,
    ) -> (Arc<Mesh>, ShaderParameters) {
        let config = config.quantized();
        let key = CacheKey::complete(config);

        let hit = self
            .store
            .touch(&key, frame)
            .and_then(CachedGeometry::as_complete)
            .cloned();
        if let Some(mesh) = hit {
            self.stats.hits += 1;
            tracing::debug!(target: "shape_cache", kind = ?config.kind, frame, "cache hit");
            return (mesh, ShaderParameters::NONE);
        }
        self.stats.misses += 1;
        tracing::debug!(target: "shape_cache", kind = ?config.kind, frame, "cache miss");

        let canonical = canonical_form(&config);
        let size_factor = match config.face_mode {
            FaceMode::DoubleSided => 2,
            FaceMode::Outside | FaceMode::Inside => 1,
        };
        let mut buffer = self.canonical_buffer(canonical, frame, size_factor);
        apply_face_mode(&mut buffer, config.face_mode);

        let shader = ShaderParameters::for_capabilities(flags);
        if shader.is_none() && needs_slice(&config, &canonical) {
            buffer.slice_all(&slice_transform(&config), &config.pose);
            self.stats.slices_cpu += 1;
            tracing::debug!(target: "shape_cache", kind = ?config.kind, frame, "slicing on cpu");
        }

        let mesh = Arc::new(buffer.finalize());
        self.store
            .insert(key, CachedGeometry::Complete(Arc::clone(&mesh)), frame);
        (mesh, shader)
    }

    /// A private copy of the canonical geometry, generated and stored
    /// first if needed.
    fn canonical_buffer(
        &mut self,
        canonical: ShapeConfig,
        frame: u64,
        size_factor: usize,
    ) -> GeometryBuffer {
        let key = CacheKey::canonical(canonical);
        if let Some(buffer) = self
            .store
            .touch(&key, frame)
            .and_then(CachedGeometry::as_canonical)
        {
            return buffer.clone_scaled(size_factor);
        }

        self.stats.generates += 1;
        tracing::debug!(
            target: "shape_cache",
            kind = ?canonical.kind,
            frame,
            "generating canonical mesh"
        );
        let buffer = generate(&canonical);
        let copy = buffer.clone_scaled(size_factor);
        self.store
            .insert(key, CachedGeometry::Canonical(buffer), frame);
        copy
    }

    /// Empties both stages and resets the statistics.
    pub fn clear(&mut self) {
        self.store.clear();
        self.stats = CacheStats::default();
        tracing::info!(target: "shape_cache", "cache cleared");
    }

    /// Drops entries unused for more than the eviction horizon. Returns
    /// the number of entries removed.
    pub fn collect(&mut self, frame: u64) -> usize {
        let removed = self.store.collect(frame);
        tracing::info!(target: "shape_cache", removed, frame, "collected stale entries");
        removed
    }

    /// Statistics since creation or the last [`clear`](Self::clear).
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of entries across both stages.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access bookkeeping of the entry `config` maps to in `stage`.
    pub fn entry_info(&self, config: &ShapeConfig, stage: CacheStage) -> Option<EntryInfo> {
        let config = config.quantized();
        let key = match stage {
            CacheStage::Complete => CacheKey::complete(config),
            CacheStage::Canonical => CacheKey::canonical(canonical_form(&config)),
        };
        self.store.info(&key)
    }
}

fn apply_face_mode(buffer: &mut GeometryBuffer, face_mode: FaceMode) {
    let outside = buffer.cursor();
    match face_mode {
        FaceMode::Outside => {}
        FaceMode::Inside => buffer.reverse_faces(Cursor::ZERO, outside),
        FaceMode::DoubleSided => {
            buffer.copy(Cursor::ZERO, outside);
            let end = buffer.cursor();
            buffer.reverse_faces(outside, end);
        }
    }
}
