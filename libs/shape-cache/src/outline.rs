//! # Rect Outline Cache
//!
//! Flat rounded-rect frames. The canonical outline is built at the real
//! corner radius and band thickness inside the smallest whole-unit square
//! that fits them, then sliced to the requested size, so every size of a
//! given corner shares one canonical buffer.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use config::constants::{CacheSettings, OUTLINE_CANONICAL_PADDING, REFERENCE_ANGLE_DEGREES};
use glam::DVec3;
use mesh_builder::size::quantize_quality;
use mesh_builder::{AxisBounds, Mesh, Pose, SliceTransform};
use serde::{Deserialize, Serialize};

use crate::cache::{CacheKey, CacheStats, CachedGeometry, FrameStore};
use crate::canonical::rect_outline;

/// A rounded-rect outline request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Outer extents; z is ignored.
    pub size: DVec3,
    /// Outer corner radius.
    pub radius: f64,
    /// Band width, measured inwards.
    pub thickness: f64,
    /// Corner tessellation quality.
    pub quality: f64,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            size: DVec3::new(1.0, 1.0, 0.0),
            radius: 0.25,
            thickness: 0.05,
            quality: 1.0,
        }
    }
}

impl OutlineConfig {
    /// A copy with quality snapped to its segment count. Zero is kept as
    /// is.
    pub fn quantized(&self) -> Self {
        if self.quality == 0.0 {
            return *self;
        }
        Self {
            quality: quantize_quality(REFERENCE_ANGLE_DEGREES, self.quality),
            ..*self
        }
    }

    /// Extent of the corner zone: whichever of radius and band is wider.
    pub fn corner(&self) -> f64 {
        self.thickness.max(self.radius)
    }

    /// Side of the canonical square the corner is generated in.
    pub fn canonical_side(&self) -> f64 {
        (2.0 * self.corner() + OUTLINE_CANONICAL_PADDING).ceil()
    }

    /// The configuration this request shares its canonical outline with.
    pub fn canonical(&self) -> Self {
        let side = self.canonical_side();
        Self {
            size: DVec3::new(side, side, 0.0),
            ..*self
        }
    }

    fn bits(&self) -> [u64; 6] {
        [
            self.size.x,
            self.size.y,
            self.size.z,
            self.radius,
            self.thickness,
            self.quality,
        ]
        .map(f64::to_bits)
    }
}

impl PartialEq for OutlineConfig {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for OutlineConfig {}

impl Hash for OutlineConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

/// Slice taking the canonical outline of `config` to its requested size.
fn outline_transform(config: &OutlineConfig) -> SliceTransform {
    let corner = config.corner();
    let source_outer = config.canonical_side() * 0.5;
    let axis = |size: f64| {
        let half = size * 0.5;
        AxisBounds::new(source_outer - corner, source_outer, (half - corner).max(0.0), half)
    };
    SliceTransform::Box([axis(config.size.x), axis(config.size.y), AxisBounds::IDENTITY])
}

/// Two-stage cache of rect outlines.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shape_cache::{OutlineCache, OutlineConfig};
///
/// let mut cache = OutlineCache::new();
/// let wide = OutlineConfig { size: DVec3::new(4.0, 1.0, 0.0), ..OutlineConfig::default() };
/// let tall = OutlineConfig { size: DVec3::new(1.0, 4.0, 0.0), ..OutlineConfig::default() };
/// cache.get(&wide, 0);
/// cache.get(&tall, 0);
/// assert_eq!(cache.stats().generates, 1);
/// ```
#[derive(Debug)]
pub struct OutlineCache {
    store: FrameStore<CacheKey<OutlineConfig>>,
    stats: CacheStats,
}

impl Default for OutlineCache {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineCache {
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

    /// Returns the outline mesh for `config`.
    pub fn get(&mut self, config: &OutlineConfig, frame: u64) -> Arc<Mesh> {
        let config = config.quantized();
        let key = CacheKey::complete(config);

        let hit = self
            .store
            .touch(&key, frame)
            .and_then(CachedGeometry::as_complete)
            .cloned();
        if let Some(mesh) = hit {
            self.stats.hits += 1;
            tracing::debug!(target: "shape_cache", outline = true, frame, "cache hit");
            return mesh;
        }
        self.stats.misses += 1;
        tracing::debug!(target: "shape_cache", outline = true, frame, "cache miss");

        let canonical = config.canonical();
        let canonical_key = CacheKey::canonical(canonical);
        let cached = self
            .store
            .touch(&canonical_key, frame)
            .and_then(CachedGeometry::as_canonical)
            .cloned();
        let mut buffer = match cached {
            Some(buffer) => buffer,
            None => {
                self.stats.generates += 1;
                tracing::debug!(
                    target: "shape_cache",
                    outline = true,
                    frame,
                    "generating canonical mesh"
                );
                let buffer = rect_outline(
                    canonical.size.x,
                    canonical.radius,
                    canonical.thickness,
                    canonical.quality,
                );
                let copy = buffer.clone();
                self.store
                    .insert(canonical_key, CachedGeometry::Canonical(buffer), frame);
                copy
            }
        };

        if config != canonical {
            buffer.slice_all(&outline_transform(&config), &Pose::IDENTITY);
            self.stats.slices_cpu += 1;
            tracing::debug!(target: "shape_cache", outline = true, frame, "slicing on cpu");
        }

        let mesh = Arc::new(buffer.finalize());
        self.store
            .insert(key, CachedGeometry::Complete(Arc::clone(&mesh)), frame);
        mesh
    }

    /// Empties both stages and resets the statistics.
    pub fn clear(&mut self) {
        self.store.clear();
        self.stats = CacheStats::default();
        tracing::info!(target: "shape_cache", outline = true, "cache cleared");
    }

    /// Drops entries unused for more than the eviction horizon.
    pub fn collect(&mut self, frame: u64) -> usize {
        let removed = self.store.collect(frame);
        tracing::info!(
            target: "shape_cache",
            outline = true,
            removed,
            frame,
            "collected stale entries"
        );
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
}
