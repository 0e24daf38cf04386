//! Frame-stamped key/value storage shared by the shape and outline caches.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use config::constants::CacheSettings;
use mesh_builder::{GeometryBuffer, Mesh};

/// Access bookkeeping of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    /// Frame of the most recent access.
    pub last_accessed_frame: u64,
    /// Accesses during that frame.
    pub last_accessed_count: u32,
}

impl EntryInfo {
    fn new(frame: u64) -> Self {
        Self {
            last_accessed_frame: frame,
            last_accessed_count: 1,
        }
    }

    fn touch(&mut self, frame: u64) {
        if self.last_accessed_frame == frame {
            self.last_accessed_count = self.last_accessed_count.saturating_add(1);
        } else {
            *self = Self::new(frame);
        }
    }
}

/// What an entry holds: a canonical buffer that is only ever cloned, or a
/// finished mesh handed out as-is.
#[derive(Debug)]
pub enum CachedGeometry {
    /// Unfinalized canonical geometry.
    Canonical(GeometryBuffer),
    /// A finished mesh.
    Complete(Arc<Mesh>),
}

impl CachedGeometry {
    /// The canonical buffer, if this is one.
    pub fn as_canonical(&self) -> Option<&GeometryBuffer> {
        match self {
            Self::Canonical(buffer) => Some(buffer),
            Self::Complete(_) => None,
        }
    }

    /// The finished mesh, if this is one.
    pub fn as_complete(&self) -> Option<&Arc<Mesh>> {
        match self {
            Self::Canonical(_) => None,
            Self::Complete(mesh) => Some(mesh),
        }
    }
}

#[derive(Debug)]
struct Entry {
    info: EntryInfo,
    value: CachedGeometry,
}

/// Map from keys to geometry with per-frame access stamps.
#[derive(Debug)]
pub(crate) struct FrameStore<K> {
    entries: HashMap<K, Entry>,
    settings: CacheSettings,
}

impl<K: Eq + Hash> FrameStore<K> {
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            entries: HashMap::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &CacheSettings {
        &self.settings
    }

    /// Looks `key` up and stamps it with `frame`.
    pub fn touch(&mut self, key: &K, frame: u64) -> Option<&CachedGeometry> {
        let entry = self.entries.get_mut(key)?;
        entry.info.touch(frame);
        Some(&entry.value)
    }

    /// Stores `value` as first accessed at `frame`. Does nothing when the
    /// cache is disabled.
    pub fn insert(&mut self, key: K, value: CachedGeometry, frame: u64) {
        if !self.settings.enabled {
            return;
        }
        self.entries.insert(
            key,
            Entry {
                info: EntryInfo::new(frame),
                value,
            },
        );
    }

    /// Drops every entry unused for more than the eviction horizon and
    /// returns how many were dropped.
    pub fn collect(&mut self, frame: u64) -> usize {
        let horizon = self.settings.eviction_horizon;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| frame.saturating_sub(entry.info.last_accessed_frame) <= horizon);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn info(&self, key: &K) -> Option<EntryInfo> {
        self.entries.get(key).map(|entry| entry.info)
    }
}
