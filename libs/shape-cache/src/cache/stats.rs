/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from a complete entry
    pub hits: u64,
    /// Requests that had to build a complete mesh
    pub misses: u64,
    /// Canonical buffers generated from scratch
    pub generates: u64,
    /// Meshes sliced on the CPU
    pub slices_cpu: u64,
}

impl CacheStats {
    /// Computes the hit rate (0.0 to 1.0).
    ///
    /// # Returns
    ///
    /// Hit rate as a fraction, or 0.0 if no accesses.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
