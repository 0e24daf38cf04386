//! Centralized configuration values shared across the shape-building crates.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing generated geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Angular step, in degrees, that one unit of quality buys.
///
/// A sweep of `angle` degrees at quality `q` is split into
/// `1 + floor(q * angle / DEGREES_PER_SEGMENT)` segments.
///
/// # Examples
/// ```
/// use config::constants::DEGREES_PER_SEGMENT;
/// let extra_segments = (1.0_f64 * 90.0 / DEGREES_PER_SEGMENT).floor();
/// assert_eq!(extra_segments, 9.0);
/// ```
pub const DEGREES_PER_SEGMENT: f64 = 10.0;

/// Sweep angle, in degrees, used to quantize quality into cache keys.
///
/// Every canonical shape is built from quarter turns, so quantizing at
/// 90 degrees collapses exactly the quality values that tessellate the same.
///
/// # Examples
/// ```
/// use config::constants::REFERENCE_ANGLE_DEGREES;
/// assert_eq!(REFERENCE_ANGLE_DEGREES, 90.0);
/// ```
pub const REFERENCE_ANGLE_DEGREES: f64 = 90.0;

// =============================================================================
// CANONICAL SHAPE CONSTANTS
// =============================================================================

/// Half extent of every canonical (unit sized) shape.
///
/// # Examples
/// ```
/// use config::constants::CANONICAL_HALF_EXTENT;
/// assert_eq!(CANONICAL_HALF_EXTENT * 2.0, 1.0);
/// ```
pub const CANONICAL_HALF_EXTENT: f64 = 0.5;

/// Corner radius the canonical rect and cube shapes are generated with.
///
/// # Examples
/// ```
/// use config::constants::{CANONICAL_HALF_EXTENT, REFERENCE_RADIUS};
/// assert!(REFERENCE_RADIUS < CANONICAL_HALF_EXTENT);
/// ```
pub const REFERENCE_RADIUS: f64 = 0.25;

/// Primary radius of the canonical cylinder.
///
/// # Examples
/// ```
/// use config::constants::{CANONICAL_CYLINDER_RADIUS, CANONICAL_HALF_EXTENT};
/// assert_eq!(CANONICAL_CYLINDER_RADIUS, CANONICAL_HALF_EXTENT);
/// ```
pub const CANONICAL_CYLINDER_RADIUS: f64 = 0.5;

/// Padding added before rounding a rect outline's canonical size up to a
/// whole unit, so the corner zone never touches the canonical center.
///
/// # Examples
/// ```
/// use config::constants::OUTLINE_CANONICAL_PADDING;
/// let canonical = (0.5_f64 * 2.0 + OUTLINE_CANONICAL_PADDING).ceil();
/// assert_eq!(canonical, 2.0);
/// ```
pub const OUTLINE_CANONICAL_PADDING: f64 = 0.01;

// =============================================================================
// CACHE CONSTANTS
// =============================================================================

/// Number of frames an unused cache entry survives before `collect`
/// removes it.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_EVICTION_HORIZON_FRAMES;
/// let last_used = 10_u64;
/// let stale = 14_u64 - last_used > DEFAULT_EVICTION_HORIZON_FRAMES;
/// assert!(stale);
/// ```
pub const DEFAULT_EVICTION_HORIZON_FRAMES: u64 = 3;

/// Upper bound accepted for a configured eviction horizon.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_EVICTION_HORIZON_FRAMES, MAX_EVICTION_HORIZON_FRAMES};
/// assert!(DEFAULT_EVICTION_HORIZON_FRAMES < MAX_EVICTION_HORIZON_FRAMES);
/// ```
pub const MAX_EVICTION_HORIZON_FRAMES: u64 = 1 << 20;

/// Runtime settings for a shape cache instance.
///
/// # Examples
/// ```
/// use config::constants::CacheSettings;
/// let settings = CacheSettings::default();
/// assert!(settings.enabled);
/// assert_eq!(settings.eviction_horizon, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// When false, every request is generated from scratch and nothing is
    /// stored.
    pub enabled: bool,
    /// Frames an entry may go unused before `collect` drops it.
    pub eviction_horizon: u64,
}

impl CacheSettings {
    /// Builds settings, rejecting horizons beyond
    /// [`MAX_EVICTION_HORIZON_FRAMES`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::CacheSettings;
    /// let settings = CacheSettings::new(true, 8).expect("valid settings");
    /// assert_eq!(settings.eviction_horizon, 8);
    /// ```
    pub fn new(enabled: bool, eviction_horizon: u64) -> Result<Self, ConfigError> {
        if eviction_horizon > MAX_EVICTION_HORIZON_FRAMES {
            return Err(ConfigError::InvalidEvictionHorizon(eviction_horizon));
        }
        Ok(Self {
            enabled,
            eviction_horizon,
        })
    }

    /// Settings with caching switched off.
    ///
    /// # Examples
    /// ```
    /// use config::constants::CacheSettings;
    /// assert!(!CacheSettings::disabled().enabled);
    /// ```
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            eviction_horizon: DEFAULT_EVICTION_HORIZON_FRAMES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the eviction horizon exceeds the supported maximum.
    InvalidEvictionHorizon(u64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEvictionHorizon(value) => {
                write!(
                    f,
                    "eviction_horizon must be <= {MAX_EVICTION_HORIZON_FRAMES}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
