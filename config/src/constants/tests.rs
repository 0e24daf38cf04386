//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default settings are sane.
///
/// # Examples
/// ```
/// use config::constants::CacheSettings;
/// let cfg = CacheSettings::default();
/// assert!(cfg.enabled);
/// ```
#[test]
fn default_settings_are_valid() {
    let cfg = CacheSettings::default();
    assert!(cfg.enabled);
    assert_eq!(cfg.eviction_horizon, DEFAULT_EVICTION_HORIZON_FRAMES);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::CacheSettings;
/// assert!(CacheSettings::new(true, u64::MAX).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        CacheSettings::new(true, u64::MAX).unwrap_err(),
        ConfigError::InvalidEvictionHorizon(u64::MAX)
    );
    assert!(CacheSettings::new(false, 0).is_ok());
}

#[test]
fn disabled_keeps_default_horizon() {
    let cfg = CacheSettings::disabled();
    assert!(!cfg.enabled);
    assert_eq!(cfg.eviction_horizon, DEFAULT_EVICTION_HORIZON_FRAMES);
}

#[test]
fn error_message_names_the_value() {
    let err = ConfigError::InvalidEvictionHorizon(99);
    assert!(err.to_string().contains("99"));
}
