//! # Config Crate
//!
//! Centralized configuration constants for the rounded-shape mesh crates.
//! All magic numbers and tunable parameters are defined here so the
//! builder, the canonical generators and the cache agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEGREES_PER_SEGMENT, REFERENCE_ANGLE_DEGREES};
//!
//! // Unit quality splits a quarter turn into ten segments.
//! let segments = 1.0 + (1.0 * REFERENCE_ANGLE_DEGREES / DEGREES_PER_SEGMENT).floor();
//! assert_eq!(segments, 10.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit Canonical Space**: Canonical shapes live in a half-extent 0.5 box
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
