//! Shader-side slicing surface.
//!
//! A renderer able to slice in a vertex shader could skip the CPU slice
//! and receive the zone bounds instead. The CPU path is the only one
//! implemented, so [`ShaderParameters::for_capabilities`] always answers
//! [`ShaderKind::None`].

use bitflags::bitflags;
use glam::DVec4;

bitflags! {
    /// Slicing variants the caller's renderer can perform itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CapabilityFlags: u32 {
        /// 3-zone slicing of flat rects.
        const RECT_9_SLICE = 1 << 0;
        /// 5-zone slicing of flat rects.
        const RECT_16_SLICE = 1 << 1;
        /// 3-zone slicing of boxes.
        const CUBIC_27_SLICE = 1 << 2;
        /// 5-zone slicing of boxes.
        const CUBIC_256_SLICE = 1 << 3;
    }
}

impl CapabilityFlags {
    /// The renderer cannot slice.
    pub const NONE: Self = Self::empty();
}

impl Default for CapabilityFlags {
    fn default() -> Self {
        Self::NONE
    }
}

/// Which shader slice, if any, the caller must apply to the returned mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// The mesh is final.
    #[default]
    None,
    /// Apply a 3-zone rect slice.
    Rect9Slice,
    /// Apply a 5-zone rect slice.
    Rect16Slice,
    /// Apply a 3-zone box slice.
    Cubic27Slice,
    /// Apply a 5-zone box slice.
    Cubic256Slice,
}

/// Zone bounds for a shader slice.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShaderParameters {
    /// Slice to apply.
    pub kind: ShaderKind,
    /// Source inner bounds per axis.
    pub source_inner: DVec4,
    /// Source outer bounds per axis.
    pub source_outer: DVec4,
    /// Target inner bounds per axis.
    pub target_inner: DVec4,
    /// Target outer bounds per axis.
    pub target_outer: DVec4,
}

impl ShaderParameters {
    /// The mesh needs no further processing.
    pub const NONE: Self = Self {
        kind: ShaderKind::None,
        source_inner: DVec4::ZERO,
        source_outer: DVec4::ZERO,
        target_inner: DVec4::ZERO,
        target_outer: DVec4::ZERO,
    };

    /// Picks the shader slice for a renderer with `flags`.
    ///
    /// No shader path exists yet, so every request is sliced on the CPU.
    pub fn for_capabilities(_flags: CapabilityFlags) -> Self {
        Self::NONE
    }

    /// True when the caller has nothing left to do.
    pub fn is_none(&self) -> bool {
        self.kind == ShaderKind::None
    }
}
