//! # Deformation Targets
//!
//! Maps a request onto the slice that stretches its canonical geometry to
//! the requested size and radii.
//!
//! Source bounds describe where the flat, rounded and outer zones sit in
//! the canonical shape; target bounds describe where they must end up.

use config::constants::{CANONICAL_CYLINDER_RADIUS, CANONICAL_HALF_EXTENT, REFERENCE_RADIUS};
use mesh_builder::{AxisBounds, SliceTransform};

use crate::canonical::canonical_fillet;
use crate::shape::{CubeKind, CylinderKind, RectKind, ShapeConfig, ShapeKind};

const H: f64 = CANONICAL_HALF_EXTENT;

/// Rounded zone of radius `radius` on an axis of half extent `half`.
fn rounded(half: f64, radius: f64) -> AxisBounds {
    AxisBounds::new(REFERENCE_RADIUS, H, (half - radius).max(0.0), half)
}

/// No rounded zone: the whole axis scales.
fn flat(half: f64) -> AxisBounds {
    AxisBounds::three_zone(H, half)
}

/// True when the canonical geometry must be sliced to satisfy `config`.
///
/// Flat rects are generated in the `z = 0` plane and placed at half their
/// depth, so any depth forces a slice. Only the radii the family actually
/// shapes with are compared.
pub fn needs_slice(config: &ShapeConfig, canonical: &ShapeConfig) -> bool {
    config.size != canonical.size
        || config.pose != canonical.pose
        || radii_differ(config, canonical)
        || (config.kind.is_2d() && config.size.z != 0.0)
}

fn radii_differ(config: &ShapeConfig, canonical: &ShapeConfig) -> bool {
    let (radii, reference) = (config.radii, canonical.radii);
    match config.kind {
        ShapeKind::Rect(RectKind::Hard) | ShapeKind::Cube(CubeKind::Hard) => false,
        ShapeKind::Rect(RectKind::Round)
        | ShapeKind::Cube(CubeKind::RoundSides)
        | ShapeKind::Cube(CubeKind::RoundEdges)
        | ShapeKind::Cylinder(CylinderKind::Hard) => radii.x != reference.x,
        // the fillet is clamped to the side radius before it is used
        ShapeKind::Cube(CubeKind::RoundSidesFillet) => {
            radii.x != reference.x || radii.y.min(radii.x) != reference.y
        }
        ShapeKind::Cylinder(CylinderKind::RoundEdges) => radii != reference,
    }
}

/// The slice taking the canonical geometry of `config.kind` to `config`.
pub fn slice_transform(config: &ShapeConfig) -> SliceTransform {
    let half = config.size * 0.5;
    let radius = config.radii.x;

    match config.kind {
        ShapeKind::Rect(kind) => {
            let depth = AxisBounds::three_zone(0.0, half.z);
            match kind {
                RectKind::Hard => SliceTransform::Box([flat(half.x), flat(half.y), depth]),
                RectKind::Round => SliceTransform::Box([
                    rounded(half.x, radius),
                    rounded(half.y, radius),
                    depth,
                ]),
            }
        }
        ShapeKind::Cube(CubeKind::Hard) => {
            SliceTransform::Box([flat(half.x), flat(half.y), flat(half.z)])
        }
        ShapeKind::Cube(CubeKind::RoundSides) => SliceTransform::Box([
            rounded(half.x, radius),
            rounded(half.y, radius),
            flat(half.z),
        ]),
        ShapeKind::Cube(CubeKind::RoundEdges) => SliceTransform::Box([
            rounded(half.x, radius),
            rounded(half.y, radius),
            rounded(half.z, radius),
        ]),
        ShapeKind::Cube(CubeKind::RoundSidesFillet) => {
            let fillet = config.radii.y.min(radius);
            let depth = AxisBounds::new(
                H - canonical_fillet(config.radii.y, radius),
                H,
                (half.z - fillet).max(0.0),
                half.z,
            );
            SliceTransform::Box([rounded(half.x, radius), rounded(half.y, radius), depth])
        }
        ShapeKind::Cylinder(kind) => {
            let (canonical_edge, edge) = match kind {
                CylinderKind::Hard => (0.0, 0.0),
                CylinderKind::RoundEdges => (REFERENCE_RADIUS, config.radii.y),
            };
            let source_inner = CANONICAL_CYLINDER_RADIUS - canonical_edge;
            SliceTransform::Radial {
                radial: AxisBounds::new(
                    source_inner,
                    CANONICAL_CYLINDER_RADIUS,
                    (radius - edge).max(0.0),
                    radius,
                ),
                depth: AxisBounds::new(source_inner, H, (half.z - edge).max(0.0), half.z),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{canonical_form, generate};
    use crate::shape::Portion;
    use approx::assert_abs_diff_eq;
    use glam::{DVec2, DVec3};
    use mesh_builder::Pose;

    fn sliced_bounds(config: &ShapeConfig) -> (DVec3, DVec3) {
        let mut buffer = generate(&canonical_form(config));
        buffer.slice_all(&slice_transform(config), &config.pose);
        buffer.finalize().bounding_box()
    }

    #[test]
    fn test_cube_reaches_requested_size() {
        let size = DVec3::new(3.0, 2.0, 0.8);
        for kind in [
            CubeKind::Hard,
            CubeKind::RoundSides,
            CubeKind::RoundEdges,
            CubeKind::RoundSidesFillet,
        ] {
            let config = ShapeConfig {
                kind: ShapeKind::Cube(kind),
                size,
                radii: DVec2::new(0.3, 0.1),
                ..ShapeConfig::default()
            };
            let (min, max) = sliced_bounds(&config);
            assert_abs_diff_eq!(max.x, 1.5, epsilon = 1e-9);
            assert_abs_diff_eq!(min.y, -1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(max.z, 0.4, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rounded_corner_keeps_its_radius() {
        let config = ShapeConfig {
            kind: ShapeKind::Rect(RectKind::Round),
            size: DVec3::new(4.0, 2.0, 0.0),
            radii: DVec2::splat(0.5),
            ..ShapeConfig::default()
        };
        let mut buffer = generate(&canonical_form(&config));
        buffer.slice_all(&slice_transform(&config), &Pose::IDENTITY);
        // corner centers move to (±1.5, ±0.5); the rim lies on circles of 0.5
        let corner = DVec3::new(1.5, 0.5, 0.0);
        let rim: Vec<_> = buffer
            .points()
            .iter()
            .filter(|p| p.x > 1.5 + 1e-9 && p.y > 0.5 + 1e-9)
            .collect();
        assert!(!rim.is_empty());
        for p in rim {
            assert_abs_diff_eq!((*p - corner).length(), 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rect_is_placed_at_half_depth() {
        let config = ShapeConfig {
            kind: ShapeKind::Rect(RectKind::Hard),
            size: DVec3::new(1.0, 1.0, 0.5),
            ..ShapeConfig::default()
        };
        let (min, max) = sliced_bounds(&config);
        assert_abs_diff_eq!(min.z, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(max.z, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_cylinder_uses_primary_radius() {
        let config = ShapeConfig {
            kind: ShapeKind::Cylinder(CylinderKind::RoundEdges),
            size: DVec3::new(1.0, 1.0, 3.0),
            radii: DVec2::new(0.8, 0.1),
            ..ShapeConfig::default()
        };
        let mut buffer = generate(&canonical_form(&config));
        buffer.slice_all(&slice_transform(&config), &Pose::IDENTITY);
        let widest = buffer
            .points()
            .iter()
            .map(|p| p.x.hypot(p.y))
            .fold(0.0, f64::max);
        assert_abs_diff_eq!(widest, 0.8, epsilon = 1e-9);
        let deepest = buffer.points().iter().map(|p| p.z).fold(0.0, f64::min);
        assert_abs_diff_eq!(deepest, -1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_fillet_depth_zone() {
        let config = ShapeConfig {
            kind: ShapeKind::Cube(CubeKind::RoundSidesFillet),
            size: DVec3::new(2.0, 2.0, 2.0),
            radii: DVec2::new(0.4, 0.2),
            ..ShapeConfig::default()
        };
        let SliceTransform::Box([_, _, depth]) = slice_transform(&config) else {
            panic!("fillet cubes slice per axis");
        };
        assert_abs_diff_eq!(depth.source_inner, 0.375, epsilon = 1e-12);
        assert_abs_diff_eq!(depth.target_inner, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(depth.target_outer, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_radius_larger_than_size_collapses_flat_zone() {
        let config = ShapeConfig {
            size: DVec3::splat(0.2),
            radii: DVec2::splat(0.5),
            ..ShapeConfig::default()
        };
        let SliceTransform::Box([x, ..]) = slice_transform(&config) else {
            panic!("cubes slice per axis");
        };
        assert_eq!(x.target_inner, 0.0);
    }

    #[test]
    fn test_needs_slice() {
        let canonical = canonical_form(&ShapeConfig::default());
        assert!(!needs_slice(&ShapeConfig::default(), &canonical));

        let moved = ShapeConfig {
            pose: Pose::from_position(DVec3::Y),
            ..ShapeConfig::default()
        };
        assert!(needs_slice(&moved, &canonical));

        let rounder = ShapeConfig {
            radii: DVec2::splat(0.3),
            ..ShapeConfig::default()
        };
        assert!(needs_slice(&rounder, &canonical));

        // a unit rect still has to be lifted off the z = 0 plane
        let rect = ShapeConfig {
            kind: ShapeKind::Rect(RectKind::Round),
            portion: Portion::FULL,
            ..ShapeConfig::default()
        };
        assert!(needs_slice(&rect, &canonical_form(&rect)));
        let flat_rect = ShapeConfig {
            size: DVec3::new(1.0, 1.0, 0.0),
            ..rect
        };
        assert!(needs_slice(&flat_rect, &canonical_form(&flat_rect)));
    }

    #[test]
    fn test_unused_radii_do_not_force_a_slice() {
        let hard = ShapeConfig {
            kind: ShapeKind::Cube(CubeKind::Hard),
            radii: DVec2::new(0.3, 0.7),
            ..ShapeConfig::default()
        };
        assert!(!needs_slice(&hard, &canonical_form(&hard)));

        let round = ShapeConfig {
            kind: ShapeKind::Cube(CubeKind::RoundEdges),
            radii: DVec2::new(0.25, 0.9),
            ..ShapeConfig::default()
        };
        assert!(!needs_slice(&round, &canonical_form(&round)));

        let fillet = ShapeConfig {
            kind: ShapeKind::Cube(CubeKind::RoundSidesFillet),
            radii: DVec2::new(0.25, 0.4),
            ..ShapeConfig::default()
        };
        assert!(!needs_slice(&fillet, &canonical_form(&fillet)));
        let thinner = ShapeConfig {
            radii: DVec2::new(0.25, 0.1),
            ..fillet
        };
        assert!(!needs_slice(&thinner, &canonical_form(&thinner)));
        let wider = ShapeConfig {
            radii: DVec2::new(0.3, 0.1),
            ..fillet
        };
        assert!(needs_slice(&wider, &canonical_form(&wider)));

        let cylinder = ShapeConfig {
            kind: ShapeKind::Cylinder(CylinderKind::Hard),
            radii: DVec2::new(0.5, 0.2),
            ..ShapeConfig::default()
        };
        assert!(!needs_slice(&cylinder, &canonical_form(&cylinder)));
    }
}
