#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use core::f64::consts::{FRAC_PI_2, PI};
use plotgeom_rs::internals::math::polar::{
    annular_sector, arc_stroke, large_arc, polar_to_cartesian, ribbon, TAU, TOP,
};
use plotgeom_rs::internals::primitives::path::PathCommand;

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_polar_to_cartesian_axis_angles() {
    let east = polar_to_cartesian(0.0, 0.0, 1.0, 0.0);
    assert_relative_eq!(east.x, 1.0);
    assert_relative_eq!(east.y, 0.0);

    let south = polar_to_cartesian(0.0, 0.0, 1.0, FRAC_PI_2);
    assert_relative_eq!(south.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(south.y, 1.0);

    let west = polar_to_cartesian(0.0, 0.0, 1.0, PI);
    assert_relative_eq!(west.x, -1.0);
    assert_relative_eq!(west.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_polar_to_cartesian_offset_center() {
    let p = polar_to_cartesian(10.0, 20.0, 2.0, 0.0);
    assert_relative_eq!(p.x, 12.0);
    assert_relative_eq!(p.y, 20.0);
}

#[test]
fn test_top_rotation_points_up() {
    // Screen coordinates: y grows downward, so twelve o'clock is -y.
    let up = polar_to_cartesian(0.0, 0.0, 1.0, TOP);
    assert_relative_eq!(up.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(up.y, -1.0);
}

// ============================================================================
// Arc Flag Tests
// ============================================================================

#[test]
fn test_large_arc_threshold() {
    assert!(!large_arc(0.0, PI));
    assert!(large_arc(0.0, PI + 0.001));
    assert!(!large_arc(0.0, 0.5));
    assert!(large_arc(0.0, TAU));
}

// ============================================================================
// Sector Path Tests
// ============================================================================

#[test]
fn test_annular_sector_shape() {
    let path = annular_sector(0.0, 0.0, 50.0, 100.0, 0.0, FRAC_PI_2);
    assert_eq!(path.len(), 5);
    assert!(matches!(path[0], PathCommand::MoveTo(_)));
    assert!(matches!(path[1], PathCommand::ArcTo { .. }));
    assert!(matches!(path[2], PathCommand::LineTo(_)));
    assert!(matches!(path[3], PathCommand::ArcTo { .. }));
    assert!(matches!(path[4], PathCommand::Close));
}

#[test]
fn test_annular_sector_radii() {
    let path = annular_sector(0.0, 0.0, 50.0, 100.0, 0.0, 1.0);
    let PathCommand::ArcTo { radius: inner, .. } = path[1] else {
        panic!("expected inner arc");
    };
    let PathCommand::ArcTo { radius: outer, .. } = path[3] else {
        panic!("expected outer arc");
    };
    assert_relative_eq!(inner, 50.0);
    assert_relative_eq!(outer, 100.0);
}

#[test]
fn test_annular_sector_large_arc_flag_set() {
    let path = annular_sector(0.0, 0.0, 10.0, 20.0, 0.0, PI + 0.5);
    let PathCommand::ArcTo { large_arc: flag, .. } = path[1] else {
        panic!("expected arc");
    };
    assert!(flag);
}

#[test]
fn test_annular_sector_degenerate_inputs() {
    // Zero/negative radius and zero span yield empty paths, not faults.
    assert!(annular_sector(0.0, 0.0, 0.0, 0.0, 0.0, 1.0).is_empty());
    assert!(annular_sector(0.0, 0.0, 0.0, -5.0, 0.0, 1.0).is_empty());
    assert!(annular_sector(0.0, 0.0, 0.0, 10.0, 1.0, 1.0).is_empty());
    assert!(annular_sector(0.0, 0.0, 0.0, 10.0, 2.0, 1.0).is_empty());
}

#[test]
fn test_pie_slice_starts_at_center() {
    // Zero inner radius: the inner "arc" collapses onto the center.
    let path = annular_sector(5.0, 5.0, 0.0, 10.0, 0.0, 1.0);
    let PathCommand::MoveTo(start) = path[0] else {
        panic!("expected move");
    };
    assert_relative_eq!(start.x, 5.0);
    assert_relative_eq!(start.y, 5.0);
}

// ============================================================================
// Stroke and Ribbon Tests
// ============================================================================

#[test]
fn test_arc_stroke_shape() {
    let path = arc_stroke(0.0, 0.0, 60.0, PI, TAU);
    assert_eq!(path.len(), 2);
    assert!(matches!(path[0], PathCommand::MoveTo(_)));
    assert!(matches!(path[1], PathCommand::ArcTo { .. }));
}

#[test]
fn test_arc_stroke_degenerate() {
    assert!(arc_stroke(0.0, 0.0, 0.0, 0.0, 1.0).is_empty());
    assert!(arc_stroke(0.0, 0.0, 10.0, 1.0, 1.0).is_empty());
}

#[test]
fn test_ribbon_shape() {
    let path = ribbon(0.0, 0.0, 100.0, 0.0, 0.5, 2.0, 2.5);
    assert_eq!(path.len(), 6);
    assert!(matches!(path[0], PathCommand::MoveTo(_)));
    assert!(matches!(path[2], PathCommand::QuadTo { .. }));
    assert!(matches!(path[4], PathCommand::QuadTo { .. }));
    assert!(matches!(path[5], PathCommand::Close));
}

#[test]
fn test_ribbon_curves_through_center() {
    let path = ribbon(7.0, 9.0, 100.0, 0.0, 0.5, 2.0, 2.5);
    let PathCommand::QuadTo { control, .. } = path[2] else {
        panic!("expected quad");
    };
    assert_relative_eq!(control.x, 7.0);
    assert_relative_eq!(control.y, 9.0);
}

#[test]
fn test_ribbon_degenerate_span() {
    assert!(ribbon(0.0, 0.0, 100.0, 0.5, 0.5, 2.0, 2.5).is_empty());
    assert!(ribbon(0.0, 0.0, 0.0, 0.0, 0.5, 2.0, 2.5).is_empty());
}
