//! Angle and arc geometry for radial layouts.
//!
//! ## Purpose
//!
//! This module provides the trigonometric building blocks shared by every
//! radial layout: polar-to-cartesian conversion, the large-arc decision,
//! annular sector paths (sunburst, polar area, gauge) and ribbon paths
//! (chord diagrams).
//!
//! ## Design notes
//!
//! * **Radians**: All angles are radians; 0 points along the positive
//!   x-axis. Layouts that start at twelve o'clock add [`TOP`] themselves.
//! * **Degenerate inputs**: A non-positive radius or a zero angular span
//!   yields an empty path, not an error.
//! * **Sweep direction**: Positive angular spans sweep clockwise in the
//!   usual screen coordinate system (y grows downward).
//!
//! ## Key concepts
//!
//! * **Large-arc flag**: Set iff the swept angle exceeds pi, mirroring the
//!   SVG arc convention.
//! * **Annular sector**: Inner arc, radial edge, outer arc (reversed),
//!   close — the shape of one sunburst or chord group cell.
//!
//! ## Invariants
//!
//! * Emitted paths begin with `MoveTo` and end with `Close` when non-empty.
//! * `polar_to_cartesian` is exact for the four axis angles up to float
//!   rounding.
//!
//! ## Non-goals
//!
//! * This module does not assign angles to data; layouts do that.
//! * This module does not flatten arcs into polylines.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::{FRAC_PI_2, PI};
use num_traits::Float;

// Internal dependencies
use crate::primitives::path::{PathCommand, Point};

// ============================================================================
// Constants
// ============================================================================

/// Rotation that moves angle 0 from the positive x-axis to twelve o'clock.
pub const TOP: f64 = -FRAC_PI_2;

/// Full circle in radians.
pub const TAU: f64 = 2.0 * PI;

// ============================================================================
// Conversions
// ============================================================================

/// Convert polar coordinates around a center into a cartesian point.
#[inline]
pub fn polar_to_cartesian<T: Float>(cx: T, cy: T, radius: T, angle: T) -> Point<T> {
    Point {
        x: cx + angle.cos() * radius,
        y: cy + angle.sin() * radius,
    }
}

/// SVG large-arc flag: `true` iff the span from `start` to `end` exceeds pi.
#[inline]
pub fn large_arc<T: Float>(start_angle: T, end_angle: T) -> bool {
    end_angle - start_angle > T::from(PI).unwrap()
}

// ============================================================================
// Sector Paths
// ============================================================================

/// Build the path of an annular sector between two radii and two angles.
///
/// With `inner_radius` zero the sector degenerates to a pie slice anchored
/// at the center. Returns an empty path when `outer_radius <= 0` or the
/// angular span is zero or negative.
pub fn annular_sector<T: Float>(
    cx: T,
    cy: T,
    inner_radius: T,
    outer_radius: T,
    start_angle: T,
    end_angle: T,
) -> Vec<PathCommand<T>> {
    if outer_radius <= T::zero() || end_angle <= start_angle {
        return Vec::new();
    }
    let inner_radius = inner_radius.max(T::zero());

    let inner_start = polar_to_cartesian(cx, cy, inner_radius, start_angle);
    let inner_end = polar_to_cartesian(cx, cy, inner_radius, end_angle);
    let outer_start = polar_to_cartesian(cx, cy, outer_radius, start_angle);
    let outer_end = polar_to_cartesian(cx, cy, outer_radius, end_angle);

    let big = large_arc(start_angle, end_angle);

    let mut path = Vec::with_capacity(5);
    path.push(PathCommand::MoveTo(inner_start));
    path.push(PathCommand::ArcTo {
        radius: inner_radius,
        large_arc: big,
        sweep: true,
        end: inner_end,
    });
    path.push(PathCommand::LineTo(outer_end));
    path.push(PathCommand::ArcTo {
        radius: outer_radius,
        large_arc: big,
        sweep: false,
        end: outer_start,
    });
    path.push(PathCommand::Close);
    path
}

/// Build an open arc path along a single radius (gauge backgrounds, axis
/// rings). Returns an empty path for degenerate inputs.
pub fn arc_stroke<T: Float>(
    cx: T,
    cy: T,
    radius: T,
    start_angle: T,
    end_angle: T,
) -> Vec<PathCommand<T>> {
    if radius <= T::zero() || end_angle <= start_angle {
        return Vec::new();
    }

    let start = polar_to_cartesian(cx, cy, radius, start_angle);
    let end = polar_to_cartesian(cx, cy, radius, end_angle);

    let mut path = Vec::with_capacity(2);
    path.push(PathCommand::MoveTo(start));
    path.push(PathCommand::ArcTo {
        radius,
        large_arc: large_arc(start_angle, end_angle),
        sweep: true,
        end,
    });
    path
}

// ============================================================================
// Ribbon Paths
// ============================================================================

/// Build a chord ribbon between two angular spans on the same radius.
///
/// The ribbon follows the source span's arc, curves through the center to
/// the target span, follows its arc, and curves back. Returns an empty path
/// for a non-positive radius or if either span is degenerate.
#[allow(clippy::too_many_arguments)]
pub fn ribbon<T: Float>(
    cx: T,
    cy: T,
    radius: T,
    source_start: T,
    source_end: T,
    target_start: T,
    target_end: T,
) -> Vec<PathCommand<T>> {
    if radius <= T::zero() || source_end <= source_start || target_end <= target_start {
        return Vec::new();
    }

    let center = Point { x: cx, y: cy };
    let s0 = polar_to_cartesian(cx, cy, radius, source_start);
    let s1 = polar_to_cartesian(cx, cy, radius, source_end);
    let t0 = polar_to_cartesian(cx, cy, radius, target_start);
    let t1 = polar_to_cartesian(cx, cy, radius, target_end);

    let mut path = Vec::with_capacity(6);
    path.push(PathCommand::MoveTo(s0));
    path.push(PathCommand::ArcTo {
        radius,
        large_arc: large_arc(source_start, source_end),
        sweep: true,
        end: s1,
    });
    path.push(PathCommand::QuadTo {
        control: center,
        end: t0,
    });
    path.push(PathCommand::ArcTo {
        radius,
        large_arc: large_arc(target_start, target_end),
        sweep: true,
        end: t1,
    });
    path.push(PathCommand::QuadTo {
        control: center,
        end: s0,
    });
    path.push(PathCommand::Close);
    path
}
