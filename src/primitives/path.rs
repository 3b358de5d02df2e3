//! Path descriptors shared by radial and flow layouts.
//!
//! ## Purpose
//!
//! This module defines the rendering-agnostic geometry output vocabulary:
//! a 2D point and a sequence of path commands (move, line, arc, curve,
//! close). Layout engines emit these; a rendering collaborator translates
//! them into SVG path strings, canvas calls, or any other target.
//!
//! ## Design notes
//!
//! * **SVG-agnostic**: Commands mirror the expressive power of SVG path
//!   segments without committing to its text syntax.
//! * **Value types**: Plain `Copy`-able data, no builders or shared state.
//! * **Units**: Coordinates are in the same numeric unit system as the
//!   caller-supplied `width`/`height`/`radius`.
//!
//! ## Key concepts
//!
//! * **Arc flags**: `ArcTo` carries the SVG large-arc and sweep flags so
//!   annular sectors survive the round trip through any renderer.
//!
//! ## Invariants
//!
//! * A well-formed path starts with `MoveTo` and contains at most one
//!   trailing `Close`.
//!
//! ## Non-goals
//!
//! * This module does not serialize paths to strings.
//! * This module does not compute path lengths or bounding boxes.

// External dependencies
use num_traits::Float;

// ============================================================================
// Point
// ============================================================================

/// A 2D point in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        let half = T::from(0.5).unwrap();
        Self {
            x: (self.x + other.x) * half,
            y: (self.y + other.y) * half,
        }
    }
}

// ============================================================================
// Path Commands
// ============================================================================

/// One segment of a layout-produced path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand<T> {
    /// Start a new subpath at the given point.
    MoveTo(Point<T>),

    /// Straight line to the given point.
    LineTo(Point<T>),

    /// Circular arc to `end` with the given radius.
    ArcTo {
        /// Arc radius (x and y radii are equal for all layouts here).
        radius: T,
        /// SVG large-arc flag: set iff the swept angle exceeds pi.
        large_arc: bool,
        /// SVG sweep flag: `true` for the positive-angle direction.
        sweep: bool,
        /// Arc end point.
        end: Point<T>,
    },

    /// Quadratic Bezier to `end` with a single control point.
    QuadTo {
        /// Control point.
        control: Point<T>,
        /// Curve end point.
        end: Point<T>,
    },

    /// Cubic Bezier to `end` with two control points.
    CubicTo {
        /// First control point.
        control1: Point<T>,
        /// Second control point.
        control2: Point<T>,
        /// Curve end point.
        end: Point<T>,
    },

    /// Close the current subpath.
    Close,
}

impl<T: Float> PathCommand<T> {
    /// End point of this command, if it has one.
    #[inline]
    pub fn end_point(&self) -> Option<Point<T>> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::ArcTo { end, .. }
            | PathCommand::QuadTo { end, .. }
            | PathCommand::CubicTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        }
    }
}
