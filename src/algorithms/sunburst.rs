//! Sunburst radial partition layout.
//!
//! ## Purpose
//!
//! This module converts a weighted tree into nested annular arcs: each node
//! receives an angular span proportional to its share of its siblings'
//! total, nested inside its parent's span, with one fixed-width radial band
//! per depth level.
//!
//! ## Design notes
//!
//! * **Top start**: Angle zero is rotated to twelve o'clock; spans sweep
//!   clockwise. Emitted angles already include the rotation.
//! * **Minimum span**: Every arc spans at least [`MIN_SPAN`] radians so
//!   zero and near-zero nodes remain hit-testable; the engine does not
//!   redistribute the excess.
//! * **Bands**: The radial band per depth is `outer_radius / max_depth`, so
//!   deep trees stay inside the canvas.
//!
//! ## Key concepts
//!
//! * **Breadcrumbs**: The returned arena supports index-based ancestry
//!   walks from any arc back to the root.
//!
//! ## Invariants
//!
//! * A child's span lies within its parent's span and siblings do not
//!   overlap (up to the minimum-span allowance for degenerate values).
//!
//! ## Non-goals
//!
//! * This module does not elide arcs too small to see; that is a renderer
//!   decision.
//! * This module does not sort children.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::validator::Validator;
use crate::math::polar::{annular_sector, TAU, TOP};
use crate::primitives::arena::{HierarchyArena, TreeNode};
use crate::primitives::errors::LayoutError;
use crate::primitives::path::PathCommand;

// ============================================================================
// Constants
// ============================================================================

/// Minimum angular span in radians for any emitted arc.
pub const MIN_SPAN: f64 = 0.005;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a sunburst layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SunburstConfig<T> {
    /// Weighted input tree.
    pub root: TreeNode<T>,
    /// Total layout width; the diagram is centered at `(width/2, height/2)`.
    pub width: T,
    /// Total layout height.
    pub height: T,
}

// ============================================================================
// Output
// ============================================================================

/// One annular arc of the sunburst.
#[derive(Debug, Clone, PartialEq)]
pub struct SunburstArc<T> {
    /// Arena index of the node (usable with the returned arena).
    pub index: usize,
    /// Node id.
    pub id: String,
    /// Depth below the root (>= 1; the root itself has no arc).
    pub depth: usize,
    /// Arc start angle in radians, rotated so zero is at twelve o'clock.
    pub start_angle: T,
    /// Arc end angle in radians.
    pub end_angle: T,
    /// Inner band radius.
    pub inner_radius: T,
    /// Outer band radius.
    pub outer_radius: T,
    /// Annular sector path around the diagram center.
    pub path: Vec<PathCommand<T>>,
}

/// A computed sunburst: arcs for every non-root node plus the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SunburstLayout<T> {
    /// The flattened hierarchy; arc `index` fields address into it.
    pub arena: HierarchyArena<T>,
    /// Arcs in preorder (root excluded).
    pub arcs: Vec<SunburstArc<T>>,
    /// Center x of the diagram.
    pub cx: T,
    /// Center y of the diagram.
    pub cy: T,
    /// Outer radius of the deepest band.
    pub outer_radius: T,
}

// ============================================================================
// Layout
// ============================================================================

/// Compute a sunburst layout.
pub fn sunburst<T: Float>(config: &SunburstConfig<T>) -> Result<SunburstLayout<T>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;

    let arena = HierarchyArena::build(&config.root);
    let half = T::from(0.5).unwrap();
    let cx = config.width * half;
    let cy = config.height * half;
    let outer_radius = config.width.min(config.height) * half;

    let max_depth = arena.max_depth().max(1);
    let band = outer_radius / T::from(max_depth).unwrap();
    let min_span = T::from(MIN_SPAN).unwrap();

    // Angular spans addressed by arena index; the root spans the circle.
    let top = T::from(TOP).unwrap();
    let tau = T::from(TAU).unwrap();
    let mut spans: Vec<(T, T)> = vec![(T::zero(), T::zero()); arena.len()];
    spans[0] = (top, top + tau);

    // Parents precede children in preorder, so each node's span is final
    // before its children subdivide it.
    for index in 0..arena.len() {
        let children = &arena.node(index).children;
        if children.is_empty() {
            continue;
        }

        let (start, end) = spans[index];
        let parent_span = end - start;

        let total = children
            .iter()
            .fold(T::zero(), |acc, &child| acc + arena.node(child).value.max(T::zero()));

        let mut cursor = start;
        for &child in children {
            let value = arena.node(child).value.max(T::zero());
            let proportional = if total > T::zero() {
                parent_span * (value / total)
            } else {
                T::zero()
            };
            let span = proportional.max(min_span);
            spans[child] = (cursor, cursor + span);
            cursor = cursor + span;
        }
    }

    let mut arcs = Vec::with_capacity(arena.len().saturating_sub(1));
    for index in 1..arena.len() {
        let node = arena.node(index);
        let (start_angle, end_angle) = spans[index];
        let inner_radius = band * T::from(node.depth - 1).unwrap();
        let outer = band * T::from(node.depth).unwrap();

        arcs.push(SunburstArc {
            index,
            id: node.id.clone(),
            depth: node.depth,
            start_angle,
            end_angle,
            inner_radius,
            outer_radius: outer,
            path: annular_sector(cx, cy, inner_radius, outer, start_angle, end_angle),
        });
    }

    Ok(SunburstLayout {
        arena,
        arcs,
        cx,
        cy,
        outer_radius,
    })
}
