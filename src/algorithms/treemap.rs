//! Treemap rectangle subdivision.
//!
//! ## Purpose
//!
//! This module converts a weighted tree into nested rectangles: each node's
//! rectangle is partitioned among its children proportionally to value,
//! cutting each child's slice off the longer side of the remaining
//! rectangle to limit aspect-ratio distortion.
//!
//! ## Design notes
//!
//! * **Containment**: A child rectangle never leaves its parent's, and
//!   sibling rectangles never overlap; areas are proportional to values.
//! * **Zero values**: A zero-value child receives a zero-area rectangle at
//!   the current cursor — degenerate, not an error.
//! * **Preorder sweep**: The arena stores parents before children, so one
//!   forward pass can subdivide every region.
//!
//! ## Key concepts
//!
//! * **Longer-side cut**: A wide remainder is split by a vertical line, a
//!   tall remainder by a horizontal one; the remainder shrinks after each
//!   child.
//!
//! ## Invariants
//!
//! * The sum of leaf areas equals the root area within float tolerance
//!   (when branch values equal their children's sums).
//!
//! ## Non-goals
//!
//! * This module does not sort children; input order is display order.
//! * This module does not inset rectangles for borders or labels.

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
use crate::primitives::arena::{HierarchyArena, TreeNode};
use crate::primitives::errors::LayoutError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a treemap layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapConfig<T> {
    /// Weighted input tree.
    pub root: TreeNode<T>,
    /// Total layout width.
    pub width: T,
    /// Total layout height.
    pub height: T,
}

// ============================================================================
// Output
// ============================================================================

/// The rectangle allocated to one node.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapCell<T> {
    /// Arena index of the node (usable with the returned arena).
    pub index: usize,
    /// Node id.
    pub id: String,
    /// Left edge.
    pub x0: T,
    /// Top edge.
    pub y0: T,
    /// Right edge.
    pub x1: T,
    /// Bottom edge.
    pub y1: T,
    /// Depth below the root.
    pub depth: usize,
    /// Whether the node is a leaf.
    pub leaf: bool,
}

impl<T: Float> TreemapCell<T> {
    /// Rectangle width.
    #[inline]
    pub fn width(&self) -> T {
        self.x1 - self.x0
    }

    /// Rectangle height.
    #[inline]
    pub fn height(&self) -> T {
        self.y1 - self.y0
    }

    /// Rectangle area.
    #[inline]
    pub fn area(&self) -> T {
        self.width() * self.height()
    }
}

/// A computed treemap: one cell per node, plus the arena for ancestry.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapLayout<T> {
    /// The flattened hierarchy, index-aligned with `cells`.
    pub arena: HierarchyArena<T>,
    /// One rectangle per arena node, in preorder.
    pub cells: Vec<TreemapCell<T>>,
}

// ============================================================================
// Layout
// ============================================================================

/// Compute a treemap layout.
pub fn treemap<T: Float>(config: &TreemapConfig<T>) -> Result<TreemapLayout<T>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;

    let arena = HierarchyArena::build(&config.root);

    // Rectangles addressed by arena index; the root occupies the canvas.
    let mut rects: Vec<(T, T, T, T)> = vec![(T::zero(), T::zero(), T::zero(), T::zero()); arena.len()];
    rects[0] = (T::zero(), T::zero(), config.width, config.height);

    // Parents precede children in preorder, so each node's rectangle is
    // final before its children are partitioned.
    for index in 0..arena.len() {
        let children = &arena.node(index).children;
        if children.is_empty() {
            continue;
        }

        let (x0, y0, x1, y1) = rects[index];
        let parent_area = (x1 - x0) * (y1 - y0);

        let total = children
            .iter()
            .fold(T::zero(), |acc, &child| acc + arena.node(child).value.max(T::zero()));

        // Remaining rectangle shrinks as slices are cut off it.
        let mut rx0 = x0;
        let mut ry0 = y0;

        for &child in children {
            let value = arena.node(child).value.max(T::zero());
            let area = if total > T::zero() {
                parent_area * (value / total)
            } else {
                T::zero()
            };

            let remaining_width = x1 - rx0;
            let remaining_height = y1 - ry0;

            if remaining_width > remaining_height {
                // Vertical cut: the child takes a full-height strip.
                let strip = if remaining_height > T::zero() {
                    area / remaining_height
                } else {
                    T::zero()
                };
                rects[child] = (rx0, ry0, rx0 + strip, y1);
                rx0 = rx0 + strip;
            } else {
                // Horizontal cut: the child takes a full-width strip.
                let strip = if remaining_width > T::zero() {
                    area / remaining_width
                } else {
                    T::zero()
                };
                rects[child] = (rx0, ry0, x1, ry0 + strip);
                ry0 = ry0 + strip;
            }
        }
    }

    let cells = rects
        .iter()
        .enumerate()
        .map(|(index, &(x0, y0, x1, y1))| make_cell(&arena, index, x0, y0, x1, y1))
        .collect();

    Ok(TreemapLayout { arena, cells })
}

fn make_cell<T: Float>(
    arena: &HierarchyArena<T>,
    index: usize,
    x0: T,
    y0: T,
    x1: T,
    y1: T,
) -> TreemapCell<T> {
    let node = arena.node(index);
    TreemapCell {
        index,
        id: node.id.clone(),
        x0,
        y0,
        x1,
        y1,
        depth: node.depth,
        leaf: node.is_leaf(),
    }
}
