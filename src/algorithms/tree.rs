//! Dendrogram tree layout.
//!
//! ## Purpose
//!
//! This module lays a tree out as a node-link dendrogram: leaves are spaced
//! evenly along the cross axis, internal nodes sit centered over their
//! children, and depth maps to evenly spaced bands along the main axis.
//!
//! ## Design notes
//!
//! * **Orientation**: Horizontal puts depth on the x-axis (root at the
//!   left); vertical puts depth on the y-axis (root at the top).
//! * **Two sweeps**: A forward preorder scan assigns leaf slots in display
//!   order; a reverse sweep centers each internal node over its children
//!   (children always follow their parent in the arena).
//!
//! ## Key concepts
//!
//! * **Link paths**: Cubic Béziers whose control points sit at the main-axis
//!   midpoint, giving the familiar smooth elbow.
//!
//! ## Invariants
//!
//! * Leaves are strictly ordered along the cross axis with equal spacing.
//! * Every link connects a parent to one of its children.
//!
//! ## Non-goals
//!
//! * This module does not collapse or expand subtrees; layout is computed
//!   for the tree it is given.
//! * This module does not compute cluster distances; depth is structural.

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
use crate::primitives::path::{PathCommand, Point};

// ============================================================================
// Configuration
// ============================================================================

/// Which axis carries tree depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Depth on the x-axis, root at the left.
    #[default]
    Horizontal,
    /// Depth on the y-axis, root at the top.
    Vertical,
}

/// Configuration for a dendrogram layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DendrogramConfig<T> {
    /// Input tree.
    pub root: TreeNode<T>,
    /// Total layout width.
    pub width: T,
    /// Total layout height.
    pub height: T,
    /// Axis assignment.
    pub orientation: Orientation,
}

// ============================================================================
// Output
// ============================================================================

/// One placed dendrogram node.
#[derive(Debug, Clone, PartialEq)]
pub struct DendrogramNode<T> {
    /// Arena index of the node.
    pub index: usize,
    /// Node id.
    pub id: String,
    /// Placed x coordinate.
    pub x: T,
    /// Placed y coordinate.
    pub y: T,
    /// Depth below the root.
    pub depth: usize,
    /// Whether the node is a leaf.
    pub leaf: bool,
}

/// One parent-child link with its curve.
#[derive(Debug, Clone, PartialEq)]
pub struct DendrogramLink<T> {
    /// Arena index of the parent.
    pub source: usize,
    /// Arena index of the child.
    pub target: usize,
    /// Cubic elbow path from parent to child.
    pub path: Vec<PathCommand<T>>,
}

/// A computed dendrogram.
#[derive(Debug, Clone, PartialEq)]
pub struct DendrogramLayout<T> {
    /// The flattened hierarchy, index-aligned with `nodes`.
    pub arena: HierarchyArena<T>,
    /// One placed node per arena node, in preorder.
    pub nodes: Vec<DendrogramNode<T>>,
    /// Parent-child links in preorder of the child.
    pub links: Vec<DendrogramLink<T>>,
}

// ============================================================================
// Layout
// ============================================================================

/// Compute a dendrogram layout.
pub fn dendrogram<T: Float>(
    config: &DendrogramConfig<T>,
) -> Result<DendrogramLayout<T>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;

    let arena = HierarchyArena::build(&config.root);

    let (main_extent, cross_extent) = match config.orientation {
        Orientation::Horizontal => (config.width, config.height),
        Orientation::Vertical => (config.height, config.width),
    };

    let max_depth = arena.max_depth().max(1);
    let leaf_count = arena.node(arena.root()).leaves;

    // Forward scan: leaves take evenly spaced cross slots in display order.
    let half = T::from(0.5).unwrap();
    let slot = cross_extent / T::from(leaf_count).unwrap();
    let mut cross: Vec<T> = vec![T::zero(); arena.len()];
    let mut next_leaf = 0usize;
    for index in 0..arena.len() {
        if arena.node(index).is_leaf() {
            cross[index] = slot * (T::from(next_leaf).unwrap() + half);
            next_leaf += 1;
        }
    }

    // Reverse sweep: center internal nodes over their children.
    for index in (0..arena.len()).rev() {
        let children = &arena.node(index).children;
        if children.is_empty() {
            continue;
        }
        let sum = children
            .iter()
            .fold(T::zero(), |acc, &child| acc + cross[child]);
        cross[index] = sum / T::from(children.len()).unwrap();
    }

    let band = main_extent / T::from(max_depth).unwrap();
    let place = |index: usize| -> (T, T) {
        let main = band * T::from(arena.node(index).depth).unwrap();
        match config.orientation {
            Orientation::Horizontal => (main, cross[index]),
            Orientation::Vertical => (cross[index], main),
        }
    };

    let nodes: Vec<DendrogramNode<T>> = (0..arena.len())
        .map(|index| {
            let (x, y) = place(index);
            let node = arena.node(index);
            DendrogramNode {
                index,
                id: node.id.clone(),
                x,
                y,
                depth: node.depth,
                leaf: node.is_leaf(),
            }
        })
        .collect();

    let mut links = Vec::with_capacity(arena.len().saturating_sub(1));
    for index in 1..arena.len() {
        let parent = arena.node(index).parent.unwrap_or(0);
        let source = Point::new(nodes[parent].x, nodes[parent].y);
        let target = Point::new(nodes[index].x, nodes[index].y);
        links.push(DendrogramLink {
            source: parent,
            target: index,
            path: elbow(source, target, config.orientation),
        });
    }

    Ok(DendrogramLayout {
        arena,
        nodes,
        links,
    })
}

/// Cubic elbow between two nodes, bending along the main axis.
fn elbow<T: Float>(source: Point<T>, target: Point<T>, orientation: Orientation) -> Vec<PathCommand<T>> {
    let half = T::from(0.5).unwrap();

    let (control1, control2) = match orientation {
        Orientation::Horizontal => {
            let mid_x = (source.x + target.x) * half;
            (Point::new(mid_x, source.y), Point::new(mid_x, target.y))
        }
        Orientation::Vertical => {
            let mid_y = (source.y + target.y) * half;
            (Point::new(source.x, mid_y), Point::new(target.x, mid_y))
        }
    };

    let mut path = Vec::with_capacity(2);
    path.push(PathCommand::MoveTo(source));
    path.push(PathCommand::CubicTo {
        control1,
        control2,
        end: target,
    });
    path
}
