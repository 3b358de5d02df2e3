//! Packed-circle hierarchy layout.
//!
//! ## Purpose
//!
//! This module places a weighted tree as nested circles: every node is a
//! circle whose area is proportional to its value, children are packed
//! inside their parent by a greedy spiral placement followed by an
//! iterative collision/center-pull relaxation, and the whole hierarchy
//! stays inside the canvas.
//!
//! ## Design notes
//!
//! * **Shared primitive**: Relaxation reuses the collision pass of the
//!   force module; termination follows the same rule as the simulation —
//!   a displacement epsilon or an iteration cap.
//! * **Determinism**: Initial placement uses a golden-angle spiral ordered
//!   by descending value; there is no randomness.
//! * **Containment**: Every child circle is clamped inside its parent each
//!   iteration, so containment survives even when relaxation hits the cap.
//!
//! ## Key concepts
//!
//! * **Fill factor**: Child radii are scaled so their total area is a
//!   fraction of the parent's, leaving room for the padding gaps.
//!
//! ## Invariants
//!
//! * `circle(child).r <= circle(parent).r` and the child circle lies
//!   entirely inside the parent circle.
//!
//! ## Non-goals
//!
//! * This module does not produce an optimal packing; it mirrors the
//!   upstream pack-then-relax behavior.
//! * This module does not run asynchronously; relaxation is bounded and
//!   synchronous.

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
use crate::algorithms::force::apply_collision;
use crate::primitives::validator::Validator;
use crate::primitives::arena::{HierarchyArena, TreeNode};
use crate::primitives::errors::LayoutError;
use crate::primitives::graph::GraphNode;

// ============================================================================
// Constants
// ============================================================================

/// Fraction of a parent's radius available to its children. Leaves enough
/// slack that the relaxation pass can separate siblings fully.
const FILL: f64 = 0.7;

/// Golden angle in radians; consecutive spiral slots avoid alignment.
const GOLDEN_ANGLE: f64 = 2.399963229728653;

/// Center-pull factor per relaxation iteration.
const PULL: f64 = 0.02;

/// Relaxation stops when the largest per-iteration displacement falls
/// below this epsilon.
const RELAX_EPSILON: f64 = 0.05;

/// Relaxation iteration cap per hierarchy level.
const RELAX_CAP: usize = 300;

/// Default gap between sibling circles.
pub const DEFAULT_PACK_PADDING: f64 = 3.0;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a packed-circle layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PackConfig<T> {
    /// Weighted input tree.
    pub root: TreeNode<T>,
    /// Total layout width; the packing is centered at `(width/2, height/2)`.
    pub width: T,
    /// Total layout height.
    pub height: T,
    /// Gap kept between sibling circles.
    pub padding: T,
}

impl<T: Float> PackConfig<T> {
    /// Create a configuration with the default padding.
    pub fn new(root: TreeNode<T>, width: T, height: T) -> Self {
        Self {
            root,
            width,
            height,
            padding: T::from(DEFAULT_PACK_PADDING).unwrap(),
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// One placed circle.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedCircle<T> {
    /// Arena index of the node.
    pub index: usize,
    /// Node id.
    pub id: String,
    /// Center x.
    pub x: T,
    /// Center y.
    pub y: T,
    /// Circle radius.
    pub r: T,
    /// Depth below the root.
    pub depth: usize,
    /// Whether the node is a leaf.
    pub leaf: bool,
}

/// A computed packing: one circle per node, plus the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct PackLayout<T> {
    /// The flattened hierarchy, index-aligned with `circles`.
    pub arena: HierarchyArena<T>,
    /// One circle per arena node, in preorder.
    pub circles: Vec<PackedCircle<T>>,
}

// ============================================================================
// Layout
// ============================================================================

/// Compute a packed-circle layout.
pub fn pack<T: Float>(config: &PackConfig<T>) -> Result<PackLayout<T>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;
    Validator::validate_padding(config.padding)?;

    let arena = HierarchyArena::build(&config.root);
    let half = T::from(0.5).unwrap();

    // Circles addressed by arena index; the root fills the canvas.
    let mut circles: Vec<(T, T, T)> = vec![(T::zero(), T::zero(), T::zero()); arena.len()];
    circles[0] = (
        config.width * half,
        config.height * half,
        config.width.min(config.height) * half,
    );

    // Parents precede children in preorder, so each parent circle is final
    // before its children are packed inside it.
    for index in 0..arena.len() {
        let children = arena.node(index).children.clone();
        if children.is_empty() {
            continue;
        }

        let (cx, cy, pr) = circles[index];
        pack_level(&arena, &children, cx, cy, pr, config.padding, &mut circles);
    }

    let circles = circles
        .iter()
        .enumerate()
        .map(|(index, &(x, y, r))| {
            let node = arena.node(index);
            PackedCircle {
                index,
                id: node.id.clone(),
                x,
                y,
                r,
                depth: node.depth,
                leaf: node.is_leaf(),
            }
        })
        .collect();

    Ok(PackLayout { arena, circles })
}

/// Pack one sibling group inside its parent circle.
fn pack_level<T: Float>(
    arena: &HierarchyArena<T>,
    children: &[usize],
    cx: T,
    cy: T,
    parent_radius: T,
    padding: T,
    circles: &mut [(T, T, T)],
) {
    let fill = T::from(FILL).unwrap();
    let total = children
        .iter()
        .fold(T::zero(), |acc, &child| acc + arena.node(child).value.max(T::zero()));

    // Radii: area share of the parent disc, shrunk by the fill factor.
    let radii: Vec<T> = children
        .iter()
        .map(|&child| {
            if total > T::zero() {
                (arena.node(child).value.max(T::zero()) / total).sqrt() * parent_radius * fill
            } else {
                T::zero()
            }
        })
        .collect();

    // Greedy spiral seed, largest first at the center.
    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by(|&a, &b| {
        radii[b]
            .partial_cmp(&radii[a])
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut buffer: Vec<GraphNode<T>> = Vec::with_capacity(children.len());
    let count = T::from(children.len()).unwrap();
    for (slot, &child_slot) in order.iter().enumerate() {
        let r = radii[child_slot];
        let angle = T::from(GOLDEN_ANGLE).unwrap() * T::from(slot).unwrap();
        let reach = (parent_radius - r).max(T::zero())
            * (T::from(slot).unwrap() / count).sqrt();

        buffer.push(GraphNode {
            id: arena.node(children[child_slot]).id.clone(),
            x: cx + angle.cos() * reach,
            y: cy + angle.sin() * reach,
            vx: T::zero(),
            vy: T::zero(),
            radius: r,
            fixed: None,
        });
    }

    // Relaxation: separate overlaps, drift toward the center, stay inside
    // the parent. Same termination rule as the force simulation.
    let pull = T::from(PULL).unwrap();
    let epsilon = T::from(RELAX_EPSILON).unwrap();
    for _ in 0..RELAX_CAP {
        let previous: Vec<(T, T)> = buffer.iter().map(|n| (n.x, n.y)).collect();

        apply_collision(&mut buffer, padding);

        let mut max_displacement = T::zero();
        for (node, &(px, py)) in buffer.iter_mut().zip(previous.iter()) {
            node.x = node.x + (cx - node.x) * pull;
            node.y = node.y + (cy - node.y) * pull;
            clamp_inside(node, cx, cy, parent_radius);

            let dx = node.x - px;
            let dy = node.y - py;
            let moved = (dx * dx + dy * dy).sqrt();
            if moved > max_displacement {
                max_displacement = moved;
            }
        }

        if max_displacement < epsilon {
            break;
        }
    }

    // Write results back in child order.
    for (slot, &child_slot) in order.iter().enumerate() {
        let node = &buffer[slot];
        circles[children[child_slot]] = (node.x, node.y, node.radius);
    }
}

/// Clamp a circle's center so it lies entirely inside the parent circle.
fn clamp_inside<T: Float>(node: &mut GraphNode<T>, cx: T, cy: T, parent_radius: T) {
    let limit = (parent_radius - node.radius).max(T::zero());
    let dx = node.x - cx;
    let dy = node.y - cy;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance > limit {
        if distance > T::zero() {
            let scale = limit / distance;
            node.x = cx + dx * scale;
            node.y = cy + dy * scale;
        } else {
            node.x = cx;
            node.y = cy;
        }
    }
}
