//! Force passes for graph layout.
//!
//! ## Purpose
//!
//! This module implements the individual physics passes of the
//! force-directed layout as pure functions over mutable node slices:
//! pairwise repulsion, spring attraction along links, centroid centering,
//! circle collision separation, and damped integration with bounds
//! clamping. The simulation engine sequences them; the circle-packing
//! layout reuses the collision pass.
//!
//! ## Design notes
//!
//! * **Scaling**: Repulsion is scaled by `k = sqrt(width * height / n)`, so
//!   layouts spread to fill the available area regardless of node count.
//! * **Strength factor**: Repulsion and spring corrections both scale with
//!   the caller's strength factor; a factor of zero freezes the graph.
//! * **Pinned nodes**: A fixed node never accumulates velocity or moves,
//!   but still exerts repulsion and spring forces on its neighbors.
//! * **Coincident nodes**: A pair at zero distance exchanges no force this
//!   step; random initial placement makes this transient.
//!
//! ## Key concepts
//!
//! * **Spring target**: A link pulls its endpoints toward
//!   `base_distance / max(weight, 1)` — heavier links sit closer.
//!
//! ## Invariants
//!
//! * Integration keeps every free node inside
//!   `[radius, width - radius] x [radius, height - radius]`.
//! * No pass reads or writes state outside the given slice.
//!
//! ## Non-goals
//!
//! * This module does not decide when to stop; the engine owns
//!   convergence and iteration budgets.
//! * This module does not use spatial indexing; pairwise passes are
//!   quadratic, which matches the graph sizes this engine targets.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::graph::{GraphNode, ResolvedLink};

// ============================================================================
// Tuning Constants
// ============================================================================

/// Velocity damping factor applied every step.
pub const DAMPING: f64 = 0.9;

/// Repulsion kick coefficient applied to `k / distance`.
pub const REPULSION_STRENGTH: f64 = 0.3;

/// Per-endpoint spring correction coefficient.
pub const SPRING_STRENGTH: f64 = 0.25;

/// Centroid pull coefficient per step.
pub const CENTER_STRENGTH: f64 = 0.05;

// ============================================================================
// Scaling
// ============================================================================

/// Area-based repulsion scale: `sqrt(width * height / node_count)`.
#[inline]
pub fn scaling_constant<T: Float>(width: T, height: T, node_count: usize) -> T {
    if node_count == 0 {
        return T::zero();
    }
    (width * height / T::from(node_count).unwrap()).sqrt()
}

// ============================================================================
// Force Passes
// ============================================================================

/// Apply inverse-distance repulsion between every unordered node pair.
pub fn apply_repulsion<T: Float>(nodes: &mut [GraphNode<T>], k: T, strength_factor: T) {
    let coefficient = T::from(REPULSION_STRENGTH).unwrap() * strength_factor * k;
    if coefficient == T::zero() {
        return;
    }

    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let dx = nodes[j].x - nodes[i].x;
            let dy = nodes[j].y - nodes[i].y;
            let distance_sq = dx * dx + dy * dy;
            if distance_sq <= T::zero() {
                continue;
            }

            // coefficient / d along the unit vector, without a square root:
            // (dx / d) * (coefficient / d) = dx * coefficient / d^2.
            let kick = coefficient / distance_sq;
            let fx = dx * kick;
            let fy = dy * kick;

            nodes[i].vx = nodes[i].vx - fx;
            nodes[i].vy = nodes[i].vy - fy;
            nodes[j].vx = nodes[j].vx + fx;
            nodes[j].vy = nodes[j].vy + fy;
        }
    }
}

/// Apply spring corrections along every link toward its target distance.
pub fn apply_springs<T: Float>(
    nodes: &mut [GraphNode<T>],
    links: &[ResolvedLink<T>],
    base_distance: T,
    strength_factor: T,
) {
    let coefficient = T::from(SPRING_STRENGTH).unwrap() * strength_factor;
    if coefficient == T::zero() {
        return;
    }

    for link in links {
        let (s, t) = (link.source, link.target);
        let dx = nodes[t].x - nodes[s].x;
        let dy = nodes[t].y - nodes[s].y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= T::zero() {
            continue;
        }

        let target_distance = base_distance / link.weight.max(T::one());
        let kick = coefficient * (distance - target_distance) / distance;
        let fx = dx * kick;
        let fy = dy * kick;

        nodes[s].vx = nodes[s].vx + fx;
        nodes[s].vy = nodes[s].vy + fy;
        nodes[t].vx = nodes[t].vx - fx;
        nodes[t].vy = nodes[t].vy - fy;
    }
}

/// Pull the node centroid toward the canvas center.
pub fn apply_centering<T: Float>(nodes: &mut [GraphNode<T>], width: T, height: T) {
    if nodes.is_empty() {
        return;
    }

    let count = T::from(nodes.len()).unwrap();
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    for node in nodes.iter() {
        sum_x = sum_x + node.x;
        sum_y = sum_y + node.y;
    }

    let half = T::from(0.5).unwrap();
    let strength = T::from(CENTER_STRENGTH).unwrap();
    let shift_x = (width * half - sum_x / count) * strength;
    let shift_y = (height * half - sum_y / count) * strength;

    for node in nodes.iter_mut() {
        if node.fixed.is_none() {
            node.vx = node.vx + shift_x;
            node.vy = node.vy + shift_y;
        }
    }
}

/// Separate overlapping circles by direct position correction.
///
/// Each overlapping pair is pushed apart along its axis by half the overlap
/// on each side; if one side is pinned the free side absorbs the whole
/// correction.
pub fn apply_collision<T: Float>(nodes: &mut [GraphNode<T>], margin: T) {
    let half = T::from(0.5).unwrap();

    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let dx = nodes[j].x - nodes[i].x;
            let dy = nodes[j].y - nodes[i].y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= T::zero() {
                continue;
            }

            let minimum = nodes[i].radius + nodes[j].radius + margin;
            if distance >= minimum {
                continue;
            }

            let overlap = minimum - distance;
            let ux = dx / distance;
            let uy = dy / distance;

            match (nodes[i].fixed.is_some(), nodes[j].fixed.is_some()) {
                (false, false) => {
                    let push = overlap * half;
                    nodes[i].x = nodes[i].x - ux * push;
                    nodes[i].y = nodes[i].y - uy * push;
                    nodes[j].x = nodes[j].x + ux * push;
                    nodes[j].y = nodes[j].y + uy * push;
                }
                (true, false) => {
                    nodes[j].x = nodes[j].x + ux * overlap;
                    nodes[j].y = nodes[j].y + uy * overlap;
                }
                (false, true) => {
                    nodes[i].x = nodes[i].x - ux * overlap;
                    nodes[i].y = nodes[i].y - uy * overlap;
                }
                (true, true) => {}
            }
        }
    }
}

// ============================================================================
// Integration
// ============================================================================

/// Damp velocities, advance positions, and clamp to the drawing bounds.
///
/// Pinned nodes are snapped to their fixed coordinates with zero velocity.
pub fn integrate<T: Float>(nodes: &mut [GraphNode<T>], width: T, height: T) {
    let damping = T::from(DAMPING).unwrap();

    for node in nodes.iter_mut() {
        if let Some((fx, fy)) = node.fixed {
            node.x = fx;
            node.y = fy;
            node.vx = T::zero();
            node.vy = T::zero();
            continue;
        }

        node.vx = node.vx * damping;
        node.vy = node.vy * damping;
        node.x = node.x + node.vx;
        node.y = node.y + node.vy;

        // Keep the full circle inside the canvas.
        let r = node.radius;
        node.x = node.x.max(r).min(width - r);
        node.y = node.y.max(r).min(height - r);
    }
}
