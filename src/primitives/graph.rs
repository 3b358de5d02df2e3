//! Graph input and simulation state types.
//!
//! ## Purpose
//!
//! This module defines the caller-facing graph vocabulary for the
//! force-directed engine — node and link specifications addressed by id —
//! and the mutable per-run simulation state derived from them.
//!
//! ## Design notes
//!
//! * **Id in, index out**: Callers speak in stable string ids; resolution
//!   produces index-addressed links once, up front, so the hot simulation
//!   loop never touches strings.
//! * **Self-links**: A link whose endpoints coincide contributes nothing to
//!   layout and is silently excluded during resolution.
//! * **Ownership**: `GraphNode` state is owned exclusively by one simulation
//!   run and discarded when the run ends or its input changes.
//!
//! ## Key concepts
//!
//! * **Pinning**: A node with `fixed` coordinates is excluded from force
//!   updates but still exerts forces on others.
//!
//! ## Invariants
//!
//! * Every `ResolvedLink` endpoint is a valid node index.
//! * Link weights are non-negative.
//!
//! ## Non-goals
//!
//! * This module does not apply forces or integrate positions.
//! * This module does not deduplicate parallel links.

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
use crate::primitives::errors::LayoutError;

// ============================================================================
// Caller Input
// ============================================================================

/// Caller specification of one graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec<T> {
    /// Stable identifier, echoed back in layout output.
    pub id: String,
    /// Circle radius used for collision and bounds clamping; `None` uses
    /// the engine default.
    pub radius: Option<T>,
    /// Pin the node at these coordinates for the whole run.
    pub fixed: Option<(T, T)>,
}

impl<T: Float> NodeSpec<T> {
    /// Create a free node with the default radius.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            radius: None,
            fixed: None,
        }
    }

    /// Set the node radius.
    pub fn radius(mut self, radius: T) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Pin the node at the given coordinates.
    pub fn fixed(mut self, x: T, y: T) -> Self {
        self.fixed = Some((x, y));
        self
    }
}

/// Caller specification of one weighted link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSpec<T> {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Non-negative link weight; heavier links pull their endpoints closer.
    pub weight: T,
}

impl<T: Float> LinkSpec<T> {
    /// Create a link with unit weight.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: T::one(),
        }
    }

    /// Set the link weight.
    pub fn weight(mut self, weight: T) -> Self {
        self.weight = weight;
        self
    }
}

// ============================================================================
// Simulation State
// ============================================================================

/// Mutable per-run state of one simulated node.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode<T> {
    /// Identifier copied from the spec.
    pub id: String,
    /// Current x position.
    pub x: T,
    /// Current y position.
    pub y: T,
    /// Current x velocity.
    pub vx: T,
    /// Current y velocity.
    pub vy: T,
    /// Collision/clamping radius.
    pub radius: T,
    /// Pinned coordinates, if the node is fixed.
    pub fixed: Option<(T, T)>,
}

/// A link with endpoints resolved to node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLink<T> {
    /// Index of the source node.
    pub source: usize,
    /// Index of the target node.
    pub target: usize,
    /// Link weight.
    pub weight: T,
}

/// Resolve link ids against the node list.
///
/// Self-links are dropped; a link naming an id absent from `nodes` is a
/// usage error. Endpoint lookup is linear per link, which matches the small
/// graph sizes this engine targets.
pub fn resolve_links<T: Float>(
    nodes: &[NodeSpec<T>],
    links: &[LinkSpec<T>],
) -> Result<Vec<ResolvedLink<T>>, LayoutError> {
    let mut resolved = Vec::with_capacity(links.len());

    for link in links {
        let source = nodes
            .iter()
            .position(|n| n.id == link.source)
            .ok_or_else(|| LayoutError::UnknownNodeId(link.source.clone()))?;
        let target = nodes
            .iter()
            .position(|n| n.id == link.target)
            .ok_or_else(|| LayoutError::UnknownNodeId(link.target.clone()))?;

        // Self-links carry no layout information.
        if source == target {
            continue;
        }

        resolved.push(ResolvedLink {
            source,
            target,
            weight: link.weight.max(T::zero()),
        });
    }

    Ok(resolved)
}
