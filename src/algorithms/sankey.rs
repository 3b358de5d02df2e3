//! Sankey flow layout.
//!
//! ## Purpose
//!
//! This module assigns flow-graph nodes to columns, sizes and stacks them
//! vertically, and routes every flow as a cubic ribbon between per-link
//! spans on its endpoint nodes.
//!
//! ## Design notes
//!
//! * **Column peeling**: Nodes whose inbound sources are all placed join
//!   the next column; ties keep insertion order. If a pass places nothing
//!   while nodes remain, the graph is cyclic — a usage error, per the
//!   documented acyclic precondition.
//! * **Node sizing**: A node's value is `max(sum outgoing, sum incoming)`,
//!   so a span allocation for either side always fits inside the node.
//! * **Span allocation**: Within a node, outgoing spans stack in flow
//!   insertion order from the node top; incoming spans likewise on the
//!   target side. Ribbons connect span midpoints.
//!
//! ## Key concepts
//!
//! * **Column height**: `height - padding * (count - 1)` is shared among a
//!   column's nodes proportionally to value, largest first.
//!
//! ## Invariants
//!
//! * A link's target column index exceeds its source's.
//! * Nodes in one column never overlap vertically.
//!
//! ## Non-goals
//!
//! * This module does not minimize link crossings.
//! * This module does not support cyclic flow graphs.

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
use crate::primitives::errors::LayoutError;
use crate::primitives::path::{PathCommand, Point};

// ============================================================================
// Constants
// ============================================================================

/// Default vertical gap between nodes in one column.
pub const DEFAULT_NODE_PADDING: f64 = 10.0;

/// Default node rectangle width.
pub const DEFAULT_NODE_WIDTH: f64 = 20.0;

// ============================================================================
// Configuration
// ============================================================================

/// One directed flow between two named nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSpec<T> {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Non-negative flow value.
    pub value: T,
}

impl<T> FlowSpec<T> {
    /// Create a flow.
    pub fn new(source: impl Into<String>, target: impl Into<String>, value: T) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value,
        }
    }
}

/// Configuration for a Sankey layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SankeyConfig<T> {
    /// The flows; node set and ordering derive from first appearance.
    pub flows: Vec<FlowSpec<T>>,
    /// Total layout width.
    pub width: T,
    /// Total layout height.
    pub height: T,
    /// Vertical gap between nodes in one column.
    pub node_padding: T,
    /// Node rectangle width.
    pub node_width: T,
}

impl<T: Float> SankeyConfig<T> {
    /// Create a configuration with default padding and node width.
    pub fn new(flows: Vec<FlowSpec<T>>, width: T, height: T) -> Self {
        Self {
            flows,
            width,
            height,
            node_padding: T::from(DEFAULT_NODE_PADDING).unwrap(),
            node_width: T::from(DEFAULT_NODE_WIDTH).unwrap(),
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// One placed Sankey node.
#[derive(Debug, Clone, PartialEq)]
pub struct SankeyNode<T> {
    /// Node index (order of first appearance in the flows).
    pub index: usize,
    /// Node id.
    pub id: String,
    /// Column index, 0 at the left.
    pub column: usize,
    /// Left edge.
    pub x: T,
    /// Top edge.
    pub y: T,
    /// Rectangle width.
    pub width: T,
    /// Rectangle height.
    pub height: T,
    /// Node value: `max(sum outgoing, sum incoming)`.
    pub value: T,
}

/// One routed flow ribbon.
#[derive(Debug, Clone, PartialEq)]
pub struct SankeyLink<T> {
    /// Source node index.
    pub source: usize,
    /// Target node index.
    pub target: usize,
    /// Flow value.
    pub value: T,
    /// Top of the allocated span on the source node.
    pub source_y: T,
    /// Top of the allocated span on the target node.
    pub target_y: T,
    /// Span thickness on both endpoints.
    pub thickness: T,
    /// Cubic ribbon centerline between the span midpoints.
    pub path: Vec<PathCommand<T>>,
}

/// A computed Sankey layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SankeyLayout<T> {
    /// Placed nodes in index order.
    pub nodes: Vec<SankeyNode<T>>,
    /// Routed links in flow order.
    pub links: Vec<SankeyLink<T>>,
    /// Node indices per column, top to bottom.
    pub columns: Vec<Vec<usize>>,
}

// ============================================================================
// Layout
// ============================================================================

/// Compute a Sankey layout.
pub fn sankey<T: Float>(config: &SankeyConfig<T>) -> Result<SankeyLayout<T>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;
    Validator::validate_padding(config.node_padding)?;
    if config.flows.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    // Node ids in order of first appearance.
    let mut ids: Vec<String> = Vec::new();
    for flow in &config.flows {
        if !ids.iter().any(|id| id == &flow.source) {
            ids.push(flow.source.clone());
        }
        if !ids.iter().any(|id| id == &flow.target) {
            ids.push(flow.target.clone());
        }
    }
    let n = ids.len();

    // Resolve flows to index pairs with clamped values.
    let links: Vec<(usize, usize, T)> = config
        .flows
        .iter()
        .map(|flow| {
            let s = ids.iter().position(|id| id == &flow.source).unwrap_or(0);
            let t = ids.iter().position(|id| id == &flow.target).unwrap_or(0);
            (s, t, flow.value.max(T::zero()))
        })
        .collect();

    // Node values: max of the two directional sums.
    let mut out_sum = vec![T::zero(); n];
    let mut in_sum = vec![T::zero(); n];
    for &(s, t, v) in &links {
        out_sum[s] = out_sum[s] + v;
        in_sum[t] = in_sum[t] + v;
    }
    let values: Vec<T> = (0..n).map(|i| out_sum[i].max(in_sum[i])).collect();

    // Column peeling: a node joins the next column once every inbound
    // source is placed. A pass that places nothing flags a cycle.
    let mut column_of = vec![usize::MAX; n];
    let mut columns: Vec<Vec<usize>> = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        let mut column = Vec::new();
        for node in 0..n {
            if column_of[node] != usize::MAX {
                continue;
            }
            let ready = links
                .iter()
                .filter(|&&(_, t, _)| t == node)
                .all(|&(s, _, _)| s != node && column_of[s] != usize::MAX);
            if ready {
                column.push(node);
            }
        }

        if column.is_empty() {
            log::debug!("sankey: cycle detected with {remaining} node(s) unplaced");
            return Err(LayoutError::CyclicFlow {
                unplaced: remaining,
            });
        }

        for &node in &column {
            column_of[node] = columns.len();
        }
        remaining -= column.len();
        columns.push(column);
    }

    // Horizontal positions: columns spread over the width, rectangles kept
    // inside the canvas.
    let column_count = columns.len();
    let x_step = if column_count > 1 {
        (config.width - config.node_width) / T::from(column_count - 1).unwrap()
    } else {
        T::zero()
    };

    // Vertical stacking per column, largest value first.
    let mut nodes: Vec<Option<SankeyNode<T>>> = (0..n).map(|_| None).collect();
    for (column_index, column) in columns.iter().enumerate() {
        let count = column.len();
        let padding_total = config.node_padding * T::from(count.saturating_sub(1)).unwrap();
        let column_height = (config.height - padding_total).max(T::zero());
        let column_total = column
            .iter()
            .fold(T::zero(), |acc, &node| acc + values[node]);

        let mut ordered = column.clone();
        ordered.sort_by(|&a, &b| {
            values[b]
                .partial_cmp(&values[a])
                .unwrap_or(core::cmp::Ordering::Equal)
        });

        let x = x_step * T::from(column_index).unwrap();
        let mut y = T::zero();
        for &node in &ordered {
            let height = if column_total > T::zero() {
                column_height * (values[node] / column_total)
            } else {
                T::zero()
            };
            nodes[node] = Some(SankeyNode {
                index: node,
                id: ids[node].clone(),
                column: column_index,
                x,
                y,
                width: config.node_width,
                height,
                value: values[node],
            });
            y = y + height + config.node_padding;
        }
    }
    // The peeling loop placed every node, so every slot is filled.
    let nodes: Vec<SankeyNode<T>> = nodes.into_iter().flatten().collect();

    // Per-link span allocation: cursors start at each node's top and
    // advance in flow insertion order, separately for each side.
    let mut out_cursor: Vec<T> = nodes.iter().map(|node| node.y).collect();
    let mut in_cursor: Vec<T> = nodes.iter().map(|node| node.y).collect();

    let mut routed = Vec::with_capacity(links.len());
    for &(s, t, v) in &links {
        let source_share = if values[s] > T::zero() {
            v / values[s]
        } else {
            T::zero()
        };
        let target_share = if values[t] > T::zero() {
            v / values[t]
        } else {
            T::zero()
        };

        // The span thickness is the same on both sides only when the node
        // heights agree; use the source-side thickness for the ribbon.
        let source_thickness = nodes[s].height * source_share;
        let target_thickness = nodes[t].height * target_share;

        let source_y = out_cursor[s];
        let target_y = in_cursor[t];
        out_cursor[s] = out_cursor[s] + source_thickness;
        in_cursor[t] = in_cursor[t] + target_thickness;

        let half = T::from(0.5).unwrap();
        let start = Point::new(nodes[s].x + nodes[s].width, source_y + source_thickness * half);
        let end = Point::new(nodes[t].x, target_y + target_thickness * half);
        let mid_x = (start.x + end.x) * half;

        let mut path = Vec::with_capacity(2);
        path.push(PathCommand::MoveTo(start));
        path.push(PathCommand::CubicTo {
            control1: Point::new(mid_x, start.y),
            control2: Point::new(mid_x, end.y),
            end,
        });

        routed.push(SankeyLink {
            source: s,
            target: t,
            value: v,
            source_y,
            target_y,
            thickness: source_thickness,
            path,
        });
    }

    Ok(SankeyLayout {
        nodes,
        links: routed,
        columns,
    })
}
