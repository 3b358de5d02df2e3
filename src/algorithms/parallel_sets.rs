//! Parallel-sets ribbon layout.
//!
//! ## Purpose
//!
//! This module lays out categorical record data across several vertical
//! dimension axes: each category becomes a bar sized by its count, and
//! ribbons between adjacent dimensions carry the pairwise co-occurrence
//! counts, stacked without overlap on both endpoints.
//!
//! ## Design notes
//!
//! * **First-appearance order**: Categories and ribbon pairs appear in
//!   record order, so layout is deterministic without a sort.
//! * **Span allocation**: Ribbon spans use the same cursor rule as the
//!   Sankey layout — outgoing spans stack from the bar top in ribbon
//!   order, incoming spans likewise on the next axis.
//! * **Filled bands**: Ribbon paths are closed shapes (top edge, right
//!   side, bottom edge) whose cubic controls sit at 33% and 66% of the
//!   horizontal gap.
//!
//! ## Key concepts
//!
//! * **Co-occurrence**: The count of records taking category a on one
//!   dimension and category b on the next.
//!
//! ## Invariants
//!
//! * Per dimension, bar heights sum to the layout height.
//! * Ribbon spans on one bar never overlap and never exceed the bar.
//!
//! ## Non-goals
//!
//! * This module does not reorder categories to reduce crossings.
//! * This module does not aggregate beyond adjacent dimension pairs.

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
use crate::primitives::scale::PointScale;

// ============================================================================
// Configuration
// ============================================================================

/// One categorical dimension: a name and one value per record.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// Dimension name.
    pub name: String,
    /// Per-record category values.
    pub values: Vec<String>,
}

impl Dimension {
    /// Create a dimension.
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Configuration for a parallel-sets layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelSetsConfig<T> {
    /// Dimensions in axis order; all must have the same record count.
    pub dimensions: Vec<Dimension>,
    /// Total layout width.
    pub width: T,
    /// Total layout height.
    pub height: T,
}

// ============================================================================
// Output
// ============================================================================

/// One category bar on a dimension axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar<T> {
    /// Dimension index.
    pub dimension: usize,
    /// Category name.
    pub name: String,
    /// Axis x position.
    pub x: T,
    /// Bar top edge.
    pub y: T,
    /// Bar height (proportional to count).
    pub height: T,
    /// Number of records in this category.
    pub count: usize,
}

/// One ribbon between adjacent dimension axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Ribbon<T> {
    /// Source dimension index (target is `dimension + 1`).
    pub dimension: usize,
    /// Source bar position within its dimension.
    pub source: usize,
    /// Target bar position within the next dimension.
    pub target: usize,
    /// Co-occurrence count.
    pub count: usize,
    /// Top of the span on the source bar.
    pub source_y: T,
    /// Top of the span on the target bar.
    pub target_y: T,
    /// Ribbon thickness.
    pub height: T,
    /// Closed filled-band path.
    pub path: Vec<PathCommand<T>>,
}

/// A computed parallel-sets layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelSetsLayout<T> {
    /// Category bars grouped by dimension, in axis order.
    pub bars: Vec<Vec<CategoryBar<T>>>,
    /// Ribbons between adjacent dimensions, in first-appearance order.
    pub ribbons: Vec<Ribbon<T>>,
}

// ============================================================================
// Layout
// ============================================================================

/// Compute a parallel-sets layout.
pub fn parallel_sets<T: Float>(
    config: &ParallelSetsConfig<T>,
) -> Result<ParallelSetsLayout<T>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;
    if config.dimensions.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let record_count = config.dimensions[0].values.len();
    if record_count == 0 {
        return Err(LayoutError::EmptyInput);
    }
    for dimension in &config.dimensions {
        if dimension.values.len() != record_count {
            return Err(LayoutError::MismatchedInputs {
                left: record_count,
                right: dimension.values.len(),
            });
        }
    }

    let axes = PointScale::new(config.dimensions.len(), (T::zero(), config.width));
    let total = T::from(record_count).unwrap();

    // Category bars: first-appearance order, stacked from the top.
    let mut bars: Vec<Vec<CategoryBar<T>>> = Vec::with_capacity(config.dimensions.len());
    for (dim_index, dimension) in config.dimensions.iter().enumerate() {
        let mut names: Vec<String> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        for value in &dimension.values {
            match names.iter().position(|n| n == value) {
                Some(found) => counts[found] += 1,
                None => {
                    names.push(value.clone());
                    counts.push(1);
                }
            }
        }

        let x = axes.position(dim_index).unwrap_or_else(T::zero);
        let mut y = T::zero();
        let mut dim_bars = Vec::with_capacity(names.len());
        for (name, count) in names.into_iter().zip(counts.into_iter()) {
            let height = config.height * T::from(count).unwrap() / total;
            dim_bars.push(CategoryBar {
                dimension: dim_index,
                name,
                x,
                y,
                height,
                count,
            });
            y = y + height;
        }
        bars.push(dim_bars);
    }

    // Ribbons per adjacent pair, with Sankey-style span cursors.
    let mut ribbons = Vec::new();
    for dim_index in 0..config.dimensions.len().saturating_sub(1) {
        let left_values = &config.dimensions[dim_index].values;
        let right_values = &config.dimensions[dim_index + 1].values;

        // Co-occurrence pairs in first-appearance order.
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        for record in 0..record_count {
            let source = bars[dim_index]
                .iter()
                .position(|bar| bar.name == left_values[record])
                .unwrap_or(0);
            let target = bars[dim_index + 1]
                .iter()
                .position(|bar| bar.name == right_values[record])
                .unwrap_or(0);
            match pairs.iter().position(|&p| p == (source, target)) {
                Some(found) => counts[found] += 1,
                None => {
                    pairs.push((source, target));
                    counts.push(1);
                }
            }
        }

        let mut out_cursor: Vec<T> = bars[dim_index].iter().map(|bar| bar.y).collect();
        let mut in_cursor: Vec<T> = bars[dim_index + 1].iter().map(|bar| bar.y).collect();

        for (&(source, target), &count) in pairs.iter().zip(counts.iter()) {
            let height = config.height * T::from(count).unwrap() / total;
            let source_y = out_cursor[source];
            let target_y = in_cursor[target];
            out_cursor[source] = source_y + height;
            in_cursor[target] = target_y + height;

            let x0 = bars[dim_index][source].x;
            let x1 = bars[dim_index + 1][target].x;
            ribbons.push(Ribbon {
                dimension: dim_index,
                source,
                target,
                count,
                source_y,
                target_y,
                height,
                path: band_path(x0, x1, source_y, target_y, height),
            });
        }
    }

    Ok(ParallelSetsLayout { bars, ribbons })
}

/// Closed ribbon band with cubic controls at 33% and 66% of the gap.
fn band_path<T: Float>(x0: T, x1: T, source_y: T, target_y: T, height: T) -> Vec<PathCommand<T>> {
    let third = T::from(0.33).unwrap();
    let two_thirds = T::from(0.66).unwrap();
    let xa = x0 + (x1 - x0) * third;
    let xb = x0 + (x1 - x0) * two_thirds;

    let mut path = Vec::with_capacity(5);
    path.push(PathCommand::MoveTo(Point::new(x0, source_y)));
    path.push(PathCommand::CubicTo {
        control1: Point::new(xa, source_y),
        control2: Point::new(xb, target_y),
        end: Point::new(x1, target_y),
    });
    path.push(PathCommand::LineTo(Point::new(x1, target_y + height)));
    path.push(PathCommand::CubicTo {
        control1: Point::new(xb, target_y + height),
        control2: Point::new(xa, source_y + height),
        end: Point::new(x0, source_y + height),
    });
    path.push(PathCommand::Close);
    path
}
