//! Chord diagram layout.
//!
//! ## Purpose
//!
//! This module converts a square flow matrix into a chord diagram: one
//! angular group per row, sized by its row total, and a ribbon for every
//! non-zero off-diagonal cell connecting a sub-span of the source group to
//! a sub-span of the target group.
//!
//! ## Design notes
//!
//! * **Sub-span allocation**: Within a group, cell sub-spans are laid out by
//!   the row's prefix sums, so ribbons for one group never overlap at the
//!   rim.
//! * **Directed ribbons**: Cell `(i, j)` and cell `(j, i)` each produce
//!   their own ribbon, mirroring the upstream behavior.
//! * **Degenerate flows**: A zero total yields zero-span groups and no
//!   ribbons — a value, not an error.
//!
//! ## Key concepts
//!
//! * **Rim band**: Groups occupy the annulus between 90% of the plot radius
//!   and the radius; ribbons attach at the inner edge.
//!
//! ## Invariants
//!
//! * Group spans sum to the full circle when the matrix total is positive.
//! * Ribbon sub-spans stay inside their group's span.
//!
//! ## Non-goals
//!
//! * This module does not merge the two ribbons of a symmetric pair.
//! * This module does not order groups; matrix order is display order.

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
use crate::math::polar::{annular_sector, ribbon, TAU};
use crate::primitives::errors::LayoutError;
use crate::primitives::path::PathCommand;

// ============================================================================
// Constants
// ============================================================================

/// Inner edge of the rim band as a fraction of the plot radius.
const RIM_INNER: f64 = 0.9;

/// Default canvas inset.
pub const DEFAULT_CHORD_PADDING: f64 = 20.0;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a chord layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordConfig<T> {
    /// Square flow matrix; `matrix[i][j]` flows from group i to group j.
    pub matrix: Vec<Vec<T>>,
    /// Group labels, one per matrix row.
    pub labels: Vec<String>,
    /// Total layout width; the diagram is centered at `(width/2, height/2)`.
    pub width: T,
    /// Total layout height.
    pub height: T,
    /// Canvas inset subtracted from the plot radius.
    pub padding: T,
}

impl<T: Float> ChordConfig<T> {
    /// Create a configuration with the default padding.
    pub fn new(matrix: Vec<Vec<T>>, labels: Vec<String>, width: T, height: T) -> Self {
        Self {
            matrix,
            labels,
            width,
            height,
            padding: T::from(DEFAULT_CHORD_PADDING).unwrap(),
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// One angular group at the rim.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordGroup<T> {
    /// Matrix row index.
    pub index: usize,
    /// Group label.
    pub label: String,
    /// Group start angle in radians.
    pub start_angle: T,
    /// Group end angle in radians.
    pub end_angle: T,
    /// Row total.
    pub value: T,
    /// Rim band path.
    pub path: Vec<PathCommand<T>>,
}

/// One ribbon between two groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord<T> {
    /// Source group index.
    pub source: usize,
    /// Target group index.
    pub target: usize,
    /// Cell value.
    pub value: T,
    /// Sub-span start on the source group.
    pub source_start: T,
    /// Sub-span end on the source group.
    pub source_end: T,
    /// Sub-span start on the target group.
    pub target_start: T,
    /// Sub-span end on the target group.
    pub target_end: T,
    /// Ribbon path at the rim's inner edge.
    pub path: Vec<PathCommand<T>>,
}

/// A computed chord diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordLayout<T> {
    /// Rim groups in matrix order.
    pub groups: Vec<ChordGroup<T>>,
    /// Ribbons for every non-zero off-diagonal cell.
    pub chords: Vec<Chord<T>>,
    /// Center x of the diagram.
    pub cx: T,
    /// Center y of the diagram.
    pub cy: T,
    /// Rim inner radius (where ribbons attach).
    pub inner_radius: T,
    /// Plot radius.
    pub radius: T,
}

// ============================================================================
// Layout
// ============================================================================

/// Compute a chord layout.
pub fn chord<T: Float>(config: &ChordConfig<T>) -> Result<ChordLayout<T>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;
    Validator::validate_padding(config.padding)?;
    Validator::validate_square_matrix(&config.matrix)?;
    if config.labels.len() != config.matrix.len() {
        return Err(LayoutError::MismatchedInputs {
            left: config.matrix.len(),
            right: config.labels.len(),
        });
    }

    let half = T::from(0.5).unwrap();
    let cx = config.width * half;
    let cy = config.height * half;
    let radius = (config.width.min(config.height) * half - config.padding).max(T::zero());
    let inner_radius = radius * T::from(RIM_INNER).unwrap();

    let n = config.matrix.len();
    let row_totals: Vec<T> = config
        .matrix
        .iter()
        .map(|row| row.iter().fold(T::zero(), |acc, &v| acc + v.max(T::zero())))
        .collect();
    let total = row_totals.iter().fold(T::zero(), |acc, &v| acc + v);

    // Group spans proportional to row totals.
    let tau = T::from(TAU).unwrap();
    let mut groups = Vec::with_capacity(n);
    let mut cursor = T::zero();
    for index in 0..n {
        let span = if total > T::zero() {
            tau * (row_totals[index] / total)
        } else {
            T::zero()
        };
        groups.push(ChordGroup {
            index,
            label: config.labels[index].clone(),
            start_angle: cursor,
            end_angle: cursor + span,
            value: row_totals[index],
            path: annular_sector(cx, cy, inner_radius, radius, cursor, cursor + span),
        });
        cursor = cursor + span;
    }

    // Ribbons: sub-spans from row prefix sums on both endpoints.
    let mut chords = Vec::new();
    for i in 0..n {
        if row_totals[i] <= T::zero() {
            continue;
        }
        for j in 0..n {
            let value = config.matrix[i][j].max(T::zero());
            if i == j || value <= T::zero() {
                continue;
            }

            let (source_start, source_end) = sub_span(&groups[i], &config.matrix[i], j, row_totals[i]);
            let (target_start, target_end) = if row_totals[j] > T::zero() {
                sub_span(&groups[j], &config.matrix[j], i, row_totals[j])
            } else {
                (groups[j].start_angle, groups[j].start_angle)
            };

            chords.push(Chord {
                source: i,
                target: j,
                value,
                source_start,
                source_end,
                target_start,
                target_end,
                path: ribbon(
                    cx,
                    cy,
                    inner_radius,
                    source_start,
                    source_end,
                    target_start,
                    target_end,
                ),
            });
        }
    }

    Ok(ChordLayout {
        groups,
        chords,
        cx,
        cy,
        inner_radius,
        radius,
    })
}

/// Sub-span of `group` allocated to its row cell `cell`, by prefix sum.
fn sub_span<T: Float>(
    group: &ChordGroup<T>,
    row: &[T],
    cell: usize,
    row_total: T,
) -> (T, T) {
    let span = group.end_angle - group.start_angle;
    let prefix = row[..cell]
        .iter()
        .fold(T::zero(), |acc, &v| acc + v.max(T::zero()));

    let start = group.start_angle + span * (prefix / row_total);
    let end = start + span * (row[cell].max(T::zero()) / row_total);
    (start, end)
}
