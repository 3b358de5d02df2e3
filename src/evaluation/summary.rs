//! Box summaries of sample groups.
//!
//! ## Purpose
//!
//! This module condenses a sample group into the five-number summary plus
//! mean used by box plots and the violin layout's embedded box.
//!
//! ## Design notes
//!
//! * **One sort**: All quantiles are read off a single sorted copy.
//! * **Empty input**: Yields `None`; a missing summary is the caller's
//!   decision, not an error.
//!
//! ## Invariants
//!
//! * `min <= q1 <= median <= q3 <= max`.
//!
//! ## Non-goals
//!
//! * This module does not detect outliers or compute whisker fences.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::descriptive::{mean, quantile_sorted};

// ============================================================================
// Box Summary
// ============================================================================

/// Five-number summary plus mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats<T> {
    /// Smallest sample.
    pub min: T,
    /// First quartile.
    pub q1: T,
    /// Median.
    pub median: T,
    /// Third quartile.
    pub q3: T,
    /// Largest sample.
    pub max: T,
    /// Arithmetic mean.
    pub mean: T,
}

/// Summarize a sample group, or `None` for an empty slice.
pub fn box_stats<T: Float>(samples: &[T]) -> Option<BoxStats<T>> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted: Vec<T> = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));

    let quarter = T::from(0.25).unwrap();
    let half = T::from(0.5).unwrap();
    let three_quarters = T::from(0.75).unwrap();

    Some(BoxStats {
        min: sorted[0],
        q1: quantile_sorted(&sorted, quarter),
        median: quantile_sorted(&sorted, half),
        q3: quantile_sorted(&sorted, three_quarters),
        max: sorted[sorted.len() - 1],
        mean: mean(samples).unwrap_or_else(T::zero),
    })
}
