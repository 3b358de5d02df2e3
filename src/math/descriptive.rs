//! Descriptive statistics.
//!
//! ## Purpose
//!
//! This module provides the basic summary statistics the layout engines
//! build on: mean, median, linearly interpolated quantiles, extent, and
//! totals.
//!
//! ## Design notes
//!
//! * **Quantile convention**: `quantile(p)` uses the linear-interpolation
//!   convention — the value at fractional rank `p * (n - 1)`.
//! * **Degenerate inputs**: Empty slices yield `None`; callers decide what
//!   a missing summary means for their layout.
//! * **Sorting**: Quantile-family functions sort a copy; inputs are never
//!   mutated.
//!
//! ## Invariants
//!
//! * `quantile(0)` is the minimum and `quantile(1)` the maximum.
//! * `median` equals `quantile(0.5)` exactly.
//!
//! ## Non-goals
//!
//! * This module does not compute correlations or densities.
//! * This module does not handle NaN filtering; validated inputs are finite.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Moments
// ============================================================================

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / T::from(values.len()).unwrap())
}

/// Sum of all values.
#[inline]
pub fn total<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

// ============================================================================
// Order Statistics
// ============================================================================

/// Minimum and maximum, or `None` for an empty slice.
pub fn extent<T: Float>(values: &[T]) -> Option<(T, T)> {
    let first = *values.first()?;
    let mut min = first;
    let mut max = first;
    for &v in &values[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}

/// Linearly interpolated quantile at `p` in [0, 1], or `None` for an empty
/// slice. Out-of-range `p` is clamped.
pub fn quantile<T: Float>(values: &[T], p: T) -> Option<T> {
    if values.is_empty() {
        return None;
    }

    let mut sorted: Vec<T> = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));

    Some(quantile_sorted(&sorted, p))
}

/// Quantile over an already sorted slice (ascending).
pub fn quantile_sorted<T: Float>(sorted: &[T], p: T) -> T {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let p = p.max(T::zero()).min(T::one());
    let rank = p * T::from(n - 1).unwrap();
    let lower = rank.floor();
    let index = lower.to_usize().unwrap_or(0).min(n - 1);

    if index + 1 >= n {
        return sorted[n - 1];
    }

    let fraction = rank - lower;
    sorted[index] + (sorted[index + 1] - sorted[index]) * fraction
}

/// Median, or `None` for an empty slice.
#[inline]
pub fn median<T: Float>(values: &[T]) -> Option<T> {
    quantile(values, T::from(0.5).unwrap())
}
