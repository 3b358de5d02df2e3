//! Value-returning scale constructors.
//!
//! ## Purpose
//!
//! This module provides the small scale vocabulary the layout engines need:
//! linear interpolation between a domain and a range, and band/point scales
//! for categorical axes. Scales map data values to layout coordinates.
//!
//! ## Design notes
//!
//! * **Plain values**: A linear scale is a returned closure; band and point
//!   scales are immutable value types. There is no chained, mutable scale
//!   object graph.
//! * **Degenerate domains**: A zero-width domain maps every value to the
//!   start of the range rather than dividing by zero.
//!
//! ## Key concepts
//!
//! * **Band scale**: Splits a range into equal bands with proportional
//!   inner padding; used by violin and parallel-set layouts.
//! * **Point scale**: Places n categories at evenly spaced points; the gap
//!   between consecutive points is the `step`.
//!
//! ## Invariants
//!
//! * Band positions never overlap and stay within the range.
//! * `linear` is exact at both domain endpoints.
//!
//! ## Non-goals
//!
//! * This module does not generate tick values or axis labels.
//! * This module does not clamp out-of-domain inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Linear Scale
// ============================================================================

/// Build a linear scale mapping `domain` onto `range`.
///
/// Returns a plain closure; callers own it and may copy it freely. A
/// degenerate domain (`d0 == d1`) maps every input to `range.0`.
pub fn linear<T: Float>(domain: (T, T), range: (T, T)) -> impl Fn(T) -> T {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    let span = d1 - d0;

    move |value: T| {
        if span == T::zero() {
            r0
        } else {
            r0 + (value - d0) / span * (r1 - r0)
        }
    }
}

// ============================================================================
// Band Scale
// ============================================================================

/// Evenly sized bands over a continuous range with proportional padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    /// Number of bands.
    count: usize,
    /// Start of each band, in order.
    starts: Vec<T>,
    /// Width of every band.
    bandwidth: T,
    /// Distance between consecutive band starts.
    step: T,
}

impl<T: Float> BandScale<T> {
    /// Create a band scale for `count` categories over `range` with the
    /// given inner padding fraction (0 means bands touch).
    pub fn new(count: usize, range: (T, T), padding: T) -> Self {
        let (r0, r1) = range;
        let n = T::from(count).unwrap_or_else(T::one);

        if count == 0 {
            return Self {
                count,
                starts: Vec::new(),
                bandwidth: T::zero(),
                step: T::zero(),
            };
        }

        // n bands and (n - 1 + 2*pad/(1-pad)...) -- keep the simple d3
        // convention: step = extent / (n - padding_inner*? ). We use the
        // inner-padding-only form: step divides the extent into n slots,
        // the band occupies (1 - padding) of each slot.
        let step = (r1 - r0) / n;
        let bandwidth = step * (T::one() - padding);
        let offset = (step - bandwidth) * T::from(0.5).unwrap();

        let mut starts = Vec::with_capacity(count);
        let mut cursor = r0;
        for _ in 0..count {
            starts.push(cursor + offset);
            cursor = cursor + step;
        }

        Self {
            count,
            starts,
            bandwidth,
            step,
        }
    }

    /// Start coordinate of band `index`, or `None` out of bounds.
    #[inline]
    pub fn start(&self, index: usize) -> Option<T> {
        self.starts.get(index).copied()
    }

    /// Center coordinate of band `index`, or `None` out of bounds.
    #[inline]
    pub fn center(&self, index: usize) -> Option<T> {
        let half = T::from(0.5).unwrap();
        self.starts.get(index).map(|&s| s + self.bandwidth * half)
    }

    /// Width of every band.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Distance between consecutive band starts.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of bands.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the scale has no bands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// ============================================================================
// Point Scale
// ============================================================================

/// Evenly spaced points over a continuous range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale<T> {
    count: usize,
    start: T,
    step: T,
}

impl<T: Float> PointScale<T> {
    /// Create a point scale for `count` categories over `range`.
    ///
    /// With a single category the point sits at the start of the range and
    /// the step equals the full extent.
    pub fn new(count: usize, range: (T, T)) -> Self {
        let (r0, r1) = range;
        let step = if count > 1 {
            (r1 - r0) / T::from(count - 1).unwrap()
        } else {
            r1 - r0
        };

        Self {
            count,
            start: r0,
            step,
        }
    }

    /// Coordinate of point `index`, or `None` out of bounds.
    #[inline]
    pub fn position(&self, index: usize) -> Option<T> {
        if index < self.count {
            Some(self.start + self.step * T::from(index).unwrap())
        } else {
            None
        }
    }

    /// Distance between consecutive points.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the scale has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
