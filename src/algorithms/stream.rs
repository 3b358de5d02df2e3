//! Streamgraph stacking and horizon band transforms.
//!
//! ## Purpose
//!
//! This module stacks time series for a streamgraph — choosing a layer
//! order that keeps the biggest series in the middle and a per-step
//! baseline that balances the stack around zero — and folds signed series
//! into clipped horizon bands.
//!
//! ## Design notes
//!
//! * **Inside-out order**: Series sorted by descending total are dealt to
//!   the top or bottom of the stack, whichever currently carries less, so
//!   the largest layers end up innermost.
//! * **Balanced baseline**: Each step's baseline is minus half that step's
//!   total, centering the stream on zero instead of sitting on a floor.
//! * **Value space**: Offsets are in data units; the caller applies its own
//!   vertical scale.
//!
//! ## Key concepts
//!
//! * **Horizon bands**: A signed series becomes `bands` positive and
//!   `bands` negative layers, each clipped to one band's thickness.
//!
//! ## Invariants
//!
//! * For every step, `y1 - y0` of a layer equals its (non-negative) value.
//! * The stacked layers are contiguous: each layer's `y0` is the previous
//!   layer's `y1`.
//!
//! ## Non-goals
//!
//! * This module does not interpolate or smooth between steps.
//! * This module does not map steps to time coordinates.

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

// ============================================================================
// Input
// ============================================================================

/// One named series with a value per time step.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    /// Series key.
    pub key: String,
    /// Per-step values; negatives are treated as zero for stacking.
    pub values: Vec<T>,
}

impl<T> Series<T> {
    /// Create a series.
    pub fn new(key: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

// ============================================================================
// Stream Output
// ============================================================================

/// One stacked streamgraph layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamLayer<T> {
    /// Series key.
    pub key: String,
    /// Index of the series in the input.
    pub series: usize,
    /// Stack position, 0 at the bottom.
    pub order: usize,
    /// Per-step `(lower, upper)` offsets in value space.
    pub extents: Vec<(T, T)>,
}

/// Compute the stacked-wiggle streamgraph transform.
///
/// All series must share the same number of steps. Layers are returned
/// bottom-to-top in stack order.
pub fn stream<T: Float>(series: &[Series<T>]) -> Result<Vec<StreamLayer<T>>, LayoutError> {
    if series.is_empty() {
        return Err(LayoutError::EmptyInput);
    }
    let steps = series[0].values.len();
    if steps == 0 {
        return Err(LayoutError::EmptyInput);
    }
    for s in series {
        if s.values.len() != steps {
            return Err(LayoutError::MismatchedInputs {
                left: steps,
                right: s.values.len(),
            });
        }
        Validator::validate_samples(&s.values)?;
    }

    let order = inside_out_order(series);

    // Per-step totals set the balanced baseline.
    let half = T::from(0.5).unwrap();
    let mut baselines = Vec::with_capacity(steps);
    for step in 0..steps {
        let total = series
            .iter()
            .fold(T::zero(), |acc, s| acc + s.values[step].max(T::zero()));
        baselines.push(-total * half);
    }

    // Stack in the computed order.
    let mut cursors = baselines;
    let mut layers = Vec::with_capacity(series.len());
    for (position, &index) in order.iter().enumerate() {
        let mut extents = Vec::with_capacity(steps);
        for step in 0..steps {
            let value = series[index].values[step].max(T::zero());
            let y0 = cursors[step];
            let y1 = y0 + value;
            cursors[step] = y1;
            extents.push((y0, y1));
        }
        layers.push(StreamLayer {
            key: series[index].key.clone(),
            series: index,
            order: position,
            extents,
        });
    }

    Ok(layers)
}

/// Inside-out stack order: deal series (largest total first) to whichever
/// side of the stack currently carries less weight.
fn inside_out_order<T: Float>(series: &[Series<T>]) -> Vec<usize> {
    let totals: Vec<T> = series
        .iter()
        .map(|s| s.values.iter().fold(T::zero(), |acc, &v| acc + v.max(T::zero())))
        .collect();

    let mut by_total: Vec<usize> = (0..series.len()).collect();
    by_total.sort_by(|&a, &b| {
        totals[b]
            .partial_cmp(&totals[a])
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut top: Vec<usize> = Vec::new();
    let mut bottom: Vec<usize> = Vec::new();
    let mut top_weight = T::zero();
    let mut bottom_weight = T::zero();
    for &index in &by_total {
        if top_weight < bottom_weight {
            top_weight = top_weight + totals[index];
            top.push(index);
        } else {
            bottom_weight = bottom_weight + totals[index];
            bottom.push(index);
        }
    }

    bottom.reverse();
    bottom.extend(top);
    bottom
}

// ============================================================================
// Horizon Bands
// ============================================================================

/// Sign of a horizon layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Values above zero.
    Positive,
    /// Values below zero, folded upward.
    Negative,
}

/// One clipped horizon layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonBand<T> {
    /// Band index, 0 nearest zero.
    pub band: usize,
    /// Which sign of the series this band carries.
    pub polarity: Polarity,
    /// Per-step magnitudes clipped to `[0, band_size]`.
    pub values: Vec<T>,
    /// Thickness of one band in value space.
    pub band_size: T,
}

/// Fold a signed series into `bands` positive and `bands` negative layers.
///
/// The band thickness is `max(|min|, |max|) / bands`; a constant-zero
/// series yields all-zero layers.
pub fn horizon_bands<T: Float>(
    values: &[T],
    bands: usize,
) -> Result<Vec<HorizonBand<T>>, LayoutError> {
    Validator::validate_samples(values)?;
    if bands == 0 {
        return Err(LayoutError::InvalidGridSize(bands));
    }

    let mut magnitude = T::zero();
    for &v in values {
        if v.abs() > magnitude {
            magnitude = v.abs();
        }
    }
    let band_size = magnitude / T::from(bands).unwrap();

    let mut layers = Vec::with_capacity(bands * 2);
    for band in 0..bands {
        let floor = band_size * T::from(band).unwrap();

        let positive = values
            .iter()
            .map(|&v| {
                if v > floor {
                    (v - floor).min(band_size)
                } else {
                    T::zero()
                }
            })
            .collect();
        layers.push(HorizonBand {
            band,
            polarity: Polarity::Positive,
            values: positive,
            band_size,
        });

        let negative = values
            .iter()
            .map(|&v| {
                if -v > floor {
                    (-v - floor).min(band_size)
                } else {
                    T::zero()
                }
            })
            .collect();
        layers.push(HorizonBand {
            band,
            polarity: Polarity::Negative,
            values: negative,
            band_size,
        });
    }

    Ok(layers)
}
