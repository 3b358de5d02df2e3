//! Kernel density estimation.
//!
//! ## Purpose
//!
//! This module smooths discrete samples into a continuous density curve by
//! averaging a kernel over every sample at each point of an evaluation
//! grid. It is the statistical backbone of the ridgeline, violin, and
//! horizon transforms.
//!
//! ## Design notes
//!
//! * **Caller-supplied bandwidth**: There is no automatic bandwidth
//!   selection; each consumer documents the default it passes.
//! * **Grid**: The grid spans `[min(samples), max(samples)]` inclusive, in
//!   `grid_size` evenly spaced points.
//! * **Restartable**: Output depends only on `(samples, bandwidth,
//!   grid_size, kernel)`; two identical calls produce identical output.
//!
//! ## Key concepts
//!
//! * **Estimate**: `density(x) = mean over samples of K((x - s) / h) / h`.
//!
//! ## Invariants
//!
//! * Densities are non-negative.
//! * The grid is ordered and starts/ends exactly at the sample extent.
//!
//! ## Non-goals
//!
//! * This module does not normalize curves to a common maximum; the ridge
//!   transform does that per group.
//! * This module does not bin or histogram samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::validator::Validator;
use crate::math::descriptive::extent;
use crate::math::kernel::KernelFunction;
use crate::primitives::errors::LayoutError;

// ============================================================================
// Configuration
// ============================================================================

/// Default number of grid points.
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Configuration for one density estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityConfig<T> {
    /// Observed samples. Must be non-empty and finite.
    pub samples: Vec<T>,
    /// Smoothing bandwidth `h`. Must be positive and finite.
    pub bandwidth: T,
    /// Number of evaluation points (at least 2).
    pub grid_size: usize,
    /// Smoothing kernel.
    pub kernel: KernelFunction,
}

impl<T: Float> DensityConfig<T> {
    /// Create a configuration with the default grid size and kernel.
    pub fn new(samples: Vec<T>, bandwidth: T) -> Self {
        Self {
            samples,
            bandwidth,
            grid_size: DEFAULT_GRID_SIZE,
            kernel: KernelFunction::default(),
        }
    }

    /// Set the number of evaluation points.
    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the smoothing kernel.
    pub fn kernel(mut self, kernel: KernelFunction) -> Self {
        self.kernel = kernel;
        self
    }
}

// ============================================================================
// Output
// ============================================================================

/// One evaluated point of a density curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityPoint<T> {
    /// Grid position.
    pub x: T,
    /// Estimated density at `x` (non-negative).
    pub density: T,
}

/// An ordered density curve.
pub type Density<T> = Vec<DensityPoint<T>>;

// ============================================================================
// Estimation
// ============================================================================

/// Evaluate a kernel density estimate over the sample extent.
pub fn kde<T: Float>(config: &DensityConfig<T>) -> Result<Density<T>, LayoutError> {
    Validator::validate_samples(&config.samples)?;
    Validator::validate_bandwidth(config.bandwidth)?;
    Validator::validate_grid_size(config.grid_size)?;

    // Non-empty input was just validated.
    let (min, max) = extent(&config.samples).unwrap_or((T::zero(), T::zero()));
    let steps = T::from(config.grid_size - 1).unwrap();
    let span = max - min;

    let count = T::from(config.samples.len()).unwrap();
    let bandwidth = config.bandwidth;

    let mut curve = Vec::with_capacity(config.grid_size);
    for i in 0..config.grid_size {
        let x = min + span * T::from(i).unwrap() / steps;

        let mut sum = T::zero();
        for &sample in &config.samples {
            sum = sum + config.kernel.evaluate((x - sample) / bandwidth) / bandwidth;
        }

        curve.push(DensityPoint {
            x,
            density: sum / count,
        });
    }

    Ok(curve)
}
