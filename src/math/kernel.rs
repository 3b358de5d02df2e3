//! Kernel functions for density estimation.
//!
//! ## Purpose
//!
//! This module provides the smoothing kernels used by kernel density
//! estimation. A kernel maps a normalized distance `u = (x - sample) / h`
//! to a non-negative weight; averaging kernel weights over all samples
//! yields a continuous density curve.
//!
//! ## Design notes
//!
//! * **Normalized**: Every kernel integrates to 1 over its support, so the
//!   estimated curve is a proper density without post-scaling.
//! * **Support**: All kernels except Gaussian are bounded on [-1, 1] and
//!   return exactly zero outside it (fast path).
//!
//! ## Key concepts
//!
//! * **Epanechnikov**: The default kernel, `0.75 * (1 - u^2)` on |u| <= 1 —
//!   the mean-integrated-squared-error optimum.
//!
//! ## Invariants
//!
//! * Kernels are non-negative and symmetric: `K(u) = K(-u) >= 0`.
//! * Bounded kernels return exactly zero outside their support.
//!
//! ## Non-goals
//!
//! * This module does not select bandwidths.
//! * This module does not evaluate densities over grids; see the density
//!   algorithm.

// External dependencies
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi, used in Gaussian kernel normalization.
const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099_f64;

/// Cutoff for Gaussian kernel evaluation.
///
/// Beyond this normalized distance the Gaussian value is below 7e-9 and
/// would only add numerical noise to a density average.
const GAUSSIAN_CUTOFF: f64 = 6.0;

// ============================================================================
// Kernel Function Enum
// ============================================================================

/// Smoothing kernel for density estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelFunction {
    /// Epanechnikov kernel: `K(u) = 0.75 * (1 - u^2)` for |u| <= 1.
    ///
    /// This is the default and recommended kernel choice.
    #[default]
    Epanechnikov,

    /// Gaussian kernel: `K(u) = exp(-u^2 / 2) / sqrt(2*pi)`.
    Gaussian,

    /// Triangular kernel: `K(u) = 1 - |u|` for |u| <= 1.
    Triangular,

    /// Uniform kernel: `K(u) = 0.5` for |u| <= 1.
    Uniform,
}

impl KernelFunction {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the kernel function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelFunction::Epanechnikov => "Epanechnikov",
            KernelFunction::Gaussian => "Gaussian",
            KernelFunction::Triangular => "Triangular",
            KernelFunction::Uniform => "Uniform",
        }
    }

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            KernelFunction::Gaussian => None, // Unbounded
            _ => Some((-1.0, 1.0)),
        }
    }

    /// Returns `true` if the kernel has bounded support.
    #[inline]
    fn is_bounded(&self) -> bool {
        self.support().is_some()
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate `K(u)` for a normalized distance.
    #[inline]
    pub fn evaluate<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        // Fast path for bounded kernels: return 0 outside support.
        if self.is_bounded() && abs_u > T::one() {
            return T::zero();
        }

        match self {
            KernelFunction::Epanechnikov => {
                T::from(0.75).unwrap() * (T::one() - abs_u * abs_u)
            }

            KernelFunction::Gaussian => {
                let u_f64 = abs_u.to_f64().unwrap_or(f64::INFINITY);
                if u_f64 > GAUSSIAN_CUTOFF {
                    T::zero()
                } else {
                    let val = (-0.5 * u_f64 * u_f64).exp() / SQRT_2PI;
                    T::from(val).unwrap_or_else(T::zero)
                }
            }

            KernelFunction::Triangular => T::one() - abs_u,

            KernelFunction::Uniform => T::from(0.5).unwrap(),
        }
    }
}
