//! Input validation for layout configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions every engine calls before
//! computing: dimension and parameter bounds, non-empty inputs, finite
//! values, and input-shape checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Usage errors only**: These checks reject malformed *configuration*;
//!   degenerate but well-formed data flows through and yields boundary
//!   values downstream.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LayoutError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for layout configuration and input data.
///
/// Provides static methods for validating layout parameters and input
/// data. All methods return `Result<(), LayoutError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a sample/value array: non-empty, all finite.
    pub fn validate_samples<T: Float>(values: &[T]) -> Result<(), LayoutError> {
        // Check 1: Non-empty array
        if values.is_empty() {
            return Err(LayoutError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(LayoutError::NonFiniteValue(format!(
                    "values[{}]={}",
                    i,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a square flow matrix: non-empty, square, all finite.
    pub fn validate_square_matrix<T: Float>(matrix: &[Vec<T>]) -> Result<(), LayoutError> {
        // Check 1: Non-empty matrix
        let rows = matrix.len();
        if rows == 0 {
            return Err(LayoutError::EmptyInput);
        }

        // Check 2: Square shape
        for row in matrix {
            if row.len() != rows {
                return Err(LayoutError::NotSquare {
                    rows,
                    cols: row.len(),
                });
            }
        }

        // Check 3: All entries finite
        for (r, row) in matrix.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(LayoutError::NonFiniteValue(format!(
                        "matrix[{}][{}]={}",
                        r,
                        c,
                        value.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate drawing dimensions: positive and finite.
    pub fn validate_dimensions<T: Float>(width: T, height: T) -> Result<(), LayoutError> {
        if width <= T::zero() || height <= T::zero() || !width.is_finite() || !height.is_finite() {
            return Err(LayoutError::InvalidDimensions {
                width: width.to_f64().unwrap_or(f64::NAN),
                height: height.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate a radius: positive and finite.
    pub fn validate_radius<T: Float>(radius: T) -> Result<(), LayoutError> {
        if radius <= T::zero() || !radius.is_finite() {
            return Err(LayoutError::InvalidRadius(
                radius.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a KDE bandwidth: positive and finite.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), LayoutError> {
        if bandwidth <= T::zero() || !bandwidth.is_finite() {
            return Err(LayoutError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a KDE grid size: at least 2 points.
    pub fn validate_grid_size(grid_size: usize) -> Result<(), LayoutError> {
        if grid_size < 2 {
            return Err(LayoutError::InvalidGridSize(grid_size));
        }
        Ok(())
    }

    /// Validate padding: non-negative and finite.
    pub fn validate_padding<T: Float>(padding: T) -> Result<(), LayoutError> {
        if padding < T::zero() || !padding.is_finite() {
            return Err(LayoutError::InvalidPadding(
                padding.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a proportion: in (0, 1].
    pub fn validate_fraction<T: Float>(fraction: T) -> Result<(), LayoutError> {
        if fraction <= T::zero() || fraction > T::one() || !fraction.is_finite() {
            return Err(LayoutError::InvalidFraction(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate an iteration cap: at least 1.
    pub fn validate_iteration_cap(cap: usize) -> Result<(), LayoutError> {
        if cap == 0 {
            return Err(LayoutError::InvalidIterationCap(cap));
        }
        Ok(())
    }
}
