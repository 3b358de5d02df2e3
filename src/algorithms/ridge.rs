//! Ridgeline and violin density layouts.
//!
//! ## Purpose
//!
//! This module turns grouped samples into comparable density silhouettes:
//! vertically offset overlapping bands for a ridgeline plot, and mirrored
//! left/right outlines with an embedded box summary for a violin plot.
//! Both build on the kernel density estimator.
//!
//! ## Design notes
//!
//! * **Per-group normalization**: Every group's density is divided by its
//!   own maximum, so all silhouettes reach the same visual height and
//!   groups are comparable by shape, not by absolute density.
//! * **Documented defaults**: This consumer passes bandwidth 20 with a
//!   100-point grid for ridgelines and bandwidth 7 with a 50-point grid for
//!   violins, matching the upstream charts; callers can override both.
//! * **Axes**: Ridgelines map values to x over the global extent of all
//!   groups; violins map values to y (larger values up).
//!
//! ## Key concepts
//!
//! * **Overlap**: Ridgeline bands may rise `overlap` of one row step above
//!   their baseline, overlapping the row above.
//!
//! ## Invariants
//!
//! * Normalized densities lie in [0, 1], with at least one point at 1 per
//!   group.
//! * Violin outlines are mirror-symmetric about their center line.
//!
//! ## Non-goals
//!
//! * This module does not pick bandwidths from the data.
//! * This module does not draw axes, ticks, or labels.

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
use crate::algorithms::density::{kde, DensityConfig};
use crate::primitives::validator::Validator;
use crate::evaluation::summary::{box_stats, BoxStats};
use crate::math::descriptive::extent;
use crate::math::kernel::KernelFunction;
use crate::primitives::errors::LayoutError;
use crate::primitives::path::Point;
use crate::primitives::scale::{linear, BandScale};

// ============================================================================
// Constants
// ============================================================================

/// Default ridgeline KDE bandwidth.
pub const RIDGE_BANDWIDTH: f64 = 20.0;

/// Default ridgeline KDE grid size.
pub const RIDGE_GRID_SIZE: usize = 100;

/// Default ridgeline overlap fraction of one row step.
pub const RIDGE_OVERLAP: f64 = 0.7;

/// Default violin KDE bandwidth.
pub const VIOLIN_BANDWIDTH: f64 = 7.0;

/// Default violin KDE grid size.
pub const VIOLIN_GRID_SIZE: usize = 50;

/// Violin band inner padding fraction.
const VIOLIN_PADDING: f64 = 0.1;

/// Box width as a fraction of the violin band.
const BOX_FRACTION: f64 = 0.2;

// ============================================================================
// Input
// ============================================================================

/// One named sample group.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    /// Group name.
    pub name: String,
    /// Observed samples; must be non-empty.
    pub samples: Vec<T>,
}

impl<T> Group<T> {
    /// Create a group.
    pub fn new(name: impl Into<String>, samples: Vec<T>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }
}

// ============================================================================
// Ridgeline
// ============================================================================

/// Configuration for a ridgeline layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgelineConfig<T> {
    /// Sample groups, top row first.
    pub groups: Vec<Group<T>>,
    /// Total layout width.
    pub width: T,
    /// Total layout height.
    pub height: T,
    /// KDE bandwidth.
    pub bandwidth: T,
    /// KDE grid size.
    pub grid_size: usize,
    /// Fraction of one row step a band may rise above its baseline.
    pub overlap: T,
    /// Smoothing kernel.
    pub kernel: KernelFunction,
}

impl<T: Float> RidgelineConfig<T> {
    /// Create a configuration with the documented defaults.
    pub fn new(groups: Vec<Group<T>>, width: T, height: T) -> Self {
        Self {
            groups,
            width,
            height,
            bandwidth: T::from(RIDGE_BANDWIDTH).unwrap(),
            grid_size: RIDGE_GRID_SIZE,
            overlap: T::from(RIDGE_OVERLAP).unwrap(),
            kernel: KernelFunction::default(),
        }
    }
}

/// One ridgeline band.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeBand<T> {
    /// Group name.
    pub group: String,
    /// Row index, top row 0.
    pub row: usize,
    /// Baseline y of this row.
    pub baseline: T,
    /// Band outline above the baseline, left to right.
    pub curve: Vec<Point<T>>,
}

/// Compute a ridgeline layout.
pub fn ridgeline<T: Float>(
    config: &RidgelineConfig<T>,
) -> Result<Vec<RidgeBand<T>>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;
    Validator::validate_fraction(config.overlap)?;
    if config.groups.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    // Global value domain across every group.
    let mut all: Vec<T> = Vec::new();
    for group in &config.groups {
        Validator::validate_samples(&group.samples)?;
        all.extend_from_slice(&group.samples);
    }
    let (min, max) = extent(&all).unwrap_or((T::zero(), T::one()));
    let x_scale = linear((min, max), (T::zero(), config.width));

    // Row spacing leaves headroom for the first band's rise: with n rows
    // the steps plus one rise exactly fill the height.
    let count = T::from(config.groups.len() - 1).unwrap();
    let step = config.height / (count + config.overlap);
    let rise = step * config.overlap;

    let mut bands = Vec::with_capacity(config.groups.len());
    for (row, group) in config.groups.iter().enumerate() {
        let curve = kde(
            &DensityConfig::new(group.samples.clone(), config.bandwidth)
                .grid_size(config.grid_size)
                .kernel(config.kernel),
        )?;

        let peak = curve
            .iter()
            .map(|p| p.density)
            .fold(T::zero(), |acc, d| acc.max(d));

        let baseline = rise + step * T::from(row).unwrap();
        let points = curve
            .iter()
            .map(|p| {
                let normalized = if peak > T::zero() {
                    p.density / peak
                } else {
                    T::zero()
                };
                Point::new(x_scale(p.x), baseline - normalized * rise)
            })
            .collect();

        bands.push(RidgeBand {
            group: group.name.clone(),
            row,
            baseline,
            curve: points,
        });
    }

    Ok(bands)
}

// ============================================================================
// Violin
// ============================================================================

/// Configuration for a violin layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinConfig<T> {
    /// Sample groups, left to right.
    pub groups: Vec<Group<T>>,
    /// Total layout width.
    pub width: T,
    /// Total layout height.
    pub height: T,
    /// KDE bandwidth.
    pub bandwidth: T,
    /// KDE grid size.
    pub grid_size: usize,
    /// Smoothing kernel.
    pub kernel: KernelFunction,
}

impl<T: Float> ViolinConfig<T> {
    /// Create a configuration with the documented defaults.
    pub fn new(groups: Vec<Group<T>>, width: T, height: T) -> Self {
        Self {
            groups,
            width,
            height,
            bandwidth: T::from(VIOLIN_BANDWIDTH).unwrap(),
            grid_size: VIOLIN_GRID_SIZE,
            kernel: KernelFunction::default(),
        }
    }
}

/// One violin shape with its embedded box summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinShape<T> {
    /// Group name.
    pub group: String,
    /// Band index, leftmost 0.
    pub band: usize,
    /// Center line x.
    pub center_x: T,
    /// Closed outline: right side top to bottom, then left side mirrored.
    pub outline: Vec<Point<T>>,
    /// Box summary of the group's samples.
    pub stats: BoxStats<T>,
    /// Width of the embedded box.
    pub box_width: T,
}

/// Compute a violin layout.
pub fn violin<T: Float>(config: &ViolinConfig<T>) -> Result<Vec<ViolinShape<T>>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;
    if config.groups.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    // Global value domain, mapped upward (larger values at smaller y).
    let mut all: Vec<T> = Vec::new();
    for group in &config.groups {
        Validator::validate_samples(&group.samples)?;
        all.extend_from_slice(&group.samples);
    }
    let (min, max) = extent(&all).unwrap_or((T::zero(), T::one()));
    let y_scale = linear((min, max), (config.height, T::zero()));

    let bands = BandScale::new(
        config.groups.len(),
        (T::zero(), config.width),
        T::from(VIOLIN_PADDING).unwrap(),
    );
    let half = T::from(0.5).unwrap();
    let half_band = bands.bandwidth() * half;
    let box_width = bands.bandwidth() * T::from(BOX_FRACTION).unwrap();

    let mut shapes = Vec::with_capacity(config.groups.len());
    for (band, group) in config.groups.iter().enumerate() {
        let curve = kde(
            &DensityConfig::new(group.samples.clone(), config.bandwidth)
                .grid_size(config.grid_size)
                .kernel(config.kernel),
        )?;

        let peak = curve
            .iter()
            .map(|p| p.density)
            .fold(T::zero(), |acc, d| acc.max(d));

        let center_x = bands.center(band).unwrap_or_else(T::zero);

        // Right side from high values down, then left side mirrored back up.
        let mut outline = Vec::with_capacity(curve.len() * 2);
        for point in curve.iter().rev() {
            let normalized = if peak > T::zero() {
                point.density / peak
            } else {
                T::zero()
            };
            outline.push(Point::new(
                center_x + normalized * half_band,
                y_scale(point.x),
            ));
        }
        for point in curve.iter() {
            let normalized = if peak > T::zero() {
                point.density / peak
            } else {
                T::zero()
            };
            outline.push(Point::new(
                center_x - normalized * half_band,
                y_scale(point.x),
            ));
        }

        // Samples were validated non-empty above.
        let stats = box_stats(&group.samples).unwrap_or(BoxStats {
            min: T::zero(),
            q1: T::zero(),
            median: T::zero(),
            q3: T::zero(),
            max: T::zero(),
            mean: T::zero(),
        });

        shapes.push(ViolinShape {
            group: group.name.clone(),
            band,
            center_x,
            outline,
            stats,
            box_width,
        });
    }

    Ok(shapes)
}
