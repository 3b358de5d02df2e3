//! Polar-area, spiral, and gauge geometry.
//!
//! ## Purpose
//!
//! This module computes the remaining radial widget geometries: polar-area
//! segments (equal angular sectors with value-scaled outer radii), spiral
//! plots (cyclic data wound outward ring by ring), and gauges (a
//! half-circle arc with a value sweep, tick marks, and threshold
//! selection).
//!
//! ## Design notes
//!
//! * **Geometry only**: Output is angles, radii, points, and paths; colors
//!   and labels belong to the caller.
//! * **Pad angle**: Polar-area sectors are inset by a small pad angle on
//!   both sides so adjacent sectors read as separate wedges.
//! * **Gauge sweep**: The gauge spans the top half circle, left to right;
//!   a clamped percentage of the 180° sweep marks the value.
//!
//! ## Key concepts
//!
//! * **Spiral winding**: Item `i` sits at cycle `i / cycles` and angular
//!   slot `i % cycles`; each full cycle steps one ring outward, and the
//!   value adds up to one ring step of radial offset.
//!
//! ## Invariants
//!
//! * Polar-area outer radii never exceed the plot radius.
//! * The gauge value angle lies within the half-circle sweep.
//!
//! ## Non-goals
//!
//! * This module does not animate sweeps or interpolate values.
//! * This module does not lay out legends or threshold labels.

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
use core::f64::consts::PI;
use num_traits::Float;

// Internal dependencies
use crate::primitives::validator::Validator;
use crate::math::descriptive::extent;
use crate::math::polar::{annular_sector, arc_stroke, polar_to_cartesian, TAU};
use crate::primitives::errors::LayoutError;
use crate::primitives::path::{PathCommand, Point};
use crate::primitives::scale::linear;

// ============================================================================
// Constants
// ============================================================================

/// Angular inset on each side of a polar-area sector.
pub const POLAR_PAD_ANGLE: f64 = 0.02;

/// Default polar-area inner radius.
pub const DEFAULT_POLAR_INNER_RADIUS: f64 = 50.0;

/// Number of gauge tick marks across the half circle.
const GAUGE_TICKS: usize = 11;

// ============================================================================
// Polar Area
// ============================================================================

/// Configuration for a polar-area layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarAreaConfig<T> {
    /// Labeled values, one sector each.
    pub values: Vec<(String, T)>,
    /// Total layout width; the plot is centered at `(width/2, height/2)`.
    pub width: T,
    /// Total layout height.
    pub height: T,
    /// Inner radius every sector starts from.
    pub inner_radius: T,
}

impl<T: Float> PolarAreaConfig<T> {
    /// Create a configuration with the default inner radius.
    pub fn new(values: Vec<(String, T)>, width: T, height: T) -> Self {
        Self {
            values,
            width,
            height,
            inner_radius: T::from(DEFAULT_POLAR_INNER_RADIUS).unwrap(),
        }
    }
}

/// One polar-area sector.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarSegment<T> {
    /// Sector index.
    pub index: usize,
    /// Sector label.
    pub label: String,
    /// Sector value.
    pub value: T,
    /// Sector start angle (before pad inset).
    pub start_angle: T,
    /// Sector end angle (before pad inset).
    pub end_angle: T,
    /// Inner radius.
    pub inner_radius: T,
    /// Value-scaled outer radius.
    pub outer_radius: T,
    /// Padded annular sector path.
    pub path: Vec<PathCommand<T>>,
}

/// Compute a polar-area layout.
pub fn polar_area<T: Float>(
    config: &PolarAreaConfig<T>,
) -> Result<Vec<PolarSegment<T>>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;
    if config.values.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let half = T::from(0.5).unwrap();
    let cx = config.width * half;
    let cy = config.height * half;
    let radius = config.width.min(config.height) * half;

    let values: Vec<T> = config.values.iter().map(|(_, v)| v.max(T::zero())).collect();
    let (_, max) = extent(&values).unwrap_or((T::zero(), T::zero()));
    let radius_scale = linear((T::zero(), max.max(T::epsilon())), (config.inner_radius, radius));

    let n = config.values.len();
    let slice = T::from(TAU).unwrap() / T::from(n).unwrap();
    let pad = T::from(POLAR_PAD_ANGLE).unwrap() * half;

    let segments = config
        .values
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let start_angle = slice * T::from(index).unwrap();
            let end_angle = start_angle + slice;
            let outer_radius = radius_scale(value.max(T::zero()));

            PolarSegment {
                index,
                label: label.clone(),
                value: *value,
                start_angle,
                end_angle,
                inner_radius: config.inner_radius,
                outer_radius,
                path: annular_sector(
                    cx,
                    cy,
                    config.inner_radius,
                    outer_radius,
                    start_angle + pad,
                    end_angle - pad,
                ),
            }
        })
        .collect();

    Ok(segments)
}

// ============================================================================
// Spiral
// ============================================================================

/// Configuration for a spiral plot.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralConfig<T> {
    /// Values in time order.
    pub values: Vec<T>,
    /// Slots per full turn (e.g., 12 months).
    pub cycles: usize,
    /// Total layout width; the spiral is centered at `(width/2, height/2)`.
    pub width: T,
    /// Total layout height.
    pub height: T,
}

/// One placed spiral point.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralPoint<T> {
    /// Item index.
    pub index: usize,
    /// Full turns completed before this item.
    pub cycle: usize,
    /// Slot within the current turn.
    pub cycle_position: usize,
    /// Angular position in radians.
    pub angle: T,
    /// Radial position including the value offset.
    pub radius: T,
    /// Absolute placed position.
    pub position: Point<T>,
}

/// Compute a spiral plot layout.
pub fn spiral<T: Float>(config: &SpiralConfig<T>) -> Result<Vec<SpiralPoint<T>>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;
    Validator::validate_samples(&config.values)?;
    if config.cycles == 0 {
        return Err(LayoutError::InvalidGridSize(config.cycles));
    }

    let half = T::from(0.5).unwrap();
    let cx = config.width * half;
    let cy = config.height * half;
    let radius = config.width.min(config.height) * half;

    // One ring per full turn; the value adds at most one ring step.
    let rings = config.values.len().div_ceil(config.cycles).max(1);
    let ring_step = radius / T::from(rings + 1).unwrap();

    let (_, max) = extent(&config.values).unwrap_or((T::zero(), T::zero()));
    let value_scale = linear((T::zero(), max.max(T::epsilon())), (T::zero(), ring_step));

    let slice = T::from(TAU).unwrap() / T::from(config.cycles).unwrap();
    let points = config
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let cycle = index / config.cycles;
            let cycle_position = index % config.cycles;
            let angle = slice * T::from(cycle_position).unwrap();
            let base = ring_step * T::from(cycle + 1).unwrap();
            let r = base + value_scale(value.max(T::zero()));

            SpiralPoint {
                index,
                cycle,
                cycle_position,
                angle,
                radius: r,
                position: polar_to_cartesian(cx, cy, r, angle),
            }
        })
        .collect();

    Ok(points)
}

// ============================================================================
// Gauge
// ============================================================================

/// Configuration for a gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeConfig<T> {
    /// Current value.
    pub value: T,
    /// Scale minimum.
    pub min: T,
    /// Scale maximum.
    pub max: T,
    /// Total layout width; the dial is centered at `(width/2, height)`.
    pub width: T,
    /// Total layout height.
    pub height: T,
    /// Ascending threshold limits in percent of the scale.
    pub thresholds: Vec<T>,
}

/// One gauge tick mark.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeTick<T> {
    /// Tick angle in radians.
    pub angle: T,
    /// Inner end of the tick line.
    pub inner: Point<T>,
    /// Outer end of the tick line.
    pub outer: Point<T>,
    /// Whether this is a major tick.
    pub major: bool,
}

/// Computed gauge geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeGeometry<T> {
    /// Value as a clamped fraction of the scale, in [0, 1].
    pub fraction: T,
    /// Angle of the value end of the sweep.
    pub value_angle: T,
    /// Full half-circle background arc.
    pub background: Vec<PathCommand<T>>,
    /// Arc from the scale start to the value.
    pub sweep: Vec<PathCommand<T>>,
    /// Tick marks across the half circle.
    pub ticks: Vec<GaugeTick<T>>,
    /// Index of the first threshold at or above the value percentage, or
    /// the last threshold when the value exceeds them all. `None` without
    /// thresholds.
    pub active_threshold: Option<usize>,
}

/// Compute gauge geometry.
pub fn gauge<T: Float>(config: &GaugeConfig<T>) -> Result<GaugeGeometry<T>, LayoutError> {
    Validator::validate_dimensions(config.width, config.height)?;

    let half = T::from(0.5).unwrap();
    let cx = config.width * half;
    let cy = config.height;
    let radius = (config.width * half).min(config.height);

    // Degenerate scale collapses to zero, not a fault.
    let span = config.max - config.min;
    let fraction = if span > T::zero() {
        ((config.value - config.min) / span).max(T::zero()).min(T::one())
    } else {
        T::zero()
    };

    let pi = T::from(PI).unwrap();
    let start = pi;
    let end = pi + pi;
    let value_angle = start + pi * fraction;

    // Ticks every 18 degrees; even positions are major.
    let major_inner = radius * T::from(0.8).unwrap();
    let minor_inner = radius * T::from(0.875).unwrap();
    let tick_step = pi / T::from(GAUGE_TICKS - 1).unwrap();
    let ticks = (0..GAUGE_TICKS)
        .map(|i| {
            let angle = start + tick_step * T::from(i).unwrap();
            let major = i % 2 == 0;
            let inner_radius = if major { major_inner } else { minor_inner };
            GaugeTick {
                angle,
                inner: polar_to_cartesian(cx, cy, inner_radius, angle),
                outer: polar_to_cartesian(cx, cy, radius, angle),
                major,
            }
        })
        .collect();

    let percent = fraction * T::from(100.0).unwrap();
    let active_threshold = if config.thresholds.is_empty() {
        None
    } else {
        Some(
            config
                .thresholds
                .iter()
                .position(|&limit| percent <= limit)
                .unwrap_or(config.thresholds.len() - 1),
        )
    };

    Ok(GaugeGeometry {
        fraction,
        value_angle,
        background: arc_stroke(cx, cy, radius, start, end),
        sweep: arc_stroke(cx, cy, radius, start, value_angle),
        ticks,
        active_threshold,
    })
}
