//! High-level API for the force-directed layout.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for the one stateful
//! engine in the crate. It implements a fluent builder for configuring the
//! simulation and choosing an execution adapter (Converge or Stepped).
//! The pure layout engines expose plain config-and-compute functions from
//! their own modules; they need no builder.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for every tuning
//!   parameter; only the canvas dimensions are required.
//! * **Polymorphic**: Uses marker types to transition to specialized
//!   adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on
//!   the adapter builder; duplicate assignments are caught there too.
//!
//! ## Key concepts
//!
//! * **Execution adapters**: Converge (run to completion) and Stepped
//!   (host-driven suspend-resume loop).
//!
//! ### Configuration flow
//!
//! 1. Create a [`ForceLayoutBuilder`] via `ForceLayout::new()`.
//! 2. Chain configuration methods (`.width()`, `.strength_factor()`, ...).
//! 3. Select an adapter via `.adapter(Converge)` or `.adapter(Stepped)`.
//! 4. Call `.build()` to validate and obtain the executable layout.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::simulation::{
    SimulationConfig, DEFAULT_BASE_DISTANCE, DEFAULT_COLLISION_MARGIN, DEFAULT_EPSILON,
    DEFAULT_MAX_ITERATIONS, DEFAULT_NODE_RADIUS, DEFAULT_SEED, DEFAULT_STRENGTH_FACTOR,
};
use crate::primitives::validator::Validator;
use crate::primitives::errors::LayoutError;

// Publicly re-exported types
pub use crate::adapters::converge::ConvergeForceLayout;
pub use crate::adapters::stepped::SteppedForceLayout;
pub use crate::engine::output::{ForceLayoutResult, PlacedLink, PlacedNode, SimulationStatus};
pub use crate::engine::simulation::ForceSimulation;
pub use crate::primitives::graph::{LinkSpec, NodeSpec};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Converge, Stepped};
}

/// Marker selecting the run-to-completion adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converge;

/// Marker selecting the host-driven adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepped;

// ============================================================================
// Force Layout Builder
// ============================================================================

/// Fluent builder for configuring the force-directed layout.
#[derive(Debug, Clone)]
pub struct ForceLayoutBuilder<T: Float + Debug> {
    /// Drawing width (required).
    pub width: Option<T>,

    /// Drawing height (required).
    pub height: Option<T>,

    /// Repulsion/spring strength scale.
    pub strength_factor: Option<T>,

    /// Base spring distance.
    pub base_distance: Option<T>,

    /// Extra gap enforced between node circles.
    pub collision_margin: Option<T>,

    /// Radius for nodes without an explicit one.
    pub default_radius: Option<T>,

    /// Convergence epsilon.
    pub epsilon: Option<T>,

    /// Iteration cap.
    pub max_iterations: Option<usize>,

    /// Placement seed.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

/// Entry point alias: `ForceLayout::new()` starts a builder.
pub type ForceLayout<T> = ForceLayoutBuilder<T>;

impl<T: Float + Debug> Default for ForceLayoutBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> ForceLayoutBuilder<T> {
    /// Create a new builder with every parameter unset.
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            strength_factor: None,
            base_distance: None,
            collision_margin: None,
            default_radius: None,
            epsilon: None,
            max_iterations: None,
            seed: None,
            duplicate_param: None,
        }
    }

    fn mark_duplicate(&mut self, already_set: bool, parameter: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the drawing width.
    pub fn width(mut self, width: T) -> Self {
        self.mark_duplicate(self.width.is_some(), "width");
        self.width = Some(width);
        self
    }

    /// Set the drawing height.
    pub fn height(mut self, height: T) -> Self {
        self.mark_duplicate(self.height.is_some(), "height");
        self.height = Some(height);
        self
    }

    /// Set the strength factor scaling repulsion and springs.
    pub fn strength_factor(mut self, factor: T) -> Self {
        self.mark_duplicate(self.strength_factor.is_some(), "strength_factor");
        self.strength_factor = Some(factor);
        self
    }

    /// Set the base spring distance.
    pub fn base_distance(mut self, distance: T) -> Self {
        self.mark_duplicate(self.base_distance.is_some(), "base_distance");
        self.base_distance = Some(distance);
        self
    }

    /// Set the extra collision gap between node circles.
    pub fn collision_margin(mut self, margin: T) -> Self {
        self.mark_duplicate(self.collision_margin.is_some(), "collision_margin");
        self.collision_margin = Some(margin);
        self
    }

    /// Set the radius used for nodes without an explicit one.
    pub fn default_radius(mut self, radius: T) -> Self {
        self.mark_duplicate(self.default_radius.is_some(), "default_radius");
        self.default_radius = Some(radius);
        self
    }

    /// Set the convergence epsilon on per-step displacement.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        self.mark_duplicate(self.epsilon.is_some(), "epsilon");
        self.epsilon = Some(epsilon);
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, cap: usize) -> Self {
        self.mark_duplicate(self.max_iterations.is_some(), "max_iterations");
        self.max_iterations = Some(cap);
        self
    }

    /// Set the placement seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.mark_duplicate(self.seed.is_some(), "seed");
        self.seed = Some(seed);
        self
    }

    // ========================================================================
    // Adapter Selection
    // ========================================================================

    /// Select an execution adapter and obtain its builder.
    pub fn adapter<A: AdapterMarker<T>>(self, _adapter: A) -> A::Builder {
        A::wrap(self)
    }

    /// Validate the collected parameters into a simulation config.
    fn into_config(self) -> Result<SimulationConfig<T>, LayoutError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(LayoutError::DuplicateParameter { parameter });
        }
        let width = self.width.ok_or(LayoutError::MissingParameter {
            parameter: "width",
        })?;
        let height = self.height.ok_or(LayoutError::MissingParameter {
            parameter: "height",
        })?;

        let config = SimulationConfig {
            width,
            height,
            strength_factor: self
                .strength_factor
                .unwrap_or_else(|| T::from(DEFAULT_STRENGTH_FACTOR).unwrap()),
            base_distance: self
                .base_distance
                .unwrap_or_else(|| T::from(DEFAULT_BASE_DISTANCE).unwrap()),
            collision_margin: self
                .collision_margin
                .unwrap_or_else(|| T::from(DEFAULT_COLLISION_MARGIN).unwrap()),
            default_radius: self
                .default_radius
                .unwrap_or_else(|| T::from(DEFAULT_NODE_RADIUS).unwrap()),
            epsilon: self
                .epsilon
                .unwrap_or_else(|| T::from(DEFAULT_EPSILON).unwrap()),
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };

        Validator::validate_dimensions(config.width, config.height)?;
        Validator::validate_radius(config.default_radius)?;
        Validator::validate_padding(config.collision_margin)?;
        Validator::validate_iteration_cap(config.max_iterations)?;

        Ok(config)
    }
}

// ============================================================================
// Adapter Builders
// ============================================================================

/// Selects the adapter-specific builder produced by
/// [`ForceLayoutBuilder::adapter`].
pub trait AdapterMarker<T: Float + Debug> {
    /// Builder type for this adapter.
    type Builder;

    /// Wrap the shared builder.
    fn wrap(builder: ForceLayoutBuilder<T>) -> Self::Builder;
}

impl<T: Float + Debug> AdapterMarker<T> for Converge {
    type Builder = ConvergeForceBuilder<T>;

    fn wrap(builder: ForceLayoutBuilder<T>) -> Self::Builder {
        ConvergeForceBuilder { inner: builder }
    }
}

impl<T: Float + Debug> AdapterMarker<T> for Stepped {
    type Builder = SteppedForceBuilder<T>;

    fn wrap(builder: ForceLayoutBuilder<T>) -> Self::Builder {
        SteppedForceBuilder { inner: builder }
    }
}

/// Builder for the run-to-completion adapter.
#[derive(Debug, Clone)]
pub struct ConvergeForceBuilder<T: Float + Debug> {
    inner: ForceLayoutBuilder<T>,
}

impl<T: Float + Debug> ConvergeForceBuilder<T> {
    /// Validate parameters and build the executable layout.
    pub fn build(self) -> Result<ConvergeForceLayout<T>, LayoutError> {
        Ok(ConvergeForceLayout {
            config: self.inner.into_config()?,
        })
    }
}

/// Builder for the host-driven adapter.
#[derive(Debug, Clone)]
pub struct SteppedForceBuilder<T: Float + Debug> {
    inner: ForceLayoutBuilder<T>,
}

impl<T: Float + Debug> SteppedForceBuilder<T> {
    /// Validate parameters and build the executable layout.
    pub fn build(self) -> Result<SteppedForceLayout<T>, LayoutError> {
        Ok(SteppedForceLayout {
            config: self.inner.into_config()?,
        })
    }
}
