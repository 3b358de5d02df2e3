//! Run-to-completion adapter for the force layout.
//!
//! ## Purpose
//!
//! This module provides the one-shot execution mode: validate, build the
//! simulation, step it internally until it terminates, and return the
//! final geometry. It suits hosts that want a finished layout and no
//! animation.
//!
//! ## Design notes
//!
//! * **Delegation**: All physics lives in the engine; this adapter only
//!   drives the loop.
//! * **Non-convergence**: Hitting the iteration cap still returns a result;
//!   the status flag tells the caller which way the run ended.
//!
//! ## Invariants
//!
//! * The returned result is the engine's own terminal snapshot.
//!
//! ## Non-goals
//!
//! * This adapter does not yield between steps (use the stepped adapter).
//! * This adapter does not support mid-run pinning or cancellation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::ForceLayoutResult;
use crate::engine::simulation::{ForceSimulation, SimulationConfig};
use crate::primitives::errors::LayoutError;
use crate::primitives::graph::{LinkSpec, NodeSpec};

// ============================================================================
// Converge Adapter
// ============================================================================

/// One-shot force layout: steps to termination internally.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergeForceLayout<T> {
    pub(crate) config: SimulationConfig<T>,
}

impl<T: Float> ConvergeForceLayout<T> {
    /// Lay out a graph, stepping the simulation to termination.
    pub fn layout(
        &self,
        nodes: &[NodeSpec<T>],
        links: &[LinkSpec<T>],
    ) -> Result<ForceLayoutResult<T>, LayoutError> {
        let mut simulation = ForceSimulation::new(nodes, links, self.config.clone())?;
        simulation.run();
        Ok(simulation.result())
    }
}
