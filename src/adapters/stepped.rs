//! Host-driven adapter for the force layout.
//!
//! ## Purpose
//!
//! This module provides the suspend-resume execution mode: it validates
//! and hands the caller the live simulation, whose `step()` the host
//! drives from its own scheduler — an animation frame, a timer, or a plain
//! loop. Between steps the host can read positions, pin or release nodes,
//! or cancel.
//!
//! ## Design notes
//!
//! * **Cooperative**: Each step runs synchronously to completion before
//!   control returns, so there is never a torn intermediate state.
//! * **Interaction**: Pinning and reheating are engine methods on the
//!   returned simulation; the adapter adds nothing on top.
//!
//! ## Invariants
//!
//! * The returned simulation starts in the stepping state with positions
//!   already initialized.
//!
//! ## Non-goals
//!
//! * This adapter does not own a timer or frame loop.
//! * This adapter does not run steps concurrently.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::simulation::{ForceSimulation, SimulationConfig};
use crate::primitives::errors::LayoutError;
use crate::primitives::graph::{LinkSpec, NodeSpec};

// ============================================================================
// Stepped Adapter
// ============================================================================

/// Host-driven force layout: hands back a live simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SteppedForceLayout<T> {
    pub(crate) config: SimulationConfig<T>,
}

impl<T: Float> SteppedForceLayout<T> {
    /// Validate the graph and start a simulation for the host to drive.
    pub fn start(
        &self,
        nodes: &[NodeSpec<T>],
        links: &[LinkSpec<T>],
    ) -> Result<ForceSimulation<T>, LayoutError> {
        ForceSimulation::new(nodes, links, self.config.clone())
    }
}
