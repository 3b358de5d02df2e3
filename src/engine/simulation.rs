//! Force-directed simulation engine.
//!
//! ## Purpose
//!
//! This module owns the force-directed layout's state machine: it seeds
//! node positions, sequences the force passes each step, measures
//! displacement for convergence, and enforces the iteration budget. One
//! step fully updates every position before control returns, so partial
//! results are always valid and renderable.
//!
//! ## Design notes
//!
//! * **Host-agnostic stepping**: `step()` returns whether the run is done;
//!   any scheduler — a frame loop, a timer, or a plain loop — can drive it.
//! * **Deterministic seeding**: Initial positions come from a private
//!   64-bit LCG seeded by the caller (or a fixed default); identical input
//!   and seed reproduce the run exactly.
//! * **Restart semantics**: `reheat()` restarts stepping from the current
//!   positions with a fresh budget (after a drag or pin); `reseed()` with
//!   new data discards all in-flight state and starts over.
//! * **Termination**: Stepping stops when the largest per-node displacement
//!   falls below the epsilon, when the iteration cap is reached (a status,
//!   not an error), or when the caller cancels.
//!
//! ## Key concepts
//!
//! * **Pass order**: repulsion, springs, centering, collision, integration
//!   — collision corrects positions after the velocity passes, and
//!   integration clamps to bounds last.
//!
//! ## Invariants
//!
//! * Pinned nodes sit exactly at their fixed coordinates after every step.
//! * `iterations` never exceeds the configured cap.
//!
//! ## Non-goals
//!
//! * This module does not schedule steps across frames; adapters and hosts
//!   do.
//! * This module does not spawn threads; stepping is synchronous.

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
use crate::algorithms::force::{
    apply_centering, apply_collision, apply_repulsion, apply_springs, integrate,
    scaling_constant,
};
use crate::engine::output::{
    ConvergenceReport, ForceLayoutResult, PlacedLink, PlacedNode, SimulationStatus,
};
use crate::primitives::validator::Validator;
use crate::engine::workspace::SimWorkspace;
use crate::primitives::errors::LayoutError;
use crate::primitives::graph::{resolve_links, GraphNode, LinkSpec, NodeSpec, ResolvedLink};

// ============================================================================
// Defaults
// ============================================================================

/// Default strength factor.
pub const DEFAULT_STRENGTH_FACTOR: f64 = 1.0;

/// Default base spring distance; a link's target distance is
/// `base_distance / max(weight, 1)`.
pub const DEFAULT_BASE_DISTANCE: f64 = 100.0;

/// Default extra gap enforced by the collision pass.
pub const DEFAULT_COLLISION_MARGIN: f64 = 5.0;

/// Default node radius when a spec does not set one.
pub const DEFAULT_NODE_RADIUS: f64 = 30.0;

/// Default convergence epsilon on the per-step maximum displacement.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Default LCG seed for initial placement.
pub const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

// ============================================================================
// Seeded RNG
// ============================================================================

/// Minimal linear congruential generator for reproducible placement.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform value in [0, 1).
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig<T> {
    /// Drawing width.
    pub width: T,
    /// Drawing height.
    pub height: T,
    /// Scales repulsion and spring strength; zero freezes the graph.
    pub strength_factor: T,
    /// Base spring distance.
    pub base_distance: T,
    /// Extra gap enforced between node circles.
    pub collision_margin: T,
    /// Radius for nodes whose spec does not set one.
    pub default_radius: T,
    /// Convergence epsilon on the per-step maximum displacement.
    pub epsilon: T,
    /// Iteration cap (fatal-safety bound for degenerate graphs).
    pub max_iterations: usize,
    /// Seed for initial placement.
    pub seed: u64,
}

impl<T: Float> SimulationConfig<T> {
    /// Create a configuration with default tuning for the given canvas.
    pub fn new(width: T, height: T) -> Self {
        Self {
            width,
            height,
            strength_factor: T::from(DEFAULT_STRENGTH_FACTOR).unwrap(),
            base_distance: T::from(DEFAULT_BASE_DISTANCE).unwrap(),
            collision_margin: T::from(DEFAULT_COLLISION_MARGIN).unwrap(),
            default_radius: T::from(DEFAULT_NODE_RADIUS).unwrap(),
            epsilon: T::from(DEFAULT_EPSILON).unwrap(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

// ============================================================================
// State Machine
// ============================================================================

/// Lifecycle state of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Steps are still being taken.
    Stepping,
    /// The displacement epsilon was met.
    Converged,
    /// The iteration cap was reached.
    BudgetExhausted,
    /// The caller cancelled the run.
    Cancelled,
}

/// A running force-directed layout.
#[derive(Debug)]
pub struct ForceSimulation<T> {
    config: SimulationConfig<T>,
    nodes: Vec<GraphNode<T>>,
    links: Vec<ResolvedLink<T>>,
    workspace: SimWorkspace<T>,
    state: State,
    iterations: usize,
    last_displacement: T,
    k: T,
}

impl<T: Float> ForceSimulation<T> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Validate inputs and initialize node positions (the Initializing
    /// state); the simulation is ready to step on return.
    pub fn new(
        nodes: &[NodeSpec<T>],
        links: &[LinkSpec<T>],
        config: SimulationConfig<T>,
    ) -> Result<Self, LayoutError> {
        Validator::validate_dimensions(config.width, config.height)?;
        Validator::validate_radius(config.default_radius)?;
        Validator::validate_padding(config.collision_margin)?;
        Validator::validate_iteration_cap(config.max_iterations)?;
        if nodes.is_empty() {
            return Err(LayoutError::EmptyNodes);
        }
        if !config.strength_factor.is_finite() || config.strength_factor < T::zero() {
            return Err(LayoutError::NonFiniteValue(format!(
                "strength_factor={}",
                config.strength_factor.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let links = resolve_links(nodes, links)?;

        let mut rng = SimpleRng::new(config.seed);
        let placed: Vec<GraphNode<T>> = nodes
            .iter()
            .map(|spec| {
                let radius = spec.radius.unwrap_or(config.default_radius);
                let (x, y) = match spec.fixed {
                    Some(fixed) => fixed,
                    None => (
                        config.width * T::from(rng.next_unit()).unwrap(),
                        config.height * T::from(rng.next_unit()).unwrap(),
                    ),
                };
                GraphNode {
                    id: spec.id.clone(),
                    x,
                    y,
                    vx: T::zero(),
                    vy: T::zero(),
                    radius,
                    fixed: spec.fixed,
                }
            })
            .collect();

        let k = scaling_constant(config.width, config.height, placed.len());
        log::debug!(
            "force simulation initialized: {} nodes, {} links",
            placed.len(),
            links.len()
        );

        Ok(Self {
            workspace: SimWorkspace::new(placed.len()),
            nodes: placed,
            links,
            state: State::Stepping,
            iterations: 0,
            last_displacement: T::infinity(),
            k,
            config,
        })
    }

    /// Take one full simulation step.
    ///
    /// Returns `true` once the run is done (converged, budget exhausted, or
    /// cancelled); further calls are no-ops that keep returning `true`.
    pub fn step(&mut self) -> bool {
        if self.state != State::Stepping {
            return true;
        }

        self.workspace.capture(&self.nodes);

        apply_repulsion(&mut self.nodes, self.k, self.config.strength_factor);
        apply_springs(
            &mut self.nodes,
            &self.links,
            self.config.base_distance,
            self.config.strength_factor,
        );
        apply_centering(&mut self.nodes, self.config.width, self.config.height);
        apply_collision(&mut self.nodes, self.config.collision_margin);
        integrate(&mut self.nodes, self.config.width, self.config.height);

        self.iterations += 1;
        self.last_displacement = self.workspace.max_displacement(&self.nodes);

        if self.last_displacement < self.config.epsilon {
            self.state = State::Converged;
            log::debug!("force simulation converged after {} steps", self.iterations);
        } else if self.iterations >= self.config.max_iterations {
            self.state = State::BudgetExhausted;
            log::debug!(
                "force simulation budget exhausted at {} steps",
                self.iterations
            );
        }

        self.state != State::Stepping
    }

    /// Step to termination and return the final status.
    pub fn run(&mut self) -> SimulationStatus {
        while !self.step() {}
        self.status()
    }

    /// Halt further stepping; current positions stay valid.
    pub fn cancel(&mut self) {
        if self.state == State::Stepping {
            self.state = State::Cancelled;
            log::debug!("force simulation cancelled at {} steps", self.iterations);
        }
    }

    /// Restart stepping from the current positions with a fresh iteration
    /// budget — used after a pin, unpin, or drag.
    pub fn reheat(&mut self) {
        self.state = State::Stepping;
        self.iterations = 0;
        self.last_displacement = T::infinity();
    }

    /// Discard all in-flight state and restart from new input.
    pub fn reseed(
        &mut self,
        nodes: &[NodeSpec<T>],
        links: &[LinkSpec<T>],
    ) -> Result<(), LayoutError> {
        *self = Self::new(nodes, links, self.config.clone())?;
        Ok(())
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Pin a node at the given coordinates and reheat. Returns `false` if
    /// the id is unknown.
    pub fn pin(&mut self, id: &str, x: T, y: T) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.fixed = Some((x, y));
        node.x = x;
        node.y = y;
        node.vx = T::zero();
        node.vy = T::zero();
        self.reheat();
        true
    }

    /// Release a pinned node and reheat. Returns `false` if the id is
    /// unknown.
    pub fn unpin(&mut self, id: &str) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.fixed = None;
        self.reheat();
        true
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Current node states, valid after any number of steps.
    #[inline]
    pub fn nodes(&self) -> &[GraphNode<T>] {
        &self.nodes
    }

    /// Resolved links (self-links excluded).
    #[inline]
    pub fn links(&self) -> &[ResolvedLink<T>] {
        &self.links
    }

    /// Completed steps since the last (re)start.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Largest per-node displacement of the most recent step.
    #[inline]
    pub fn last_displacement(&self) -> T {
        self.last_displacement
    }

    /// Whether the run has terminated.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state != State::Stepping
    }

    /// Termination status; a run still stepping reports `Cancelled`, since
    /// any snapshot taken now is a frozen partial result.
    pub fn status(&self) -> SimulationStatus {
        match self.state {
            State::Converged => SimulationStatus::Converged,
            State::BudgetExhausted => SimulationStatus::BudgetExhausted,
            State::Stepping | State::Cancelled => SimulationStatus::Cancelled,
        }
    }

    /// Condensed convergence report for diagnostics.
    pub fn report(&self) -> ConvergenceReport<T> {
        ConvergenceReport {
            status: self.status(),
            iterations: self.iterations,
            final_displacement: self.last_displacement,
        }
    }

    /// Snapshot the run into a renderable result.
    pub fn result(&self) -> ForceLayoutResult<T> {
        ForceLayoutResult {
            nodes: self
                .nodes
                .iter()
                .map(|node| PlacedNode {
                    id: node.id.clone(),
                    x: node.x,
                    y: node.y,
                    radius: node.radius,
                    pinned: node.fixed.is_some(),
                })
                .collect(),
            links: self
                .links
                .iter()
                .map(|link| PlacedLink {
                    source: link.source,
                    target: link.target,
                    weight: link.weight,
                })
                .collect(),
            status: self.status(),
            iterations: self.iterations,
        }
    }
}
