//! # plotgeom — chart-layout geometry and statistics for Rust
//!
//! A deterministic, rendering-agnostic implementation of the layout and
//! statistics engines behind a chart dashboard: a force-directed graph
//! simulation, hierarchical space subdivision (treemap, sunburst, packed
//! circles, dendrogram), radial layouts (chord, polar area, spiral,
//! gauge), flow layouts (Sankey, parallel sets), and statistical
//! transforms (correlation matrices, kernel density estimation,
//! streamgraph stacking, ridgeline/violin shapes).
//!
//! ## What this crate is
//!
//! Every engine is a pure function from data and configuration to
//! geometry or statistics: node positions, arc angles, path control
//! points, or matrices of numbers. Nothing here renders pixels, owns
//! animation timing, or tracks hover state — output is consumed by a
//! rendering collaborator of your choice (SVG, canvas, TUI, tests).
//!
//! The single stateful exception is the force-directed engine, which is an
//! explicit suspend-resume loop: each `step()` fully updates all positions
//! and yields, so any host scheduler can drive it and interleave user
//! interaction (node pinning, cancellation) between steps.
//!
//! ## Quick start
//!
//! ### Force-directed layout, run to completion
//!
//! ```rust
//! use plotgeom_rs::prelude::*;
//!
//! let nodes = vec![NodeSpec::new("tesla"), NodeSpec::new("nissan"), NodeSpec::new("chevy")];
//! let links = vec![
//!     LinkSpec::new("tesla", "nissan"),
//!     LinkSpec::new("nissan", "chevy").weight(2.0),
//! ];
//!
//! let layout = ForceLayout::new()
//!     .width(800.0)
//!     .height(600.0)
//!     .adapter(Converge)
//!     .build()?;
//!
//! let result = layout.layout(&nodes, &links)?;
//! assert_eq!(result.nodes.len(), 3);
//! # Result::<(), LayoutError>::Ok(())
//! ```
//!
//! ### Force-directed layout, driven by the host
//!
//! ```rust
//! use plotgeom_rs::prelude::*;
//!
//! let nodes = vec![NodeSpec::new("a"), NodeSpec::new("b")];
//! let links = vec![LinkSpec::new("a", "b")];
//!
//! let layout = ForceLayout::new()
//!     .width(400.0)
//!     .height(400.0)
//!     .adapter(Stepped)
//!     .build()?;
//!
//! let mut simulation = layout.start(&nodes, &links)?;
//! // One call per animation frame; positions are valid after every step.
//! while !simulation.step() {
//!     let _positions = simulation.nodes();
//! }
//! # Result::<(), LayoutError>::Ok(())
//! ```
//!
//! ### Hierarchies
//!
//! ```rust
//! use plotgeom_rs::prelude::*;
//!
//! let root = TreeNode::branch(
//!     "fleet",
//!     vec![TreeNode::leaf("bev", 70.0), TreeNode::leaf("phev", 30.0)],
//! );
//!
//! let layout = treemap(&TreemapConfig {
//!     root,
//!     width: 800.0,
//!     height: 400.0,
//! })?;
//! assert_eq!(layout.cells.len(), 3); // root + 2 leaves
//! # Result::<(), LayoutError>::Ok(())
//! ```
//!
//! ### Statistics
//!
//! ```rust
//! use plotgeom_rs::prelude::*;
//!
//! // Pearson for numeric pairs, Cramér's V when categories are involved.
//! let matrix = correlation_matrix(&[
//!     Variable::numeric("range", vec![220.0, 310.0, 150.0]),
//!     Variable::numeric("msrp", vec![35.0, 52.0, 28.0]),
//! ])?;
//! assert_eq!(matrix.coefficient(0, 0), 1.0);
//!
//! // Kernel density estimation with an Epanechnikov kernel.
//! let density = kde(&DensityConfig::new(vec![1.0, 2.0, 2.5, 4.0], 1.0))?;
//! assert_eq!(density.len(), 100);
//! # Result::<(), LayoutError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Fallible operations return `Result<_, LayoutError>`. Only *usage*
//! mistakes are errors — a missing required parameter, non-finite input,
//! an unknown link endpoint, a cyclic Sankey graph. Degenerate *data* is
//! not: zero-variance correlation returns `0`, a zero-value tree node gets
//! zero area, and a force run that hits its iteration cap returns its last
//! positions with a `BudgetExhausted` status instead of failing.
//!
//! The location parser is the one deliberate exception to `Result`: it
//! returns `Option`, because a malformed `POINT (lng lat)` string is
//! expected data that callers filter out record by record.
//!
//! ## Determinism
//!
//! Identical inputs produce identical outputs. The force engine's random
//! initial placement comes from a seeded generator (`.seed(..)` on the
//! builder); everything else is free of ambient randomness, time, and I/O.
//!
//! ## `no_std`
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! plotgeom-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains error types, path descriptors, scale constructors, the
// hierarchy arena, graph state, and the location parser.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains polar/arc geometry, density kernels, and descriptive
// statistics.
mod math;

// Layer 3: Algorithms - the layout and statistics engines.
//
// Contains correlation, KDE, the hierarchical layouts, chord and radial
// layouts, the force passes, flow layouts, and stream/ridge transforms.
mod algorithms;

// Layer 4: Evaluation - post-processing over finished computations.
//
// Contains box summaries and layout quality diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the force simulation state machine, and its
// output types.
mod engine;

// Layer 6: Adapters - execution mode adapters.
//
// Contains the Converge (one-shot) and Stepped (host-driven) adapters
// for the force layout.
mod adapters;

// High-level fluent API for the force-directed layout.
//
// Provides the `ForceLayout` builder and adapter markers.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard plotgeom prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use plotgeom_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::correlation::{
        correlation_matrix, cramers_v, pearson, CorrelationMatrix, Variable, VariableData,
    };
    pub use crate::algorithms::chord::{chord, Chord, ChordConfig, ChordGroup, ChordLayout};
    pub use crate::algorithms::density::{kde, Density, DensityConfig, DensityPoint};
    pub use crate::algorithms::pack::{pack, PackConfig, PackLayout, PackedCircle};
    pub use crate::algorithms::parallel_sets::{
        parallel_sets, CategoryBar, Dimension, ParallelSetsConfig, ParallelSetsLayout, Ribbon,
    };
    pub use crate::algorithms::radial::{
        gauge, polar_area, spiral, GaugeConfig, GaugeGeometry, GaugeTick, PolarAreaConfig,
        PolarSegment, SpiralConfig, SpiralPoint,
    };
    pub use crate::algorithms::ridge::{
        ridgeline, violin, Group, RidgeBand, RidgelineConfig, ViolinConfig, ViolinShape,
    };
    pub use crate::algorithms::sankey::{
        sankey, FlowSpec, SankeyConfig, SankeyLayout, SankeyLink, SankeyNode,
    };
    pub use crate::algorithms::stream::{
        horizon_bands, stream, HorizonBand, Polarity, Series, StreamLayer,
    };
    pub use crate::algorithms::sunburst::{sunburst, SunburstArc, SunburstConfig, SunburstLayout};
    pub use crate::algorithms::tree::{
        dendrogram, DendrogramConfig, DendrogramLayout, DendrogramLink, DendrogramNode,
        Orientation,
        Orientation::{Horizontal, Vertical},
    };
    pub use crate::algorithms::treemap::{treemap, TreemapCell, TreemapConfig, TreemapLayout};
    pub use crate::api::{
        Adapter::{Converge, Stepped},
        ConvergeForceLayout, ForceLayout, ForceLayoutResult, ForceSimulation, LinkSpec,
        NodeSpec, PlacedLink, PlacedNode, SimulationStatus, SteppedForceLayout,
    };
    pub use crate::engine::output::ConvergenceReport;
    pub use crate::evaluation::diagnostics::{aspect_summary, AspectSummary};
    pub use crate::evaluation::summary::{box_stats, BoxStats};
    pub use crate::math::kernel::KernelFunction;
    pub use crate::math::kernel::KernelFunction::{
        Epanechnikov, Gaussian, Triangular, Uniform,
    };
    pub use crate::primitives::arena::{HierarchyArena, TreeNode};
    pub use crate::primitives::errors::LayoutError;
    pub use crate::primitives::location::{parse_point, GeoPoint};
    pub use crate::primitives::path::{PathCommand, Point};
    pub use crate::primitives::scale::{linear, BandScale, PointScale};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
