//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the core layout and statistics engines:
//! - Correlation and association measures
//! - Kernel density estimation
//! - Hierarchical layouts (treemap, sunburst, packed circles, dendrogram)
//! - Chord and other radial layouts
//! - Force passes for graph layout
//! - Flow layouts (Sankey, parallel sets)
//! - Stream and ridge transforms
//!
//! Every engine is a pure function from data and configuration to geometry
//! or statistics; only the force passes mutate state, and only the state
//! the engine layer hands them.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Correlation and association measures.
pub mod correlation;

/// Kernel density estimation.
pub mod density;

/// Treemap rectangle subdivision.
pub mod treemap;

/// Sunburst radial partition layout.
pub mod sunburst;

/// Packed-circle hierarchy layout.
pub mod pack;

/// Dendrogram tree layout.
pub mod tree;

/// Chord diagram layout.
pub mod chord;

/// Force passes for graph layout.
pub mod force;

/// Sankey flow layout.
pub mod sankey;

/// Parallel-sets ribbon layout.
pub mod parallel_sets;

/// Streamgraph stacking and horizon band transforms.
pub mod stream;

/// Ridgeline and violin density layouts.
pub mod ridge;

/// Polar-area, spiral, and gauge geometry.
pub mod radial;
