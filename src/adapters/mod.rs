//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer contains the execution-mode adapters for the force layout:
//! - Converge: run to completion internally
//! - Stepped: hand the host a live simulation to drive
//!
//! Every other engine in the crate is a one-shot pure computation and
//! needs no adapter.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Run-to-completion adapter for the force layout.
pub mod converge;

/// Host-driven adapter for the force layout.
pub mod stepped;
