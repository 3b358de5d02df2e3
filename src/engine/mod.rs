//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer contains orchestration and execution control:
//! - The force-directed simulation state machine
//! - Simulation scratch buffers and output types
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Workspace for reusable simulation buffers.
pub mod workspace;

/// Force-directed simulation engine.
pub mod simulation;

/// Simulation output types.
pub mod output;
