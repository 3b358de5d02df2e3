//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing over finished computations:
//! - Box summaries for sample groups
//! - Layout quality diagnostics
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Box summaries of sample groups.
pub mod summary;

/// Layout quality diagnostics.
pub mod diagnostics;
