//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! layout engines:
//! - Polar/arc geometry for radial layouts
//! - Kernel functions for density estimation
//! - Descriptive statistics
//!
//! These are reusable mathematical building blocks with no
//! algorithm-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Angle and arc geometry for radial layouts.
pub mod polar;

/// Kernel functions for density estimation.
pub mod kernel;

/// Descriptive statistics.
pub mod descriptive;
