//! Error types for layout and statistics operations.
//!
//! ## Purpose
//!
//! This module defines the usage-error conditions that can occur while
//! configuring or invoking a layout engine: missing inputs, out-of-range
//! parameters, unresolved graph references, and unsupported input shapes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual lengths).
//! * **Usage only**: Degenerate *data* is never an error — zero-variance
//!   correlation, zero-value tree nodes, and malformed location strings all
//!   yield well-defined boundary values in their respective modules.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty node/sample sets, mismatched lengths.
//! 2. **Parameter validation**: Invalid dimensions, bandwidth, grid size,
//!    padding, fractions, or iteration caps.
//! 3. **Graph constraints**: Unknown link endpoints, cyclic flow graphs.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for layout and statistics operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Input sample/value arrays are empty.
    EmptyInput,

    /// A layout was invoked with no nodes.
    EmptyNodes,

    /// Paired inputs must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the first input.
        left: usize,
        /// Number of elements in the second input.
        right: usize,
    },

    /// Drawing dimensions must be positive and finite.
    InvalidDimensions {
        /// The width provided.
        width: f64,
        /// The height provided.
        height: f64,
    },

    /// A radius must be positive and finite.
    InvalidRadius(f64),

    /// KDE bandwidth must be positive and finite.
    InvalidBandwidth(f64),

    /// KDE grid size must be at least 2 so the grid has distinct endpoints.
    InvalidGridSize(usize),

    /// Iteration cap must be at least 1.
    InvalidIterationCap(usize),

    /// Padding must be non-negative and finite.
    InvalidPadding(f64),

    /// A proportion (overlap, fill) must lie in (0, 1].
    InvalidFraction(f64),

    /// Input data contains NaN or infinite values.
    NonFiniteValue(String),

    /// A link references a node id that is not present in the node set.
    UnknownNodeId(String),

    /// Flow column assignment requires an acyclic link graph.
    CyclicFlow {
        /// Number of nodes that could not be assigned a column.
        unplaced: usize,
    },

    /// A chord flow matrix must be square.
    NotSquare {
        /// Number of rows provided.
        rows: usize,
        /// Length of the offending row.
        cols: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A required parameter was never set in the builder.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::EmptyNodes => write!(f, "Layout requires at least one node"),
            Self::MismatchedInputs { left, right } => {
                write!(f, "Length mismatch: {left} elements vs {right}")
            }
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid dimensions: {width} x {height} (must be positive and finite)"
                )
            }
            Self::InvalidRadius(r) => {
                write!(f, "Invalid radius: {r} (must be positive and finite)")
            }
            Self::InvalidBandwidth(h) => {
                write!(f, "Invalid bandwidth: {h} (must be positive and finite)")
            }
            Self::InvalidGridSize(n) => {
                write!(f, "Invalid grid size: {n} (must be at least 2)")
            }
            Self::InvalidIterationCap(n) => {
                write!(f, "Invalid iteration cap: {n} (must be at least 1)")
            }
            Self::InvalidPadding(p) => {
                write!(f, "Invalid padding: {p} (must be non-negative and finite)")
            }
            Self::InvalidFraction(x) => {
                write!(f, "Invalid fraction: {x} (must be > 0 and <= 1)")
            }
            Self::NonFiniteValue(s) => write!(f, "Non-finite value: {s}"),
            Self::UnknownNodeId(id) => {
                write!(f, "Link references unknown node id: '{id}'")
            }
            Self::CyclicFlow { unplaced } => {
                write!(
                    f,
                    "Flow graph contains a cycle: {unplaced} node(s) could not be assigned a column (acyclic input required)"
                )
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "Flow matrix is not square: {rows} rows but a row of length {cols}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Required parameter '{parameter}' was not set")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LayoutError {}
