//! Correlation and association measures.
//!
//! ## Purpose
//!
//! This module computes pairwise association strength between variables of
//! a tabular dataset: Pearson correlation for numeric pairs, Cramér's V for
//! pairs involving a categorical variable, and the full symmetric matrix
//! over a declared variable set.
//!
//! ## Design notes
//!
//! * **Degenerate data is a value**: Zero variance yields a Pearson
//!   coefficient of 0; a single observed category yields a Cramér's V of 0.
//!   Neither is an error.
//! * **Mixed pairs**: A pair is numeric only if both members are numeric;
//!   otherwise both sides are treated as categories (numbers compare by
//!   their formatted value), matching the upstream contingency behavior.
//! * **Determinism**: Categories are indexed in order of first appearance,
//!   so the contingency table and the result are reproducible.
//!
//! ## Key concepts
//!
//! * **Cramér's V**: `sqrt(chi^2 / (n * (min(rows, cols) - 1)))`, a
//!   chi-square-based association measure in [0, 1].
//!
//! ## Invariants
//!
//! * The matrix is square and symmetric with a diagonal of exactly 1.
//! * All coefficients lie in [-1, 1].
//!
//! ## Non-goals
//!
//! * This module does not test significance or compute p-values.
//! * This module does not impute or filter missing observations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LayoutError;

// ============================================================================
// Variable Input
// ============================================================================

/// Observations of one variable.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableData<T> {
    /// Numeric observations.
    Numeric(Vec<T>),
    /// Categorical observations.
    Categorical(Vec<String>),
}

impl<T> VariableData<T> {
    /// Number of observations.
    pub fn len(&self) -> usize {
        match self {
            VariableData::Numeric(v) => v.len(),
            VariableData::Categorical(v) => v.len(),
        }
    }

    /// Whether the variable has no observations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named variable column.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable<T> {
    /// Variable name, echoed into the matrix axes.
    pub name: String,
    /// The observations.
    pub data: VariableData<T>,
}

impl<T> Variable<T> {
    /// Create a numeric variable.
    pub fn numeric(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            data: VariableData::Numeric(values),
        }
    }

    /// Create a categorical variable.
    pub fn categorical(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            data: VariableData::Categorical(values),
        }
    }
}

// ============================================================================
// Pairwise Measures
// ============================================================================

/// Pearson correlation coefficient of two equally long numeric series.
///
/// Returns 0 when either series has zero variance.
pub fn pearson<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Series must have same length");
    let n = a.len();
    if n == 0 {
        return T::zero();
    }

    let count = T::from(n).unwrap();
    let mean_a = a.iter().fold(T::zero(), |acc, &v| acc + v) / count;
    let mean_b = b.iter().fold(T::zero(), |acc, &v| acc + v) / count;

    let mut covariance = T::zero();
    let mut variance_a = T::zero();
    let mut variance_b = T::zero();
    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        covariance = covariance + da * db;
        variance_a = variance_a + da * da;
        variance_b = variance_b + db * db;
    }

    let denominator = (variance_a * variance_b).sqrt();
    if denominator == T::zero() {
        return T::zero();
    }

    // Clamp float drift so downstream consumers can rely on [-1, 1].
    (covariance / denominator).max(-T::one()).min(T::one())
}

/// Cramér's V association of two equally long categorical series.
///
/// Returns 0 when either series observes at most one category.
pub fn cramers_v<T: Float>(a: &[String], b: &[String]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Series must have same length");
    let n = a.len();
    if n == 0 {
        return T::zero();
    }

    // Index categories in order of first appearance.
    let rows = category_indices(a);
    let cols = category_indices(b);
    let row_count = rows.categories.len();
    let col_count = cols.categories.len();

    if row_count.min(col_count) <= 1 {
        return T::zero();
    }

    // Contingency table and marginals.
    let mut observed = vec![0usize; row_count * col_count];
    let mut row_totals = vec![0usize; row_count];
    let mut col_totals = vec![0usize; col_count];
    for i in 0..n {
        let r = rows.assignments[i];
        let c = cols.assignments[i];
        observed[r * col_count + c] += 1;
        row_totals[r] += 1;
        col_totals[c] += 1;
    }

    // Chi-square statistic against independence.
    let total = n as f64;
    let mut chi_square = 0.0;
    for r in 0..row_count {
        for c in 0..col_count {
            let expected = row_totals[r] as f64 * col_totals[c] as f64 / total;
            if expected > 0.0 {
                let deviation = observed[r * col_count + c] as f64 - expected;
                chi_square += deviation * deviation / expected;
            }
        }
    }

    let denominator = total * (row_count.min(col_count) - 1) as f64;
    let v = (chi_square / denominator).sqrt().min(1.0);
    T::from(v).unwrap_or_else(T::zero)
}

/// Category dictionary for one series.
struct CategoryIndex {
    /// Distinct categories in order of first appearance.
    categories: Vec<String>,
    /// Per-observation category index.
    assignments: Vec<usize>,
}

fn category_indices(values: &[String]) -> CategoryIndex {
    let mut categories: Vec<String> = Vec::new();
    let mut assignments = Vec::with_capacity(values.len());

    for value in values {
        let index = match categories.iter().position(|c| c == value) {
            Some(found) => found,
            None => {
                categories.push(value.clone());
                categories.len() - 1
            }
        };
        assignments.push(index);
    }

    CategoryIndex {
        categories,
        assignments,
    }
}

// ============================================================================
// Correlation Matrix
// ============================================================================

/// Square symmetric association matrix over a declared variable set.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix<T> {
    /// Variable names, in declaration order, along both axes.
    pub variables: Vec<String>,
    /// Row-major coefficients; `values[i][j]` pairs variable i with j.
    pub values: Vec<Vec<T>>,
}

impl<T: Float> CorrelationMatrix<T> {
    /// Coefficient for the variable pair `(i, j)`.
    #[inline]
    pub fn coefficient(&self, i: usize, j: usize) -> T {
        self.values[i][j]
    }

    /// Number of variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the matrix is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Compute the full association matrix over `variables`.
///
/// Numeric pairs use Pearson correlation; any pair involving a categorical
/// variable uses Cramér's V with numeric values formatted into categories.
/// All variables must have the same number of observations.
pub fn correlation_matrix<T: Float>(
    variables: &[Variable<T>],
) -> Result<CorrelationMatrix<T>, LayoutError> {
    if variables.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let n = variables[0].data.len();
    for variable in variables {
        if variable.data.len() != n {
            return Err(LayoutError::MismatchedInputs {
                left: n,
                right: variable.data.len(),
            });
        }
    }

    let count = variables.len();
    let mut values = vec![vec![T::zero(); count]; count];

    for i in 0..count {
        values[i][i] = T::one();
        for j in (i + 1)..count {
            let coefficient = pair_coefficient(&variables[i].data, &variables[j].data);
            values[i][j] = coefficient;
            values[j][i] = coefficient;
        }
    }

    Ok(CorrelationMatrix {
        variables: variables.iter().map(|v| v.name.clone()).collect(),
        values,
    })
}

fn pair_coefficient<T: Float>(a: &VariableData<T>, b: &VariableData<T>) -> T {
    match (a, b) {
        (VariableData::Numeric(x), VariableData::Numeric(y)) => pearson(x, y),
        _ => cramers_v(&stringify(a), &stringify(b)),
    }
}

fn stringify<T: Float>(data: &VariableData<T>) -> Vec<String> {
    match data {
        VariableData::Categorical(values) => values.clone(),
        VariableData::Numeric(values) => values
            .iter()
            .map(|v| format!("{}", v.to_f64().unwrap_or(f64::NAN)))
            .collect(),
    }
}
