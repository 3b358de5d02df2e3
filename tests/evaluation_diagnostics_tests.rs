#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use plotgeom_rs::internals::algorithms::treemap::{treemap, TreemapConfig};
use plotgeom_rs::internals::engine::output::{ConvergenceReport, SimulationStatus};
use plotgeom_rs::internals::evaluation::diagnostics::aspect_summary;
use plotgeom_rs::internals::primitives::arena::TreeNode;

// ============================================================================
// Aspect Summary Tests
// ============================================================================

#[test]
fn test_aspect_summary_equal_halves() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::leaf("a", 1.0), TreeNode::leaf("b", 1.0)],
    );
    let layout = treemap(&TreemapConfig {
        root,
        width: 800.0,
        height: 400.0,
    })
    .unwrap();

    // Two 400x400 leaves: perfect squares.
    let summary = aspect_summary(&layout).unwrap();
    assert_eq!(summary.cells, 2);
    assert_relative_eq!(summary.mean, 1.0);
    assert_relative_eq!(summary.worst, 1.0);
}

#[test]
fn test_aspect_summary_worst_at_least_mean() {
    let root = TreeNode::branch(
        "root",
        vec![
            TreeNode::leaf("a", 70.0),
            TreeNode::leaf("b", 20.0),
            TreeNode::leaf("c", 10.0),
        ],
    );
    let layout = treemap(&TreemapConfig {
        root,
        width: 640.0,
        height: 480.0,
    })
    .unwrap();

    let summary = aspect_summary(&layout).unwrap();
    assert!(summary.worst >= summary.mean);
    assert!(summary.mean >= 1.0);
}

#[test]
fn test_aspect_summary_skips_zero_area_leaves() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::leaf("a", 1.0), TreeNode::leaf("empty", 0.0)],
    );
    let layout = treemap(&TreemapConfig {
        root,
        width: 400.0,
        height: 400.0,
    })
    .unwrap();

    let summary = aspect_summary(&layout).unwrap();
    assert_eq!(summary.cells, 1);
}

#[test]
fn test_aspect_summary_all_degenerate_is_none() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::leaf("a", 0.0), TreeNode::leaf("b", 0.0)],
    );
    let layout = treemap(&TreemapConfig {
        root,
        width: 400.0,
        height: 400.0,
    })
    .unwrap();

    assert!(aspect_summary(&layout).is_none());
}

// ============================================================================
// Convergence Report Tests
// ============================================================================

#[test]
fn test_convergence_report_flag() {
    let converged: ConvergenceReport<f64> = ConvergenceReport {
        status: SimulationStatus::Converged,
        iterations: 42,
        final_displacement: 0.05,
    };
    assert!(converged.converged());

    let exhausted: ConvergenceReport<f64> = ConvergenceReport {
        status: SimulationStatus::BudgetExhausted,
        iterations: 300,
        final_displacement: 1.7,
    };
    assert!(!exhausted.converged());
}
