#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use core::f64::consts::{FRAC_PI_2, PI};
use plotgeom_rs::internals::algorithms::sunburst::{sunburst, SunburstConfig, MIN_SPAN};
use plotgeom_rs::internals::primitives::arena::TreeNode;

const TAU: f64 = 2.0 * PI;

fn config(root: TreeNode<f64>) -> SunburstConfig<f64> {
    SunburstConfig {
        root,
        width: 600.0,
        height: 600.0,
    }
}

// ============================================================================
// Angular Span Tests
// ============================================================================

#[test]
fn test_top_level_spans_sum_to_full_circle() {
    let root = TreeNode::branch(
        "root",
        vec![
            TreeNode::leaf("a", 3.0),
            TreeNode::leaf("b", 2.0),
            TreeNode::leaf("c", 1.0),
        ],
    );
    let layout = sunburst(&config(root)).unwrap();

    let total: f64 = layout
        .arcs
        .iter()
        .filter(|arc| arc.depth == 1)
        .map(|arc| arc.end_angle - arc.start_angle)
        .sum();
    assert_relative_eq!(total, TAU, epsilon = 1e-9);
}

#[test]
fn test_spans_proportional_to_values() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::leaf("a", 3.0), TreeNode::leaf("b", 1.0)],
    );
    let layout = sunburst(&config(root)).unwrap();

    let a = &layout.arcs[0];
    let b = &layout.arcs[1];
    assert_relative_eq!(a.end_angle - a.start_angle, TAU * 0.75, epsilon = 1e-9);
    assert_relative_eq!(b.end_angle - b.start_angle, TAU * 0.25, epsilon = 1e-9);
}

#[test]
fn test_first_arc_starts_at_top() {
    let root = TreeNode::branch("root", vec![TreeNode::leaf("a", 1.0)]);
    let layout = sunburst(&config(root)).unwrap();
    assert_relative_eq!(layout.arcs[0].start_angle, -FRAC_PI_2);
}

#[test]
fn test_children_stay_inside_parent_span() {
    let root = TreeNode::branch(
        "root",
        vec![
            TreeNode::branch(
                "left",
                vec![TreeNode::leaf("a", 2.0), TreeNode::leaf("b", 1.0)],
            ),
            TreeNode::leaf("c", 3.0),
        ],
    );
    let layout = sunburst(&config(root)).unwrap();

    for arc in &layout.arcs {
        let node = layout.arena.node(arc.index);
        if let Some(parent) = node.parent {
            if parent == layout.arena.root() {
                continue;
            }
            let parent_arc = layout
                .arcs
                .iter()
                .find(|candidate| candidate.index == parent)
                .unwrap();
            assert!(arc.start_angle >= parent_arc.start_angle - 1e-9);
            assert!(arc.end_angle <= parent_arc.end_angle + 1e-9);
        }
    }
}

#[test]
fn test_siblings_do_not_overlap() {
    let root = TreeNode::branch(
        "root",
        vec![
            TreeNode::leaf("a", 5.0),
            TreeNode::leaf("b", 3.0),
            TreeNode::leaf("c", 2.0),
        ],
    );
    let layout = sunburst(&config(root)).unwrap();

    for pair in layout.arcs.windows(2) {
        assert!(pair[1].start_angle >= pair[0].end_angle - 1e-9);
    }
}

// ============================================================================
// Minimum Span Tests
// ============================================================================

#[test]
fn test_zero_value_node_keeps_minimum_span() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::leaf("a", 100.0), TreeNode::leaf("tiny", 0.0)],
    );
    let layout = sunburst(&config(root)).unwrap();

    let tiny = layout.arcs.iter().find(|arc| arc.id == "tiny").unwrap();
    assert_relative_eq!(
        tiny.end_angle - tiny.start_angle,
        MIN_SPAN,
        epsilon = 1e-12
    );
}

// ============================================================================
// Radial Band Tests
// ============================================================================

#[test]
fn test_band_width_is_radius_over_max_depth() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::branch(
            "mid",
            vec![TreeNode::leaf("leaf", 1.0)],
        )],
    );
    let layout = sunburst(&config(root)).unwrap();

    // 600x600 canvas: outer radius 300, max depth 2, band 150.
    let mid = layout.arcs.iter().find(|arc| arc.id == "mid").unwrap();
    assert_relative_eq!(mid.inner_radius, 0.0);
    assert_relative_eq!(mid.outer_radius, 150.0);

    let leaf = layout.arcs.iter().find(|arc| arc.id == "leaf").unwrap();
    assert_relative_eq!(leaf.inner_radius, 150.0);
    assert_relative_eq!(leaf.outer_radius, 300.0);
}

#[test]
fn test_deepest_band_reaches_outer_radius() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::branch(
            "a",
            vec![TreeNode::branch("b", vec![TreeNode::leaf("c", 1.0)])],
        )],
    );
    let layout = sunburst(&config(root)).unwrap();

    let deepest = layout
        .arcs
        .iter()
        .max_by(|x, y| x.depth.cmp(&y.depth))
        .unwrap();
    assert_relative_eq!(deepest.outer_radius, layout.outer_radius);
}

// ============================================================================
// Ancestry Tests
// ============================================================================

#[test]
fn test_breadcrumbs_walk_to_root() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::branch(
            "mid",
            vec![TreeNode::leaf("leaf", 1.0)],
        )],
    );
    let layout = sunburst(&config(root)).unwrap();

    let leaf = layout.arcs.iter().find(|arc| arc.id == "leaf").unwrap();
    let ids: Vec<&str> = layout
        .arena
        .ancestors(leaf.index)
        .map(|index| layout.arena.node(index).id.as_str())
        .collect();
    assert_eq!(ids, vec!["leaf", "mid", "root"]);
}

#[test]
fn test_arcs_have_paths() {
    let root = TreeNode::branch(
        "root",
        vec![TreeNode::leaf("a", 2.0), TreeNode::leaf("b", 1.0)],
    );
    let layout = sunburst(&config(root)).unwrap();
    for arc in &layout.arcs {
        assert!(!arc.path.is_empty());
    }
}
