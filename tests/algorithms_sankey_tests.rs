#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use plotgeom_rs::internals::algorithms::sankey::{sankey, FlowSpec, SankeyConfig};
use plotgeom_rs::internals::primitives::errors::LayoutError;

fn flows(specs: &[(&str, &str, f64)]) -> Vec<FlowSpec<f64>> {
    specs
        .iter()
        .map(|&(s, t, v)| FlowSpec::new(s, t, v))
        .collect()
}

fn config(specs: &[(&str, &str, f64)]) -> SankeyConfig<f64> {
    SankeyConfig::new(flows(specs), 800.0, 400.0)
}

// ============================================================================
// Column Assignment Tests
// ============================================================================

#[test]
fn test_columns_follow_flow_direction() {
    let layout = sankey(&config(&[
        ("gas", "hybrid", 10.0),
        ("hybrid", "electric", 6.0),
        ("hybrid", "scrapped", 4.0),
    ]))
    .unwrap();

    for link in &layout.links {
        let source_column = layout.nodes[link.source].column;
        let target_column = layout.nodes[link.target].column;
        assert!(
            target_column > source_column,
            "link {} -> {} does not advance columns",
            layout.nodes[link.source].id,
            layout.nodes[link.target].id
        );
    }
}

#[test]
fn test_source_nodes_in_first_column() {
    let layout = sankey(&config(&[
        ("a", "b", 5.0),
        ("c", "b", 3.0),
        ("b", "d", 8.0),
    ]))
    .unwrap();

    let by_id = |id: &str| layout.nodes.iter().find(|n| n.id == id).unwrap();
    assert_eq!(by_id("a").column, 0);
    assert_eq!(by_id("c").column, 0);
    assert_eq!(by_id("b").column, 1);
    assert_eq!(by_id("d").column, 2);
}

#[test]
fn test_cyclic_graph_is_rejected() {
    let result = sankey(&config(&[("a", "b", 1.0), ("b", "a", 1.0)]));
    assert_eq!(result, Err(LayoutError::CyclicFlow { unplaced: 2 }));
}

#[test]
fn test_self_link_counts_as_cycle() {
    let result = sankey(&config(&[("a", "a", 1.0)]));
    assert!(matches!(result, Err(LayoutError::CyclicFlow { .. })));
}

#[test]
fn test_partial_cycle_reports_unplaced_nodes() {
    let result = sankey(&config(&[
        ("start", "x", 1.0),
        ("x", "y", 1.0),
        ("y", "x", 1.0),
    ]));
    // "start" places; the x/y loop cannot.
    assert_eq!(result, Err(LayoutError::CyclicFlow { unplaced: 2 }));
}

// ============================================================================
// Node Sizing Tests
// ============================================================================

#[test]
fn test_node_value_is_max_of_directional_sums() {
    let layout = sankey(&config(&[
        ("a", "b", 10.0),
        ("b", "c", 6.0),
        ("b", "d", 4.0),
    ]))
    .unwrap();

    let by_id = |id: &str| layout.nodes.iter().find(|n| n.id == id).unwrap();
    assert_relative_eq!(by_id("a").value, 10.0);
    assert_relative_eq!(by_id("b").value, 10.0); // max(in 10, out 10)
    assert_relative_eq!(by_id("c").value, 6.0);
    assert_relative_eq!(by_id("d").value, 4.0);
}

#[test]
fn test_internal_node_conserves_flow() {
    let layout = sankey(&config(&[
        ("a", "b", 10.0),
        ("b", "c", 6.0),
        ("b", "d", 4.0),
    ]))
    .unwrap();

    let b = layout.nodes.iter().find(|n| n.id == "b").unwrap();
    let incoming: f64 = layout
        .links
        .iter()
        .filter(|l| l.target == b.index)
        .map(|l| l.value)
        .sum();
    let outgoing: f64 = layout
        .links
        .iter()
        .filter(|l| l.source == b.index)
        .map(|l| l.value)
        .sum();
    assert_relative_eq!(incoming, outgoing);
}

#[test]
fn test_column_nodes_do_not_overlap() {
    let layout = sankey(&config(&[
        ("a", "b", 10.0),
        ("b", "c", 6.0),
        ("b", "d", 4.0),
    ]))
    .unwrap();

    // c and d share the last column.
    for column in &layout.columns {
        for i in 0..column.len() {
            for j in (i + 1)..column.len() {
                let a = &layout.nodes[column[i]];
                let b = &layout.nodes[column[j]];
                let overlap = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
                assert!(
                    overlap <= 1e-9,
                    "nodes {} and {} overlap vertically",
                    a.id,
                    b.id
                );
            }
        }
    }
}

#[test]
fn test_column_heights_account_for_padding() {
    let layout = sankey(&config(&[
        ("a", "b", 5.0),
        ("a", "c", 5.0),
        ("b", "d", 5.0),
        ("c", "d", 5.0),
    ]))
    .unwrap();

    // b and c share a column: heights plus one padding fill the canvas.
    let b = layout.nodes.iter().find(|n| n.id == "b").unwrap();
    let c = layout.nodes.iter().find(|n| n.id == "c").unwrap();
    assert_eq!(b.column, c.column);
    assert_relative_eq!(b.height + c.height + 10.0, 400.0, epsilon = 1e-9);
}

// ============================================================================
// Link Span Tests
// ============================================================================

#[test]
fn test_link_spans_stay_inside_their_nodes() {
    let layout = sankey(&config(&[
        ("a", "b", 10.0),
        ("a", "c", 5.0),
        ("b", "d", 6.0),
        ("b", "e", 4.0),
        ("c", "d", 5.0),
    ]))
    .unwrap();

    for link in &layout.links {
        let source = &layout.nodes[link.source];
        assert!(link.source_y >= source.y - 1e-9);
        assert!(link.source_y + link.thickness <= source.y + source.height + 1e-9);

        let target = &layout.nodes[link.target];
        assert!(link.target_y >= target.y - 1e-9);
    }
}

#[test]
fn test_sibling_link_spans_do_not_overlap() {
    let layout = sankey(&config(&[
        ("a", "b", 6.0),
        ("a", "c", 4.0),
    ]))
    .unwrap();

    let spans: Vec<(f64, f64)> = layout
        .links
        .iter()
        .map(|l| (l.source_y, l.source_y + l.thickness))
        .collect();
    assert!(spans[0].1 <= spans[1].0 + 1e-9 || spans[1].1 <= spans[0].0 + 1e-9);
}

#[test]
fn test_link_paths_are_cubic() {
    let layout = sankey(&config(&[("a", "b", 1.0)])).unwrap();
    assert_eq!(layout.links[0].path.len(), 2);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_empty_flows_is_error() {
    let empty: Vec<FlowSpec<f64>> = Vec::new();
    let result = sankey(&SankeyConfig::new(empty, 800.0, 400.0));
    assert_eq!(result, Err(LayoutError::EmptyInput));
}

#[test]
fn test_invalid_dimensions_is_error() {
    let result = sankey(&SankeyConfig::new(flows(&[("a", "b", 1.0)]), 0.0, 400.0));
    assert!(matches!(
        result,
        Err(LayoutError::InvalidDimensions { .. })
    ));
}
