#![cfg(feature = "dev")]

use plotgeom_rs::internals::engine::output::SimulationStatus;
use plotgeom_rs::internals::engine::simulation::{ForceSimulation, SimulationConfig};
use plotgeom_rs::internals::primitives::errors::LayoutError;
use plotgeom_rs::internals::primitives::graph::{LinkSpec, NodeSpec};

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

fn positions(sim: &ForceSimulation<f64>) -> Vec<(f64, f64)> {
    sim.nodes().iter().map(|n| (n.x, n.y)).collect()
}

fn average_pairwise(points: &[(f64, f64)]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            sum += distance(points[i], points[j]);
            count += 1;
        }
    }
    sum / count as f64
}

// ============================================================================
// Spring Distance Tests
// ============================================================================

#[test]
fn test_two_linked_nodes_settle_near_target_distance() {
    let mut config = SimulationConfig::new(800.0, 600.0);
    config.max_iterations = 1000;

    let nodes = vec![
        NodeSpec::new("a").radius(5.0),
        NodeSpec::new("b").radius(5.0),
    ];
    let links = vec![LinkSpec::new("a", "b")];

    let mut sim = ForceSimulation::new(&nodes, &links, config).unwrap();
    let status = sim.run();

    assert_eq!(status, SimulationStatus::Converged);
    assert!(sim.iterations() < 1000);

    let placed = positions(&sim);
    let separation = distance(placed[0], placed[1]);
    // Target distance 100; residual repulsion leaves a small overshoot.
    assert!(
        (separation - 100.0).abs() < 15.0,
        "separation {separation} not near the 100-unit target"
    );
}

#[test]
fn test_heavier_link_pulls_closer() {
    let mut config = SimulationConfig::new(800.0, 600.0);
    config.max_iterations = 1000;

    let run = |weight: f64| {
        let nodes = vec![
            NodeSpec::new("a").radius(5.0),
            NodeSpec::new("b").radius(5.0),
        ];
        let links = vec![LinkSpec::new("a", "b").weight(weight)];
        let mut sim = ForceSimulation::new(&nodes, &links, config.clone()).unwrap();
        sim.run();
        let placed = positions(&sim);
        distance(placed[0], placed[1])
    };

    // Target distance is base / max(weight, 1): 100 vs 50.
    assert!(run(2.0) < run(1.0));
}

// ============================================================================
// Strength Factor Tests
// ============================================================================

#[test]
fn test_higher_strength_never_decreases_spacing() {
    let run = |strength: f64| {
        let mut config = SimulationConfig::new(800.0, 600.0);
        config.strength_factor = strength;
        config.max_iterations = 150;
        config.seed = 2024;

        let nodes: Vec<NodeSpec<f64>> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| NodeSpec::new(*id).radius(5.0))
            .collect();
        let mut sim = ForceSimulation::new(&nodes, &[], config).unwrap();
        sim.run();
        average_pairwise(&positions(&sim))
    };

    let weak = run(0.5);
    let strong = run(2.0);
    assert!(strong >= weak - 1e-9);
}

#[test]
fn test_zero_strength_preserves_pairwise_distances() {
    let mut config = SimulationConfig::new(1000.0, 1000.0);
    config.strength_factor = 0.0;
    config.collision_margin = 0.0;
    config.seed = 7;

    let nodes = vec![
        NodeSpec::new("a").radius(0.0),
        NodeSpec::new("b").radius(0.0),
    ];
    let mut sim = ForceSimulation::new(&nodes, &[], config).unwrap();
    let initial = positions(&sim);
    sim.run();
    let settled = positions(&sim);

    // Only the centering force acts, and it translates all free nodes
    // equally, so pairwise geometry is untouched.
    let before = distance(initial[0], initial[1]);
    let after = distance(settled[0], settled[1]);
    assert!((before - after).abs() < 1e-9);
}

// ============================================================================
// Path Graph Scenario
// ============================================================================

#[test]
fn test_path_graph_converges_roughly_straight() {
    let mut config = SimulationConfig::new(800.0, 600.0);
    config.max_iterations = 2000;

    let ids = ["a", "b", "c", "d", "e"];
    let nodes: Vec<NodeSpec<f64>> = ids.iter().map(|id| NodeSpec::new(*id).radius(5.0)).collect();
    let links: Vec<LinkSpec<f64>> = ids
        .windows(2)
        .map(|pair| LinkSpec::new(pair[0], pair[1]))
        .collect();

    let mut sim = ForceSimulation::new(&nodes, &links, config).unwrap();
    let status = sim.run();
    assert_eq!(status, SimulationStatus::Converged);

    // Chain straightness: the end-to-end distance approaches the summed
    // segment lengths when the chain is collinear.
    let placed = positions(&sim);
    let chain: f64 = placed.windows(2).map(|p| distance(p[0], p[1])).sum();
    let end_to_end = distance(placed[0], placed[4]);
    assert!(
        end_to_end / chain > 0.85,
        "chain not roughly straight: {end_to_end} over {chain}"
    );
}

// ============================================================================
// Pinning Tests
// ============================================================================

#[test]
fn test_fixed_node_never_moves() {
    let mut config = SimulationConfig::new(800.0, 600.0);
    config.max_iterations = 500;

    let nodes = vec![
        NodeSpec::new("anchor").fixed(100.0, 100.0).radius(5.0),
        NodeSpec::new("free").radius(5.0),
    ];
    let links = vec![LinkSpec::new("anchor", "free")];

    let mut sim = ForceSimulation::new(&nodes, &links, config).unwrap();
    sim.run();

    let result = sim.result();
    let anchor = &result.nodes[0];
    assert_eq!(anchor.x, 100.0);
    assert_eq!(anchor.y, 100.0);
    assert!(anchor.pinned);
    assert!(!result.nodes[1].pinned);
}

#[test]
fn test_pin_reheats_and_holds_position() {
    let config = SimulationConfig::new(400.0, 400.0);
    let nodes = vec![NodeSpec::new("a").radius(5.0), NodeSpec::new("b").radius(5.0)];
    let links = vec![LinkSpec::new("a", "b")];

    let mut sim = ForceSimulation::new(&nodes, &links, config).unwrap();
    sim.run();
    assert!(sim.is_done());

    assert!(sim.pin("a", 50.0, 60.0));
    assert!(!sim.is_done());
    assert_eq!(sim.iterations(), 0);

    for _ in 0..10 {
        if sim.step() {
            break;
        }
    }
    let a = &sim.nodes()[0];
    assert_eq!(a.x, 50.0);
    assert_eq!(a.y, 60.0);

    assert!(sim.unpin("a"));
    assert!(!sim.is_done());

    assert!(!sim.pin("ghost", 0.0, 0.0));
}

// ============================================================================
// Termination Tests
// ============================================================================

#[test]
fn test_budget_exhaustion_returns_valid_positions() {
    let mut config = SimulationConfig::<f64>::new(800.0, 600.0);
    config.epsilon = 1e-12;
    config.max_iterations = 5;

    let nodes = vec![NodeSpec::new("a"), NodeSpec::new("b")];
    let links = vec![LinkSpec::new("a", "b")];

    let mut sim = ForceSimulation::new(&nodes, &links, config).unwrap();
    let status = sim.run();

    assert_eq!(status, SimulationStatus::BudgetExhausted);
    assert_eq!(sim.iterations(), 5);
    for node in sim.nodes() {
        assert!(node.x.is_finite());
        assert!(node.y.is_finite());
    }
}

#[test]
fn test_cancel_freezes_with_valid_snapshot() {
    let config = SimulationConfig::new(800.0, 600.0);
    let nodes = vec![NodeSpec::new("a"), NodeSpec::new("b"), NodeSpec::new("c")];
    let links = vec![LinkSpec::new("a", "b")];

    let mut sim = ForceSimulation::new(&nodes, &links, config).unwrap();
    sim.step();
    sim.cancel();

    assert!(sim.is_done());
    assert_eq!(sim.status(), SimulationStatus::Cancelled);

    let result = sim.result();
    assert_eq!(result.status, SimulationStatus::Cancelled);
    assert_eq!(result.nodes.len(), 3);
    assert_eq!(result.iterations, 1);

    // Further stepping is a no-op.
    assert!(sim.step());
    assert_eq!(sim.iterations(), 1);
}

#[test]
fn test_reheat_restarts_from_current_positions() {
    let config = SimulationConfig::new(400.0, 400.0);
    let nodes = vec![NodeSpec::new("a").radius(5.0), NodeSpec::new("b").radius(5.0)];
    let links = vec![LinkSpec::new("a", "b")];

    let mut sim = ForceSimulation::new(&nodes, &links, config).unwrap();
    sim.run();
    let settled = positions(&sim);

    sim.reheat();
    assert!(!sim.is_done());
    assert_eq!(sim.iterations(), 0);
    // Positions carry over, not a fresh random seed.
    assert_eq!(positions(&sim), settled);
}

#[test]
fn test_reseed_discards_in_flight_state() {
    let config = SimulationConfig::new(400.0, 400.0);
    let nodes = vec![NodeSpec::new("a"), NodeSpec::new("b")];
    let mut sim = ForceSimulation::new(&nodes, &[], config).unwrap();
    sim.run();

    let more = vec![NodeSpec::new("x"), NodeSpec::new("y"), NodeSpec::new("z")];
    sim.reseed(&more, &[]).unwrap();
    assert_eq!(sim.nodes().len(), 3);
    assert!(!sim.is_done());
    assert_eq!(sim.iterations(), 0);
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_same_seed_reproduces_layout() {
    let run = || {
        let mut config = SimulationConfig::new(800.0, 600.0);
        config.seed = 123;
        config.max_iterations = 50;
        let nodes = vec![NodeSpec::new("a"), NodeSpec::new("b"), NodeSpec::new("c")];
        let links = vec![LinkSpec::new("a", "b"), LinkSpec::new("b", "c")];
        let mut sim = ForceSimulation::new(&nodes, &links, config).unwrap();
        sim.run();
        positions(&sim)
    };

    assert_eq!(run(), run());
}

#[test]
fn test_different_seed_changes_initial_placement() {
    let initial = |seed: u64| {
        let mut config = SimulationConfig::new(800.0, 600.0);
        config.seed = seed;
        let nodes = vec![NodeSpec::new("a"), NodeSpec::new("b")];
        let sim = ForceSimulation::new(&nodes, &[], config).unwrap();
        positions(&sim)
    };

    assert_ne!(initial(1), initial(2));
}

// ============================================================================
// Graph Resolution Tests
// ============================================================================

#[test]
fn test_unknown_link_endpoint_is_error() {
    let config = SimulationConfig::new(400.0, 400.0);
    let nodes = vec![NodeSpec::new("a")];
    let links: Vec<LinkSpec<f64>> = vec![LinkSpec::new("a", "ghost")];
    let result = ForceSimulation::new(&nodes, &links, config);
    assert_eq!(
        result.err(),
        Some(LayoutError::UnknownNodeId("ghost".to_string()))
    );
}

#[test]
fn test_self_links_are_excluded() {
    let config = SimulationConfig::new(400.0, 400.0);
    let nodes = vec![NodeSpec::new("a"), NodeSpec::new("b")];
    let links = vec![LinkSpec::new("a", "a"), LinkSpec::new("a", "b")];
    let sim = ForceSimulation::new(&nodes, &links, config).unwrap();
    assert_eq!(sim.links().len(), 1);
}

#[test]
fn test_empty_nodes_is_error() {
    let config = SimulationConfig::new(400.0, 400.0);
    let nodes: Vec<NodeSpec<f64>> = Vec::new();
    let result = ForceSimulation::new(&nodes, &[], config);
    assert_eq!(result.err(), Some(LayoutError::EmptyNodes));
}
