#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use core::f64::consts::PI;
use plotgeom_rs::internals::algorithms::chord::{chord, ChordConfig};
use plotgeom_rs::internals::primitives::errors::LayoutError;

const TAU: f64 = 2.0 * PI;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Group Tests
// ============================================================================

#[test]
fn test_group_spans_sum_to_circle() {
    let config = ChordConfig::new(
        vec![
            vec![0.0, 10.0, 5.0],
            vec![5.0, 0.0, 10.0],
            vec![10.0, 5.0, 0.0],
        ],
        labels(&["a", "b", "c"]),
        600.0,
        600.0,
    );
    let layout = chord(&config).unwrap();

    let total: f64 = layout
        .groups
        .iter()
        .map(|g| g.end_angle - g.start_angle)
        .sum();
    assert_relative_eq!(total, TAU, epsilon = 1e-9);
}

#[test]
fn test_group_spans_proportional_to_row_totals() {
    let config = ChordConfig::new(
        vec![vec![0.0, 10.0], vec![5.0, 0.0]],
        labels(&["a", "b"]),
        600.0,
        600.0,
    );
    let layout = chord(&config).unwrap();

    assert_relative_eq!(
        layout.groups[0].end_angle - layout.groups[0].start_angle,
        TAU * 10.0 / 15.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        layout.groups[1].end_angle - layout.groups[1].start_angle,
        TAU * 5.0 / 15.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_groups_are_contiguous() {
    let config = ChordConfig::new(
        vec![
            vec![0.0, 1.0, 2.0],
            vec![3.0, 0.0, 4.0],
            vec![5.0, 6.0, 0.0],
        ],
        labels(&["a", "b", "c"]),
        500.0,
        500.0,
    );
    let layout = chord(&config).unwrap();

    assert_relative_eq!(layout.groups[0].start_angle, 0.0);
    for pair in layout.groups.windows(2) {
        assert_relative_eq!(pair[0].end_angle, pair[1].start_angle);
    }
}

// ============================================================================
// Ribbon Tests
// ============================================================================

#[test]
fn test_one_ribbon_per_nonzero_off_diagonal_cell() {
    let config = ChordConfig::new(
        vec![vec![7.0, 10.0], vec![5.0, 0.0]],
        labels(&["a", "b"]),
        600.0,
        600.0,
    );
    let layout = chord(&config).unwrap();

    // Diagonal 7.0 and zero cells produce no ribbons.
    assert_eq!(layout.chords.len(), 2);
}

#[test]
fn test_ribbon_spans_inside_their_groups() {
    let config = ChordConfig::new(
        vec![
            vec![0.0, 4.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 2.0, 0.0],
        ],
        labels(&["a", "b", "c"]),
        600.0,
        600.0,
    );
    let layout = chord(&config).unwrap();

    for ribbon in &layout.chords {
        let source_group = &layout.groups[ribbon.source];
        assert!(ribbon.source_start >= source_group.start_angle - 1e-9);
        assert!(ribbon.source_end <= source_group.end_angle + 1e-9);

        let target_group = &layout.groups[ribbon.target];
        assert!(ribbon.target_start >= target_group.start_angle - 1e-9);
        assert!(ribbon.target_end <= target_group.end_angle + 1e-9);
    }
}

#[test]
fn test_ribbon_source_spans_do_not_overlap() {
    let config = ChordConfig::<f64>::new(
        vec![
            vec![0.0, 4.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 2.0, 0.0],
        ],
        labels(&["a", "b", "c"]),
        600.0,
        600.0,
    );
    let layout = chord(&config).unwrap();

    for i in 0..layout.chords.len() {
        for j in (i + 1)..layout.chords.len() {
            let (a, b) = (&layout.chords[i], &layout.chords[j]);
            if a.source != b.source {
                continue;
            }
            let overlap = a.source_end.min(b.source_end) - a.source_start.max(b.source_start);
            assert!(overlap <= 1e-9);
        }
    }
}

#[test]
fn test_ribbons_have_paths() {
    let config = ChordConfig::new(
        vec![vec![0.0, 2.0], vec![3.0, 0.0]],
        labels(&["a", "b"]),
        400.0,
        400.0,
    );
    let layout = chord(&config).unwrap();
    for ribbon in &layout.chords {
        assert_eq!(ribbon.path.len(), 6);
    }
}

// ============================================================================
// Geometry Tests
// ============================================================================

#[test]
fn test_radii_respect_padding() {
    let config = ChordConfig::new(
        vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        labels(&["a", "b"]),
        600.0,
        600.0,
    );
    let layout = chord(&config).unwrap();

    // 600x600 canvas, default padding 20: radius 280, rim inner 252.
    assert_relative_eq!(layout.radius, 280.0);
    assert_relative_eq!(layout.inner_radius, 252.0, epsilon = 1e-9);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_non_square_matrix_is_error() {
    let config = ChordConfig::new(
        vec![vec![0.0, 1.0], vec![1.0]],
        labels(&["a", "b"]),
        400.0,
        400.0,
    );
    assert_eq!(
        chord(&config),
        Err(LayoutError::NotSquare { rows: 2, cols: 1 })
    );
}

#[test]
fn test_label_count_mismatch_is_error() {
    let config = ChordConfig::new(
        vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        labels(&["a"]),
        400.0,
        400.0,
    );
    assert_eq!(
        chord(&config),
        Err(LayoutError::MismatchedInputs { left: 2, right: 1 })
    );
}

#[test]
fn test_zero_total_yields_no_chords() {
    let config = ChordConfig::new(
        vec![vec![0.0, 0.0], vec![0.0, 0.0]],
        labels(&["a", "b"]),
        400.0,
        400.0,
    );
    let layout = chord(&config).unwrap();
    assert!(layout.chords.is_empty());
    for group in &layout.groups {
        assert_relative_eq!(group.end_angle - group.start_angle, 0.0);
    }
}
