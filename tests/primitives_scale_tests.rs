#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use plotgeom_rs::internals::primitives::scale::{linear, BandScale, PointScale};

// ============================================================================
// Linear Scale Tests
// ============================================================================

#[test]
fn test_linear_endpoints_exact() {
    let scale = linear((0.0, 10.0), (0.0, 100.0));
    assert_relative_eq!(scale(0.0), 0.0);
    assert_relative_eq!(scale(10.0), 100.0);
}

#[test]
fn test_linear_interpolates() {
    let scale = linear((0.0, 10.0), (0.0, 100.0));
    assert_relative_eq!(scale(5.0), 50.0);
    assert_relative_eq!(scale(2.5), 25.0);
}

#[test]
fn test_linear_inverted_range() {
    // Violin-style scale: larger values map upward (smaller y).
    let scale = linear((0.0, 10.0), (100.0, 0.0));
    assert_relative_eq!(scale(0.0), 100.0);
    assert_relative_eq!(scale(10.0), 0.0);
    assert_relative_eq!(scale(7.5), 25.0);
}

#[test]
fn test_linear_degenerate_domain() {
    let scale = linear((5.0, 5.0), (10.0, 20.0));
    assert_relative_eq!(scale(5.0), 10.0);
    assert_relative_eq!(scale(99.0), 10.0);
}

#[test]
fn test_linear_extrapolates() {
    let scale = linear((0.0, 10.0), (0.0, 100.0));
    assert_relative_eq!(scale(-1.0), -10.0, epsilon = 1e-12);
    assert_relative_eq!(scale(11.0), 110.0, epsilon = 1e-12);
}

// ============================================================================
// Band Scale Tests
// ============================================================================

#[test]
fn test_band_scale_positions() {
    let bands: BandScale<f64> = BandScale::new(2, (0.0, 100.0), 0.1);
    // step 50, bandwidth 45, centering offset 2.5
    assert_relative_eq!(bands.step(), 50.0);
    assert_relative_eq!(bands.bandwidth(), 45.0, epsilon = 1e-12);
    assert_relative_eq!(bands.start(0).unwrap(), 2.5, epsilon = 1e-12);
    assert_relative_eq!(bands.start(1).unwrap(), 52.5, epsilon = 1e-12);
    assert_relative_eq!(bands.center(0).unwrap(), 25.0, epsilon = 1e-12);
    assert_relative_eq!(bands.center(1).unwrap(), 75.0, epsilon = 1e-12);
}

#[test]
fn test_band_scale_no_padding() {
    let bands: BandScale<f64> = BandScale::new(4, (0.0, 100.0), 0.0);
    assert_relative_eq!(bands.bandwidth(), 25.0);
    assert_relative_eq!(bands.start(0).unwrap(), 0.0);
    assert_relative_eq!(bands.start(3).unwrap(), 75.0);
}

#[test]
fn test_band_scale_bands_stay_inside_range() {
    let bands: BandScale<f64> = BandScale::new(3, (0.0, 90.0), 0.2);
    for i in 0..3 {
        let start = bands.start(i).unwrap();
        assert!(start >= 0.0);
        assert!(start + bands.bandwidth() <= 90.0 + 1e-9);
    }
}

#[test]
fn test_band_scale_out_of_bounds() {
    let bands: BandScale<f64> = BandScale::new(2, (0.0, 10.0), 0.0);
    assert!(bands.start(2).is_none());
    assert!(bands.center(5).is_none());
}

#[test]
fn test_band_scale_empty() {
    let bands: BandScale<f64> = BandScale::new(0, (0.0, 10.0), 0.0);
    assert!(bands.is_empty());
    assert!(bands.start(0).is_none());
}

// ============================================================================
// Point Scale Tests
// ============================================================================

#[test]
fn test_point_scale_positions() {
    let points: PointScale<f64> = PointScale::new(3, (0.0, 100.0));
    assert_relative_eq!(points.position(0).unwrap(), 0.0);
    assert_relative_eq!(points.position(1).unwrap(), 50.0);
    assert_relative_eq!(points.position(2).unwrap(), 100.0);
    assert_relative_eq!(points.step(), 50.0);
}

#[test]
fn test_point_scale_single_point() {
    let points: PointScale<f64> = PointScale::new(1, (10.0, 60.0));
    assert_relative_eq!(points.position(0).unwrap(), 10.0);
    assert_relative_eq!(points.step(), 50.0);
}

#[test]
fn test_point_scale_out_of_bounds() {
    let points: PointScale<f64> = PointScale::new(2, (0.0, 10.0));
    assert!(points.position(2).is_none());
}
