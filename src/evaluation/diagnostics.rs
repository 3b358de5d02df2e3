//! Layout quality diagnostics.
//!
//! ## Purpose
//!
//! This module computes optional quality metrics over finished layouts,
//! currently aspect-ratio statistics for treemap cells.
//!
//! ## Design notes
//!
//! * **After the fact**: Diagnostics read completed layout output; they
//!   never influence the layout itself.
//! * **Leaves only**: Treemap aspect ratios are computed over leaf cells —
//!   branch rectangles are subdivided anyway.
//!
//! ## Key concepts
//!
//! * **Aspect ratio**: `max(w, h) / min(w, h)`, 1 for a perfect square;
//!   zero-area cells are skipped.
//!
//! ## Non-goals
//!
//! * This module does not score layouts against each other.
//! * This module does not validate containment; tests do that directly.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::treemap::TreemapLayout;

// ============================================================================
// Treemap Diagnostics
// ============================================================================

/// Aspect-ratio statistics over a treemap's leaf cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectSummary<T> {
    /// Mean leaf aspect ratio.
    pub mean: T,
    /// Worst (largest) leaf aspect ratio.
    pub worst: T,
    /// Number of leaf cells measured.
    pub cells: usize,
}

/// Measure leaf aspect ratios, or `None` if every leaf is degenerate.
pub fn aspect_summary<T: Float>(layout: &TreemapLayout<T>) -> Option<AspectSummary<T>> {
    let mut sum = T::zero();
    let mut worst = T::zero();
    let mut cells = 0usize;

    for cell in &layout.cells {
        if !cell.leaf {
            continue;
        }
        let w = cell.width();
        let h = cell.height();
        if w <= T::zero() || h <= T::zero() {
            continue;
        }

        let ratio = w.max(h) / w.min(h);
        sum = sum + ratio;
        if ratio > worst {
            worst = ratio;
        }
        cells += 1;
    }

    if cells == 0 {
        return None;
    }

    Some(AspectSummary {
        mean: sum / T::from(cells).unwrap(),
        worst,
        cells,
    })
}
