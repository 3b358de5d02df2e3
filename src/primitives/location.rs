//! Well-known-text point parsing.
//!
//! ## Purpose
//!
//! This module parses location strings of the exact form
//! `POINT (<lng> <lat>)` into latitude/longitude pairs. It is an auxiliary
//! pure function, used once per record by callers that ingest geographic
//! columns; it is independent of every layout engine.
//!
//! ## Design notes
//!
//! * **Exact pattern**: Each coordinate must match an optional minus sign,
//!   one or more digits, a decimal point, and one or more digits. Anything
//!   else — extra whitespace, missing parentheses, integer coordinates —
//!   is a non-match.
//! * **Never fails loudly**: Malformed input yields `None`; caller-side
//!   filtering drops the record.
//!
//! ## Invariants
//!
//! * A `Some` result contains two finite floats.
//!
//! ## Non-goals
//!
//! * This module does not validate coordinate ranges.
//! * This module does not support other well-known-text geometries.

// ============================================================================
// Geographic Point
// ============================================================================

/// A parsed geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a `POINT (<lng> <lat>)` string.
///
/// Returns `None` on any deviation from the exact pattern.
pub fn parse_point(input: &str) -> Option<GeoPoint> {
    let rest = input.strip_prefix("POINT (")?;
    let rest = rest.strip_suffix(')')?;

    let mut parts = rest.split(' ');
    let lng_text = parts.next()?;
    let lat_text = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let lng = parse_coordinate(lng_text)?;
    let lat = parse_coordinate(lat_text)?;

    Some(GeoPoint { lat, lng })
}

/// Parse one coordinate matching `-?\d+\.\d+` exactly.
fn parse_coordinate(text: &str) -> Option<f64> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    let (whole, frac) = digits.split_once('.')?;
    if whole.is_empty() || frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}
