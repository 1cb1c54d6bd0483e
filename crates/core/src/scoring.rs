//! Scoring - point values for fusion and decay products
//!
//! A fusion awards the point value of its product; a decay adjusts
//! the score by the rule's signed delta. Nothing else touches the
//! score.

use crate::elements::{self, Nuclide};

/// Point value of a nuclide
///
/// Uses the element table's explicit value if present; otherwise
/// derives mass-number/2 from the id prefix. The fallback exists so
/// new nuclides can join the fusion graph without a matching table
/// entry - it also means `Hydrogen` (no prefix, no entry) is worth 0.
pub fn point_value(nuclide: Nuclide) -> f64 {
    if let Some(points) = elements::lookup(nuclide).and_then(|def| def.points) {
        return points;
    }
    elements::mass_number(nuclide.id()) as f64 / 2.0
}
