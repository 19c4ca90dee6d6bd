//! # Quantity/UOM Types Module
//!
//! This module defines the result type returned by quantity/unit extractors.

use serde::Serialize;
use std::fmt;

/// An extracted (quantity, unit of measure) pair
///
/// `Q` is `String` for the textual variant and `f64` for the numeric one.
/// The unit is always the table's own spelling, whatever the casing in the description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QtyUom<Q> {
    /// The quantity (e.g., "77", "1.000", 12.5)
    pub quantity: Q,
    /// The matched unit of measure (e.g., "stck", "mm")
    pub uom: &'static str,
}

impl<Q> QtyUom<Q> {
    pub fn new(quantity: Q, uom: &'static str) -> Self {
        Self { quantity, uom }
    }

    /// Convert into a plain `(quantity, uom)` tuple
    pub fn into_pair(self) -> (Q, &'static str) {
        (self.quantity, self.uom)
    }
}

impl<Q: fmt::Display> fmt::Display for QtyUom<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.uom)
    }
}
