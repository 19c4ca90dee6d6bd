//! # Unit Priority Table Module
//!
//! This module holds the ordered list of recognized units of measure.
//! Position in the list is priority: index 0 wins over every other unit.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Valid units of measure, highest priority first
pub const UOM_PRIORITY_TABLE: [&str; 20] = [
    "stk", "stk.", "stck", "stück", "stg", "stg.", "st", "st.", "stange", "stange(n)", "tafel",
    "tfl", "taf", "mtr", "meter", "qm", "kg", "lfm", "mm", "m",
];

// Lowercased unit -> priority index, built once so matching never walks the table
lazy_static! {
    static ref UOM_PRIORITY_INDEX: HashMap<String, usize> = {
        let mut map = HashMap::with_capacity(UOM_PRIORITY_TABLE.len());
        for (priority, unit) in UOM_PRIORITY_TABLE.iter().enumerate() {
            map.entry(unit.to_lowercase()).or_insert(priority);
        }
        map
    };
}

/// Priority index of a token, compared case-insensitively against the table
///
/// Returns `None` when the token is not a recognized unit.
///
/// # Examples
///
/// ```rust
/// use qtyuom::uom_table::priority_of;
///
/// assert_eq!(priority_of("STK"), Some(0));
/// assert_eq!(priority_of("m"), Some(19));
/// assert_eq!(priority_of("cups"), None);
/// ```
pub fn priority_of(token: &str) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    UOM_PRIORITY_INDEX.get(&token.to_lowercase()).copied()
}

/// Unit string as written in the table for a priority index
pub fn unit_at(priority: usize) -> Option<&'static str> {
    UOM_PRIORITY_TABLE.get(priority).copied()
}
