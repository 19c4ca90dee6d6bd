//! # Quantity/UOM Extractor Module
//!
//! This module extracts a (quantity, unit of measure) pair from free-text
//! product descriptions such as `"black steel bar 35 mm 77 stck"`.
//!
//! ## Algorithm
//!
//! - The description is split on single spaces; tokens are never trimmed,
//!   so repeated spaces produce empty tokens.
//! - The winning unit is the recognized token with the lowest priority index
//!   in [`UOM_PRIORITY_TABLE`](crate::uom_table::UOM_PRIORITY_TABLE). On equal
//!   priority the leftmost token wins.
//! - The quantity is rebuilt by walking backward from the unit, collecting
//!   numeric tokens (and separators stranded between them) until the first
//!   token that is neither.
//!
//! For the example above the result is `"77"`/`"stck"`, not `"35"`/`"mm"`:
//! `stck` outranks `mm` regardless of where each appears.

use log::{debug, trace, warn};

use crate::qty_uom_errors::ExtractionError;
use crate::qty_uom_types::QtyUom;
use crate::uom_table::{priority_of, unit_at};

/// Extracts a quantity and its unit of measure from an article description
pub trait QtyUomExtractor {
    /// Extract the quantity as text together with the unit
    ///
    /// Returns `None` for blank descriptions, descriptions without a
    /// recognized unit, and units with no numeric quantity directly before them.
    fn extract(&self, description: &str) -> Option<QtyUom<String>>;

    /// Same as [`extract`](Self::extract), with the quantity parsed as `f64`
    ///
    /// A quantity that was accepted as numeric but does not parse as a whole
    /// (e.g. `"12,500"` rebuilt from `"12 , 500"`) is reported as
    /// [`ExtractionError::QuantityNotNumeric`] rather than `None`.
    fn extract_as_double(&self, description: &str) -> Result<Option<QtyUom<f64>>, ExtractionError> {
        let Some(pair) = self.extract(description) else {
            return Ok(None);
        };

        match pair.quantity.parse::<f64>() {
            Ok(value) => Ok(Some(QtyUom::new(value, pair.uom))),
            Err(source) => {
                warn!(
                    "Extracted quantity '{}' for unit '{}' does not parse as a number",
                    pair.quantity, pair.uom
                );
                Err(ExtractionError::QuantityNotNumeric {
                    quantity: pair.quantity,
                    source,
                })
            }
        }
    }
}

/// Extractor that picks the highest-priority unit, leftmost on ties
///
/// # Examples
///
/// ```rust
/// use qtyuom::qty_uom_extractor::{LeftMostUomExtractor, QtyUomExtractor};
///
/// let extractor = LeftMostUomExtractor::new();
/// let pair = extractor.extract("black steel bar 35 mm 77 stck").unwrap();
///
/// assert_eq!(pair.quantity, "77");
/// assert_eq!(pair.uom, "stck");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LeftMostUomExtractor;

/// Winning unit occurrence: token position and table priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UnitMatch {
    token_index: usize,
    priority: usize,
}

impl LeftMostUomExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl QtyUomExtractor for LeftMostUomExtractor {
    fn extract(&self, description: &str) -> Option<QtyUom<String>> {
        if description.trim().is_empty() {
            trace!("Skipping blank description");
            return None;
        }

        let tokens = tokenize(description);

        let Some(unit_match) = find_best_unit(&tokens) else {
            debug!("No unit of measure found in '{}'", description);
            return None;
        };
        let uom = unit_at(unit_match.priority)?;
        debug!(
            "Unit '{}' (priority {}) at token {} in '{}'",
            uom, unit_match.priority, unit_match.token_index, description
        );

        let Some(quantity) = backscan_quantity(&tokens, unit_match.token_index) else {
            debug!("No quantity before unit '{}' in '{}'", uom, description);
            return None;
        };
        debug!("Extracted quantity '{}' with unit '{}'", quantity, uom);

        Some(QtyUom::new(quantity, uom))
    }
}

fn tokenize(description: &str) -> Vec<&str> {
    description.split(' ').collect()
}

/// Single pass keeping the best (lowest) priority seen so far.
///
/// Replacement requires a strictly smaller priority, which is what keeps the
/// leftmost occurrence among equal-priority matches.
fn find_best_unit(tokens: &[&str]) -> Option<UnitMatch> {
    tokens
        .iter()
        .enumerate()
        .fold(None, |best: Option<UnitMatch>, (token_index, token)| {
            match priority_of(token) {
                Some(priority) if best.map_or(true, |b| priority < b.priority) => {
                    trace!("Token '{}' at {} takes the lead with priority {}", token, token_index, priority);
                    Some(UnitMatch {
                        token_index,
                        priority,
                    })
                }
                _ => best,
            }
        })
}

/// Walk backward from the unit and rebuild the quantity that precedes it.
///
/// Tokens are collected nearest-to-unit first and reversed once at the end,
/// then concatenated without spaces. Returns `None` if nothing was collected.
fn backscan_quantity(tokens: &[&str], unit_index: usize) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();

    for i in (0..unit_index).rev() {
        let token = tokens[i];
        let multi_char = token.chars().count() > 1;

        if multi_char && token.contains(',') {
            if !are_parts_valid(token, ',') {
                trace!("Stopping at '{}': comma-separated parts are not numeric", token);
                break;
            }
            collected.push(token);
        } else if multi_char && token.contains('.') {
            if !are_parts_valid(token, '.') {
                trace!("Stopping at '{}': dot-separated parts are not numeric", token);
                break;
            }
            collected.push(token);
        } else if is_lone_separator(token) {
            continue;
        } else if is_valid_text_for_qty(token) {
            // Re-attach a separator that was skipped on the unit side of this number
            let next = tokens[i + 1];
            if is_lone_separator(next) {
                collected.push(next);
            }
            collected.push(token);
        } else {
            trace!("Stopping at non-numeric token '{}'", token);
            break;
        }
    }

    if collected.is_empty() {
        return None;
    }

    collected.reverse();
    Some(collected.concat())
}

fn is_lone_separator(token: &str) -> bool {
    token == "," || token == "."
}

/// Every part of `token` split on `separator` must be a valid quantity.
///
/// Trailing empty parts are dropped before validation, so `"12,"` is checked as `["12"]`.
fn are_parts_valid(token: &str, separator: char) -> bool {
    let mut parts: Vec<&str> = token.split(separator).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts.iter().all(|part| is_valid_text_for_qty(part))
}

/// Numeric-validity rule for quantity text.
///
/// The text must be written with digits, signs, dots and exponents only, and
/// parse as `f64`; words such as "inf" or "nan" are not quantities. Text longer
/// than three characters must also be a whole multiple of 100: "1000" and
/// "2500" pass, "2018" does not. This keeps years and article numbers out of
/// quantities.
fn is_valid_text_for_qty(text: &str) -> bool {
    let numeric_chars = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric_chars {
        return false;
    }

    let Ok(value) = text.parse::<f64>() else {
        return false;
    };

    if text.chars().count() > 3 && value % 100.0 != 0.0 {
        return false;
    }

    true
}
