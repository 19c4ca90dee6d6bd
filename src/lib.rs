//! # Quantity/UOM Extraction
//!
//! Extracts a normalized (quantity, unit of measure) pair from unstructured
//! product catalog descriptions such as `"black steel bar 35 mm 77 stck"`,
//! using a fixed priority-ordered list of recognized units.

pub mod batch;
pub mod extraction_config;
pub mod qty_uom_errors;
pub mod qty_uom_extractor;
pub mod qty_uom_types;
pub mod uom_table;
