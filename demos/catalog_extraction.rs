//! # Catalog Extraction Example
//!
//! Demonstrates quantity/UOM extraction over a handful of catalog descriptions.

use qtyuom::qty_uom_extractor::{LeftMostUomExtractor, QtyUomExtractor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let extractor = LeftMostUomExtractor::new();

    let descriptions = [
        "black steel bar 35 mm 77 stck",
        "Flachstahl 40x5 mm 6 Mtr",
        "Schraube M8 price 1.000 STK",
        "year 2018 stk",
        "Rohr 12 , 500 stk",
        "Blech 2 . 5 m",
        "no unit at all",
    ];

    println!("🔍 Extracting quantities from catalog descriptions...\n");

    for description in descriptions {
        match extractor.extract(description) {
            Some(pair) => println!("✅ '{}' -> {}", description, pair),
            None => println!("❌ '{}' -> no result", description),
        }
    }

    println!("\n🔢 Numeric quantities:");
    for description in descriptions {
        match extractor.extract_as_double(description) {
            Ok(Some(pair)) => println!("  • '{}' -> {} {}", description, pair.quantity, pair.uom),
            Ok(None) => println!("  • '{}' -> no result", description),
            Err(err) => println!("  • '{}' -> error: {}", description, err),
        }
    }

    Ok(())
}
