//! # Extractor Integration Tests
//!
//! End-to-end checks of the public extraction contract on catalog-style descriptions.

use qtyuom::qty_uom_errors::ExtractionError;
use qtyuom::qty_uom_extractor::{LeftMostUomExtractor, QtyUomExtractor};
use qtyuom::uom_table::UOM_PRIORITY_TABLE;

fn extract(description: &str) -> Option<(String, &'static str)> {
    LeftMostUomExtractor::new()
        .extract(description)
        .map(|pair| pair.into_pair())
}

fn pair(quantity: &str, uom: &'static str) -> Option<(String, &'static str)> {
    Some((quantity.to_string(), uom))
}

#[test]
fn test_priority_beats_position() {
    assert_eq!(extract("black steel bar 35 mm 77 stck"), pair("77", "stck"));
    assert_eq!(extract("35 mm 77 stck"), pair("77", "stck"));
    assert_eq!(extract("77 stck 35 mm"), pair("77", "stck"));
    assert_eq!(extract("4 stk. 3 stk"), pair("3", "stk"));
    assert_eq!(extract("Flachstahl 2 kg 6 Mtr"), pair("6", "mtr"));
}

#[test]
fn test_leftmost_occurrence_on_tie() {
    assert_eq!(extract("10 m scrap 2 m"), pair("10", "m"));
    assert_eq!(extract("5 STK and 7 stk"), pair("5", "stk"));
}

#[test]
fn test_winning_unit_without_quantity_gives_no_result() {
    // "kg" has a quantity but "stk" wins and has none
    assert_eq!(extract("5 kg steel stk"), None);
    assert_eq!(extract("stk 5"), None);
    assert_eq!(extract("box of stk"), None);
}

#[test]
fn test_no_recognized_unit() {
    let descriptions = [
        "black steel bar",
        "35 cm 77 pcs",
        "stk5 mmm meters",
        "5 stk,",
    ];
    for description in descriptions {
        assert_eq!(extract(description), None, "expected no result for '{}'", description);
    }
}

#[test]
fn test_blank_descriptions() {
    assert_eq!(extract(""), None);
    assert_eq!(extract("     "), None);
}

#[test]
fn test_unit_case_follows_table() {
    assert_eq!(extract("3 STÜCK"), pair("3", "stück"));
    assert_eq!(extract("2 Stange(n)"), pair("2", "stange(n)"));
    assert_eq!(extract("1 QM"), pair("1", "qm"));
}

#[test]
fn test_every_table_unit_is_recognized() {
    for unit in UOM_PRIORITY_TABLE {
        let description = format!("item 8 {}", unit.to_uppercase());
        assert_eq!(extract(&description), pair("8", unit), "unit '{}' not recognized", unit);
    }
}

#[test]
fn test_grouped_quantities() {
    assert_eq!(extract("price 1.000 stk"), pair("1.000", "stk"));
    assert_eq!(extract("nails 1,000 stk"), pair("1,000", "stk"));
    assert_eq!(extract("pipe 12.5 m"), pair("12.5", "m"));
    assert_eq!(extract("sheet 1.000.000 qm"), pair("1.000.000", "qm"));
}

#[test]
fn test_four_digit_rule() {
    assert_eq!(extract("year 2018 stk"), None);
    assert_eq!(extract("lot 1234 stk"), None);
    assert_eq!(extract("lot 1200 stk"), pair("1200", "stk"));
    assert_eq!(extract("lot 2000 stk"), pair("2000", "stk"));
    assert_eq!(extract("bar 12.34567 mm"), None);
}

#[test]
fn test_float_words_are_not_quantities() {
    let extractor = LeftMostUomExtractor::new();

    for description in ["inf stk", "item nan kg", "bar Infinity m", "5 x NaN stk"] {
        assert_eq!(extract(description), None, "expected no result for '{}'", description);
        assert!(extractor.extract_as_double(description).unwrap().is_none());
    }
}

#[test]
fn test_backscan_stops_at_year() {
    // Only tokens up to the first invalid one are kept
    assert_eq!(extract("2018 5 stk"), pair("5", "stk"));
}

#[test]
fn test_stranded_separators() {
    assert_eq!(extract("12 , 500 stk"), pair("12,500", "stk"));
    assert_eq!(extract("bar 2 . 5 m"), pair("2.5", "m"));
}

#[test]
fn test_adjacent_numbers_are_concatenated() {
    assert_eq!(extract("steel 3 4 stk"), pair("34", "stk"));
}

#[test]
fn test_repeated_spaces_produce_empty_tokens() {
    assert_eq!(extract("bar  5 stk"), pair("5", "stk"));
    assert_eq!(extract("bar 5  stk"), None);
}

#[test]
fn test_extract_as_double() {
    let extractor = LeftMostUomExtractor::new();

    let result = extractor.extract_as_double("black steel bar 35 mm 77 stck").unwrap().unwrap();
    assert_eq!(result.quantity, 77.0);
    assert_eq!(result.uom, "stck");

    let result = extractor.extract_as_double("price 1.000 stk").unwrap().unwrap();
    assert_eq!(result.quantity, 1.0);

    assert!(extractor.extract_as_double("year 2018 stk").unwrap().is_none());
    assert!(extractor.extract_as_double("").unwrap().is_none());
}

#[test]
fn test_extract_as_double_reports_unparseable_quantity() {
    let extractor = LeftMostUomExtractor::new();

    for description in ["12 , 500 stk", "nails 1,000 stk", "sheet 1.000.000 qm"] {
        let err = extractor.extract_as_double(description).unwrap_err();
        assert!(
            matches!(err, ExtractionError::QuantityNotNumeric { .. }),
            "expected QuantityNotNumeric for '{}'",
            description
        );
    }
}

#[test]
fn test_extraction_is_idempotent() {
    let extractor = LeftMostUomExtractor::new();
    let description = "black steel bar 35 mm 77 stck";

    let first = extractor.extract(description);
    let second = extractor.extract(description);
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_extraction() {
    let extractor = LeftMostUomExtractor::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let description = format!("bar {} mm {} stck", i, i + 10);
                extractor.extract(&description).map(|pair| pair.into_pair())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(((i + 10).to_string(), "stck")));
    }
}

#[test]
fn test_extractor_as_trait_object() {
    let extractor: Box<dyn QtyUomExtractor> = Box::new(LeftMostUomExtractor::default());
    let result = extractor.extract("6 Mtr").unwrap();
    assert_eq!(result.to_string(), "6 mtr");
}
