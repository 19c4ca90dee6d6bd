//! # Batch Processing Module
//!
//! Runs an extractor over a catalog of descriptions, one per line, and writes
//! one result record per description in the configured output format.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use log::{debug, info, warn};
use serde::Serialize;

use crate::extraction_config::{BatchConfig, OutputFormat};
use crate::qty_uom_errors::ExtractionError;
use crate::qty_uom_extractor::QtyUomExtractor;
use crate::qty_uom_types::QtyUom;

/// Counters for a finished batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Descriptions processed (skipped blank lines are not counted)
    pub total: usize,
    /// Descriptions with a quantity and unit
    pub extracted: usize,
    /// Descriptions without a result
    pub unmatched: usize,
    /// Descriptions whose quantity could not be converted to a number
    pub failed: usize,
}

/// Outcome of a single description
enum Outcome {
    Text(Option<QtyUom<String>>),
    Double(Option<QtyUom<f64>>),
    Failed(String),
}

#[derive(Serialize)]
struct JsonRecord<'a, Q: Serialize> {
    line: usize,
    description: &'a str,
    quantity: Option<Q>,
    uom: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Extract a quantity/unit pair from every line of `reader`
///
/// Lines that are not valid UTF-8 (e.g. Latin-1 catalogs) are decoded lossily
/// and processed like any other line.
///
/// # Arguments
///
/// * `reader` - Source of descriptions, one per line
/// * `writer` - Destination for result records
/// * `extractor` - Extraction strategy to apply
/// * `config` - Output format and line handling options
///
/// # Examples
///
/// ```rust
/// use qtyuom::batch::process_descriptions;
/// use qtyuom::extraction_config::{BatchConfig, OutputFormat};
/// use qtyuom::qty_uom_extractor::LeftMostUomExtractor;
///
/// let input = "black steel bar 35 mm 77 stck\nno unit here\n";
/// let config = BatchConfig { output_format: OutputFormat::Tsv, ..Default::default() };
/// let mut output = Vec::new();
///
/// let summary = process_descriptions(input.as_bytes(), &mut output, &LeftMostUomExtractor, &config)?;
///
/// assert_eq!(summary.extracted, 1);
/// assert_eq!(summary.unmatched, 1);
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "black steel bar 35 mm 77 stck\t77\tstck\t\nno unit here\t\t\t\n"
/// );
/// # Ok::<(), qtyuom::qty_uom_errors::ExtractionError>(())
/// ```
pub fn process_descriptions<R, W, E>(
    mut reader: R,
    mut writer: W,
    extractor: &E,
    config: &BatchConfig,
) -> Result<BatchSummary, ExtractionError>
where
    R: BufRead,
    W: Write,
    E: QtyUomExtractor + ?Sized,
{
    let mut summary = BatchSummary::default();
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;
        let line = decode_line(&buffer, line_number);

        if config.skip_blank_lines && line.trim().is_empty() {
            debug!("Skipping blank line {}", line_number);
            continue;
        }
        summary.total += 1;

        let outcome = if config.as_double {
            match extractor.extract_as_double(&line) {
                Ok(pair) => Outcome::Double(pair),
                Err(err) => {
                    warn!("Line {}: {}", line_number, err);
                    Outcome::Failed(err.to_string())
                }
            }
        } else {
            Outcome::Text(extractor.extract(&line))
        };

        match &outcome {
            Outcome::Text(Some(_)) | Outcome::Double(Some(_)) => summary.extracted += 1,
            Outcome::Text(None) | Outcome::Double(None) => summary.unmatched += 1,
            Outcome::Failed(_) => summary.failed += 1,
        }

        match config.output_format {
            OutputFormat::Json => write_json(&mut writer, line_number, &line, outcome)?,
            OutputFormat::Tsv => write_tsv(&mut writer, &line, outcome)?,
        }
    }

    writer.flush()?;

    info!(
        "Processed {} descriptions: {} extracted, {} unmatched, {} failed",
        summary.total, summary.extracted, summary.unmatched, summary.failed
    );
    Ok(summary)
}

/// Strip the line ending and decode, replacing invalid UTF-8 sequences
fn decode_line(bytes: &[u8], line_number: usize) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(line) => line.to_string(),
        Cow::Owned(line) => {
            warn!("Line {} is not valid UTF-8, invalid bytes replaced", line_number);
            line
        }
    }
}

fn write_json<W: Write>(
    writer: &mut W,
    line: usize,
    description: &str,
    outcome: Outcome,
) -> Result<(), ExtractionError> {
    match outcome {
        Outcome::Text(pair) => {
            let (quantity, uom) = split_pair(pair);
            write_json_record(writer, JsonRecord { line, description, quantity, uom, error: None })
        }
        Outcome::Double(pair) => {
            let (quantity, uom) = split_pair(pair);
            write_json_record(writer, JsonRecord { line, description, quantity, uom, error: None })
        }
        Outcome::Failed(error) => write_json_record::<_, f64>(
            writer,
            JsonRecord { line, description, quantity: None, uom: None, error: Some(error) },
        ),
    }
}

fn write_json_record<W: Write, Q: Serialize>(
    writer: &mut W,
    record: JsonRecord<'_, Q>,
) -> Result<(), ExtractionError> {
    serde_json::to_writer(&mut *writer, &record)?;
    writeln!(writer)?;
    Ok(())
}

fn write_tsv<W: Write>(writer: &mut W, description: &str, outcome: Outcome) -> Result<(), ExtractionError> {
    let (quantity, uom, error) = match outcome {
        Outcome::Text(Some(pair)) => (pair.quantity, pair.uom, String::new()),
        Outcome::Double(Some(pair)) => (pair.quantity.to_string(), pair.uom, String::new()),
        Outcome::Text(None) | Outcome::Double(None) => (String::new(), "", String::new()),
        Outcome::Failed(error) => (String::new(), "", error.replace('\t', " ")),
    };
    writeln!(
        writer,
        "{}\t{}\t{}\t{}",
        description.replace('\t', " "),
        quantity,
        uom,
        error
    )?;
    Ok(())
}

fn split_pair<Q>(pair: Option<QtyUom<Q>>) -> (Option<Q>, Option<&'static str>) {
    match pair {
        Some(pair) => {
            let (quantity, uom) = pair.into_pair();
            (Some(quantity), Some(uom))
        }
        None => (None, None),
    }
}
