use std::env;
use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use log::info;

use qtyuom::batch::process_descriptions;
use qtyuom::extraction_config::BatchConfig;
use qtyuom::qty_uom_extractor::LeftMostUomExtractor;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    info!("Starting quantity/UOM extraction");

    let config = BatchConfig::from_env().context("Invalid batch configuration")?;
    info!(
        "Output format: {:?}, as_double: {}, skip blank lines: {}",
        config.output_format, config.as_double, config.skip_blank_lines
    );

    let extractor = LeftMostUomExtractor::new();
    let stdout = io::stdout();

    // Read descriptions from the file given as first argument, or stdin
    let summary = match env::args().nth(1) {
        Some(path) => {
            info!("Reading descriptions from {}", path);
            let file = File::open(&path).with_context(|| format!("Failed to open {path}"))?;
            process_descriptions(BufReader::new(file), stdout.lock(), &extractor, &config)
        }
        None => {
            info!("Reading descriptions from stdin");
            process_descriptions(io::stdin().lock(), stdout.lock(), &extractor, &config)
        }
    }
    .context("Batch extraction failed")?;

    info!("Summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}
