//! # Extraction Configuration Module
//!
//! This module defines configuration for batch extraction runs,
//! read from environment variables (a `.env` file is honoured by the binary).

use std::env;
use std::str::FromStr;

use crate::qty_uom_errors::ExtractionError;

// Environment keys for batch configuration
pub const OUTPUT_FORMAT_ENV: &str = "QTYUOM_OUTPUT_FORMAT";
pub const AS_DOUBLE_ENV: &str = "QTYUOM_AS_DOUBLE";
pub const SKIP_BLANK_ENV: &str = "QTYUOM_SKIP_BLANK";

pub const DEFAULT_OUTPUT_FORMAT: &str = "json";

/// Output record format for batch results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Tab-separated `description`, `quantity`, `uom`
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(ExtractionError::Config(format!(
                "unknown output format '{other}' (expected 'json' or 'tsv')"
            ))),
        }
    }
}

/// Configuration structure for batch extraction
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Format of each output record
    pub output_format: OutputFormat,
    /// Whether quantities are emitted as numbers instead of text
    pub as_double: bool,
    /// Whether blank input lines are skipped instead of reported as no result
    pub skip_blank_lines: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Json,
            as_double: false,
            skip_blank_lines: true,
        }
    }
}

impl BatchConfig {
    /// Build configuration from the process environment
    ///
    /// Unset variables fall back to [`BatchConfig::default`].
    pub fn from_env() -> Result<Self, ExtractionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExtractionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output_format: OutputFormat = lookup(OUTPUT_FORMAT_ENV)
            .unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string())
            .parse()?;
        let as_double = match lookup(AS_DOUBLE_ENV) {
            Some(value) => parse_flag(AS_DOUBLE_ENV, &value)?,
            None => defaults.as_double,
        };
        let skip_blank_lines = match lookup(SKIP_BLANK_ENV) {
            Some(value) => parse_flag(SKIP_BLANK_ENV, &value)?,
            None => defaults.skip_blank_lines,
        };

        Ok(Self {
            output_format,
            as_double,
            skip_blank_lines,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ExtractionError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ExtractionError::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
