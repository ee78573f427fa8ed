// Frequency table ingestion
// Reads the header-carrying CSV that maps note names to frequencies in hertz

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Column holding the note name (optionally a "/"-delimited alias list)
pub const NOTE_COLUMN: &str = "Note";

/// Column holding the frequency in hertz
pub const FREQUENCY_COLUMN: &str = "Frequency";

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read frequency table: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("No columns to parse from file")]
    Empty,

    #[error("Empty note name on line {line}")]
    EmptyNote { line: u64 },

    #[error("Invalid frequency '{value}' for note '{note}' on line {line}")]
    NonFiniteFrequency { note: String, value: f64, line: u64 },
}

pub type TableResult<T> = Result<T, TableError>;

/// A single row of the frequency table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrequencyRecord {
    /// Note name, e.g. "A4" or "C#4/Db4"
    #[serde(rename = "Note")]
    pub note: String,

    /// Frequency in hertz
    #[serde(rename = "Frequency")]
    pub frequency: f64,
}

/// Read frequency records from any CSV source, preserving table order.
///
/// The header row is required and must name both the `Note` and `Frequency`
/// columns; any other columns are ignored.
pub fn read_frequency_table<R: Read>(source: R) -> TableResult<Vec<FrequencyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(TableError::Empty);
    }
    for column in [NOTE_COLUMN, FREQUENCY_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(TableError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let raw = result?;
        // Header occupies line 1
        let line = raw.position().map(|p| p.line()).unwrap_or(index as u64 + 2);
        let record: FrequencyRecord = raw.deserialize(Some(&headers))?;

        if record.note.trim().is_empty() {
            return Err(TableError::EmptyNote { line });
        }
        if !record.frequency.is_finite() {
            return Err(TableError::NonFiniteFrequency {
                note: record.note,
                value: record.frequency,
                line,
            });
        }

        records.push(record);
    }

    log::info!("Loaded frequency table: {} rows", records.len());

    Ok(records)
}

/// Open and read a frequency table file
pub fn read_frequency_table_file(path: &Path) -> TableResult<Vec<FrequencyRecord>> {
    let file = File::open(path)?;
    read_frequency_table(file)
}
