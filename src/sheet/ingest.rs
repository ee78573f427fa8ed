// Sheet music ingestion
// Reads the headerless two-column CSV of (note, duration) rows

use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Failed to read music file: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected 2 fields on line {line}, saw {found}")]
    ColumnCount { line: u64, found: usize },

    #[error("No columns to parse from file")]
    Empty,
}

pub type SheetResult<T> = Result<T, SheetError>;

/// One played note or rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicRow {
    /// Note name as written, matched case-insensitively
    pub note: String,

    /// Duration in consumer-defined units (e.g. timer ticks)
    pub duration: i64,

    /// 1-based line in the source file, for diagnostics
    pub line: u64,
}

/// Ordered sequence of rows in playback order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetMusic {
    pub rows: Vec<MusicRow>,
}

impl SheetMusic {
    pub fn new(rows: Vec<MusicRow>) -> Self {
        SheetMusic { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MusicRow> {
        self.rows.iter()
    }
}

/// Read sheet music from any CSV source.
///
/// There is no header row; every row must have exactly two fields, the note
/// name and an integer duration.
pub fn read_sheet_music<R: Read>(source: R) -> SheetResult<SheetMusic> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // Position tracks real file lines, including skipped blank ones
        let line = record.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
        if record.len() != 2 {
            return Err(SheetError::ColumnCount {
                line,
                found: record.len(),
            });
        }

        let (note, duration): (String, i64) = record.deserialize(None)?;
        rows.push(MusicRow { note, duration, line });
    }

    let sheet = SheetMusic::new(rows);
    if sheet.is_empty() {
        return Err(SheetError::Empty);
    }

    log::info!("Loaded music file: {} rows", sheet.len());

    Ok(sheet)
}

/// Open and read a music file
pub fn read_sheet_music_file(path: &Path) -> SheetResult<SheetMusic> {
    let file = File::open(path)?;
    read_sheet_music(file)
}
