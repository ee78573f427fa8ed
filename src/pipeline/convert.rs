// Conversion pipeline
// frequency table + sheet music -> single encoded output line

use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::options::ConvertOptions;
use crate::encode::{encode_sheet, render_line, EncodeError};
use crate::sheet::{self, SheetError, SheetMusic};
use crate::table::{self, FrequencyRecord, NoteFrequencyMap, TableError};

/// Errors that abort a conversion. No partial output is produced.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error when opening frequency table")]
    FrequencyTable(#[source] TableError),

    #[error("Error when opening music file")]
    MusicFile(#[source] SheetError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Convert already-open sources into the output line (no trailing newline).
///
/// The frequency table is read completely before the music source is touched.
pub fn convert<T: Read, M: Read>(
    table_source: T,
    music_source: M,
    options: &ConvertOptions,
) -> ConvertResult<String> {
    let records = table::read_frequency_table(table_source).map_err(ConvertError::FrequencyTable)?;
    let sheet = sheet::read_sheet_music(music_source).map_err(ConvertError::MusicFile)?;

    encode(&records, &sheet, options)
}

/// Convert the two files at the given paths
pub fn convert_files(
    table_path: &Path,
    music_path: &Path,
    options: &ConvertOptions,
) -> ConvertResult<String> {
    let records =
        table::read_frequency_table_file(table_path).map_err(ConvertError::FrequencyTable)?;
    let sheet = sheet::read_sheet_music_file(music_path).map_err(ConvertError::MusicFile)?;

    encode(&records, &sheet, options)
}

fn encode(
    records: &[FrequencyRecord],
    sheet: &SheetMusic,
    options: &ConvertOptions,
) -> ConvertResult<String> {
    let map = NoteFrequencyMap::from_records(records, options);
    log::info!("Built note map with {} aliases", map.len());

    let tokens = encode_sheet(&map, sheet)?;
    let rests = tokens.iter().filter(|token| token.is_rest()).count();
    log::info!("Encoded {} tokens ({} rests)", tokens.len(), rests);

    Ok(render_line(&tokens, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::fs;
    use tempfile::TempDir;

    const TABLE: &str = "Note,Frequency\nA4,440.0\nr,0\n";

    fn run(table: &str, music: &str) -> ConvertResult<String> {
        convert(table.as_bytes(), music.as_bytes(), &ConvertOptions::default())
    }

    #[test]
    fn test_end_to_end_example() {
        assert_eq!(run(TABLE, "a4,4\nr,4\n").unwrap(), "music 44000:4,0:4");
    }

    #[test]
    fn test_token_count_matches_rows() {
        let music = "a4,1\nr,2\nA4,3\nR,4\na4,5\n";
        let line = run(TABLE, music).unwrap();
        let body = line.strip_prefix("music ").unwrap();
        let tokens: Vec<&str> = body.split(',').collect();

        assert_eq!(tokens, vec!["44000:1", "0:2", "44000:3", "0:4", "44000:5"]);
    }

    #[test]
    fn test_rest_without_table_entry() {
        let table = "Note,Frequency\nA4,440.0\n";
        assert_eq!(run(table, "R,7\n").unwrap(), "music 0:7");
    }

    #[test]
    fn test_alias_notes_share_frequency() {
        let table = "Note,Frequency\nC#/Db,277.18\n";
        assert_eq!(run(table, "c#,1\ndb,2\n").unwrap(), "music 27718:1,27718:2");
    }

    #[test]
    fn test_rounding() {
        let table = "Note,Frequency\nA4,440.004\n";
        assert_eq!(run(table, "a4,1\n").unwrap(), "music 44000:1");
    }

    #[test]
    fn test_unknown_note_is_fatal() {
        let err = run(TABLE, "a4,4\nb4,4\n").unwrap_err();

        match &err {
            ConvertError::Encode(EncodeError::UnknownNote { note, line }) => {
                assert_eq!(note, "b4");
                assert_eq!(*line, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "Unknown note 'b4' on line 2 of music file");
    }

    #[test]
    fn test_unknown_note_reports_file_line() {
        let err = run(TABLE, "a4,1\n\n\nzz,1\n").unwrap_err();
        assert_eq!(err.to_string(), "Unknown note 'zz' on line 4 of music file");
    }

    #[test]
    fn test_non_finite_frequency_is_fatal() {
        let err = run("Note,Frequency\nA4,NaN\nB4,inf\n", "a4,1\nb4,1\n").unwrap_err();

        assert!(matches!(
            err,
            ConvertError::FrequencyTable(TableError::NonFiniteFrequency { line: 2, .. })
        ));
        assert_eq!(err.to_string(), "Error when opening frequency table");
    }

    #[test]
    fn test_empty_table_note_is_fatal() {
        let err = run("Note,Frequency\n,440\n", "r,1\n").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::FrequencyTable(TableError::EmptyNote { line: 2 })
        ));
    }

    #[test]
    fn test_extreme_durations_pass_through() {
        log::set_max_level(log::LevelFilter::Info);
        let line = run("Note,Frequency\nA4,440\n", "a4,9223372036854775807\na4,1\n").unwrap();
        assert_eq!(line, "music 44000:9223372036854775807,44000:1");
    }

    #[test]
    fn test_table_error_has_label_and_source() {
        let err = run("Note,Hz\nA4,440\n", "a4,4\n").unwrap_err();

        assert!(matches!(err, ConvertError::FrequencyTable(_)));
        assert_eq!(err.to_string(), "Error when opening frequency table");
        assert_eq!(
            err.source().unwrap().to_string(),
            "Missing required column: Frequency"
        );
    }

    #[test]
    fn test_music_error_has_label() {
        let err = run(TABLE, "a4,4,4\n").unwrap_err();

        assert!(matches!(err, ConvertError::MusicFile(_)));
        assert_eq!(err.to_string(), "Error when opening music file");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_table_checked_before_music() {
        let err = run("", "").unwrap_err();
        assert!(matches!(err, ConvertError::FrequencyTable(TableError::Empty)));
    }

    #[test]
    fn test_convert_files() {
        let temp_dir = TempDir::new().unwrap();
        let table_path = temp_dir.path().join("table.csv");
        let music_path = temp_dir.path().join("song.csv");
        fs::write(&table_path, "Note,Frequency\nE5,659.25\nG#4/Ab4,415.3\n").unwrap();
        fs::write(&music_path, "e5,2\nab4,2\nr,1\nG#4,4\n").unwrap();

        let line = convert_files(&table_path, &music_path, &ConvertOptions::default()).unwrap();
        assert_eq!(line, "music 65925:2,41530:2,0:1,41530:4");
    }

    #[test]
    fn test_convert_files_missing_music() {
        let temp_dir = TempDir::new().unwrap();
        let table_path = temp_dir.path().join("table.csv");
        fs::write(&table_path, TABLE).unwrap();

        let err = convert_files(
            &table_path,
            &temp_dir.path().join("missing.csv"),
            &ConvertOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::MusicFile(SheetError::Io(_))));
    }
}
