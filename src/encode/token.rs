// Tone token encoding
// Maps each sheet row to "<frequency>:<duration>" and renders the output line

use std::fmt;
use thiserror::Error;

use crate::pipeline::ConvertOptions;
use crate::sheet::SheetMusic;
use crate::table::NoteFrequencyMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Unknown note '{note}' on line {line} of music file")]
    UnknownNote { note: String, line: u64 },
}

/// A single encoded tone: frequency in centihertz and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedToken {
    pub frequency: i64,
    pub duration: i64,
}

impl EncodedToken {
    pub fn is_rest(&self) -> bool {
        self.frequency == 0
    }
}

impl fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.frequency, self.duration)
    }
}

/// Encode every row of the sheet, in order.
///
/// Stops at the first note missing from the map, reporting its source line.
pub fn encode_sheet(
    map: &NoteFrequencyMap,
    sheet: &SheetMusic,
) -> Result<Vec<EncodedToken>, EncodeError> {
    sheet
        .iter()
        .map(|row| {
            let frequency = map.get(&row.note).ok_or_else(|| EncodeError::UnknownNote {
                note: row.note.clone(),
                line: row.line,
            })?;

            Ok(EncodedToken {
                frequency,
                duration: row.duration,
            })
        })
        .collect()
}

/// Render tokens as the single output line (without trailing newline)
pub fn render_line(tokens: &[EncodedToken], options: &ConvertOptions) -> String {
    let body = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(&options.token_separator);

    format!("{}{}", options.output_prefix, body)
}
