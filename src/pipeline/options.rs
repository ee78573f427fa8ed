// Conversion options
// Symbols and scaling used when building the note map and the output line

use serde::{Deserialize, Serialize};

/// Configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Reserved note name for a rest, always encoded with frequency 0
    pub rest_note: String,

    /// Separator between aliases in the frequency table's `Note` column
    pub alias_separator: char,

    /// Multiplier applied to hertz before rounding (100 = hundredths of a hertz)
    pub frequency_scale: f64,

    /// Literal prefix of the output line
    pub output_prefix: String,

    /// Separator between encoded tokens
    pub token_separator: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            rest_note: "r".to_string(),
            alias_separator: '/',
            frequency_scale: 100.0,
            output_prefix: "music ".to_string(),
            token_separator: ",".to_string(),
        }
    }
}
