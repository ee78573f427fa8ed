// Note frequency lookup
// Case-insensitive alias -> centihertz map built once per conversion

use std::collections::HashMap;

use super::ingest::FrequencyRecord;
use crate::pipeline::ConvertOptions;

/// Convert hertz to integer units of `1 / scale` hertz, rounded to nearest.
///
/// Ties round away from zero (`f64::round`).
pub fn to_centihertz(frequency_hz: f64, scale: f64) -> i64 {
    (frequency_hz * scale).round() as i64
}

/// Immutable mapping from lower-cased note alias to encoded frequency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFrequencyMap {
    entries: HashMap<String, i64>,
}

impl NoteFrequencyMap {
    /// Build the map from table records.
    ///
    /// The rest note is seeded with frequency 0 first, so a table row naming
    /// it explicitly overrides the seed. Later rows win over earlier ones.
    pub fn from_records(records: &[FrequencyRecord], options: &ConvertOptions) -> Self {
        let mut entries = HashMap::new();
        entries.insert(options.rest_note.to_lowercase(), 0);

        for record in records {
            let value = to_centihertz(record.frequency, options.frequency_scale);

            for alias in record.note.split(options.alias_separator) {
                let alias = alias.trim();
                if alias.is_empty() {
                    log::warn!("Skipping empty alias in note '{}'", record.note);
                    continue;
                }

                let key = alias.to_lowercase();
                log::debug!("{} -> {}", key, value);
                entries.insert(key, value);
            }
        }

        NoteFrequencyMap { entries }
    }

    /// Look up a note name, ignoring case
    pub fn get(&self, note: &str) -> Option<i64> {
        self.entries.get(&note.to_lowercase()).copied()
    }

    /// Number of distinct aliases, including the rest entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
