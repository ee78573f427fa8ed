// Frequency table module
// Loads the note/frequency table and builds the lookup used for encoding

pub mod ingest;
pub mod lookup;

pub use ingest::{read_frequency_table, read_frequency_table_file, FrequencyRecord, TableError};
pub use lookup::{to_centihertz, NoteFrequencyMap};
