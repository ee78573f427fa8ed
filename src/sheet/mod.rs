// Sheet music module
// Note/duration sequences in playback order

pub mod ingest;

pub use ingest::{read_sheet_music, read_sheet_music_file, MusicRow, SheetError, SheetMusic};
