// Tonecode - Sheet music to buzzer tone sequence converter
// Module declarations

pub mod cli;
pub mod encode;
pub mod pipeline;
pub mod sheet;
pub mod table;

pub use encode::{EncodeError, EncodedToken};
pub use pipeline::{convert, convert_files, ConvertError, ConvertOptions};
pub use sheet::{MusicRow, SheetMusic};
pub use table::{FrequencyRecord, NoteFrequencyMap};
