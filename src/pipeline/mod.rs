// Pipeline module
// Orchestrates table loading, sheet loading, and encoding

pub mod convert;
pub mod options;

pub use convert::{convert, convert_files, ConvertError, ConvertResult};
pub use options::ConvertOptions;
