// Encoding module
// Turns sheet music into the compact tone line consumed by the buzzer driver

pub mod token;

pub use token::{encode_sheet, render_line, EncodeError, EncodedToken};
