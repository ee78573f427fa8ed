// Command line entry point
// tonecode <frequency_table> <music_file>

use std::error::Error;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use crate::pipeline::{convert_files, ConvertOptions};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Run the converter with raw process arguments (program name first).
///
/// On success the encoded line is written to `stdout`. On failure nothing is
/// written to `stdout`; the error and each of its causes go to `stderr`, one
/// per line. Returns the process exit code.
pub fn run<I, S, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    O: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tonecode".to_string());

    if args.len() != 3 {
        let _ = writeln!(stderr, "Usage: {} <frequency_table> <music_file>", program);
        return EXIT_FAILURE;
    }

    let options = ConvertOptions::default();
    match convert_files(Path::new(&args[1]), Path::new(&args[2]), &options) {
        Ok(line) => {
            if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
                let _ = writeln!(stderr, "Error when writing output");
                let _ = writeln!(stderr, "{}", e);
                return EXIT_FAILURE;
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            log::debug!("Conversion failed: {:?}", e);
            let _ = writeln!(stderr, "{}", e);
            let mut cause = e.source();
            while let Some(inner) = cause {
                let _ = writeln!(stderr, "{}", inner);
                cause = inner.source();
            }
            EXIT_FAILURE
        }
    }
}
