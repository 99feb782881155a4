//! URL list loading from a file or the standard input stream

use crate::error::{CliError, Result};
use crate::ui;
use endpoint_probe::InputSource;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Collect the URLs to probe, one per line.
///
/// A file that cannot be opened is reported and yields no URLs. Reading from
/// an interactive terminal is refused since nothing was piped in.
pub fn load_urls(source: &InputSource) -> Result<Vec<String>> {
    match source {
        InputSource::File(path) => Ok(read_url_file(path)),
        InputSource::Stdin => {
            if atty::is(atty::Stream::Stdin) {
                return Err(CliError::EmptyStdin);
            }
            Ok(read_lines(io::stdin().lock()))
        }
    }
}

pub fn read_url_file(path: &Path) -> Vec<String> {
    match File::open(path) {
        Ok(file) => read_lines(BufReader::new(file)),
        Err(e) => {
            let err = CliError::UnreadableFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            };
            ui::error_message(&err.user_message());
            Vec::new()
        }
    }
}

/// Every line verbatim, blank ones included; stops at the first read error
pub fn read_lines<R: BufRead>(reader: R) -> Vec<String> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => urls.push(line),
            Err(e) => {
                ui::warning_message(&format!("Failed to read input: {e}"));
                break;
            }
        }
    }
    urls
}
