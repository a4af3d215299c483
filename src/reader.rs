//! Line reader: extracts the second whitespace-delimited column of each line
//! as an `f64`.
//!
//! Lines with fewer than two columns are skipped silently; lines whose second
//! column doesn't parse are skipped with a warning on stdout. The decimal
//! separator may be `.` or `,`.

use crate::error::ColstatsError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// What became of a single input line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LineOutcome {
    /// Second column parsed as a number.
    Parsed(f64),
    /// Fewer than two columns; not eligible, skipped silently.
    TooFewColumns,
    /// Second column present but not numeric.
    Invalid,
}

/// Classify one (already trimmed) line.
pub(crate) fn classify_line(line: &str) -> LineOutcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    log::debug!("tokens: {:?}", tokens);

    let Some(token) = tokens.get(1) else {
        return LineOutcome::TooFewColumns;
    };

    // Accept comma as decimal separator (common in European locale logs)
    match token.replace(',', ".").parse::<f64>() {
        Ok(value) => LineOutcome::Parsed(value),
        Err(_) => LineOutcome::Invalid,
    }
}

/// Read all parseable second-column values from the file at `path`, in line
/// order.
///
/// Returns `ColstatsError::FileNotFound` if the path does not resolve, and
/// `ColstatsError::Io` for any other read failure. Skipped lines are never
/// errors; invalid ones are reported on stdout as they are encountered.
pub fn read_values(path: &Path) -> Result<Vec<f64>, ColstatsError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ColstatsError::FileNotFound,
        _ => ColstatsError::Io(e),
    })?;

    let mut values = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();

        match classify_line(line) {
            LineOutcome::Parsed(value) => values.push(value),
            LineOutcome::TooFewColumns => {}
            LineOutcome::Invalid => {
                println!("Skipping invalid line: {line}");
            }
        }
    }

    Ok(values)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
