//! Delimited-text record source.

use std::io::BufRead;

use crate::error::{AprioriError, AprioriResult};

pub const DEFAULT_SEPARATOR: char = ',';

/// Split one line into items. Surrounding whitespace and a trailing
/// separator are stripped; blank lines yield `None`.
pub fn parse_record(line: &str, separator: char) -> Option<Vec<String>> {
    let line = line.trim().trim_end_matches(separator);
    if line.is_empty() {
        return None;
    }
    Some(line.split(separator).map(str::to_owned).collect())
}

/// Lazily read one record per line.
pub fn read_records<R: BufRead>(
    reader: R,
    separator: char,
) -> impl Iterator<Item = AprioriResult<Vec<String>>> {
    reader.lines().filter_map(move |line| match line {
        Ok(line) => parse_record(&line, separator).map(Ok),
        Err(err) => Some(Err(AprioriError::from(err))),
    })
}
