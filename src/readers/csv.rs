use std::io;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord};
use log::{debug, trace};

use crate::error::Error;
use crate::stats::{split_cell, FrequencyTable};
use crate::types::{Result, FIELD_DELIMITER};

/// CSV file reader that tallies a single column
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvReader {
    /// Create a new CSV reader
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            delimiter: FIELD_DELIMITER,
        }
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|source| Error::FileAccess {
            path: self.path.clone(),
            source,
        })
    }

    fn create_reader<'a>(&self, bytes: &'a [u8]) -> Reader<&'a [u8]> {
        ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes)
    }

    /// Count the values of `column`, splitting cells on `split` when given.
    ///
    /// Fails with `ColumnNotFound` before reading any data row when the
    /// header does not name `column`, and with `Parse` when the file ends
    /// inside a quoted field.
    pub fn tally_column(&self, column: &str, split: Option<&str>) -> Result<FrequencyTable> {
        let bytes = self.read_bytes()?;

        // csv reads an open quote through to end of file without complaint
        if let Some(line) = unterminated_quote_line(&bytes, self.delimiter) {
            return Err(Error::Parse(csv::Error::from(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unterminated quoted field starting on line {}", line),
            ))));
        }

        let mut reader = self.create_reader(&bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();
        debug!("{}: header has {} columns", self.path.display(), headers.len());

        let col_idx = find_column(&headers, column).ok_or_else(|| Error::ColumnNotFound {
            column: column.to_string(),
            available: headers.clone(),
        })?;

        let mut table = FrequencyTable::new();
        let mut record = StringRecord::new();
        let mut row_count: u64 = 0;

        while reader.read_record(&mut record)? {
            row_count += 1;

            match record.get(col_idx) {
                Some(cell) if !cell.is_empty() => {
                    for key in split_cell(cell, split) {
                        table.add(key);
                    }
                }
                _ => trace!("row {}: no value in '{}'", row_count, column),
            }
        }

        debug!(
            "{}: read {} rows, {} distinct keys in '{}'",
            self.path.display(),
            row_count,
            table.len(),
            column
        );

        Ok(table)
    }
}

/// Field scanner states, following how csv-core treats quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    StartField,
    InField,
    InQuotes,
    QuoteInQuotes,
}

/// Line (1-based) of the quote that opens a field never closed before end
/// of input, if any.
///
/// A quote only opens a field at its first byte; `""` inside quotes is an
/// escaped quote; after a closing quote the field continues unquoted.
fn unterminated_quote_line(bytes: &[u8], delimiter: u8) -> Option<u64> {
    let mut state = QuoteState::StartField;
    let mut line: u64 = 1;
    let mut opened_on = line;

    for &b in bytes {
        let terminator = b == delimiter || b == b'\n' || b == b'\r';
        state = match state {
            QuoteState::StartField if b == b'"' => {
                opened_on = line;
                QuoteState::InQuotes
            }
            QuoteState::StartField | QuoteState::InField | QuoteState::QuoteInQuotes
                if terminator =>
            {
                QuoteState::StartField
            }
            QuoteState::StartField | QuoteState::InField => QuoteState::InField,
            QuoteState::InQuotes if b == b'"' => QuoteState::QuoteInQuotes,
            QuoteState::InQuotes => QuoteState::InQuotes,
            QuoteState::QuoteInQuotes if b == b'"' => QuoteState::InQuotes,
            QuoteState::QuoteInQuotes => QuoteState::InField,
        };
        if b == b'\n' {
            line += 1;
        }
    }

    (state == QuoteState::InQuotes).then_some(opened_on)
}

/// Locate a header by exact name. A repeated name resolves to its last
/// occurrence, as when each row is viewed as a name-to-value map.
fn find_column(headers: &[String], column: &str) -> Option<usize> {
    headers.iter().rposition(|h| h == column)
}
