//! Loading captures exported from a logic analyzer.
//!
//! Captures are CSV tables with one row per bus word. A single column (by
//! default the third, holding the sampled data line) carries hex byte values
//! such as `0x0F`. Rows are concatenated, in order, into the byte stream that
//! is scanned.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, path::Path, vec::Vec};

use csv::ReaderBuilder;
use thiserror::Error;

extern crate std;

/// Errors occurring while loading a capture.
#[derive(Debug, Error)]
pub enum Error {
    /// An error opening or reading the CSV table, including I/O failures.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// A row has no cell in the data column.
    #[error("Row on line {line} has no column {column}.")]
    MissingColumn { line: u64, column: usize },
    /// A data cell is not valid hexadecimal.
    #[error("Invalid hex value on line {line}: {source}.")]
    Hex {
        line: u64,
        source: hex::FromHexError,
    },
}

/// Layout of a capture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Zero-based index of the column holding data bytes.
    pub column: usize,
    /// Whether the first row names the columns (and is skipped).
    pub has_headers: bool,
    pub delimiter: u8,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            column: 2,
            has_headers: true,
            delimiter: b',',
        }
    }
}

/// Load the bytes of a capture file.
pub fn load(path: impl AsRef<Path>, options: &CaptureOptions) -> Result<Vec<u8>, Error> {
    let reader = builder(options).from_path(path)?;
    collect(reader, options)
}

/// Parse the bytes of a capture from a reader.
pub fn parse(r: impl Read, options: &CaptureOptions) -> Result<Vec<u8>, Error> {
    let reader = builder(options).from_reader(r);
    collect(reader, options)
}

fn builder(options: &CaptureOptions) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .flexible(true)
        .has_headers(options.has_headers)
        .delimiter(options.delimiter);
    builder
}

fn collect<R: Read>(mut reader: csv::Reader<R>, options: &CaptureOptions) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let cell = record.get(options.column).ok_or(Error::MissingColumn {
            line,
            column: options.column,
        })?;

        let cell = cell.trim();
        let digits = cell
            .strip_prefix("0x")
            .or_else(|| cell.strip_prefix("0X"))
            .unwrap_or(cell);

        for token in digits.split_whitespace() {
            let decoded = hex::decode(token).map_err(|source| Error::Hex { line, source })?;
            bytes.extend_from_slice(&decoded);
        }
    }

    Ok(bytes)
}
