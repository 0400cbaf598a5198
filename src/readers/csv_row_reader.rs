use crate::error::{ProcessingError, Result};
use crate::models::{RawRow, RawValue};
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, REQUIRED_COLUMNS};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Reads a header-keyed daily temperature table into raw rows
pub struct CsvRowReader {
    delimiter: u8,
    require_columns: bool,
}

impl CsvRowReader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            require_columns: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Accept tables lacking the date/temperature columns. Every row of such a
    /// table is later rejected by normalization.
    pub fn with_require_columns(mut self, require_columns: bool) -> Self {
        self.require_columns = require_columns;
        self
    }

    pub fn read_path(&self, path: &Path) -> Result<Vec<RawRow>> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let rows = self.read_bytes(&bytes)?;
        debug!(path = %path.display(), rows = rows.len(), "read temperature table");
        Ok(rows)
    }

    /// Parse raw table bytes. UTF-8 (with or without BOM) is expected; anything
    /// that does not decode cleanly is read as Windows-1252.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRow>> {
        let text = Self::decode(bytes);
        self.read_str(&text)
    }

    pub fn read_str(&self, text: &str) -> Result<Vec<RawRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        if self.require_columns {
            if let Some(missing) = REQUIRED_COLUMNS
                .iter()
                .find(|column| !headers.iter().any(|h| h == **column))
            {
                return Err(ProcessingError::MissingColumn(missing.to_string()));
            }
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: RawRow = headers
                .iter()
                .zip(record.iter())
                .map(|(column, field)| (column.to_string(), RawValue::from_field(field)))
                .collect();
            rows.push(row);
        }

        Ok(rows)
    }

    fn decode(bytes: &[u8]) -> Cow<'_, str> {
        let (text, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
        if !had_errors {
            return text;
        }

        warn!("input is not valid UTF-8, decoding as Windows-1252");
        let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
        text
    }
}

impl Default for CsvRowReader {
    fn default() -> Self {
        Self::new()
    }
}
