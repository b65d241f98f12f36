//! Comma-separated record reading and writing shared by every codec.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{CsvError, CsvResult, RecordFormat};

/// Conventional extension for every format in this crate.
pub const EXTENSION: &str = "csv";

/// One non-empty input line, split into fields.
#[derive(Debug, Clone)]
pub struct Record {
    /// 1-based line number in the input.
    pub number: usize,
    fields: StringRecord,
}

impl Record {
    fn new(fields: StringRecord) -> Self {
        let number = fields.position().map_or(0, |position| position.line() as usize);
        Self { number, fields }
    }

    /// Number of fields, empty ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Field at `index`, or `""` past the end.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).unwrap_or("")
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter()
    }

    /// The fields joined back with commas, as they appeared in the input.
    pub fn text(&self) -> String {
        self.fields().collect::<Vec<_>>().join(",")
    }

    fn is_blank(&self) -> bool {
        self.fields.len() == 1 && self.fields[0].is_empty()
    }

    /// Parse one numeric field, naming it in the error.
    pub(crate) fn parse_number<T>(&self, format: RecordFormat, field: &str, raw: &str) -> CsvResult<T>
    where
        T: FromStr,
        T::Err: core::fmt::Display,
    {
        raw.parse().map_err(|e| {
            CsvError::format(format, self.number, format!("{field} '{raw}' is not a valid number: {e}"))
        })
    }
}

/// Records of `text`, skipping empty lines.
///
/// `\n` and `\r\n` both terminate a line and the terminator of the last line
/// does not produce an extra record. Quotes carry no meaning; every field is
/// taken verbatim.
pub fn records(text: &str) -> impl Iterator<Item = CsvResult<Record>> + '_ {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes())
        .into_records()
        .map(|result| result.map(Record::new).map_err(CsvError::from))
        .filter(|result| !matches!(result, Ok(record) if record.is_blank()))
}

/// Accumulates output records, terminating every one (the last included)
/// with `\r\n`.
pub struct RecordWriter {
    inner: csv::Writer<Vec<u8>>,
}

impl RecordWriter {
    pub fn new() -> Self {
        let inner = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::CRLF)
            .from_writer(Vec::new());
        Self { inner }
    }

    pub fn record<I, T>(&mut self, fields: I) -> CsvResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.inner.write_record(fields)?;
        Ok(())
    }

    pub fn finish(self) -> CsvResult<String> {
        let bytes = self.inner.into_inner().map_err(|e| CsvError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| CsvError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// `path` with `.csv` appended unless its file name already ends in it
/// (case-insensitive).
pub fn with_csv_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_ascii_lowercase()
                .ends_with(&format!(".{EXTENSION}"))
        })
        .unwrap_or(false);
    if has_extension {
        return path.to_path_buf();
    }
    let mut appended = OsString::from(path.as_os_str());
    appended.push(".");
    appended.push(EXTENSION);
    PathBuf::from(appended)
}
