//! Flat-text record formats the store exchanges with the outside world.
//!
//! | Format | Fields | Direction |
//! |--------|--------|-----------|
//! | Item properties | `name,cost,price,reorderPoint,reorderAmount[,temperature]` | read |
//! | Sales log | `name,amount` | read |
//! | Manifest | `>Ordinary` / `>Refrigerated` marker lines, then `name,amount` | read + write |
//!
//! Every codec works on text already in memory; [`file`] wraps them with
//! path-level helpers that open and close the file within the call.
//!
//! ## Line terminators
//!
//! Records are split with the `csv` crate with quoting disabled, so a field
//! is the text between two commas, verbatim. Readers accept `\n` and `\r\n`.
//! Writers end **every** line, including the last, with `\r\n`, and readers
//! consume the terminator of the last line, so no phantom trailing record
//! appears. Empty lines are skipped by every codec.

pub mod error;
pub mod file;
pub mod item_properties;
pub mod manifest;
pub mod record;
pub mod sales_log;

pub use error::{CsvError, CsvResult, RecordFormat};
pub use file::{read_item_properties_file, read_manifest_file, read_sales_log_file, write_manifest_file};
pub use item_properties::parse_item_properties;
pub use manifest::{parse_manifest, write_manifest, TRUCK_MARKER};
pub use record::{with_csv_extension, EXTENSION};
pub use sales_log::parse_sales_log;
