//! Path-level wrappers around the text codecs.
//!
//! Each call opens, uses and closes its file before returning, on success and
//! failure alike. I/O failures surface unchanged as [`CsvError::Io`].

use std::fs;
use std::path::{Path, PathBuf};

use stockroom_inventory::{Manifest, Registry, Stock};

use crate::error::CsvResult;
use crate::item_properties::parse_item_properties;
use crate::manifest::{parse_manifest, write_manifest};
use crate::record::with_csv_extension;
use crate::sales_log::parse_sales_log;

fn read_text(path: &Path) -> CsvResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write `text` to `path`, adding the `.csv` extension when missing.
///
/// Returns the path actually written.
fn write_text(path: &Path, text: &str) -> CsvResult<PathBuf> {
    let target = with_csv_extension(path);
    fs::write(&target, text)?;
    Ok(target)
}

/// Read an item-properties file. The name is not checked for an extension.
pub fn read_item_properties_file(path: &Path) -> CsvResult<Stock> {
    let stock = parse_item_properties(&read_text(path)?)?;
    tracing::info!(path = %path.display(), items = stock.len(), "loaded item properties");
    Ok(stock)
}

pub fn read_sales_log_file<R: Registry + ?Sized>(path: &Path, registry: &R) -> CsvResult<Stock> {
    let sold = parse_sales_log(&read_text(path)?, registry)?;
    tracing::info!(path = %path.display(), items = sold.len(), "loaded sales log");
    Ok(sold)
}

pub fn read_manifest_file<R: Registry + ?Sized>(path: &Path, registry: &R) -> CsvResult<Manifest> {
    let manifest = parse_manifest(&read_text(path)?, registry)?;
    tracing::info!(path = %path.display(), trucks = manifest.len(), "loaded manifest");
    Ok(manifest)
}

/// Write `manifest` to `path` (with `.csv` appended when missing).
pub fn write_manifest_file(path: &Path, manifest: &Manifest) -> CsvResult<PathBuf> {
    let target = write_text(path, &write_manifest(manifest)?)?;
    tracing::info!(path = %target.display(), trucks = manifest.len(), "wrote manifest");
    Ok(target)
}
