//! Manifest format: deliveries partitioned by truck.
//!
//! ```text
//! >Ordinary
//! rice,50
//! >Refrigerated
//! beans,20
//! ```
//!
//! A marker line (`>` + truck type) opens a truck section; the `name,amount`
//! lines after it are that truck's cargo.

use std::mem;

use stockroom_inventory::{classify, Manifest, Registry, Stock, TruckKind};

use crate::error::{CsvError, CsvResult, RecordFormat};
use crate::record::{records, Record, RecordWriter};
use crate::sales_log::resolve_entry;

/// First character of a truck declaration line.
pub const TRUCK_MARKER: char = '>';

const FORMAT: RecordFormat = RecordFormat::Manifest;

#[derive(Debug)]
enum State {
    /// No truck declared yet; cargo lines are not allowed.
    AwaitingTruck,
    AccumulatingCargo { kind: TruckKind, cargo: Stock },
}

struct ManifestParser<'r, R: ?Sized> {
    registry: &'r R,
    state: State,
    manifest: Manifest,
}

impl<'r, R: Registry + ?Sized> ManifestParser<'r, R> {
    fn new(registry: &'r R) -> Self {
        Self {
            registry,
            state: State::AwaitingTruck,
            manifest: Manifest::new(),
        }
    }

    fn feed(&mut self, record: &Record) -> CsvResult<()> {
        if record.field(0).starts_with(TRUCK_MARKER) {
            self.finalize()?;
            let text = record.text();
            let tag = &text[TRUCK_MARKER.len_utf8()..];
            let kind: TruckKind = tag.parse().map_err(|_| {
                CsvError::format(FORMAT, record.number, format!("expected Ordinary or Refrigerated truck, found '{tag}'"))
            })?;
            self.state = State::AccumulatingCargo {
                kind,
                cargo: Stock::new(),
            };
            return Ok(());
        }

        match &mut self.state {
            State::AwaitingTruck => Err(CsvError::format(
                FORMAT,
                record.number,
                "cargo listed before any truck declaration",
            )),
            State::AccumulatingCargo { cargo, .. } => {
                let (item, amount) = resolve_entry(FORMAT, record, self.registry)?;
                cargo
                    .add_items(item, amount)
                    .map_err(|source| CsvError::Stock { line: record.number, source })
            }
        }
    }

    /// Close the truck in progress, if any, and append it to the fleet.
    fn finalize(&mut self) -> CsvResult<()> {
        if let State::AccumulatingCargo { kind, cargo } = mem::replace(&mut self.state, State::AwaitingTruck) {
            let truck = classify(kind, cargo).map_err(|source| CsvError::Delivery {
                truck: self.manifest.len() + 1,
                kind,
                source,
            })?;
            self.manifest.add_truck(truck);
        }
        Ok(())
    }

    fn finish(mut self) -> CsvResult<Manifest> {
        self.finalize()?;
        Ok(self.manifest)
    }
}

/// Parse a manifest, resolving cargo names against `registry`.
///
/// Text without any truck declaration yields an empty manifest.
pub fn parse_manifest<R: Registry + ?Sized>(text: &str, registry: &R) -> CsvResult<Manifest> {
    let mut parser = ManifestParser::new(registry);
    for record in records(text) {
        parser.feed(&record?)?;
    }
    let manifest = parser.finish()?;
    tracing::debug!(trucks = manifest.len(), "parsed manifest");
    Ok(manifest)
}

/// Serialize `manifest`: trucks in fleet order, cargo in accumulation order.
pub fn write_manifest(manifest: &Manifest) -> CsvResult<String> {
    let mut writer = RecordWriter::new();
    for truck in manifest.fleet() {
        writer.record([format!("{TRUCK_MARKER}{}", truck.kind().tag())])?;
        for (item, quantity) in truck.cargo().iter() {
            writer.record([item.name().to_string(), quantity.to_string()])?;
        }
    }
    writer.finish()
}
