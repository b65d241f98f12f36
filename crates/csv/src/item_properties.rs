//! Item-properties format: the catalog definition.
//!
//! `name,cost,price,reorderPoint,reorderAmount[,temperature]`, one item per line.

use stockroom_core::{DomainError, ItemName};
use stockroom_inventory::{Item, Stock, Temperature};

use crate::error::{CsvError, CsvResult, RecordFormat};
use crate::record::{records, Record};

const FORMAT: RecordFormat = RecordFormat::ItemProperties;

/// Parse a catalog into a stock holding every defined item at quantity 0.
pub fn parse_item_properties(text: &str) -> CsvResult<Stock> {
    let mut stock = Stock::new();
    for record in records(text) {
        let record = record?;
        let item = parse_item(&record)?;
        if stock.contains(item.name().as_str()) {
            tracing::warn!(line = record.number, item = %item.name(), "duplicate item definition ignored");
        }
        stock
            .add_items(item, 0)
            .map_err(|source| CsvError::Stock { line: record.number, source })?;
    }
    tracing::debug!(items = stock.len(), "parsed item properties");
    Ok(stock)
}

fn parse_item(record: &Record) -> CsvResult<Item> {
    if record.len() != 5 && record.len() != 6 {
        return Err(CsvError::format(
            FORMAT,
            record.number,
            format!("expected 5 or 6 fields, found {}", record.len()),
        ));
    }

    let name: ItemName = record
        .field(0)
        .parse()
        .map_err(|e: DomainError| CsvError::format(FORMAT, record.number, e.to_string()))?;
    let cost = record.parse_number(FORMAT, "cost", record.field(1))?;
    let price = record.parse_number(FORMAT, "price", record.field(2))?;
    let reorder_point = record.parse_number(FORMAT, "reorder point", record.field(3))?;
    let reorder_amount = record.parse_number(FORMAT, "reorder amount", record.field(4))?;

    let item = Item::new(name, cost, price, reorder_point, reorder_amount);
    if record.len() == 6 {
        let temperature = record.parse_number(FORMAT, "temperature", record.field(5))?;
        return Ok(item.with_temperature(Temperature(temperature)));
    }
    Ok(item)
}
