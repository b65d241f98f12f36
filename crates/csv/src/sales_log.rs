//! Sales-log format: `name,amount`, one sale per line.

use stockroom_inventory::{Item, Registry, Stock};

use crate::error::{CsvError, CsvResult, RecordFormat};
use crate::record::{records, Record};

const FORMAT: RecordFormat = RecordFormat::SalesLog;

/// Parse a sales log into the quantities sold per item.
///
/// Every name must resolve in `registry`. Repeated names accumulate.
pub fn parse_sales_log<R: Registry + ?Sized>(text: &str, registry: &R) -> CsvResult<Stock> {
    let mut sold = Stock::new();
    for record in records(text) {
        let record = record?;
        let (item, amount) = resolve_entry(FORMAT, &record, registry)?;
        sold.add_items(item, amount)
            .map_err(|source| CsvError::Stock { line: record.number, source })?;
    }
    tracing::debug!(items = sold.len(), "parsed sales log");
    Ok(sold)
}

/// Read a `name,amount` record and resolve the name against `registry`.
///
/// Shared with the manifest cargo lines.
pub(crate) fn resolve_entry<R: Registry + ?Sized>(
    format: RecordFormat,
    record: &Record,
    registry: &R,
) -> CsvResult<(Item, u64)> {
    if record.len() != 2 {
        return Err(CsvError::format(
            format,
            record.number,
            format!("expected 2 fields, found {}", record.len()),
        ));
    }
    let amount = record.parse_number(format, "amount", record.field(1))?;
    let name = record.field(0);
    let item = registry
        .lookup(name)
        .ok_or_else(|| CsvError::lookup(record.number, name))?;
    Ok((item.clone(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Stock {
        let mut stock = Stock::new();
        stock.add_items(Item::named("rice", 2, 3, 225, 300).unwrap(), 0).unwrap();
        stock.add_items(Item::named("beans", 4, 6, 450, 525).unwrap(), 0).unwrap();
        stock
    }

    #[test]
    fn accumulates_sales_per_item() {
        let sold = parse_sales_log("rice,10\nbeans,4\nrice,5\n", &catalog()).unwrap();
        assert_eq!(sold.len(), 2);
        assert_eq!(sold.quantity("rice"), Some(15));
        assert_eq!(sold.quantity("beans"), Some(4));
    }

    #[test]
    fn resolved_items_carry_catalog_attributes() {
        let sold = parse_sales_log("beans,1", &catalog()).unwrap();
        assert_eq!(sold.item("beans").unwrap().price(), 6);
    }

    #[test]
    fn unknown_item_is_a_lookup_error() {
        let err = parse_sales_log("rice,10\ncaviar,1\n", &catalog()).unwrap_err();
        match err {
            CsvError::Lookup { line, name } => {
                assert_eq!(line, 2);
                assert_eq!(name, "caviar");
            }
            other => panic!("expected lookup error, got {other:?}"),
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let err = parse_sales_log("Rice,1", &catalog()).unwrap_err();
        assert!(matches!(err, CsvError::Lookup { .. }));
    }

    #[test]
    fn wrong_field_count_is_a_format_error() {
        for text in ["rice", "rice,1,2", "rice,2,3,225,300"] {
            let err = parse_sales_log(text, &catalog()).unwrap_err();
            assert!(matches!(err, CsvError::Format { format: RecordFormat::SalesLog, .. }), "{text}");
        }
    }

    #[test]
    fn non_numeric_amount_is_a_format_error() {
        for text in ["rice,ten", "rice,", "rice,-3"] {
            let err = parse_sales_log(text, &catalog()).unwrap_err();
            assert!(matches!(err, CsvError::Format { .. }), "{text}");
        }
    }

    #[test]
    fn empty_log_sells_nothing() {
        assert!(parse_sales_log("", &catalog()).unwrap().is_empty());
    }

    #[test]
    fn works_with_trait_objects() {
        let catalog = catalog();
        let registry: &dyn Registry = &catalog;
        assert_eq!(parse_sales_log("rice,1", registry).unwrap().quantity("rice"), Some(1));
    }
}
