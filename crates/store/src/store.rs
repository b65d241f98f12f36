use std::path::{Path, PathBuf};

use serde::Serialize;

use stockroom_core::DomainError;
use stockroom_csv::{read_item_properties_file, read_manifest_file, read_sales_log_file, write_manifest_file};
use stockroom_inventory::{Item, Manifest, Registry, Stock};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::reorder::plan_reorder;

/// One inventory line as shown to a user, sorted by name in [`Store::rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub name: String,
    pub quantity: u64,
    pub cost: u64,
    pub price: u64,
    pub reorder_point: u64,
    pub reorder_amount: u64,
    pub temperature: Option<i32>,
    pub needs_reorder: bool,
}

/// A store's capital and inventory.
///
/// Every update is all-or-nothing: on error, capital and inventory are left
/// exactly as they were.
#[derive(Debug, Clone)]
pub struct Store {
    name: String,
    capital: i64,
    inventory: Stock,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            name: config.name,
            capital: config.capital,
            inventory: Stock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capital in the smallest currency unit. May be negative.
    pub fn capital(&self) -> i64 {
        self.capital
    }

    pub fn inventory(&self) -> &Stock {
        &self.inventory
    }

    /// Replace the catalog (and quantities) with `catalog`.
    pub fn load_inventory(&mut self, catalog: Stock) {
        tracing::info!(store = %self.name, items = catalog.len(), "inventory loaded");
        self.inventory = catalog;
    }

    /// Deduct sold quantities and book their revenue.
    pub fn import_sales_log(&mut self, sold: &Stock) -> StoreResult<()> {
        let mut inventory = self.inventory.clone();
        let mut revenue: i64 = 0;

        for (item, amount) in sold.iter() {
            let name = item.name().as_str();
            let (held_item, held) = inventory.get(name).ok_or_else(|| StoreError::UnknownItem {
                item: name.to_string(),
            })?;
            if held < amount {
                return Err(StoreError::InsufficientStock {
                    item: name.to_string(),
                    requested: amount,
                    held,
                });
            }
            revenue = money(held_item.price(), amount)
                .and_then(|line| revenue.checked_add(line))
                .ok_or_else(|| DomainError::invariant("sales revenue overflows"))?;
            inventory.remove_items(name, amount)?;
        }

        self.capital = self
            .capital
            .checked_add(revenue)
            .ok_or_else(|| DomainError::invariant("capital overflows"))?;
        self.inventory = inventory;
        tracing::info!(store = %self.name, revenue, capital = self.capital, "sales log imported");
        Ok(())
    }

    /// Receive a delivery: add its cargo and pay for goods and trucks.
    pub fn import_manifest(&mut self, manifest: &Manifest) -> StoreResult<()> {
        let delivered = manifest.total_cargo()?;
        let mut inventory = self.inventory.clone();
        let mut expense = i64::try_from(manifest.delivery_cost()?)
            .map_err(|_| DomainError::invariant("delivery cost overflows"))?;

        for (item, quantity) in delivered.iter() {
            let held_item = inventory
                .item(item.name().as_str())
                .ok_or_else(|| StoreError::UnknownItem {
                    item: item.name().to_string(),
                })?
                .clone();
            expense = money(held_item.cost(), quantity)
                .and_then(|line| expense.checked_add(line))
                .ok_or_else(|| DomainError::invariant("delivery expense overflows"))?;
            inventory.add_items(held_item, quantity)?;
        }

        self.capital = self
            .capital
            .checked_sub(expense)
            .ok_or_else(|| DomainError::invariant("capital overflows"))?;
        self.inventory = inventory;
        tracing::info!(store = %self.name, trucks = manifest.len(), expense, capital = self.capital, "manifest imported");
        Ok(())
    }

    /// Manifest restocking everything at or below its reorder point.
    pub fn export_manifest(&self) -> StoreResult<Manifest> {
        plan_reorder(&self.inventory)
    }

    /// `None` when the item is not in the inventory.
    pub fn needs_reorder(&self, name: &str) -> Option<bool> {
        self.inventory.get(name).map(|(item, quantity)| item.needs_reorder(quantity))
    }

    /// Items at or below their reorder point, by name.
    pub fn reorder_list(&self) -> Vec<(&Item, u64)> {
        self.inventory
            .sorted_by_name()
            .into_iter()
            .filter(|(item, quantity)| item.needs_reorder(*quantity))
            .collect()
    }

    /// Inventory for display, ordered by item name.
    pub fn rows(&self) -> Vec<InventoryRow> {
        self.inventory
            .sorted_by_name()
            .into_iter()
            .map(|(item, quantity)| InventoryRow {
                name: item.name().to_string(),
                quantity,
                cost: item.cost(),
                price: item.price(),
                reorder_point: item.reorder_point(),
                reorder_amount: item.reorder_amount(),
                temperature: item.temperature().map(|t| t.celsius()),
                needs_reorder: item.needs_reorder(quantity),
            })
            .collect()
    }

    pub fn load_item_properties(&mut self, path: &Path) -> StoreResult<()> {
        let catalog = read_item_properties_file(path)?;
        self.load_inventory(catalog);
        Ok(())
    }

    pub fn import_sales_log_file(&mut self, path: &Path) -> StoreResult<()> {
        let sold = read_sales_log_file(path, &self.inventory)?;
        self.import_sales_log(&sold)
    }

    pub fn import_manifest_file(&mut self, path: &Path) -> StoreResult<()> {
        let manifest = read_manifest_file(path, &self.inventory)?;
        self.import_manifest(&manifest)
    }

    /// Returns the path written (with `.csv` appended when missing).
    pub fn export_manifest_file(&self, path: &Path) -> StoreResult<PathBuf> {
        let manifest = self.export_manifest()?;
        Ok(write_manifest_file(path, &manifest)?)
    }
}

impl Registry for Store {
    fn lookup(&self, name: &str) -> Option<&Item> {
        self.inventory.item(name)
    }
}

fn money(unit: u64, quantity: u64) -> Option<i64> {
    unit.checked_mul(quantity).and_then(|total| i64::try_from(total).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_csv::{parse_item_properties, parse_manifest, parse_sales_log};
    use stockroom_inventory::TruckKind;

    const CATALOG: &str = "rice,2,3,225,300\nbeans,4,6,450,525\nmilk,2,3,300,425,3\n";

    fn store_with(quantities: &[(&str, u64)]) -> Store {
        let mut store = Store::new(StoreConfig {
            name: "Test".to_string(),
            capital: 1_000_000,
        });
        store.load_inventory(parse_item_properties(CATALOG).unwrap());
        let mut delivered = Stock::new();
        for (name, quantity) in quantities {
            delivered.add_items(store.lookup(name).unwrap().clone(), *quantity).unwrap();
        }
        let mut inventory = store.inventory().clone();
        inventory.merge(&delivered).unwrap();
        store.load_inventory(inventory);
        store
    }

    #[test]
    fn new_store_uses_config() {
        let store = Store::new(StoreConfig::default());
        assert_eq!(store.name(), "Stockroom");
        assert_eq!(store.capital(), 10_000_000);
        assert!(store.inventory().is_empty());
    }

    #[test]
    fn sales_deduct_stock_and_add_revenue() {
        let mut store = store_with(&[("rice", 500), ("beans", 100)]);
        let sold = parse_sales_log("rice,100\nbeans,10\n", &store).unwrap();
        store.import_sales_log(&sold).unwrap();

        assert_eq!(store.inventory().quantity("rice"), Some(400));
        assert_eq!(store.inventory().quantity("beans"), Some(90));
        assert_eq!(store.capital(), 1_000_000 + 100 * 3 + 10 * 6);
    }

    #[test]
    fn overselling_changes_nothing() {
        let mut store = store_with(&[("rice", 500), ("beans", 5)]);
        let sold = parse_sales_log("rice,100\nbeans,10\n", &store).unwrap();
        let err = store.import_sales_log(&sold).unwrap_err();

        assert!(matches!(
            err,
            StoreError::InsufficientStock { ref item, requested: 10, held: 5 } if item == "beans"
        ));
        assert_eq!(store.inventory().quantity("rice"), Some(500));
        assert_eq!(store.capital(), 1_000_000);
    }

    #[test]
    fn selling_unknown_item_fails() {
        let mut store = store_with(&[]);
        let mut sold = Stock::new();
        sold.add_items(Item::named("caviar", 1, 1, 1, 1).unwrap(), 1).unwrap();
        let err = store.import_sales_log(&sold).unwrap_err();
        assert!(matches!(err, StoreError::UnknownItem { .. }));
    }

    #[test]
    fn manifest_adds_stock_and_pays_goods_and_trucks() {
        let mut store = store_with(&[]);
        let manifest = parse_manifest(">Ordinary\nrice,100\n>Refrigerated\nmilk,10\n", &store).unwrap();
        store.import_manifest(&manifest).unwrap();

        assert_eq!(store.inventory().quantity("rice"), Some(100));
        assert_eq!(store.inventory().quantity("milk"), Some(10));
        let goods = 100 * 2 + 10 * 2;
        let trucks = manifest.delivery_cost().unwrap() as i64;
        assert_eq!(store.capital(), 1_000_000 - goods - trucks);
    }

    #[test]
    fn rows_are_sorted_and_flag_reorders() {
        let store = store_with(&[("rice", 500), ("beans", 100)]);
        let rows = store.rows();
        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["beans", "milk", "rice"]);
        assert!(rows[0].needs_reorder);
        assert_eq!(rows[1].temperature, Some(3));
        assert!(!rows[2].needs_reorder);
    }

    #[test]
    fn reorder_queries() {
        let store = store_with(&[("rice", 500)]);
        assert_eq!(store.needs_reorder("rice"), Some(false));
        assert_eq!(store.needs_reorder("beans"), Some(true));
        assert_eq!(store.needs_reorder("caviar"), None);
        let names: Vec<_> = store.reorder_list().iter().map(|(i, _)| i.name().to_string()).collect();
        assert_eq!(names, vec!["beans", "milk"]);
    }

    #[test]
    fn exported_manifest_restocks_low_items() {
        let store = store_with(&[("rice", 500)]);
        let manifest = store.export_manifest().unwrap();
        let kinds: Vec<_> = manifest.fleet().iter().map(|truck| truck.kind()).collect();
        assert_eq!(kinds, vec![TruckKind::Refrigerated, TruckKind::Ordinary]);
        assert_eq!(manifest.fleet()[0].cargo().quantity("milk"), Some(425));
        assert_eq!(manifest.fleet()[1].cargo().quantity("beans"), Some(525));
        assert!(!manifest.fleet()[1].cargo().contains("rice"));
    }

    #[test]
    fn importing_exported_manifest_clears_reorders() {
        let mut store = store_with(&[]);
        let manifest = store.export_manifest().unwrap();
        store.import_manifest(&manifest).unwrap();
        assert!(store.reorder_list().is_empty());
    }

    #[test]
    fn oversized_ordinary_delivery_changes_nothing() {
        let mut store = store_with(&[("rice", 10)]);
        let manifest = parse_manifest(">Ordinary\nrice,800000000000000000\n", &store).unwrap();
        let err = store.import_manifest(&manifest).unwrap_err();

        assert!(matches!(err, StoreError::Domain(DomainError::InvariantViolation(_))));
        assert_eq!(store.inventory().quantity("rice"), Some(10));
        assert_eq!(store.capital(), 1_000_000);
    }

    #[test]
    fn extreme_cold_delivery_is_rejected_not_panicking() {
        let mut store = Store::new(StoreConfig {
            name: "Test".to_string(),
            capital: 1_000_000,
        });
        store.load_inventory(parse_item_properties("deepfreeze,1,1,1,1,-1000\n").unwrap());

        let manifest = parse_manifest(">Refrigerated\ndeepfreeze,1\n", &store).unwrap();
        let err = store.import_manifest(&manifest).unwrap_err();
        assert!(matches!(err, StoreError::Domain(DomainError::InvariantViolation(_))));
        assert_eq!(store.inventory().quantity("deepfreeze"), Some(0));
        assert_eq!(store.capital(), 1_000_000);

        let planned = store.export_manifest().unwrap();
        assert_eq!(planned.len(), 1);
        assert!(planned.delivery_cost().is_err());
        assert!(store.import_manifest(&planned).is_err());
    }
}
