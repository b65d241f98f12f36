use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::item::Item;

/// Accumulating mapping from [`Item`] to a non-negative quantity.
///
/// Iteration follows first-insertion order. Callers wanting a display order
/// use [`Stock::sorted_by_name`].
#[derive(Debug, Clone, Default)]
pub struct Stock {
    entries: Vec<(Item, u64)>,
    index: HashMap<ItemName, usize>,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `item`.
    ///
    /// An item already present keeps its first definition and its quantity
    /// grows; a quantity of 0 still registers the item.
    pub fn add_items(&mut self, item: Item, quantity: u64) -> DomainResult<()> {
        match self.index.get(item.name()) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.1 = entry.1.checked_add(quantity).ok_or_else(|| {
                    DomainError::invariant(format!("quantity of '{}' overflows", item.name()))
                })?;
            }
            None => {
                self.index.insert(item.name().clone(), self.entries.len());
                self.entries.push((item, quantity));
            }
        }
        Ok(())
    }

    /// Take `quantity` units of the named item out of stock.
    ///
    /// The item stays registered (possibly at 0).
    pub fn remove_items(&mut self, name: &str, quantity: u64) -> DomainResult<()> {
        let slot = *self.index.get(name).ok_or_else(|| DomainError::not_found(name))?;
        let held = self.entries[slot].1;
        self.entries[slot].1 = held.checked_sub(quantity).ok_or_else(|| {
            DomainError::invariant(format!(
                "stock of '{name}' cannot go negative (held {held}, removing {quantity})"
            ))
        })?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<(&Item, u64)> {
        self.index.get(name).map(|&slot| {
            let (item, quantity) = &self.entries[slot];
            (item, *quantity)
        })
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.get(name).map(|(item, _)| item)
    }

    pub fn quantity(&self, name: &str) -> Option<u64> {
        self.get(name).map(|(_, quantity)| quantity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> DomainResult<u64> {
        self.entries
            .iter()
            .try_fold(0u64, |total, (_, quantity)| total.checked_add(*quantity))
            .ok_or_else(|| DomainError::invariant("total stock quantity overflows"))
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Item, u64)> {
        self.entries.iter().map(|(item, quantity)| (item, *quantity))
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().map(|(item, _)| item)
    }

    /// Entries ordered by item name, for presentation.
    pub fn sorted_by_name(&self) -> Vec<(&Item, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| a.0.name().cmp(b.0.name()));
        sorted
    }

    /// Merge every entry of `other` into this stock.
    pub fn merge(&mut self, other: &Stock) -> DomainResult<()> {
        for (item, quantity) in other.iter() {
            self.add_items(item.clone(), quantity)?;
        }
        Ok(())
    }
}

/// Two stocks are equal when they hold the same items at the same quantities,
/// regardless of insertion order.
impl PartialEq for Stock {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(item, quantity)| other.quantity(item.name().as_str()) == Some(quantity))
    }
}

impl Eq for Stock {}
