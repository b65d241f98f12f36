//! Read-only name → item lookup consulted by formats that reference items by name.

use std::collections::{BTreeMap, HashMap};

use stockroom_core::ItemName;

use crate::item::Item;
use crate::stock::Stock;

/// Authoritative catalog of known items.
///
/// Implementations are owned by the caller and only ever borrowed
/// immutably while a record is being resolved.
pub trait Registry {
    /// Canonical item registered under `name`, if any.
    fn lookup(&self, name: &str) -> Option<&Item>;
}

impl<R: Registry + ?Sized> Registry for &R {
    fn lookup(&self, name: &str) -> Option<&Item> {
        (**self).lookup(name)
    }
}

impl Registry for Stock {
    fn lookup(&self, name: &str) -> Option<&Item> {
        self.item(name)
    }
}

impl Registry for HashMap<ItemName, Item> {
    fn lookup(&self, name: &str) -> Option<&Item> {
        self.get(name)
    }
}

impl Registry for BTreeMap<ItemName, Item> {
    fn lookup(&self, name: &str) -> Option<&Item> {
        self.get(name)
    }
}
