use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, ItemName, ValueObject};

/// Storage temperature an item must be kept at, in degrees Celsius.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(pub i32);

impl Temperature {
    pub fn celsius(self) -> i32 {
        self.0
    }
}

impl ValueObject for Temperature {}

impl core::fmt::Display for Temperature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Catalog entry.
///
/// Identity is the name: two items compare (and hash) equal iff their names
/// match, whatever their other attributes say. Monetary values are in the
/// smallest currency unit (e.g., cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    name: ItemName,
    cost: u64,
    price: u64,
    reorder_point: u64,
    reorder_amount: u64,
    temperature: Option<Temperature>,
}

impl Item {
    /// Item without a temperature requirement.
    pub fn new(name: ItemName, cost: u64, price: u64, reorder_point: u64, reorder_amount: u64) -> Self {
        Self {
            name,
            cost,
            price,
            reorder_point,
            reorder_amount,
            temperature: None,
        }
    }

    /// Convenience constructor validating a raw name.
    pub fn named(
        name: &str,
        cost: u64,
        price: u64,
        reorder_point: u64,
        reorder_amount: u64,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(name.parse()?, cost, price, reorder_point, reorder_amount))
    }

    /// Builder-style setter, used while the item is still being constructed.
    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn reorder_point(&self) -> u64 {
        self.reorder_point
    }

    pub fn reorder_amount(&self) -> u64 {
        self.reorder_amount
    }

    /// `None` means "no requirement".
    pub fn temperature(&self) -> Option<Temperature> {
        self.temperature
    }

    pub fn is_temperature_controlled(&self) -> bool {
        self.temperature.is_some()
    }

    /// Whether `quantity` on hand has dropped to the reorder point.
    pub fn needs_reorder(&self, quantity: u64) -> bool {
        quantity <= self.reorder_point
    }
}

impl Entity for Item {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Item {}

impl core::hash::Hash for Item {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
