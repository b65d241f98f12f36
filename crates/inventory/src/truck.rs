use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::item::Temperature;
use crate::stock::Stock;

/// Vehicle types a delivery can be made with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruckKind {
    Ordinary,
    Refrigerated,
}

impl TruckKind {
    pub const ALL: [TruckKind; 2] = [TruckKind::Ordinary, TruckKind::Refrigerated];

    /// Tag used for this kind in text formats.
    pub fn tag(self) -> &'static str {
        match self {
            TruckKind::Ordinary => "Ordinary",
            TruckKind::Refrigerated => "Refrigerated",
        }
    }

    /// Maximum number of units one truck of this kind is planned to carry.
    pub fn capacity(self) -> u64 {
        match self {
            TruckKind::Ordinary => 1000,
            TruckKind::Refrigerated => 800,
        }
    }

    /// Cargo rule attached to this kind.
    fn admit(self, cargo: &Stock) -> Result<(), DeliveryError> {
        match self {
            TruckKind::Ordinary => {
                match cargo.items().find_map(|item| item.temperature().map(|t| (item, t))) {
                    Some((item, temperature)) => Err(DeliveryError::TemperatureControlled {
                        item: item.name().clone(),
                        temperature,
                    }),
                    None => Ok(()),
                }
            }
            TruckKind::Refrigerated => Ok(()),
        }
    }
}

impl core::fmt::Display for TruckKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TruckKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TruckKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown truck type '{s}'")))
    }
}

/// A vehicle-type business rule was violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// Temperature-controlled cargo on a truck without refrigeration.
    #[error("'{item}' must be kept at {temperature} degrees and cannot travel on an ordinary truck")]
    TemperatureControlled { item: ItemName, temperature: Temperature },
}

/// A typed cargo carrier. Built through [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truck {
    kind: TruckKind,
    cargo: Stock,
}

impl Truck {
    pub fn kind(&self) -> TruckKind {
        self.kind
    }

    pub fn cargo(&self) -> &Stock {
        &self.cargo
    }

    /// Delivery cost in the smallest currency unit.
    ///
    /// - Ordinary: 750.00 plus 0.25 per unit carried.
    /// - Refrigerated: 900.00 plus 200.00 × 0.7^(T/5), where T is the coldest
    ///   temperature required by the cargo (0 when nothing requires one).
    ///
    /// Fails when the cost does not fit in a `u64`.
    pub fn delivery_cost(&self) -> DomainResult<u64> {
        let cost = match self.kind {
            TruckKind::Ordinary => self
                .cargo
                .total_quantity()?
                .checked_mul(25)
                .and_then(|per_unit| per_unit.checked_add(75_000)),
            TruckKind::Refrigerated => {
                let coldest = self
                    .cargo
                    .items()
                    .filter_map(|item| item.temperature())
                    .min()
                    .map_or(0, Temperature::celsius);
                let surcharge = (20_000.0 * 0.7f64.powf(f64::from(coldest) / 5.0)).round();
                if surcharge.is_finite() && surcharge < u64::MAX as f64 {
                    90_000u64.checked_add(surcharge as u64)
                } else {
                    None
                }
            }
        };
        cost.ok_or_else(|| DomainError::invariant(format!("{} truck delivery cost overflows", self.kind)))
    }
}

/// Build a truck of `kind` around `cargo`, enforcing the kind's cargo rule.
///
/// Ordinary trucks reject any item carrying a temperature requirement;
/// refrigerated trucks take anything.
pub fn classify(kind: TruckKind, cargo: Stock) -> Result<Truck, DeliveryError> {
    kind.admit(&cargo)?;
    Ok(Truck { kind, cargo })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn cargo(entries: Vec<(Item, u64)>) -> Stock {
        let mut stock = Stock::new();
        for (item, quantity) in entries {
            stock.add_items(item, quantity).unwrap();
        }
        stock
    }

    fn rice() -> Item {
        Item::named("rice", 2, 3, 225, 300).unwrap()
    }

    fn ice_cream() -> Item {
        Item::named("ice cream", 8, 14, 175, 250).unwrap().with_temperature(Temperature(-20))
    }

    #[test]
    fn tags_parse_back_to_kinds() {
        for kind in TruckKind::ALL {
            assert_eq!(kind.tag().parse::<TruckKind>().unwrap(), kind);
        }
        assert!("ordinary".parse::<TruckKind>().is_err());
        assert!("".parse::<TruckKind>().is_err());
    }

    #[test]
    fn ordinary_truck_accepts_plain_cargo() {
        let truck = classify(TruckKind::Ordinary, cargo(vec![(rice(), 50)])).unwrap();
        assert_eq!(truck.kind(), TruckKind::Ordinary);
        assert_eq!(truck.cargo().quantity("rice"), Some(50));
    }

    #[test]
    fn ordinary_truck_rejects_temperature_controlled_cargo() {
        let err = classify(TruckKind::Ordinary, cargo(vec![(rice(), 50), (ice_cream(), 1)])).unwrap_err();
        assert_eq!(
            err,
            DeliveryError::TemperatureControlled {
                item: "ice cream".parse().unwrap(),
                temperature: Temperature(-20),
            }
        );
    }

    #[test]
    fn refrigerated_truck_accepts_anything() {
        let truck = classify(TruckKind::Refrigerated, cargo(vec![(rice(), 50), (ice_cream(), 1)])).unwrap();
        assert_eq!(truck.kind(), TruckKind::Refrigerated);
        assert_eq!(truck.cargo().len(), 2);
    }

    #[test]
    fn empty_cargo_is_accepted_by_both_kinds() {
        for kind in TruckKind::ALL {
            assert!(classify(kind, Stock::new()).is_ok());
        }
    }

    #[test]
    fn ordinary_delivery_cost_scales_with_quantity() {
        let truck = classify(TruckKind::Ordinary, cargo(vec![(rice(), 400)])).unwrap();
        assert_eq!(truck.delivery_cost().unwrap(), 75_000 + 10_000);
    }

    #[test]
    fn refrigerated_delivery_cost_depends_on_coldest_item() {
        let truck = classify(TruckKind::Refrigerated, cargo(vec![(rice(), 10)])).unwrap();
        assert_eq!(truck.delivery_cost().unwrap(), 110_000);

        let chilled = Item::named("milk", 2, 3, 300, 425).unwrap().with_temperature(Temperature(5));
        let truck = classify(TruckKind::Refrigerated, cargo(vec![(chilled, 10)])).unwrap();
        assert_eq!(truck.delivery_cost().unwrap(), 90_000 + 14_000);

        let truck = classify(TruckKind::Refrigerated, cargo(vec![(ice_cream(), 10)])).unwrap();
        // 200 * 0.7^-4 = 833.0...
        assert_eq!(truck.delivery_cost().unwrap(), 90_000 + 83_299);
    }

    #[test]
    fn ordinary_delivery_cost_overflow_is_an_error() {
        let truck = classify(TruckKind::Ordinary, cargo(vec![(rice(), 800_000_000_000_000_000)])).unwrap();
        assert!(matches!(truck.delivery_cost(), Err(DomainError::InvariantViolation(_))));
    }

    #[test]
    fn extreme_cold_delivery_cost_is_an_error() {
        for celsius in [-1000, i32::MIN] {
            let frozen = Item::named("deepfreeze", 1, 1, 1, 1).unwrap().with_temperature(Temperature(celsius));
            let truck = classify(TruckKind::Refrigerated, cargo(vec![(frozen, 1)])).unwrap();
            assert!(matches!(truck.delivery_cost(), Err(DomainError::InvariantViolation(_))), "{celsius}");
        }
    }

    #[test]
    fn extreme_heat_costs_the_base_rate() {
        let warm = Item::named("soup", 1, 1, 1, 1).unwrap().with_temperature(Temperature(i32::MAX));
        let truck = classify(TruckKind::Refrigerated, cargo(vec![(warm, 1)])).unwrap();
        assert_eq!(truck.delivery_cost().unwrap(), 90_000);
    }
}
