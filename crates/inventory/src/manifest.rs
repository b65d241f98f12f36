use stockroom_core::{DomainError, DomainResult};

use crate::stock::Stock;
use crate::truck::Truck;

/// Ordered fleet of trucks making up one delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    fleet: Vec<Truck>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a truck; fleet order is declaration order.
    pub fn add_truck(&mut self, truck: Truck) {
        self.fleet.push(truck);
    }

    pub fn fleet(&self) -> &[Truck] {
        &self.fleet
    }

    pub fn len(&self) -> usize {
        self.fleet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fleet.is_empty()
    }

    /// Everything carried by the fleet, summed per item.
    pub fn total_cargo(&self) -> DomainResult<Stock> {
        let mut total = Stock::new();
        for truck in &self.fleet {
            total.merge(truck.cargo())?;
        }
        Ok(total)
    }

    /// Sum of every truck's delivery cost.
    pub fn delivery_cost(&self) -> DomainResult<u64> {
        self.fleet.iter().try_fold(0u64, |total, truck| {
            total
                .checked_add(truck.delivery_cost()?)
                .ok_or_else(|| DomainError::invariant("manifest delivery cost overflows"))
        })
    }
}

impl FromIterator<Truck> for Manifest {
    fn from_iter<I: IntoIterator<Item = Truck>>(iter: I) -> Self {
        Self {
            fleet: iter.into_iter().collect(),
        }
    }
}
