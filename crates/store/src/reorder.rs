//! Reorder planning: which items to restock and which trucks carry them.

use std::mem;

use stockroom_inventory::{classify, Item, Manifest, Stock, TruckKind};

use crate::error::StoreResult;

/// Build the manifest restocking every item at or below its reorder point.
///
/// Each such item is ordered at its reorder amount. Temperature-controlled
/// items travel on refrigerated trucks, coldest first; everything else on
/// ordinary trucks. Trucks are filled to capacity in that order, splitting an
/// item across trucks when it does not fit.
pub fn plan_reorder(inventory: &Stock) -> StoreResult<Manifest> {
    let mut chilled = Vec::new();
    let mut plain = Vec::new();
    for (item, quantity) in inventory.sorted_by_name() {
        if !item.needs_reorder(quantity) || item.reorder_amount() == 0 {
            continue;
        }
        if item.is_temperature_controlled() {
            chilled.push((item, item.reorder_amount()));
        } else {
            plain.push((item, item.reorder_amount()));
        }
    }
    chilled.sort_by_key(|(item, _)| item.temperature());

    let mut manifest = Manifest::new();
    load_trucks(&mut manifest, TruckKind::Refrigerated, &chilled)?;
    load_trucks(&mut manifest, TruckKind::Ordinary, &plain)?;
    tracing::debug!(trucks = manifest.len(), items = chilled.len() + plain.len(), "planned reorder");
    Ok(manifest)
}

fn load_trucks(manifest: &mut Manifest, kind: TruckKind, orders: &[(&Item, u64)]) -> StoreResult<()> {
    let capacity = kind.capacity();
    let mut cargo = Stock::new();
    let mut space = capacity;

    for (item, amount) in orders {
        let mut remaining = *amount;
        while remaining > 0 {
            if space == 0 {
                manifest.add_truck(classify(kind, mem::take(&mut cargo))?);
                space = capacity;
            }
            let portion = remaining.min(space);
            cargo.add_items((*item).clone(), portion)?;
            remaining -= portion;
            space -= portion;
        }
    }
    if !cargo.is_empty() {
        manifest.add_truck(classify(kind, cargo)?);
    }
    Ok(())
}
