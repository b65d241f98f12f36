//! Inventory domain module.
//!
//! This crate contains the records the store trades in (items, stock, trucks,
//! manifests) and the business rules attached to them, implemented purely as
//! deterministic domain logic (no IO, no text formats, no storage).

pub mod item;
pub mod manifest;
pub mod registry;
pub mod stock;
pub mod truck;

pub use item::{Item, Temperature};
pub use manifest::Manifest;
pub use registry::Registry;
pub use stock::Stock;
pub use truck::{classify, DeliveryError, Truck, TruckKind};
