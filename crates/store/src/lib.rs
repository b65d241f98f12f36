//! The store: capital plus inventory, updated from the record formats.
//!
//! This crate is the orchestration layer between the text codecs in
//! `stockroom-csv` and the domain records in `stockroom-inventory`.

pub mod config;
pub mod error;
pub mod reorder;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use reorder::plan_reorder;
pub use store::{InventoryRow, Store};
