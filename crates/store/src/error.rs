use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_csv::CsvError;
use stockroom_inventory::DeliveryError;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing one of the record formats failed.
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("'{item}' is not in the inventory")]
    UnknownItem { item: String },

    #[error("cannot sell {requested} of '{item}': only {held} in stock")]
    InsufficientStock { item: String, requested: u64, held: u64 },

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
