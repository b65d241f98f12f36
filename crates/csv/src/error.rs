//! Failures raised while reading or writing record formats.

use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_inventory::{DeliveryError, TruckKind};

pub type CsvResult<T> = Result<T, CsvError>;

/// The record formats, used to name what a malformed input should have been.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordFormat {
    ItemProperties,
    SalesLog,
    Manifest,
}

impl RecordFormat {
    /// Expected shape of one record, for error messages.
    pub fn layout(self) -> &'static str {
        match self {
            RecordFormat::ItemProperties => "name,cost,price,reorderPoint,reorderAmount[,temperature]",
            RecordFormat::SalesLog => "name,amount",
            RecordFormat::Manifest => ">Ordinary, >Refrigerated or name,amount after a truck line",
        }
    }
}

impl core::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            RecordFormat::ItemProperties => "item-properties",
            RecordFormat::SalesLog => "sales log",
            RecordFormat::Manifest => "manifest",
        })
    }
}

#[derive(Debug, Error)]
pub enum CsvError {
    /// The text does not have the shape of the format being read.
    #[error("line {line}: not a valid {format} record: {reason} (expected {})", .format.layout())]
    Format {
        format: RecordFormat,
        line: usize,
        reason: String,
    },

    /// A record names an item the registry does not know.
    #[error("line {line}: unknown item '{name}'")]
    Lookup { line: usize, name: String },

    /// A declared truck cannot carry its cargo.
    #[error("truck {truck} ({kind}): {source}")]
    Delivery {
        /// 1-based position in the fleet.
        truck: usize,
        kind: TruckKind,
        #[source]
        source: DeliveryError,
    },

    /// Accumulating a record broke a stock invariant (quantity overflow).
    #[error("line {line}: {source}")]
    Stock {
        line: usize,
        #[source]
        source: DomainError,
    },

    /// The record reader or writer failed below the level of any format.
    #[error(transparent)]
    Records(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CsvError {
    pub fn format(format: RecordFormat, line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            format,
            line,
            reason: reason.into(),
        }
    }

    pub fn lookup(line: usize, name: impl Into<String>) -> Self {
        Self::Lookup {
            line,
            name: name.into(),
        }
    }
}
