//! Headless driver: applies file actions to one in-memory store and reports
//! the result.
//!
//! ```text
//! stockroom properties item_properties.csv sales sales_log_0.csv export-manifest out
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use stockroom_store::{InventoryRow, Store, StoreConfig};

pub const USAGE: &str = "usage: stockroom <action> <file> [<action> <file> ...]
actions:
  properties <file>        load item properties (replaces the inventory)
  sales <file>             import a sales log
  import-manifest <file>   receive a delivery manifest
  export-manifest <file>   write a reorder manifest (.csv appended if missing)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadProperties(PathBuf),
    ImportSales(PathBuf),
    ImportManifest(PathBuf),
    ExportManifest(PathBuf),
}

/// Final state of the store after all actions.
#[derive(Debug, Serialize)]
pub struct Report {
    pub store: String,
    pub capital: i64,
    pub inventory: Vec<InventoryRow>,
    pub exported: Vec<PathBuf>,
}

/// Parse `<action> <file>` pairs.
pub fn parse_actions<I>(args: I) -> Result<Vec<Action>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut actions = Vec::new();
    while let Some(verb) = args.next() {
        let path = args
            .next()
            .map(PathBuf::from)
            .with_context(|| format!("'{verb}' needs a file argument"))?;
        let action = match verb.as_str() {
            "properties" => Action::LoadProperties(path),
            "sales" => Action::ImportSales(path),
            "import-manifest" => Action::ImportManifest(path),
            "export-manifest" => Action::ExportManifest(path),
            other => bail!("unknown action '{other}'"),
        };
        actions.push(action);
    }
    if actions.is_empty() {
        bail!("no actions given");
    }
    Ok(actions)
}

/// Apply `actions` in order; the first failure stops the run.
pub fn run(config: StoreConfig, actions: &[Action]) -> Result<Report> {
    let mut store = Store::new(config);
    let mut exported = Vec::new();

    for action in actions {
        tracing::debug!(?action, "applying");
        match action {
            Action::LoadProperties(path) => store
                .load_item_properties(path)
                .with_context(|| format!("loading item properties from {}", path.display()))?,
            Action::ImportSales(path) => store
                .import_sales_log_file(path)
                .with_context(|| format!("importing sales log {}", path.display()))?,
            Action::ImportManifest(path) => store
                .import_manifest_file(path)
                .with_context(|| format!("importing manifest {}", path.display()))?,
            Action::ExportManifest(path) => exported.push(
                store
                    .export_manifest_file(path)
                    .with_context(|| format!("exporting manifest to {}", path.display()))?,
            ),
        }
    }

    Ok(Report {
        store: store.name().to_string(),
        capital: store.capital(),
        inventory: store.rows(),
        exported,
    })
}
