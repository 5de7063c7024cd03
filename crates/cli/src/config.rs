//! Command-line configuration.

use anyhow::Context;
use clap::{ArgAction, ValueEnum};

use courier_core::{ItemName, Quantity};
use courier_inventory::{Inventory, InventoryLimits, STORE_MAX_ITEM_TYPES};
use courier_observability::LogFormat;

/// Stock the warehouse starts with unless `--no-seed` is given.
pub const WAREHOUSE_SEED: &[(&str, Quantity)] = &[("cookies", 3), ("doggie", 4), ("boxes", 5)];

/// Stock the store starts with unless `--no-seed` is given.
pub const STORE_SEED: &[(&str, Quantity)] = &[("doggie", 2), ("cookies", 5)];

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "courier", version, about = "Move stock between a warehouse and a store")]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    /// Total quantity the warehouse can hold
    #[arg(long, default_value_t = 100)]
    pub warehouse_capacity: Quantity,

    /// Total quantity the store can hold
    #[arg(long, default_value_t = 100)]
    pub store_capacity: Quantity,

    /// Distinct item types the store can hold (0 = unlimited)
    #[arg(long, default_value_t = STORE_MAX_ITEM_TYPES)]
    pub store_max_item_types: usize,

    /// Start with both inventories empty
    #[arg(long)]
    pub no_seed: bool,

    /// How menu actions 3 and 4 print inventory contents
    #[arg(long, value_enum, default_value_t = ListingFormat::Text)]
    pub listing: ListingFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListingFormat {
    /// `quantity name` lines
    #[default]
    Text,
    /// Pretty-printed JSON snapshot
    Json,
}

impl Cli {
    /// Build the warehouse and the store, seeded unless `--no-seed` was given.
    pub fn inventories(&self) -> anyhow::Result<(Inventory, Inventory)> {
        let mut warehouse = Inventory::warehouse(self.warehouse_capacity);
        let mut store = Inventory::new(
            "store",
            InventoryLimits::with_item_types(self.store_capacity, self.store_max_item_types),
        );

        if !self.no_seed {
            seed(&mut warehouse, WAREHOUSE_SEED)?;
            seed(&mut store, STORE_SEED)?;
        }

        Ok((warehouse, store))
    }
}

fn seed(inventory: &mut Inventory, stock: &[(&str, Quantity)]) -> anyhow::Result<()> {
    for (name, quantity) in stock {
        let name = ItemName::new(name)?;
        inventory
            .add(&name, *quantity)
            .with_context(|| format!("seeding {} with {quantity} {name}", inventory.label()))?;
    }
    Ok(())
}
