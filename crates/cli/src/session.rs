//! Interactive menu session.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;

use courier_core::{ItemName, Quantity};
use courier_inventory::{Inventory, TransferError, transfer};

use crate::config::ListingFormat;

/// One menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TakeFromWarehouse,
    DeliverToWarehouse,
    ShowWarehouse,
    ShowStore,
    Exit,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Action::TakeFromWarehouse),
            "2" => Ok(Action::DeliverToWarehouse),
            "3" => Ok(Action::ShowWarehouse),
            "4" => Ok(Action::ShowStore),
            "5" => Ok(Action::Exit),
            other => Err(format!("unknown menu choice: {other:?}")),
        }
    }
}

/// One of the two storage locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Warehouse,
    Store,
}

impl Site {
    fn name(self) -> &'static str {
        match self {
            Site::Warehouse => "warehouse",
            Site::Store => "store",
        }
    }
}

/// Which way the courier travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    WarehouseToStore,
    StoreToWarehouse,
}

impl Direction {
    fn endpoints(self) -> (Site, Site) {
        match self {
            Direction::WarehouseToStore => (Site::Warehouse, Site::Store),
            Direction::StoreToWarehouse => (Site::Store, Site::Warehouse),
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Direction::WarehouseToStore => "take",
            Direction::StoreToWarehouse => "deliver",
        }
    }
}

const MENU: &str = "What would you like to do?
1. Take items from warehouse
2. Deliver items to store
3. Check warehouse contents
4. Check store contents
5. Exit";

/// Owns the warehouse, the store, and the streams the menu talks over.
pub struct Session<R, W> {
    warehouse: Inventory,
    store: Inventory,
    input: R,
    output: W,
    listing: ListingFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(warehouse: Inventory, store: Inventory, input: R, output: W) -> Self {
        Self {
            warehouse,
            store,
            input,
            output,
            listing: ListingFormat::default(),
        }
    }

    pub fn with_listing(mut self, listing: ListingFormat) -> Self {
        self.listing = listing;
        self
    }

    pub fn warehouse(&self) -> &Inventory {
        &self.warehouse
    }

    pub fn store(&self) -> &Inventory {
        &self.store
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{MENU}").context("writing menu")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("input closed; leaving menu");
                return Ok(());
            };

            match choice.parse::<Action>() {
                Ok(Action::TakeFromWarehouse) => self.courier(Direction::WarehouseToStore)?,
                Ok(Action::DeliverToWarehouse) => self.courier(Direction::StoreToWarehouse)?,
                Ok(Action::ShowWarehouse) => self.show(Site::Warehouse)?,
                Ok(Action::ShowStore) => self.show(Site::Store)?,
                Ok(Action::Exit) => {
                    writeln!(self.output, "Exiting program...")?;
                    return Ok(());
                }
                Err(reason) => {
                    tracing::debug!(%reason, "rejected menu input");
                    writeln!(self.output, "Invalid choice. Please try again.\n")?;
                }
            }
        }
    }

    /// Print `prompt`, then read one line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn courier(&mut self, direction: Direction) -> anyhow::Result<()> {
        let verb = direction.verb();
        let Some(raw_item) = self.prompt(&format!("What item do you want to {verb}? "))? else {
            return Ok(());
        };
        let item = match raw_item.parse::<ItemName>() {
            Ok(item) => item,
            Err(err) => {
                writeln!(self.output, "Invalid item: {err}")?;
                return Ok(());
            }
        };

        let Some(raw_quantity) = self.prompt(&format!("How many do you want to {verb}? "))? else {
            return Ok(());
        };
        let quantity: Quantity = match raw_quantity.trim().parse() {
            Ok(quantity) => quantity,
            Err(_) => {
                writeln!(self.output, "Invalid quantity: {:?}", raw_quantity.trim())?;
                return Ok(());
            }
        };

        let (from, to) = direction.endpoints();
        let (from, to) = (from.name(), to.name());
        let (source, destination) = match direction {
            Direction::WarehouseToStore => (&mut self.warehouse, &mut self.store),
            Direction::StoreToWarehouse => (&mut self.store, &mut self.warehouse),
        };
        let outcome = transfer(source, destination, &item, quantity);

        writeln!(self.output, "The courier took {quantity} {item} from the {from}")?;
        writeln!(
            self.output,
            "The courier carries {quantity} {item} from the {from} to the {to}"
        )?;
        match outcome {
            Ok(_) => writeln!(self.output, "The courier delivered {quantity} {item} to the {to}")?,
            Err(err @ TransferError::InsufficientDestinationCapacity { .. }) => {
                let cause = std::error::Error::source(&err)
                    .map(|cause| format!(" ({cause})"))
                    .unwrap_or_default();
                writeln!(self.output, "The courier could not deliver: {err}{cause}")?;
                writeln!(
                    self.output,
                    "Not enough space for {item} at the {to}, try to move less"
                )?;
            }
        }
        Ok(())
    }

    fn show(&mut self, site: Site) -> anyhow::Result<()> {
        let inventory = match site {
            Site::Warehouse => &self.warehouse,
            Site::Store => &self.store,
        };

        match self.listing {
            ListingFormat::Text => {
                writeln!(self.output, "Stored in the {}:", site.name())?;
                for (name, quantity) in inventory.items() {
                    writeln!(self.output, "{quantity} {name}")?;
                }
            }
            ListingFormat::Json => {
                let json = serde_json::to_string_pretty(&inventory.snapshot())
                    .context("serializing inventory snapshot")?;
                writeln!(self.output, "{json}")?;
            }
        }
        Ok(())
    }
}
