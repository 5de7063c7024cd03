//! `courier-cli`
//!
//! **Responsibility:** the interactive courier menu around two inventories.
//!
//! - `config`: command-line flags and construction of the warehouse and store
//! - `session`: the menu loop, generic over its input and output streams

pub mod config;
pub mod session;

pub use config::{Cli, ListingFormat};
pub use session::{Action, Direction, Session, Site};
