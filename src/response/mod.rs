//! Values returned from market requests.

mod inventory_entry;
mod market;
pub mod deserializers;

pub use inventory_entry::InventoryEntry;
pub use market::{steam_tax_ratio, MarketData, MarketSnapshot, OrderBookSnapshot};
