use serde::{Deserialize, Serialize};

/// A sellable item in the inventory.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct InventoryEntry {
    /// The asset ID, unique to the app and context.
    pub asset_id: String,
    /// The name used to look the item up on the market.
    pub market_hash_name: String,
}
