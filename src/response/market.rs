use crate::types::Price;
use serde::{Deserialize, Serialize};

/// The current lowest listing for an item.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct MarketSnapshot {
    /// The price of the listing before fees, converted to the configured currency.
    pub converted_price: Price,
    /// The number of listings for the item.
    pub total_count: u64,
    /// The share of the buyer's price that goes to the seller. See [`steam_tax_ratio`].
    pub steam_tax_ratio: f64,
}

/// The buy side of an item's order book.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct OrderBookSnapshot {
    /// The highest buy order in the configured currency.
    pub highest_buy_order: Price,
    /// The number of buy orders.
    pub wanted_cnt: u64,
}

/// Listing and order book data for an item.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MarketData {
    /// The item.
    pub market_hash_name: String,
    /// The current listing data.
    pub listings: MarketSnapshot,
    /// The current order book data.
    pub orders: OrderBookSnapshot,
}

/// `converted_price / (converted_price + converted_fee)`.
///
/// This is the fraction of what a buyer pays that the seller receives, not the fee rate. Returns
/// `None` when both values are zero or their sum overflows.
pub fn steam_tax_ratio(converted_price: Price, converted_fee: Price) -> Option<f64> {
    let total = converted_price.checked_add(converted_fee)?;

    if total == 0 {
        return None;
    }

    Some(converted_price as f64 / total as f64)
}
