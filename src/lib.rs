//! A client for the Steam Community Market.
//!
//! Reads an account's inventory, looks up listing and buy order data for items, and places sell
//! orders. Pending sales are confirmed through a separate two-factor service with
//! [`ConfirmationAPI`].
//!
//! ```no_run
//! use steam_market::{MarketConfig, SteamID, SteamMarketAPI};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = SteamMarketAPI::builder(SteamID::from(76561198000000000), MarketConfig::new(570))
//!     .build()?;
//!
//! api.set_cookies(vec![
//!     "sessionid=...".into(),
//!     "steamLoginSecure=...".into(),
//! ])?;
//!
//! for item in api.inventory().await? {
//!     let listings = api.listings_data(&item.market_hash_name).await?;
//!     let after_tax_price = listings.converted_price as f64 * listings.steam_tax_ratio;
//!
//!     api.sell(after_tax_price.floor() as u32, &item.asset_id).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod helpers;
mod confirmation_api;

pub mod api;
pub mod config;
pub mod enums;
pub mod error;
pub mod extractor;
pub mod response;
pub mod types;

pub use api::{SteamMarketAPI, SteamMarketAPIBuilder};
pub use confirmation_api::ConfirmationAPI;
pub use config::{ConfirmationConfig, MarketConfig, TransportConfig};
pub use enums::{Currency, Language};
pub use error::{Error, Result};
pub use extractor::{Field, FieldExtractor};
pub use response::{InventoryEntry, MarketData, MarketSnapshot, OrderBookSnapshot};

pub use steamid_ng::SteamID;
